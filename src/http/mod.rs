//! HTTP client layer — `O3Http` and envelope decoding.

pub mod client;

pub use client::O3Http;
