//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (typed timestamps, convenience methods)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `From` conversions from wire to domain
//! - `client.rs` — Sub-client with HTTP methods

pub mod portfolio;
pub mod price_history;
