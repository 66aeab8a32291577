//! # O3 SDK
//!
//! A typed Rust client for the O3 wallet price & portfolio REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes and domain models (wire + converted types)
//! 2. **HTTP API** — `O3Http`, one method per endpoint plus the raw request primitive
//! 3. **High-Level Client** — `O3Client` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use o3_sdk::prelude::*;
//!
//! let client = O3Client::builder()
//!     .base_url("https://staging-api.o3.network")
//!     .build()?;
//!
//! let history = client.price_history().get(&Symbol::new("NEO"), Interval::new(60)).await?;
//! let value = client.portfolio().value(12, Decimal::new(35, 1), Interval::new(60)).await?;
//! ```
//!
//! ## Concurrency
//!
//! Every operation is an `async fn`. Concurrent requests are independent and may
//! complete in any order, on any executor thread. Callers that update serialized
//! state (for example UI state) must re-dispatch to their own context; the SDK
//! makes no guarantee about which thread a future completes on. There is no
//! cancellation API: dropping a future abandons the response, but an in-flight
//! request runs to the transport timeout.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client: envelope decoding, raw request primitive.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `O3Client` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Interval, Symbol};

    // Domain types — price history
    pub use crate::domain::price_history::{PriceHistory, PricePoint};

    // Domain types — portfolio
    pub use crate::domain::portfolio::PortfolioValue;

    // Errors
    pub use crate::error::{ClientError, ClientResult};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    pub use crate::client::{O3Client, O3ClientBuilder, PortfolioClient, PriceHistoryClient};

    // Re-exported for holding amounts in portfolio queries.
    pub use rust_decimal::Decimal;
}
