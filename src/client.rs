//! High-level client — `O3Client` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::http::O3Http;

// Re-export sub-client types for convenience.
pub use crate::domain::portfolio::client::PortfolioClient;
pub use crate::domain::price_history::client::PriceHistoryClient;

/// The primary entry point for the O3 SDK.
///
/// Explicitly constructed (no global singleton) and cheap to clone; holds only
/// immutable configuration plus a pooled HTTP transport. Provides nested
/// sub-client accessors per domain: `client.price_history()`,
/// `client.portfolio()`.
pub struct O3Client {
    pub(crate) http: O3Http,
}

impl O3Client {
    pub fn builder() -> O3ClientBuilder {
        O3ClientBuilder::default()
    }

    /// Client against the default staging host.
    pub fn new() -> Self {
        Self::builder().build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn price_history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }

    pub fn portfolio(&self) -> PortfolioClient<'_> {
        PortfolioClient { client: self }
    }

    /// The configured base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

impl Default for O3Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for O3Client {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct O3ClientBuilder {
    base_url: String,
}

impl Default for O3ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl O3ClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> O3Client {
        O3Client {
            http: O3Http::new(&self.base_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::DEFAULT_API_URL;

    #[test]
    fn builder_defaults_to_staging_host() {
        let client = O3Client::new();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn builder_overrides_base_url_and_trims() {
        let client = O3Client::builder()
            .base_url("https://api.example.test/")
            .build();
        assert_eq!(client.base_url(), "https://api.example.test");
    }
}
