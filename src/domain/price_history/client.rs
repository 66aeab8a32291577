//! Price history sub-client — sampled price queries.

use crate::client::O3Client;
use crate::domain::price_history::PriceHistory;
use crate::error::ClientResult;
use crate::shared::{Interval, Symbol};

/// Sub-client for price history operations.
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a O3Client,
}

impl<'a> PriceHistoryClient<'a> {
    /// Fetch the sampled price series for `symbol` at the given interval.
    ///
    /// Issues `GET /v1/history/{symbol}?i={interval}`. Errors propagate
    /// unchanged from the HTTP layer; there is no retry.
    pub async fn get(&self, symbol: &Symbol, interval: Interval) -> ClientResult<PriceHistory> {
        let wire = self.client.http.get_price_history(symbol, interval).await?;
        Ok(wire.into())
    }
}
