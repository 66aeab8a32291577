//! Portfolio sub-client — holding valuation queries.

use crate::client::O3Client;
use crate::domain::portfolio::PortfolioValue;
use crate::error::ClientResult;
use crate::shared::Interval;

use rust_decimal::Decimal;

/// Sub-client for portfolio value operations.
pub struct PortfolioClient<'a> {
    pub(crate) client: &'a O3Client,
}

impl<'a> PortfolioClient<'a> {
    /// Value a NEO/GAS holding pair over the given interval.
    ///
    /// Issues `GET /v1/portfolio?i={interval}&neo={neo}&gas={gas}` with `neo`
    /// as an integer count and `gas` rendered as an exact decimal. Errors
    /// propagate unchanged from the HTTP layer; there is no retry.
    pub async fn value(
        &self,
        neo: u64,
        gas: Decimal,
        interval: Interval,
    ) -> ClientResult<PortfolioValue> {
        let wire = self
            .client
            .http
            .get_portfolio_value(neo, gas, interval)
            .await?;
        Ok(wire.into())
    }
}
