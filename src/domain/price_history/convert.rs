//! Conversions from wire types to domain types for price history.

use super::wire::PriceHistoryResponse;
use super::{PriceHistory, PricePoint};
use chrono::TimeZone;

impl From<PriceHistoryResponse> for PriceHistory {
    fn from(r: PriceHistoryResponse) -> Self {
        Self {
            asset: r.asset,
            currency: r.currency,
            points: r.data.into_iter().map(point_from_pair).collect(),
        }
    }
}

pub(crate) fn point_from_pair((secs, price): (i64, f64)) -> PricePoint {
    PricePoint {
        time: chrono::Utc
            .timestamp_opt(secs, 0)
            .single()
            .unwrap_or_else(chrono::Utc::now),
        price,
    }
}
