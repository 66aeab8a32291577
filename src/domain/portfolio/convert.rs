//! Conversions from wire types to domain types for portfolio values.

use super::wire::PortfolioValueResponse;
use super::PortfolioValue;
use crate::domain::price_history::convert::point_from_pair;

impl From<PortfolioValueResponse> for PortfolioValue {
    fn from(r: PortfolioValueResponse) -> Self {
        Self {
            currency: r.currency,
            points: r.data.into_iter().map(point_from_pair).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn conversion_preserves_order_and_values() {
        let wire = PortfolioValueResponse {
            currency: "usd".to_string(),
            data: vec![(1505692800, 312.05), (1505696400, 319.44)],
        };

        let value = PortfolioValue::from(wire);
        assert_eq!(value.currency, "usd");
        assert_eq!(value.points.len(), 2);
        assert_eq!(value.points[0].time, Utc.timestamp_opt(1505692800, 0).unwrap());
        assert_eq!(value.latest().unwrap().price, 319.44);
    }
}
