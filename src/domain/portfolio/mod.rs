//! Portfolio domain — monetary value of a NEO/GAS holding pair over time.

pub mod client;
pub mod convert;
pub mod wire;

use crate::domain::price_history::PricePoint;
use serde::{Deserialize, Serialize};

/// Valuation of a holding pair sampled over the requested interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValue {
    /// Currency the values are denominated in.
    pub currency: String,
    /// Valuation samples, oldest first.
    pub points: Vec<PricePoint>,
}

impl PortfolioValue {
    /// Most recent valuation, if any samples exist.
    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Percentage change from the first to the last sample.
    ///
    /// Returns `None` for series with fewer than two samples or a zero
    /// starting value.
    pub fn change_percent(&self) -> Option<f64> {
        let first = self.points.first()?.price;
        let last = self.points.last()?.price;
        if self.points.len() < 2 || first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn point(secs: i64, price: f64) -> PricePoint {
        PricePoint {
            time: Utc.timestamp_opt(secs, 0).unwrap(),
            price,
        }
    }

    #[test]
    fn change_percent_from_first_to_last() {
        let value = PortfolioValue {
            currency: "usd".to_string(),
            points: vec![point(0, 200.0), point(60, 150.0), point(120, 250.0)],
        };
        assert_eq!(value.change_percent(), Some(25.0));
    }

    #[test]
    fn change_percent_undefined_for_short_or_zero_series() {
        let empty = PortfolioValue {
            currency: "usd".to_string(),
            points: vec![],
        };
        assert_eq!(empty.change_percent(), None);

        let single = PortfolioValue {
            currency: "usd".to_string(),
            points: vec![point(0, 100.0)],
        };
        assert_eq!(single.change_percent(), None);

        let zero_start = PortfolioValue {
            currency: "usd".to_string(),
            points: vec![point(0, 0.0), point(60, 10.0)],
        };
        assert_eq!(zero_start.change_percent(), None);
    }
}
