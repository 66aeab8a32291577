//! Price history domain — sampled chart data for one asset symbol.

pub mod client;
pub mod convert;
pub mod wire;

use crate::shared::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single sampled point on a price chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Sample time.
    pub time: DateTime<Utc>,
    /// Price in the record's quote currency.
    pub price: f64,
}

/// Historical price data for one asset over one interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    /// The asset the series describes.
    pub asset: Symbol,
    /// Quote currency the prices are denominated in.
    pub currency: String,
    /// Samples in the order the server returned them (oldest first).
    pub points: Vec<PricePoint>,
}

impl PriceHistory {
    /// Most recent sample, if the series is non-empty.
    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}
