//! Wire types for portfolio value responses (REST).

use serde::{Deserialize, Serialize};

/// REST payload inside the `result.data` envelope for `/v1/portfolio`.
///
/// `data` entries are `[unix_seconds, value]` pairs, oldest first, valuing the
/// requested NEO/GAS holdings at each sample time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioValueResponse {
    pub currency: String,
    pub data: Vec<(i64, f64)>,
}
