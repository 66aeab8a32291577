//! Wire types for price history responses (REST).

use crate::shared::Symbol;
use serde::{Deserialize, Serialize};

/// REST payload inside the `result.data` envelope for `/v1/history/{symbol}`.
///
/// `data` entries are `[unix_seconds, price]` pairs, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceHistoryResponse {
    pub asset: Symbol,
    pub currency: String,
    pub data: Vec<(i64, f64)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_with_field_exact_fidelity() {
        let payload = json!({
            "asset": "NEO",
            "currency": "usd",
            "data": [[1505692800, 25.40], [1505696400, 25.87]]
        });
        let resp: PriceHistoryResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(resp.asset, Symbol::new("NEO"));
        assert_eq!(resp.currency, "usd");
        assert_eq!(resp.data, vec![(1505692800, 25.40), (1505696400, 25.87)]);
    }

    #[test]
    fn rejects_malformed_pairs() {
        let payload = json!({
            "asset": "NEO",
            "currency": "usd",
            "data": [["not-a-timestamp", 25.40]]
        });
        assert!(serde_json::from_value::<PriceHistoryResponse>(payload).is_err());
    }
}
