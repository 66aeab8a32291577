//! Low-level HTTP client — `O3Http`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the high-level client boundary). Internal to the SDK — `O3Client`
//! wraps this.
//!
//! Every response rides the server's envelope: a JSON object holding a `result`
//! object holding a `data` object. `decode_envelope` peels that off and decodes
//! the inner payload into the target wire type. There is no partial success:
//! any deviation from the envelope shape is `InvalidData`.

use crate::domain::portfolio::wire::PortfolioValueResponse;
use crate::domain::price_history::wire::PriceHistoryResponse;
use crate::error::{ClientError, ClientResult};
use crate::shared::{format_gas, Interval, Symbol};

use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;

/// Raw JSON object payload, as returned by the request primitive.
pub type JsonObject = Map<String, Value>;

/// Sent on every request, body or not. The upstream server expects this exact
/// value even on plain GETs.
const CONTENT_TYPE: &str = "application/json-rpc";

/// Low-level HTTP client for the O3 REST API.
///
/// Stateless beyond immutable configuration: a base URL and a pooled
/// `reqwest::Client`. Requests carry no session affinity and no ordering
/// guarantee relative to one another.
pub struct O3Http {
    base_url: String,
    client: Client,
}

impl O3Http {
    pub fn new(base_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Price History ────────────────────────────────────────────────────

    pub async fn get_price_history(
        &self,
        symbol: &Symbol,
        interval: Interval,
    ) -> ClientResult<PriceHistoryResponse> {
        let url = self.price_history_url(symbol, interval);
        let raw = self.send_request(&url, reqwest::Method::GET, None::<&()>).await?;
        decode_envelope(raw)
    }

    pub(crate) fn price_history_url(&self, symbol: &Symbol, interval: Interval) -> String {
        format!(
            "{}/v1/history/{}?i={}",
            self.base_url,
            symbol.encoded(),
            interval
        )
    }

    // ── Portfolio ────────────────────────────────────────────────────────

    pub async fn get_portfolio_value(
        &self,
        neo: u64,
        gas: Decimal,
        interval: Interval,
    ) -> ClientResult<PortfolioValueResponse> {
        let url = self.portfolio_url(neo, gas, interval);
        let raw = self.send_request(&url, reqwest::Method::GET, None::<&()>).await?;
        decode_envelope(raw)
    }

    pub(crate) fn portfolio_url(&self, neo: u64, gas: Decimal, interval: Interval) -> String {
        format!(
            "{}/v1/portfolio?i={}&neo={}&gas={}",
            self.base_url,
            interval,
            neo,
            format_gas(&gas)
        )
    }

    // ── Request primitive ────────────────────────────────────────────────

    /// Issue a request and parse the response body as a JSON object.
    ///
    /// Failure taxonomy, in order of detection:
    /// - a body that fails JSON serialization is `InvalidBodyRequest`, and
    ///   nothing is sent;
    /// - a transport fault is `NoInternet` when connectivity is the cause,
    ///   `InvalidRequest` otherwise;
    /// - response bytes that are not a JSON object are `InvalidData`.
    ///
    /// HTTP status codes are not interpreted; only the body shape matters.
    pub async fn send_request<B: Serialize>(
        &self,
        url: &str,
        method: reqwest::Method,
        body: Option<&B>,
    ) -> ClientResult<JsonObject> {
        let mut req = self
            .client
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE);

        if let Some(b) = body {
            let bytes = encode_body(b)?;
            req = req.body(bytes);
        }

        tracing::debug!(%url, "issuing request");

        let resp = req.send().await.map_err(classify_transport_error)?;
        let bytes = resp.bytes().await.map_err(classify_transport_error)?;

        parse_object(&bytes)
    }
}

impl Clone for O3Http {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
        }
    }
}

// ── Decoding helpers ─────────────────────────────────────────────────────────

/// Serialize an optional request body up front, before any network I/O.
pub(crate) fn encode_body<B: Serialize>(body: &B) -> ClientResult<Vec<u8>> {
    serde_json::to_vec(body).map_err(|e| {
        tracing::debug!(error = %e, "request body failed serialization");
        ClientError::InvalidBodyRequest
    })
}

/// Parse raw response bytes into a JSON object.
pub(crate) fn parse_object(bytes: &[u8]) -> ClientResult<JsonObject> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => {
            tracing::debug!(kind = json_kind(&other), "response is valid JSON but not an object");
            Err(ClientError::InvalidData)
        }
        Err(e) => {
            tracing::debug!(error = %e, "response is not valid JSON");
            Err(ClientError::InvalidData)
        }
    }
}

/// Extract `result.data` from a response object and decode it as `T`.
///
/// Missing keys, wrong nested types, and schema mismatches all collapse to
/// `InvalidData` — the caller is not told which step failed.
pub(crate) fn decode_envelope<T: DeserializeOwned>(mut response: JsonObject) -> ClientResult<T> {
    let data = response
        .get_mut("result")
        .and_then(Value::as_object_mut)
        .and_then(|result| result.remove("data"))
        .filter(Value::is_object)
        .ok_or_else(|| {
            tracing::debug!("response envelope missing result.data object");
            ClientError::InvalidData
        })?;

    serde_json::from_value(data).map_err(|e| {
        tracing::debug!(error = %e, "envelope payload failed schema decode");
        ClientError::InvalidData
    })
}

fn classify_transport_error(e: reqwest::Error) -> ClientError {
    tracing::debug!(error = %e, "transport failure");
    if e.is_connect() {
        ClientError::NoInternet
    } else {
        ClientError::InvalidRequest
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde_json::json;

    fn http() -> O3Http {
        O3Http::new("https://staging-api.o3.network")
    }

    // ── URL construction ─────────────────────────────────────────────────

    #[test]
    fn price_history_url_is_exact() {
        let url = http().price_history_url(&Symbol::new("NEO"), Interval::new(60));
        assert_eq!(url, "https://staging-api.o3.network/v1/history/NEO?i=60");
    }

    #[test]
    fn price_history_url_percent_encodes_symbol() {
        let url = http().price_history_url(&Symbol::new("a/b"), Interval::new(5));
        assert_eq!(url, "https://staging-api.o3.network/v1/history/a%2Fb?i=5");
    }

    #[test]
    fn portfolio_url_is_exact() {
        let url = http().portfolio_url(12, Decimal::new(35, 1), Interval::new(60));
        assert_eq!(
            url,
            "https://staging-api.o3.network/v1/portfolio?i=60&neo=12&gas=3.5"
        );
    }

    #[test]
    fn portfolio_url_gas_is_always_decimal() {
        let url = http().portfolio_url(7, Decimal::from(4), Interval::new(1440));
        assert_eq!(
            url,
            "https://staging-api.o3.network/v1/portfolio?i=1440&neo=7&gas=4.0"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let h = O3Http::new("https://staging-api.o3.network/");
        assert_eq!(h.base_url(), "https://staging-api.o3.network");
    }

    // ── Body encoding ────────────────────────────────────────────────────

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("not representable as JSON"))
        }
    }

    #[test]
    fn unserializable_body_fails_fast() {
        assert_eq!(
            encode_body(&Unserializable).unwrap_err(),
            ClientError::InvalidBodyRequest
        );
    }

    #[test]
    fn serializable_body_encodes() {
        let bytes = encode_body(&json!({"jsonrpc": "2.0"})).unwrap();
        assert_eq!(bytes, br#"{"jsonrpc":"2.0"}"#);
    }

    // ── Response parsing ─────────────────────────────────────────────────

    #[test]
    fn non_json_bytes_are_invalid_data() {
        assert_eq!(parse_object(b"<html>oops</html>").unwrap_err(), ClientError::InvalidData);
    }

    #[test]
    fn json_non_object_is_invalid_data() {
        assert_eq!(parse_object(b"[1,2,3]").unwrap_err(), ClientError::InvalidData);
        assert_eq!(parse_object(b"42").unwrap_err(), ClientError::InvalidData);
    }

    #[test]
    fn json_object_parses() {
        let obj = parse_object(br#"{"result":{}}"#).unwrap();
        assert!(obj.contains_key("result"));
    }

    // ── Envelope decoding ────────────────────────────────────────────────

    fn as_object(v: Value) -> JsonObject {
        match v {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Inner {
        a: u32,
    }

    #[test]
    fn well_formed_envelope_decodes() {
        let resp = as_object(json!({"result": {"data": {"a": 7}}}));
        assert_eq!(decode_envelope::<Inner>(resp).unwrap(), Inner { a: 7 });
    }

    #[test]
    fn missing_result_is_invalid_data() {
        let resp = as_object(json!({"error": "nope"}));
        assert_eq!(decode_envelope::<Inner>(resp).unwrap_err(), ClientError::InvalidData);
    }

    #[test]
    fn result_not_object_is_invalid_data() {
        let resp = as_object(json!({"result": "flat"}));
        assert_eq!(decode_envelope::<Inner>(resp).unwrap_err(), ClientError::InvalidData);
    }

    #[test]
    fn missing_data_is_invalid_data() {
        let resp = as_object(json!({"result": {}}));
        assert_eq!(decode_envelope::<Inner>(resp).unwrap_err(), ClientError::InvalidData);
    }

    #[test]
    fn data_not_object_is_invalid_data() {
        let resp = as_object(json!({"result": {"data": [1, 2]}}));
        assert_eq!(decode_envelope::<Inner>(resp).unwrap_err(), ClientError::InvalidData);
    }

    #[test]
    fn schema_mismatch_is_invalid_data() {
        let resp = as_object(json!({"result": {"data": {"a": "seven"}}}));
        assert_eq!(decode_envelope::<Inner>(resp).unwrap_err(), ClientError::InvalidData);
    }
}
