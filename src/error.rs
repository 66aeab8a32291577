//! Unified SDK error types.
//!
//! Every operation terminates in exactly one outcome: a value or a single
//! [`ClientError`] variant. The SDK never retries, never queues, and never lets
//! a panic or unclassified fault cross the client boundary. Decode failures are
//! deliberately coarse: a missing envelope key, a wrong nested type, and a
//! schema mismatch all collapse to [`ClientError::InvalidData`]; the underlying
//! cause is logged at debug level before being discarded.

use thiserror::Error;

/// Uniform result alias used by every SDK operation.
pub type ClientResult<T> = Result<T, ClientError>;

/// Top-level SDK error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientError {
    /// The request body could not be serialized to JSON. No request was sent.
    #[error("invalid body request")]
    InvalidBodyRequest,

    /// The response was unreadable, not a JSON object, or did not match the
    /// expected `result.data` envelope/schema.
    #[error("invalid response data")]
    InvalidData,

    /// The transport reported a failure other than missing connectivity.
    #[error("invalid server request")]
    InvalidRequest,

    /// The transport could not reach the host at all.
    #[error("no internet connection")]
    NoInternet,
}
