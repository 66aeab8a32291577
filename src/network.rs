//! Network URL constants for the O3 SDK.

/// Default REST API base URL (staging host).
pub const DEFAULT_API_URL: &str = "https://staging-api.o3.network";
