use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when using the AgentAuth API client
#[derive(Debug, Error)]
pub enum AgentAuthError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API error returned by the server
    #[error("API error: {0:?}")]
    Api(ApiErrorObject),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Local request validation error, raised before any network call
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// API error object returned by the AgentAuth API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// HTTP status code
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Machine-readable error code
    #[serde(default)]
    pub code: Option<String>,
    /// Request ID for support correlation
    #[serde(default)]
    pub request_id: Option<String>,
    /// Raw response body, capped, for diagnostics
    #[serde(skip)]
    pub raw: Option<String>,
}

impl AgentAuthError {
    /// Determines if this error is retryable
    ///
    /// Retryable errors include rate limits (429), timeouts (408),
    /// conflicts (409), and server errors (5xx).
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(obj) => obj
                .status_code
                .is_some_and(crate::retry::is_retryable_status),
            Self::Reqwest(e) => e.is_timeout() || e.is_connect(),
            Self::Config(_) | Self::Validation(_) | Self::Serde(_) => false,
        }
    }
}

/// Maps a serde deserialization error to an `AgentAuthError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> AgentAuthError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    AgentAuthError::Serde(format!("{e}: {snippet}"))
}

/// Deserializes an API error from the response body
///
/// Attempts to parse the error as JSON, falling back to plain text on failure.
/// The raw body (capped) is always retained for diagnostics.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> AgentAuthError {
    let status_code = Some(status.as_u16());
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned();

    if let Ok(mut obj) = serde_json::from_slice::<ApiErrorObject>(body) {
        obj.status_code = status_code;
        obj.raw = Some(snippet);
        return AgentAuthError::Api(obj);
    }

    // Server may return plain text on 5xx; cap body to avoid log/memory bloat
    AgentAuthError::Api(ApiErrorObject {
        status_code,
        message: snippet.clone(),
        code: Some(format!("http_{}", status.as_u16())),
        request_id: None,
        raw: Some(snippet),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_body_parses() {
        let body = br#"{"message": "agent not found", "code": "not_found", "request_id": "req_1"}"#;
        let err = deserialize_api_error(StatusCode::NOT_FOUND, body);
        match err {
            AgentAuthError::Api(obj) => {
                assert_eq!(obj.status_code, Some(404));
                assert_eq!(obj.message, "agent not found");
                assert_eq!(obj.code.as_deref(), Some("not_found"));
                assert!(obj.raw.as_deref().is_some_and(|r| r.contains("not found")));
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn plain_text_body_falls_back() {
        let err = deserialize_api_error(StatusCode::BAD_GATEWAY, b"upstream exploded");
        match err {
            AgentAuthError::Api(obj) => {
                assert_eq!(obj.status_code, Some(502));
                assert_eq!(obj.message, "upstream exploded");
                assert_eq!(obj.code.as_deref(), Some("http_502"));
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn long_bodies_are_capped() {
        let body = vec![b'x'; 10_000];
        let err = deserialize_api_error(StatusCode::INTERNAL_SERVER_ERROR, &body);
        match err {
            AgentAuthError::Api(obj) => assert_eq!(obj.message.len(), 400),
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn retryability_by_variant() {
        let retryable = deserialize_api_error(StatusCode::SERVICE_UNAVAILABLE, b"{}");
        assert!(retryable.is_retryable());

        let permanent = deserialize_api_error(StatusCode::NOT_FOUND, b"{}");
        assert!(!permanent.is_retryable());

        assert!(!AgentAuthError::Validation("missing id".into()).is_retryable());
        assert!(!AgentAuthError::Config("missing key".into()).is_retryable());
        assert!(!AgentAuthError::Serde("bad json".into()).is_retryable());
    }
}
