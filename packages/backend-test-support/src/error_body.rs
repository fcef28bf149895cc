//! Assertions for the backend's JSON error contract.
//!
//! Error responses carry `{ "message": ..., "error"?: ... }` and every
//! response carries an `X-Correlation-ID` header. These helpers work on raw
//! response parts so they do not depend on backend types.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

pub const CORRELATION_HEADER: &str = "x-correlation-id";

#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Return the correlation id header value, panicking if it is absent or empty.
pub fn correlation_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(CORRELATION_HEADER)
        .expect("x-correlation-id header should be present")
        .to_str()
        .expect("x-correlation-id header should be valid UTF-8");
    assert!(!value.is_empty(), "x-correlation-id should not be empty");
    value.to_string()
}

/// Assert status, correlation header and message of an error response.
///
/// Returns the parsed body so callers can check the optional `error` field.
pub fn assert_error_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_message: &str,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status);
    correlation_id(headers);

    let body_str = std::str::from_utf8(body).expect("error body should be valid UTF-8");
    let parsed: ErrorBodyLike = serde_json::from_str(body_str)
        .unwrap_or_else(|_| panic!("error body should be {{message, error?}}, got: {body_str}"));

    assert_eq!(parsed.message, expected_message);
    parsed
}
