use std::collections::BTreeMap;
use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;

/// Failure talking to the queue backend.
#[derive(Debug)]
pub enum ApiError {
    /// Transport failure: connection refused, timeout, TLS, ...
    Http(reqwest::Error),
    /// Non-2xx answer. `message` comes from the response body when it has one.
    Status { status: StatusCode, message: Option<String> },
    /// 2xx answer whose body did not match the expected shape.
    Decode(serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Message suitable for a flash notification.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(m), .. } => m.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status(),
            ApiError::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Build a `Status` error from a raw error body.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        ApiError::Status { status, message: extract_message(body) }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "Backend request failed: {e}"),
            ApiError::Status { status, message: Some(m) } => write!(f, "Backend returned {status}: {m}"),
            ApiError::Status { status, message: None } => write!(f, "Backend returned {status}"),
            ApiError::Decode(e) => write!(f, "Unexpected backend response: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Http(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    #[serde(default)]
    errors: BTreeMap<String, Vec<String>>,
}

/// Pull a human-readable message out of an error body.
/// Prefers `message`, then `error`, then the first field validation error.
fn extract_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let first_field_error = || parsed.errors.values().flatten().next().cloned();
    parsed
        .message
        .filter(|m| !m.trim().is_empty())
        .or(parsed.error.filter(|m| !m.trim().is_empty()))
        .or_else(first_field_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_wins() {
        let err = ApiError::from_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"Loket sudah digunakan","errors":{"counter_id":["taken"]}}"#,
        );
        assert_eq!(err.user_message("Gagal"), "Loket sudah digunakan");
    }

    #[test]
    fn falls_back_to_field_errors() {
        let err = ApiError::from_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"errors":{"email":["The email has already been taken."]}}"#,
        );
        assert_eq!(err.user_message("Gagal"), "The email has already been taken.");
    }

    #[test]
    fn non_json_body_uses_fallback() {
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(err.user_message("Terjadi kesalahan"), "Terjadi kesalahan");
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn blank_message_is_ignored() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message":""}"#);
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn not_found_detection() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "{}");
        assert!(err.is_not_found());
        let err = ApiError::from_status(StatusCode::FORBIDDEN, "{}");
        assert!(!err.is_not_found());
    }
}
