//! Errors surfaced by catalog fetches.

use artgrid_api_models::ApiErrorBody;
use thiserror::Error;

/// Failure of a single catalog request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Transport(String),
    /// The catalog answered with a non-success status.
    #[error("catalog returned HTTP {status}{}", detail_suffix(.detail.as_deref()))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the catalog's error body, when present.
        detail: Option<String>,
    },
    /// The response body was not a valid listing envelope.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from the raw response body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message());
        Self::Status { status, detail }
    }
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|text| format!(": {text}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn status_error_uses_catalog_detail() {
        let err = ApiError::from_status(403, r#"{"status":403,"error":"Forbidden","detail":"Max 100"}"#);
        assert_eq!(err.to_string(), "catalog returned HTTP 403: Max 100");
    }

    #[test]
    fn status_error_without_body() {
        let err = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                detail: None
            }
        );
        assert_eq!(err.to_string(), "catalog returned HTTP 502");
    }

    #[test]
    fn transport_and_decode_messages() {
        assert!(ApiError::Transport("offline".into()).to_string().contains("offline"));
        assert!(ApiError::Decode("eof".into()).to_string().starts_with("unexpected"));
    }
}
