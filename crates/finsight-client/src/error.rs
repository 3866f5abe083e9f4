//! Client error taxonomy.

use thiserror::Error;

/// Everything that can go wrong talking to an external service. Every
/// variant is converted into a user-facing message at the call site; none
/// is fatal to the UI.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// The service answered 2xx but reported an error in the body.
    #[error("{0}")]
    Backend(String),

    #[error("incomplete response: missing {0}")]
    Incomplete(&'static str),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pull a human-readable message out of an error body, if one parses.
///
/// Handles both shapes seen at our boundaries: `{"error": "..."}` from the
/// scoring backend and `{"error": {"message": "..."}}` from the video API.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;
    if let Some(message) = error.as_str() {
        return Some(message.to_string());
    }
    error
        .get("message")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_flat_error() {
        assert_eq!(
            extract_error_message(r#"{"error": "Failed to process score request on the server."}"#),
            Some("Failed to process score request on the server.".to_string())
        );
    }

    #[test]
    fn test_extract_nested_error() {
        assert_eq!(
            extract_error_message(r#"{"error": {"code": 403, "message": "quota exceeded"}}"#),
            Some("quota exceeded".to_string())
        );
    }

    #[test]
    fn test_extract_from_garbage() {
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(r#"{"ok": true}"#), None);
    }
}
