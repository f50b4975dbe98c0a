//! Error taxonomy for API calls.
//!
//! Every failure a screen can see is one of three cases: the request never
//! completed, the server answered with a non-success status and (usually) a
//! reason, or the body didn't have the shape the caller expected. All three
//! are surfaced as a user-readable message via `Display`.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server or the connection dropped.
    #[error("network error: {0}")]
    Transport(String),

    /// Non-success HTTP status. `message` is the server's rejection reason
    /// when the body carried one, otherwise a generic status line.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response parsed as JSON but not as the expected type, or wasn't
    /// JSON at all.
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a 404, which some list endpoints use to mean "no rows".
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Rejection body shape: the server answers errors as `{"message": ...}` on
/// the auth routes and `{"error": ...}` elsewhere.
#[derive(Debug, Deserialize)]
struct Rejection {
    message: Option<String>,
    error: Option<String>,
}

/// Extract the server's reason from an error body, falling back to a
/// generic status line.
pub(crate) fn rejection_message(status: u16, body: &str) -> String {
    if let Ok(rejection) = serde_json::from_str::<Rejection>(body) {
        if let Some(msg) = rejection.message.or(rejection.error) {
            return msg;
        }
    }
    format!("request failed with status {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_prefers_message_key() {
        let msg = rejection_message(401, r#"{"message": "Invalid credentials"}"#);
        assert_eq!(msg, "Invalid credentials");
    }

    #[test]
    fn test_rejection_falls_back_to_error_key() {
        let msg = rejection_message(400, r#"{"error": "CGPA out of range"}"#);
        assert_eq!(msg, "CGPA out of range");
    }

    #[test]
    fn test_rejection_generic_on_opaque_body() {
        let msg = rejection_message(500, "<html>Internal Server Error</html>");
        assert_eq!(msg, "request failed with status 500");
    }

    #[test]
    fn test_not_found_detection() {
        let err = ApiError::Status {
            status: 404,
            message: "not found".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!ApiError::Transport("down".to_string()).is_not_found());
    }
}
