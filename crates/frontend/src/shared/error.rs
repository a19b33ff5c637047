//! Request errors surfaced by the API layer

use contracts::shared::server_message::ServerMessage;
use thiserror::Error;

/// Shown for transport and decode failures, which never carry a server message
pub const TRANSPORT_FALLBACK: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status
    #[error("HTTP {status}{}", message_suffix(.message))]
    Rejected { status: u16, message: Option<String> },
    /// Request never produced a response (network, CORS, serialization)
    #[error("request failed: {0}")]
    Transport(String),
    /// 2xx response whose body does not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default()
}

impl ApiError {
    /// Build a rejection from a status and the raw response body
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = ServerMessage::from_body(body)
            .and_then(|m| m.text().map(str::to_string));
        Self::Rejected { status, message }
    }

    /// Text for the user: the server message when present, otherwise a fallback
    pub fn user_message(&self, rejected_fallback: &str) -> String {
        match self {
            Self::Rejected {
                message: Some(m), ..
            } => m.clone(),
            Self::Rejected { message: None, .. } => rejected_fallback.to_string(),
            Self::Transport(_) | Self::Decode(_) => TRANSPORT_FALLBACK.to_string(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_prefers_server_message() {
        let err = ApiError::rejected(409, r#"{"message":"Organization already exists"}"#);
        assert_eq!(
            err.user_message("Failed to create organization."),
            "Organization already exists"
        );
        assert_eq!(err.to_string(), "HTTP 409: Organization already exists");
    }

    #[test]
    fn test_rejected_without_message_uses_fallback() {
        let err = ApiError::rejected(500, "Internal Server Error");
        assert_eq!(err, ApiError::Rejected { status: 500, message: None });
        assert_eq!(err.user_message("Failed to create role."), "Failed to create role.");
    }

    #[test]
    fn test_transport_uses_generic_fallback() {
        let err = ApiError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message("Failed to create user."), TRANSPORT_FALLBACK);
        assert!(!err.is_rejected());
    }
}
