use serde::{Deserialize, Serialize};

/// JSON body the backend uses for outcomes: `{ message }` or `{ error }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ServerMessage {
    /// Parse a response body; anything that is not a JSON object yields `None`
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// First non-blank of `message` and `error`
    pub fn text(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_wins() {
        let m = ServerMessage::from_body(r#"{"message":"Tenant exists","error":"x"}"#).unwrap();
        assert_eq!(m.text(), Some("Tenant exists"));
    }

    #[test]
    fn test_error_field_used_when_message_missing() {
        let m = ServerMessage::from_body(r#"{"error":"Role already defined"}"#).unwrap();
        assert_eq!(m.text(), Some("Role already defined"));
    }

    #[test]
    fn test_blank_or_foreign_bodies_have_no_text() {
        let m = ServerMessage::from_body(r#"{"message":"  "}"#).unwrap();
        assert_eq!(m.text(), None);
        assert!(ServerMessage::from_body("<html>502</html>").is_none());
        assert_eq!(ServerMessage::from_body(r#"{"detail":"nope"}"#).unwrap().text(), None);
    }
}
