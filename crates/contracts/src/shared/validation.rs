//! Client-side validation of create payloads

use serde::Serialize;
use thiserror::Error;

/// Validation failure attached to one form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// Wire name of the offending field
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Payload of a create request.
///
/// `Default` is the empty form; a successful submission resets the form to it.
pub trait CreatePayload: Clone + Default + Serialize {
    /// Check required fields; the first failing field wins
    fn validate(&self) -> Result<(), FieldError>;
}

/// Reject empty or whitespace-only values
pub fn require(field: &'static str, label: &str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, format!("{} is required.", label)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank_values() {
        let err = require("owner", "Owner", "   ").unwrap_err();
        assert_eq!(err.field, "owner");
        assert_eq!(err.to_string(), "Owner is required.");
        assert!(require("owner", "Owner", "Jane").is_ok());
    }
}
