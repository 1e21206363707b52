//! Domain errors shared by the journal contexts.

use thiserror::Error;

/// Domain-level errors raised while validating value objects.
///
/// These errors are independent of infrastructure concerns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Invalid value for a field.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Entity not found.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        /// Entity type.
        entity_type: String,
        /// Entity identifier.
        id: String,
    },
}

impl DomainError {
    /// Shorthand for an [`DomainError::InvalidValue`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_invalid_value_display() {
        let err = DomainError::invalid("lot_size", "must be positive");
        let msg = format!("{err}");
        assert!(msg.contains("lot_size"));
        assert!(msg.contains("positive"));
    }

    #[test]
    fn domain_error_not_found_display() {
        let err = DomainError::NotFound {
            entity_type: "Instrument".to_string(),
            id: "EURUSD".to_string(),
        };
        assert_eq!(err.to_string(), "Instrument not found: EURUSD");
    }

    #[test]
    fn domain_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DomainError::invalid("test", "test"));
        assert!(!err.to_string().is_empty());
    }
}
