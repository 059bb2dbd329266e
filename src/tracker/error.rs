//! Tracker error types
//!
//! Errors surfaced by the application store, the filter selectors and the
//! session state machine.

use thiserror::Error;

/// Errors that can occur while tracking applications
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// A required field is empty or an email is malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// No application with this id exists
    #[error("Application not found: {0}")]
    NotFound(u32),

    /// A role, status or view name was not recognised
    #[error("Cannot parse {kind} from '{value}'")]
    Parse { kind: &'static str, value: String },
}

impl TrackerError {
    pub(crate) fn parse(kind: &'static str, value: impl Into<String>) -> Self {
        TrackerError::Parse {
            kind,
            value: value.into(),
        }
    }
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Reject empty (or whitespace-only) values of a required field
pub fn require(field: &str, value: &str) -> TrackerResult<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Check that an email has text on both sides of an `@`
pub fn validate_email(email: &str) -> TrackerResult<()> {
    require("email", email)?;
    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(TrackerError::Validation(format!(
            "'{}' is not a valid email address",
            email
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::NotFound(42);
        assert_eq!(err.to_string(), "Application not found: 42");

        let err = TrackerError::parse("role", "Designer");
        assert_eq!(err.to_string(), "Cannot parse role from 'Designer'");
    }

    #[test]
    fn test_require() {
        assert!(require("full name", "Aarav").is_ok());
        assert_eq!(
            require("full name", "   "),
            Err(TrackerError::Validation("full name is required".to_string()))
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("x@y.com").is_ok());
        assert!(validate_email("hr@veridia.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@veridia.com").is_err());
        assert!(validate_email("aarav@").is_err());
    }
}
