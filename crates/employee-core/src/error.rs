//! Dashboard error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client-side rejection of a form draft. Blocks the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid email")]
    InvalidEmail,

    #[error("name too short")]
    NameTooShort,

    #[error("role too short")]
    RoleTooShort,
}

impl ValidationError {
    /// Banner text shown to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail => "Provide valid email!",
            ValidationError::NameTooShort => "Name too short!",
            ValidationError::RoleTooShort => "Role too short!",
        }
    }
}

/// Failure talking to the backend
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network or transport failure, no response received
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Response body was not the expected JSON
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Result type for backend requests
pub type RequestResult<T> = Result<T, RequestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::InvalidEmail.to_string(), "invalid email");
        assert_eq!(ValidationError::InvalidEmail.user_message(), "Provide valid email!");
        assert_eq!(ValidationError::NameTooShort.user_message(), "Name too short!");
        assert_eq!(ValidationError::RoleTooShort.user_message(), "Role too short!");
    }

    #[test]
    fn test_status_error_display() {
        let err = RequestError::Status {
            status: StatusCode::NOT_FOUND,
            body: "Employee not found with id: 3".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected status 404 Not Found: Employee not found with id: 3");
    }
}
