//! Form Validation
//!
//! Runs before any request is sent. First failing rule wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::models::EmployeeDraft;

/// Minimum length (in characters) for name and role
pub const MIN_TEXT_LEN: usize = 2;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Loose `local@domain.tld` shape; anything stricter is the backend's call.
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check a draft in order: email, name, role.
pub fn validate(draft: &EmployeeDraft) -> Result<(), ValidationError> {
    if !is_valid_email(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if draft.name.chars().count() < MIN_TEXT_LEN {
        return Err(ValidationError::NameTooShort);
    }
    if draft.role.chars().count() < MIN_TEXT_LEN {
        return Err(ValidationError::RoleTooShort);
    }
    Ok(())
}
