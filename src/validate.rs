//! Form validation.
//!
//! Validation failures are UI state, not errors to propagate: the reducer
//! stores the result on the form and the view renders it inline. The user
//! recovers by editing and resubmitting.

use std::fmt;

use validator::ValidateEmail;

use crate::state::{Field, FormState};

/// Why the last submit attempt was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(Field),
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "Please fill in the {} field", field.label().to_lowercase())
            }
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

/// Check the form against the submission rules: every field non-empty and a
/// well-formed email address.
pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    for field in Field::ALL {
        if form.field(field).trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }
    if !email_is_valid(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Well-formed email: `local@domain.tld`.
///
/// The `validator` check covers the general shape; the extra test requires a
/// dot in the domain, so `user@localhost` is rejected alongside `usermail.pl`.
pub fn email_is_valid(raw: &str) -> bool {
    raw.validate_email()
        && raw
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'))
}
