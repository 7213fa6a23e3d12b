//! Pre-submission checks for the create form.
//!
//! These only spare the user a round-trip; the server stays the authority on
//! every field and its rejections are shown as they arrive.

use thiserror::Error;

use crate::types::CreateCustomer;

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_EMAIL_CHARS: usize = 255;

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("all fields are required")]
    MissingFields,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl CustomerForm {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Checks run in order and stop at the first failure: required fields,
    /// then the `@` check, then length caps.
    pub fn validate(&self) -> Result<CreateCustomer, ValidationError> {
        if self.first_name.is_empty() || self.last_name.is_empty() || self.email.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        check_length("first_name", &self.first_name, MAX_NAME_CHARS)?;
        check_length("last_name", &self.last_name, MAX_NAME_CHARS)?;
        check_length("email", &self.email, MAX_EMAIL_CHARS)?;

        Ok(CreateCustomer {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        })
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}
