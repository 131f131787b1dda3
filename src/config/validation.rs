//! Configuration validation.
//!
//! # Responsibilities
//! - Check the env prefix forms a portable variable name
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: LoggerConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::LoggerConfig;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("env_prefix must not be empty")]
    EmptyPrefix,

    #[error("env_prefix {prefix:?} contains invalid character {found:?}")]
    InvalidPrefixChar { prefix: String, found: char },

    #[error("env_prefix {0:?} must not start with a digit")]
    PrefixStartsWithDigit(String),
}

/// Validate a deserialized config.
pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let prefix = &config.env_prefix;

    if prefix.is_empty() {
        errors.push(ValidationError::EmptyPrefix);
    }

    if prefix.starts_with(|c: char| c.is_ascii_digit()) {
        errors.push(ValidationError::PrefixStartsWithDigit(prefix.clone()));
    }

    if let Some(found) = prefix
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        errors.push(ValidationError::InvalidPrefixChar {
            prefix: prefix.clone(),
            found,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
