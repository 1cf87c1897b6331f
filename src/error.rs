//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A name, phone or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record already holds this phone number
    #[error("Phone number already exists: {0}")]
    DuplicatePhone(String),

    /// The record already holds the maximum number of phones
    #[error("Phone limit of {max} reached")]
    PhoneLimitExceeded { max: usize },

    /// The record's birthday was set before
    #[error("Birthday already set")]
    BirthdayAlreadySet,

    /// No contact is filed under the given name
    #[error("Contact not found: {0}")]
    NotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
