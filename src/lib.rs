//! Contact Book - an in-memory address book driven by line-oriented commands.
//!
//! Stores names, phone numbers and birthdays, validates every field on the
//! way in, and answers lookups, listings and upcoming-birthday scans.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record and its invariants
//! - **book**: The address book and the upcoming-birthday window scan
//! - **commands**: Line parsing, command execution and error messages
//! - **repl**: The interactive read loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

// Re-export commonly used types
pub use book::{AddressBook, DeleteOutcome, UpcomingBirthday};
pub use commands::{Command, CommandHandler, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, ContactError, ContactResult};
pub use models::Record;
