//! Data models for address book entries.
//!
//! A [`Record`] aggregates the validated value objects from
//! [`domain`](crate::domain) and enforces the per-contact invariants.

pub mod record;

pub use record::Record;
