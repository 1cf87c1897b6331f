//! The address book and its query operations.

mod address_book;
mod demo;
pub mod upcoming;

pub use address_book::{AddressBook, DeleteOutcome};
pub use upcoming::{UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
