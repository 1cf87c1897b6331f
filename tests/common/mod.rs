//! Shared helpers for integration tests.
//!
//! Provides a handler pinned to a fixed date and a helper that runs a
//! sequence of command lines and collects the replies.

use chrono::NaiveDate;
use contact_book::commands::FixedClock;
use contact_book::{AddressBook, CommandHandler};

pub mod fixtures;

/// Build a date, panicking on invalid input (tests only).
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// A handler over `book` whose clock is stuck at `today`.
#[allow(dead_code)]
pub fn handler_at(book: AddressBook, today: NaiveDate) -> CommandHandler {
    CommandHandler::new(book).with_clock(FixedClock(today))
}

/// Run each line through the handler and collect the replies, skipping blank lines.
#[allow(dead_code)]
pub fn run_lines(handler: &mut CommandHandler, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| handler.handle_line(line))
        .map(|reply| reply.text().to_string())
        .collect()
}
