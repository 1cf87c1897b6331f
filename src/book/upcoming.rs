//! Upcoming-birthday window scan.

use crate::domain::{Birthday, ContactName, BIRTHDAY_FORMAT};
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

/// Default length of the birthday window, in days after the reference date.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u64 = 7;

/// A contact whose birthday falls inside the scanned window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact the birthday belongs to
    pub name: ContactName,

    /// The date the birthday is next celebrated on
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(BIRTHDAY_FORMAT))
    }
}

/// Next occurrence of `birthday` on or after `reference`.
///
/// Uses the reference year, rolling forward one year if that date has
/// already passed.
pub fn next_occurrence(birthday: &Birthday, reference: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.occurrence_in(reference.year())?;
    if this_year >= reference {
        return Some(this_year);
    }
    birthday.occurrence_in(reference.year() + 1)
}

/// Whether `date` lies in the inclusive range `[reference, reference + window_days]`.
pub fn within_window(date: NaiveDate, reference: NaiveDate, window_days: u64) -> bool {
    let end = reference
        .checked_add_days(Days::new(window_days))
        .unwrap_or(NaiveDate::MAX);
    reference <= date && date <= end
}
