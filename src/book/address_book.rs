//! In-memory address book keyed by contact name.

use super::upcoming::{next_occurrence, within_window, UpcomingBirthday};
use crate::models::Record;
use chrono::NaiveDate;
use serde::Serialize;

/// Result of [`AddressBook::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No contact is filed under the name
    ContactNotFound,
    /// The whole contact was removed
    ContactDeleted,
    /// One phone was removed from the contact
    PhoneRemoved,
    /// The contact exists but does not hold the phone
    PhoneNotFound,
}

/// Name-keyed collection of contact records.
///
/// Iteration follows insertion order. Each record is filed under its own
/// name, so names are unique across the book. Lookups are linear scans,
/// which keeps ordering trivial for the handful of contacts a person keeps
/// at the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// File `record` under its name.
    ///
    /// An existing record with the same name is replaced wholesale and keeps
    /// its position in iteration order. Phones are not merged.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                tracing::debug!(contact = %record.name(), "Record replaced");
                self.records[index] = record;
            }
            None => {
                tracing::debug!(contact = %record.name(), "Record added");
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// First record, in iteration order, that holds `phone`.
    pub fn find_by_phone(&self, phone: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.find_phone(phone).is_some())
    }

    /// Delete a whole contact, or only one of its phones when `phone` is given.
    ///
    /// A missing contact or phone is reported through the outcome, never as
    /// an error.
    pub fn delete(&mut self, name: &str, phone: Option<&str>) -> DeleteOutcome {
        let Some(index) = self.position(name) else {
            return DeleteOutcome::ContactNotFound;
        };

        match phone {
            Some(phone) => {
                if self.records[index].remove_phone(phone) {
                    DeleteOutcome::PhoneRemoved
                } else {
                    DeleteOutcome::PhoneNotFound
                }
            }
            None => {
                self.records.remove(index);
                tracing::debug!(contact = %name, "Record deleted");
                DeleteOutcome::ContactDeleted
            }
        }
    }

    /// Contacts whose next birthday falls within `window_days` of `reference`.
    ///
    /// Both ends of the window are inclusive. Results keep the book's
    /// iteration order; they are not sorted by date.
    pub fn upcoming_birthdays(
        &self,
        reference: NaiveDate,
        window_days: u64,
    ) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = next_occurrence(birthday, reference)?;
                within_window(date, reference, window_days).then(|| UpcomingBirthday {
                    name: record.name().clone(),
                    date,
                })
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
