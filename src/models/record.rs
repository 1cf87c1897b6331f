//! Contact record: one person's name, phone numbers and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at creation. Phones are kept in insertion order, are
/// unique within the record, and never exceed [`Record::MAX_PHONES`]. The
/// birthday can be set once and is never replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordData")]
pub struct Record {
    name: ContactName,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

/// Unchecked wire shape of a record, validated through the record API.
#[derive(Debug, Deserialize)]
struct RecordData {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default)]
    birthday: Option<String>,
}

impl TryFrom<RecordData> for Record {
    type Error = ContactError;

    fn try_from(data: RecordData) -> Result<Self, Self::Error> {
        let mut record = Record::new(data.name)?;
        for phone in &data.phones {
            record.add_phone(phone)?;
        }
        if let Some(birthday) = data.birthday {
            record.set_birthday(&birthday)?;
        }
        Ok(record)
    }
}

impl Record {
    /// Maximum number of phone numbers a record may hold.
    pub const MAX_PHONES: usize = 3;

    /// Create an empty record: a name, no phones, no birthday.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty.
    pub fn new(name: impl Into<String>) -> ContactResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number.
    ///
    /// Checks run in order: format, duplicate, limit.
    ///
    /// # Errors
    ///
    /// - `ContactError::Validation` if the number is not ten digits
    /// - `ContactError::DuplicatePhone` if the record already holds it
    /// - `ContactError::PhoneLimitExceeded` if the record is full
    pub fn add_phone(&mut self, number: &str) -> ContactResult<()> {
        let phone = PhoneNumber::new(number)?;

        if self.phones.contains(&phone) {
            return Err(ContactError::DuplicatePhone(phone.into_inner()));
        }

        if self.phones.len() >= Self::MAX_PHONES {
            return Err(ContactError::PhoneLimitExceeded {
                max: Self::MAX_PHONES,
            });
        }

        tracing::debug!(contact = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the phone equal to `number`, if present.
    ///
    /// Returns whether a phone was removed.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        self.take_phone(number).is_some()
    }

    /// Replace `old` with `new`.
    ///
    /// Removing `old` is a no-op when the record does not hold it, so this can
    /// add `new` to a record that never had `old`. If `new` is rejected the
    /// removed phone is put back in its original position.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let removed = self.take_phone(old);

        if let Err(e) = self.add_phone(new) {
            if let Some((index, phone)) = removed {
                self.phones.insert(index, phone);
            }
            return Err(e);
        }

        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| **p == *number)
    }

    /// Set the birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// - `ContactError::BirthdayAlreadySet` if a birthday is already stored
    /// - `ContactError::Validation` if the text is not a real date
    pub fn set_birthday(&mut self, text: &str) -> ContactResult<()> {
        if self.birthday.is_some() {
            return Err(ContactError::BirthdayAlreadySet);
        }

        let birthday = Birthday::parse(text)?;
        tracing::debug!(contact = %self.name, birthday = %birthday, "Birthday set");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Human-readable one-line summary of the record.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn take_phone(&mut self, number: &str) -> Option<(usize, PhoneNumber)> {
        let index = self.phones.iter().position(|p| *p == *number)?;
        let phone = self.phones.remove(index);
        tracing::debug!(contact = %self.name, phone = %phone, "Phone removed");
        Some((index, phone))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;

        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }

        Ok(())
    }
}
