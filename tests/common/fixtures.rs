//! Test fixtures and sample data.
//!
//! Reusable records and books for the integration suites.

use contact_book::{AddressBook, Record};

/// Create a record with the given phones and optional birthday.
///
/// # Panics
/// Panics if any value is invalid; fixtures are expected to be well-formed.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("valid fixture name");
    for phone in phones {
        record.add_phone(phone).expect("valid fixture phone");
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).expect("valid fixture birthday");
    }
    record
}

/// A book with three contacts whose birthdays straddle early June.
///
/// Insertion order: Carol, Ann, Bob, Dave.
#[allow(dead_code)]
pub fn june_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Carol", &["3333333333"], Some("14.06.1975")));
    book.add_record(sample_record("Ann", &["1111111111"], Some("10.06.1990")));
    book.add_record(sample_record("Bob", &["2222222222", "2222222223"], None));
    book.add_record(sample_record("Dave", &[], Some("01.06.1980")));
    book
}
