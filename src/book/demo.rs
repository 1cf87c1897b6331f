//! Sample contacts for trying the binary out.

use super::AddressBook;
use crate::error::ContactResult;
use crate::models::Record;

impl AddressBook {
    /// A book preloaded with two sample contacts, John and Jane.
    pub fn with_demo_contacts() -> ContactResult<Self> {
        let mut book = AddressBook::new();

        let mut john = Record::new("John")?;
        john.add_phone("1234567890")?;
        john.add_phone("5555555555")?;
        john.set_birthday("01.05.1990")?;
        book.add_record(john);

        let mut jane = Record::new("Jane")?;
        jane.add_phone("9876543210")?;
        book.add_record(jane);

        Ok(book)
    }
}
