//! Executes parsed commands against an address book.
//!
//! This is the boundary between the line-oriented front end and the core
//! model. Every core error is turned into a fixed user-facing message here.

use super::clock::{Clock, SystemClock};
use super::parser::{Command, ParseError};
use crate::book::{AddressBook, DeleteOutcome, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use crate::domain::ValidationError;
use crate::error::{ContactError, ContactResult};
use crate::models::Record;

/// What the front end should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading
    Message(String),
    /// Print the text and stop
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

/// Owns the address book and runs commands against it.
pub struct CommandHandler {
    book: AddressBook,
    clock: Box<dyn Clock>,
    birthday_window_days: u64,
}

impl CommandHandler {
    /// Create a handler over `book` using the system clock and a 7-day window.
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            clock: Box::new(SystemClock),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_birthday_window(mut self, days: u64) -> Self {
        self.birthday_window_days = days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse `line` and execute it.
    ///
    /// Returns `None` for blank lines.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        match Command::parse(line) {
            Ok(command) => Some(self.execute(command)),
            Err(ParseError::Empty) => None,
            Err(e) => {
                tracing::warn!(input = %line.trim(), error = ?e, "Rejected command line");
                Some(Reply::Message(e.to_string()))
            }
        }
    }

    /// Like [`handle_line`](Self::handle_line) for raw input bytes.
    ///
    /// Input that is not valid UTF-8 is rejected without touching the book.
    pub fn handle_bytes(&mut self, line: &[u8]) -> Option<Reply> {
        match std::str::from_utf8(line) {
            Ok(line) => self.handle_line(line),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected non UTF-8 command line");
                Some(Reply::Message(ParseError::InvalidEncoding.to_string()))
            }
        }
    }

    /// Run a single command and render its reply.
    pub fn execute(&mut self, command: Command) -> Reply {
        tracing::debug!(?command, "Executing command");

        let result = match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Exit => return Reply::Exit("Good bye!".to_string()),
            Command::Add { name, phone } => self.add_contact(&name, &phone),
            Command::AddBirthday { name, birthday } => self.add_birthday(&name, &birthday),
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => self.change_phone(&name, &old_phone, &new_phone),
            Command::Phone { name } => self.show_phones(&name),
            Command::All => Ok(self.show_all()),
            Command::Delete { name } => Ok(self.delete_contact(&name)),
            Command::RemovePhone { name, phone } => Ok(self.remove_phone(&name, &phone)),
            Command::FindPhone { phone } => Ok(self.find_phone(&phone)),
            Command::ShowBirthday { name } => self.show_birthday(&name),
            Command::Birthdays => Ok(self.upcoming_birthdays()),
        };

        match result {
            Ok(text) => Reply::Message(text),
            Err(e) => {
                tracing::warn!(error = %e, "Command failed");
                Reply::Message(user_message(&e))
            }
        }
    }

    fn add_contact(&mut self, name: &str, phone: &str) -> ContactResult<String> {
        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            return Ok(format!("Contact {} updated.", name));
        }

        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        self.book.add_record(record);
        Ok(format!("Contact {} added.", name))
    }

    fn add_birthday(&mut self, name: &str, birthday: &str) -> ContactResult<String> {
        self.record_mut(name)?.set_birthday(birthday)?;
        Ok(format!("Birthday for {} added.", name))
    }

    fn change_phone(&mut self, name: &str, old: &str, new: &str) -> ContactResult<String> {
        self.record_mut(name)?.edit_phone(old, new)?;
        Ok(format!(
            "Phone number for {} updated from {} to {}.",
            name, old, new
        ))
    }

    fn show_phones(&self, name: &str) -> ContactResult<String> {
        let record = self.record(name)?;
        if record.phones().is_empty() {
            return Ok(format!("No phone numbers for {}.", name));
        }
        Ok(record
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", "))
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts found.".to_string();
        }
        self.book
            .iter()
            .map(Record::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn delete_contact(&mut self, name: &str) -> String {
        match self.book.delete(name, None) {
            DeleteOutcome::ContactNotFound => format!("Contact {} not found.", name),
            DeleteOutcome::ContactDeleted => format!("Contact {} deleted.", name),
            // Only reported when a phone is passed to `delete`
            outcome @ (DeleteOutcome::PhoneRemoved | DeleteOutcome::PhoneNotFound) => {
                unreachable!("whole-contact delete returned {:?}", outcome)
            }
        }
    }

    fn remove_phone(&mut self, name: &str, phone: &str) -> String {
        match self.book.delete(name, Some(phone)) {
            DeleteOutcome::ContactNotFound => format!("Contact {} not found.", name),
            DeleteOutcome::PhoneNotFound => format!("Phone {} not found for {}.", phone, name),
            DeleteOutcome::PhoneRemoved => format!("Phone {} removed from {}.", phone, name),
            // Only reported when no phone is passed to `delete`
            DeleteOutcome::ContactDeleted => {
                unreachable!("phone delete removed the whole contact {}", name)
            }
        }
    }

    fn find_phone(&self, phone: &str) -> String {
        match self.book.find_by_phone(phone) {
            Some(record) => format!("Phone {} belongs to {}.", phone, record.name()),
            None => "Phone not found.".to_string(),
        }
    }

    fn show_birthday(&self, name: &str) -> ContactResult<String> {
        match self.record(name)?.birthday() {
            Some(birthday) => Ok(format!("Birthday of {}: {}", name, birthday)),
            None => Ok(format!("No birthday set for {}.", name)),
        }
    }

    fn upcoming_birthdays(&self) -> String {
        let today = self.clock.today();
        let upcoming = self
            .book
            .upcoming_birthdays(today, self.birthday_window_days);

        if upcoming.is_empty() {
            return format!(
                "No upcoming birthdays in the next {} days.",
                self.birthday_window_days
            );
        }

        upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn record(&self, name: &str) -> ContactResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> ContactResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()))
    }
}

/// The fixed message shown to the user for each error kind.
pub fn user_message(error: &ContactError) -> String {
    match error {
        ContactError::Validation(ValidationError::InvalidName) => "Name is required!".to_string(),
        ContactError::Validation(ValidationError::InvalidPhone(_)) => {
            "Phone number must be 10 digits!".to_string()
        }
        ContactError::Validation(ValidationError::InvalidBirthday(_)) => {
            "Invalid date format. Use DD.MM.YYYY".to_string()
        }
        ContactError::DuplicatePhone(_) => "Phone number already exists.".to_string(),
        ContactError::PhoneLimitExceeded { max } => {
            format!("Cannot add more than {} phone numbers.", max)
        }
        ContactError::BirthdayAlreadySet => "Birthday already exists.".to_string(),
        ContactError::NotFound(name) => format!("Contact {} not found.", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::FixedClock;
    use chrono::NaiveDate;

    fn handler() -> CommandHandler {
        let today = NaiveDate::from_ymd_opt(2030, 6, 8).unwrap();
        CommandHandler::new(AddressBook::new()).with_clock(FixedClock(today))
    }

    fn run(handler: &mut CommandHandler, line: &str) -> String {
        handler
            .handle_line(line)
            .map(|reply| reply.text().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_user_messages_cover_every_error() {
        let cases = [
            (ContactError::from(ValidationError::InvalidName), "Name is required!"),
            (
                ContactError::from(ValidationError::InvalidPhone("1".to_string())),
                "Phone number must be 10 digits!",
            ),
            (
                ContactError::from(ValidationError::InvalidBirthday("x".to_string())),
                "Invalid date format. Use DD.MM.YYYY",
            ),
            (
                ContactError::DuplicatePhone("1234567890".to_string()),
                "Phone number already exists.",
            ),
            (
                ContactError::PhoneLimitExceeded { max: 3 },
                "Cannot add more than 3 phone numbers.",
            ),
            (ContactError::BirthdayAlreadySet, "Birthday already exists."),
            (ContactError::NotFound("Bob".to_string()), "Contact Bob not found."),
        ];

        for (error, expected) in cases {
            assert_eq!(user_message(&error), expected);
        }
    }

    #[test]
    fn test_blank_line_has_no_reply() {
        let mut handler = handler();
        assert_eq!(handler.handle_line("   "), None);
    }

    #[test]
    fn test_add_creates_then_updates() {
        let mut handler = handler();
        assert_eq!(run(&mut handler, "add John 1234567890"), "Contact John added.");
        assert_eq!(run(&mut handler, "add John 5555555555"), "Contact John updated.");
        assert_eq!(run(&mut handler, "phone John"), "1234567890, 5555555555");
    }

    #[test]
    fn test_add_invalid_phone_leaves_no_contact() {
        let mut handler = handler();
        assert_eq!(
            run(&mut handler, "add John 123"),
            "Phone number must be 10 digits!"
        );
        assert!(handler.book().is_empty());
    }

    #[test]
    fn test_exit_reply() {
        let mut handler = handler();
        let reply = handler.handle_line("close").unwrap();
        assert!(reply.is_exit());
        assert_eq!(reply.text(), "Good bye!");
    }

    #[test]
    fn test_delete_and_remove_phone_messages() {
        let mut handler = handler();
        run(&mut handler, "add John 1234567890");
        run(&mut handler, "add John 5555555555");

        assert_eq!(
            run(&mut handler, "remove_phone John 1234567890"),
            "Phone 1234567890 removed from John."
        );
        assert_eq!(
            run(&mut handler, "remove_phone John 1234567890"),
            "Phone 1234567890 not found for John."
        );
        assert_eq!(
            run(&mut handler, "remove_phone Jane 1234567890"),
            "Contact Jane not found."
        );
        assert_eq!(run(&mut handler, "delete John"), "Contact John deleted.");
        assert_eq!(run(&mut handler, "delete John"), "Contact John not found.");
        assert!(handler.book().is_empty());
    }

    #[test]
    fn test_non_utf8_bytes_are_an_invalid_command() {
        let mut handler = handler();
        let reply = handler.handle_bytes(b"add \xff\xfe 1234567890").unwrap();
        assert_eq!(reply.text(), "Invalid command.");
        assert!(!reply.is_exit());
        assert!(handler.book().is_empty());

        let reply = handler.handle_bytes(b"add Ann 1234567890").unwrap();
        assert_eq!(reply.text(), "Contact Ann added.");
    }

    #[test]
    fn test_birthdays_uses_clock_and_window() {
        for (window, expected) in [
            (1, "No upcoming birthdays in the next 1 days."),
            (7, "Ann: 10.06.2030"),
        ] {
            let mut handler = handler().with_birthday_window(window);
            run(&mut handler, "add Ann 1234567890");
            run(&mut handler, "add-birthday Ann 10.06.1990");
            assert_eq!(run(&mut handler, "birthdays"), expected);
        }
    }
}
