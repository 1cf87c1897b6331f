//! Parsing of input lines into commands.

use std::str::FromStr;
use thiserror::Error;

/// A command entered at the prompt, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
    },
    AddBirthday {
        name: String,
        birthday: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    All,
    Delete {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    FindPhone {
        phone: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays,
    Exit,
}

/// Reasons a line could not be turned into a [`Command`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line held only whitespace
    #[error("Empty input")]
    Empty,

    /// The line is not valid UTF-8
    #[error("Invalid command.")]
    InvalidEncoding,

    /// The command word is not recognized
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// The command got the wrong number of arguments
    #[error("{0}")]
    Usage(&'static str),
}

const ADD_USAGE: &str = "Provide a name and a phone number.";
const ADD_BIRTHDAY_USAGE: &str = "Provide a name and a birthday (DD.MM.YYYY).";
const CHANGE_USAGE: &str = "Please provide the name, OLD phone number, and a NEW phone number";
const NAME_USAGE: &str = "Enter a name.";
const PHONE_USAGE: &str = "Enter a phone.";

impl Command {
    /// Split a line on whitespace and build the command it names.
    ///
    /// The command word is case-insensitive; arguments keep their case.
    /// Commands that take arguments require exactly that many. Commands
    /// without arguments ignore anything after the command word.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(ParseError::Empty)?.to_lowercase();
        let args: Vec<String> = words.map(str::to_string).collect();

        match keyword.as_str() {
            "hello" => Ok(Command::Hello),
            "all" => Ok(Command::All),
            "birthdays" | "upcoming_birthdays" => Ok(Command::Birthdays),
            "exit" | "close" => Ok(Command::Exit),
            "add" => {
                let [name, phone] = take_args(args, ADD_USAGE)?;
                Ok(Command::Add { name, phone })
            }
            "add-birthday" | "add_birthday" => {
                let [name, birthday] = take_args(args, ADD_BIRTHDAY_USAGE)?;
                Ok(Command::AddBirthday { name, birthday })
            }
            "change" => {
                let [name, old_phone, new_phone] = take_args(args, CHANGE_USAGE)?;
                Ok(Command::Change {
                    name,
                    old_phone,
                    new_phone,
                })
            }
            "phone" => {
                let [name] = take_args(args, NAME_USAGE)?;
                Ok(Command::Phone { name })
            }
            "delete" => {
                let [name] = take_args(args, NAME_USAGE)?;
                Ok(Command::Delete { name })
            }
            "remove_phone" | "remove-phone" => {
                let [name, phone] = take_args(args, ADD_USAGE)?;
                Ok(Command::RemovePhone { name, phone })
            }
            "find_phone" | "find-phone" => {
                let [phone] = take_args(args, PHONE_USAGE)?;
                Ok(Command::FindPhone { phone })
            }
            "show-birthday" | "show_birthday" => {
                let [name] = take_args(args, NAME_USAGE)?;
                Ok(Command::ShowBirthday { name })
            }
            _ => Err(ParseError::UnknownCommand(keyword)),
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn take_args<const N: usize>(
    args: Vec<String>,
    usage: &'static str,
) -> Result<[String; N], ParseError> {
    args.try_into().map_err(|_| ParseError::Usage(usage))
}
