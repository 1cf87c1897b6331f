//! Command dispatch for the line-oriented front end.
//!
//! Lines are parsed into [`Command`]s, executed by a [`CommandHandler`] that
//! owns the address book, and answered with a [`Reply`].

mod clock;
mod handler;
mod parser;

pub use clock::{Clock, FixedClock, SystemClock};
pub use handler::{user_message, CommandHandler, Reply};
pub use parser::{Command, ParseError};
