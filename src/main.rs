//! Contact Book - Main entry point
//!
//! Runs the interactive assistant over stdin/stdout. Logs go to stderr so the
//! command transcript stays clean.

use anyhow::Result;
use contact_book::repl::run_repl;
use contact_book::{AddressBook, CommandHandler, Config};
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging("error");
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    init_logging(&config.log_level);
    info!(
        "Configuration loaded (birthday window: {} days)",
        config.birthday_window_days
    );

    let book = if config.seed_demo_contacts {
        let book = AddressBook::with_demo_contacts()?;
        info!("Seeded {} demo contacts", book.len());
        book
    } else {
        AddressBook::new()
    };

    let mut handler = CommandHandler::new(book).with_birthday_window(config.birthday_window_days);

    run_repl(&mut handler, BufReader::new(stdin()), stdout()).await?;

    info!(
        "Contact book closed with {} contacts",
        handler.book().len()
    );
    Ok(())
}

/// Initialize logging (stderr only to avoid polluting the transcript).
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
