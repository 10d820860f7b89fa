//! Basic logger usage
//!
//! Starts a session (reading `log_config.txt` from the current directory
//! if one exists), logs a few messages, and stops.
//!
//! Run with: cargo run --example basic_usage

use async_logger_system::{log, Logger, Result};

fn main() -> Result<()> {
    let logger = Logger::start()?;

    log!(logger, "Inside main\n");

    let number = 10;
    let name = "Ryan";
    log!(logger, "The number is {}. The name is {}\n", number, name);

    logger.stop();
    Ok(())
}
