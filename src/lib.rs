//! # Async Logger System
//!
//! An in-process asynchronous logging core: any number of producer threads
//! format complete log lines and hand them to an unbounded FIFO; one
//! dedicated worker thread drains the queue in order and writes each line
//! to the console and/or a log file.
//!
//! ## Features
//!
//! - **Never blocks on I/O**: producers only hold the queue lock for the
//!   duration of an append
//! - **Lossless shutdown**: `stop` drains the queue to completion before
//!   returning
//! - **Configurable timestamps**: date order, month style, and 12/24-hour
//!   clock selected from a plain-text config file
//! - **Thread safe**: global FIFO delivery order across all producers
//!
//! ## Usage
//!
//! ```no_run
//! use async_logger_system::{log, Logger};
//!
//! let logger = Logger::start()?;
//!
//! log!(logger, "Inside main\n");
//!
//! let number = 10;
//! let name = "Ryan";
//! log!(logger, "The number is {}. The name is {}\n", number, name);
//!
//! logger.stop();
//! # Ok::<(), async_logger_system::LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ConfigStore, DateOrder, FormatterCell, HourStyle, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, MessageQueue, MonthStyle, Result, Sink, TimestampFormatter,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink};
}

pub use core::{
    for_filename, month_abbrev, ConfigStore, DateOrder, FormatterCell, HourStyle, LogWorker,
    Logger, LoggerBuilder, LoggerError, LoggerMetrics, MessageQueue, MonthStyle, Result, Sink,
    TimestampFormatter, DEFAULT_CONFIG_FILE_NAME,
};
pub use sinks::{ConsoleSink, FileSink, MemorySink};
