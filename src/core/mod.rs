//! Core logger types and traits

pub mod config;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod queue;
pub mod sink;
pub mod timestamp;
pub mod worker;

pub use config::{ConfigStore, DEFAULT_CONFIG_FILE_NAME};
pub use error::{LoggerError, Result};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use queue::MessageQueue;
pub use sink::Sink;
pub use timestamp::{
    for_filename, month_abbrev, DateOrder, FormatterCell, HourStyle, MonthStyle,
    TimestampFormatter,
};
pub use worker::LogWorker;
