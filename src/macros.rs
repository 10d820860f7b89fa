//! Logging macro for ergonomic message formatting
//!
//! Captures the call site (`file!()`/`line!()`) and formats the payload
//! with `format_args!`, so the cost of building the string is paid on the
//! producer thread and the worker only moves finished lines.

/// Format and enqueue a log message.
///
/// The payload is written verbatim; include a trailing newline if
/// line-separated sink output is wanted.
///
/// # Examples
///
/// ```no_run
/// use async_logger_system::{log, Logger};
///
/// let logger = Logger::start()?;
/// log!(logger, "Server started\n");
///
/// let port = 8080;
/// log!(logger, "Listening on port {}\n", port);
/// logger.stop();
/// # Ok::<(), async_logger_system::LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_at(file!(), line!(), format_args!($($arg)+))
    };
}
