//! Logger facade: start, log, stop
//!
//! A [`Logger`] is a cloneable handle to one logging session. Starting a
//! session loads the configuration, derives the timestamp strategy, opens
//! the sinks, and launches the worker thread; `log` formats a message on
//! the calling thread and enqueues it; `stop` signals shutdown and blocks
//! until every pending message has reached the sinks.

use super::config::{self, ConfigStore};
use super::error::Result;
use super::metrics::LoggerMetrics;
use super::queue::MessageQueue;
use super::sink::Sink;
use super::timestamp::{self, FormatterCell, TimestampFormatter};
use super::worker::LogWorker;
use crate::sinks::{ConsoleSink, FileSink};
use chrono::Local;
use parking_lot::{Mutex, RwLock};
use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

thread_local! {
    static THREAD_TAG: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Cached per-thread tag: the thread's name when it has one, otherwise
/// its runtime id. Computed once per thread to avoid repeated allocations.
fn thread_tag() -> String {
    THREAD_TAG.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            let current = std::thread::current();
            *cache = Some(match current.name() {
                Some(name) => name.to_string(),
                None => format!("{:?}", current.id()),
            });
        }
        cache.as_ref().expect("tag cached above").clone()
    })
}

struct SessionInner {
    config: RwLock<ConfigStore>,
    formatter: FormatterCell,
    queue: Arc<MessageQueue>,
    metrics: Arc<LoggerMetrics>,
    worker: Mutex<Option<LogWorker>>,
    log_file: Option<PathBuf>,
}

impl Drop for SessionInner {
    fn drop(&mut self) {
        // Dropping the last handle behaves like stop(): drain, then join.
        self.queue.shutdown();
        if let Some(worker) = self.worker.get_mut().take() {
            worker.join();
        }
    }
}

/// Handle to a running logging session.
///
/// Cloning is cheap and every clone refers to the same session, so the
/// handle can be shared freely across producer threads.
///
/// # Example
///
/// ```no_run
/// use async_logger_system::{log, Logger};
///
/// let logger = Logger::start()?;
/// log!(logger, "The answer is {}\n", 42);
/// logger.stop();
/// # Ok::<(), async_logger_system::LoggerError>(())
/// ```
#[derive(Clone)]
pub struct Logger {
    inner: Arc<SessionInner>,
}

impl Logger {
    /// Start a session with the default config path
    /// ([`config::DEFAULT_CONFIG_FILE_NAME`] in the current directory).
    pub fn start() -> Result<Self> {
        Self::builder().build()
    }

    /// Start a session reading configuration from `path`
    pub fn start_with_config(path: impl Into<PathBuf>) -> Result<Self> {
        Self::builder().config_path(path).build()
    }

    /// Create a builder for a session
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Format and enqueue one message.
    ///
    /// The enqueued line is `<timestamp>[<thread>][<file>:<line>] <payload>`.
    /// The payload is rendered verbatim; include a trailing newline if
    /// line-separated sink output is wanted. Never blocks on I/O, only on
    /// the brief queue-lock hold. After [`stop`](Logger::stop) this is a
    /// no-op and the message is counted as dropped.
    #[track_caller]
    pub fn log(&self, message: impl fmt::Display) {
        let location = std::panic::Location::caller();
        self.log_at(location.file(), location.line(), format_args!("{}", message));
    }

    /// Format and enqueue one message with an explicit call site.
    ///
    /// This is the entry point used by the [`log!`](crate::log) macro;
    /// calling [`log`](Logger::log) is usually more convenient.
    pub fn log_at(&self, file: &str, line: u32, args: fmt::Arguments<'_>) {
        // Snapshot the strategy and format before touching the queue, so
        // the formatter lock and the queue lock are never held together.
        let timestamp = self.inner.formatter.snapshot().format(&Local::now());
        let message = format!("{}[{}][{}:{}] {}", timestamp, thread_tag(), file, line, args);

        if !self.inner.queue.push(message) {
            self.inner.metrics.record_dropped();
        }
    }

    /// Signal shutdown and block until the worker has flushed every
    /// pending message and released the file sink.
    ///
    /// Returns `true` if this call stopped the session, `false` if it was
    /// already stopped (a harmless no-op).
    pub fn stop(&self) -> bool {
        let Some(worker) = self.inner.worker.lock().take() else {
            return false;
        };
        self.inner.queue.shutdown();
        worker.join();
        true
    }

    /// Re-read configuration from `path` and swap the timestamp strategy.
    ///
    /// Producers formatting concurrently see either the old strategy or
    /// the new one, never a mixture. Unparseable input falls back exactly
    /// as at start.
    pub fn reload_config(&self, path: &Path) {
        let mut config = self.inner.config.write();
        config.load(path);
        self.inner
            .formatter
            .replace(TimestampFormatter::from_config(&config));
    }

    /// Current value for a config key, or `""` for an unrecognized key
    pub fn config_value(&self, key: &str) -> String {
        self.inner.config.read().get(key).to_string()
    }

    /// Delivery counters for this session
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.inner.metrics
    }

    /// Path of the session's log file, if one was opened at start
    pub fn log_file_path(&self) -> Option<&Path> {
        self.inner.log_file.as_deref()
    }
}

/// Builder for a logging session
///
/// # Example
///
/// ```no_run
/// use async_logger_system::Logger;
///
/// let logger = Logger::builder()
///     .config_path("custom_config.txt")
///     .log_dir("/var/tmp")
///     .build()?;
/// # Ok::<(), async_logger_system::LoggerError>(())
/// ```
pub struct LoggerBuilder {
    config_path: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    console: bool,
    extra_sinks: Vec<Box<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config_path: None,
            log_dir: None,
            console: true,
            extra_sinks: Vec::new(),
        }
    }

    /// Read configuration from `path` instead of the default location
    #[must_use = "builder methods return a new value"]
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Create the log file in `dir` instead of the current directory
    #[must_use = "builder methods return a new value"]
    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Enable or disable the console sink (enabled by default)
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Add an extra sink that receives every delivered message
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.extra_sinks.push(Box::new(sink));
        self
    }

    /// Start the session.
    ///
    /// Configuration problems fall back to defaults and never fail the
    /// build; the only fatal conditions are creating the log file when
    /// `write_to_log_file=ENABLE` and spawning the worker thread.
    pub fn build(self) -> Result<Logger> {
        let mut store = ConfigStore::new();
        let config_path = self
            .config_path
            .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE_NAME));
        store.load(&config_path);

        let formatter = TimestampFormatter::from_config(&store);

        let mut sinks: Vec<Box<dyn Sink>> = Vec::new();
        if self.console {
            sinks.push(Box::new(ConsoleSink::new()));
        }

        let mut log_file = None;
        if store.file_sink_enabled() {
            let stamp = timestamp::for_filename(&formatter.format(&Local::now()));
            let file_name = format!("logs_{}.txt", stamp);
            let path = match self.log_dir {
                Some(dir) => dir.join(file_name),
                None => PathBuf::from(file_name),
            };
            let sink = FileSink::create(&path)?;
            println!("Writing to log file: {}", path.display());
            log_file = Some(path);
            sinks.push(Box::new(sink));
        }
        sinks.extend(self.extra_sinks);

        let queue = Arc::new(MessageQueue::new());
        let metrics = Arc::new(LoggerMetrics::new());
        let worker = LogWorker::spawn(Arc::clone(&queue), sinks, Arc::clone(&metrics))?;

        Ok(Logger {
            inner: Arc::new(SessionInner {
                config: RwLock::new(store),
                formatter: FormatterCell::new(formatter),
                queue,
                metrics,
                worker: Mutex::new(Some(worker)),
                log_file,
            }),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
