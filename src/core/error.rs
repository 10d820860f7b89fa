//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The log file could not be created at startup.
    ///
    /// This is the one fatal startup condition: when `write_to_log_file`
    /// is enabled and the file cannot be opened, the logger does not start.
    #[error("failed to open log file '{path}': {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The worker thread could not be spawned.
    #[error("failed to spawn log worker thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// Create a sink-open error for the given path
    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }
}
