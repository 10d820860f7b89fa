//! Validated key/value configuration for the logger
//!
//! The store recognizes a closed set of keys, each with a closed set of
//! legal values. `set` either fully succeeds or does nothing, so the store
//! never holds an unvalidated value. Configuration problems are never
//! fatal: a missing, empty, or malformed config file simply leaves the
//! defaults in place, with a diagnostic line on stderr.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// File name probed in the current directory when no path is given
pub const DEFAULT_CONFIG_FILE_NAME: &str = "log_config.txt";

/// Lines containing this character are treated as comments
const COMMENT_MARKER: char = '*';

/// Order of year/month/day in the timestamp's date portion
pub mod date_format {
    pub const KEY: &str = "date_format";
    pub const MM_DD_YYYY: &str = "MM_DD_YYYY";
    pub const DD_MM_YYYY: &str = "DD_MM_YYYY";
    pub const YYYY_MM_DD: &str = "YYYY_MM_DD";
}

/// Month rendered as a zero-padded number or a 3-letter name
pub mod month_format {
    pub const KEY: &str = "month_format";
    pub const MONTH_NUM: &str = "MONTH_NUM";
    pub const MONTH_NAME: &str = "MONTH_NAME";
}

/// 12-hour clock with AM/PM suffix, or 24-hour clock
pub mod hour_format {
    pub const KEY: &str = "hour_format";
    pub const TWELVE_HOUR: &str = "12";
    pub const TWENTY_FOUR_HOUR: &str = "24";
}

/// Whether a log file is opened at start
pub mod write_to_log_file {
    pub const KEY: &str = "write_to_log_file";
    pub const ENABLE: &str = "ENABLE";
    pub const DISABLE: &str = "DISABLE";
}

/// Map a user-supplied key onto its canonical static string, if recognized
fn canonical_key(key: &str) -> Option<&'static str> {
    match key {
        date_format::KEY => Some(date_format::KEY),
        month_format::KEY => Some(month_format::KEY),
        hour_format::KEY => Some(hour_format::KEY),
        write_to_log_file::KEY => Some(write_to_log_file::KEY),
        _ => None,
    }
}

/// Legal values for a recognized key
fn valid_values(key: &str) -> Option<&'static [&'static str]> {
    match key {
        date_format::KEY => Some(&[
            date_format::MM_DD_YYYY,
            date_format::DD_MM_YYYY,
            date_format::YYYY_MM_DD,
        ]),
        month_format::KEY => Some(&[month_format::MONTH_NUM, month_format::MONTH_NAME]),
        hour_format::KEY => Some(&[hour_format::TWELVE_HOUR, hour_format::TWENTY_FOUR_HOUR]),
        write_to_log_file::KEY => Some(&[write_to_log_file::ENABLE, write_to_log_file::DISABLE]),
        _ => None,
    }
}

/// Validated key→value store with defaults for every recognized key
#[derive(Debug, Clone)]
pub struct ConfigStore {
    values: HashMap<&'static str, String>,
}

impl ConfigStore {
    /// Create a store populated with the default settings
    pub fn new() -> Self {
        let mut values = HashMap::new();
        values.insert(date_format::KEY, date_format::MM_DD_YYYY.to_string());
        values.insert(month_format::KEY, month_format::MONTH_NUM.to_string());
        values.insert(hour_format::KEY, hour_format::TWELVE_HOUR.to_string());
        values.insert(
            write_to_log_file::KEY,
            write_to_log_file::ENABLE.to_string(),
        );
        Self { values }
    }

    /// Whether `key` belongs to the recognized key set
    pub fn is_key_valid(&self, key: &str) -> bool {
        canonical_key(key).is_some()
    }

    /// Whether `key` is recognized and `value` is legal for it
    ///
    /// An empty value is never valid.
    pub fn is_key_and_value_valid(&self, key: &str, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        match valid_values(key) {
            Some(values) => values.contains(&value),
            None => false,
        }
    }

    /// Get the current value for `key`, or `""` for an unrecognized key
    pub fn get(&self, key: &str) -> &str {
        canonical_key(key)
            .and_then(|key| self.values.get(key))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Update `key` to `value` if both are valid; otherwise a no-op
    pub fn set(&mut self, key: &str, value: &str) {
        if !self.is_key_and_value_valid(key, value) {
            return;
        }
        if let Some(key) = canonical_key(key) {
            self.values.insert(key, value.to_string());
        }
    }

    /// Whether the file sink should be opened at start
    pub fn file_sink_enabled(&self) -> bool {
        self.get(write_to_log_file::KEY) == write_to_log_file::ENABLE
    }

    /// Read settings from a line-oriented config file at `path`.
    ///
    /// Lines containing [`COMMENT_MARKER`] or lacking a `=`/`:` separator
    /// are skipped; the first separator splits key from value and both are
    /// validated before being applied. A missing or unreadable file is not
    /// an error: the store keeps its current values.
    pub fn load(&mut self, path: &Path) {
        if !path.exists() {
            eprintln!(
                "[LOGGER CONFIG] no config file at {}; using defaults",
                path.display()
            );
            return;
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!(
                    "[LOGGER CONFIG] could not read config file {}: {}; using defaults",
                    path.display(),
                    e
                );
                return;
            }
        };

        eprintln!("[LOGGER CONFIG] reading config file {}", path.display());
        for line in contents.lines() {
            self.apply_line(line);
        }
    }

    /// Apply a single `key=value` (or `key: value`) line, skipping
    /// comments and lines without a separator.
    fn apply_line(&mut self, line: &str) {
        if line.contains(COMMENT_MARKER) {
            return;
        }
        let Some(separator) = line.find(['=', ':']) else {
            return;
        };

        let key = line[..separator].trim();
        let value = line[separator + 1..].trim();

        if !self.is_key_valid(key) {
            eprintln!("[LOGGER CONFIG] key \"{}\" is not valid; not updating", key);
            return;
        }
        if !self.is_key_and_value_valid(key, value) {
            eprintln!(
                "[LOGGER CONFIG] value \"{}\" for key \"{}\" is not valid; not updating",
                value, key
            );
            return;
        }

        eprintln!("[LOGGER CONFIG] setting \"{}\" = \"{}\"", key, value);
        self.set(key, value);
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
