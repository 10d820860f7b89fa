//! Timestamp formatting for log lines
//!
//! Converts an instant into a bracketed `[<date>|<time>]` prefix. The
//! rendering of each portion (date order, month style, hour style) is
//! selected from the configuration at start and may be swapped wholesale
//! at runtime through [`FormatterCell`] while producer threads keep
//! formatting on their own threads.

use super::config::{date_format, hour_format, month_format, ConfigStore};
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use parking_lot::RwLock;

/// 3-letter English month abbreviations, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Order of year, month, and day in the date portion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateOrder {
    /// `02-04-2025`
    #[default]
    MonthDayYear,
    /// `04-02-2025`
    DayMonthYear,
    /// `2025-02-04`
    YearMonthDay,
}

/// Month rendered as a zero-padded number or a 3-letter abbreviation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MonthStyle {
    /// `02`
    #[default]
    Number,
    /// `Feb`
    Name,
}

/// Time-of-day rendered on a 12-hour or 24-hour clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HourStyle {
    /// `08:30:00.000 PM`
    #[default]
    TwelveHour,
    /// `20:30:00.000`
    TwentyFourHour,
}

/// The active combination of date-order, month-style, and hour-style rules.
///
/// A plain value triple: the whole strategy is copied and replaced as one
/// unit, so readers can never observe a half-updated combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampFormatter {
    pub date_order: DateOrder,
    pub month_style: MonthStyle,
    pub hour_style: HourStyle,
}

impl TimestampFormatter {
    /// Derive the strategy from the current configuration values.
    ///
    /// The store never holds an unvalidated value, so each setting maps
    /// directly onto a variant; the defaults match the store's defaults.
    pub fn from_config(config: &ConfigStore) -> Self {
        let date_order = match config.get(date_format::KEY) {
            date_format::DD_MM_YYYY => DateOrder::DayMonthYear,
            date_format::YYYY_MM_DD => DateOrder::YearMonthDay,
            _ => DateOrder::MonthDayYear,
        };
        let month_style = match config.get(month_format::KEY) {
            month_format::MONTH_NAME => MonthStyle::Name,
            _ => MonthStyle::Number,
        };
        let hour_style = match config.get(hour_format::KEY) {
            hour_format::TWENTY_FOUR_HOUR => HourStyle::TwentyFourHour,
            _ => HourStyle::TwelveHour,
        };

        Self {
            date_order,
            month_style,
            hour_style,
        }
    }

    /// Format `instant` as a bracketed timestamp, e.g.
    /// `[2025-Feb-04|20:30:00.000]`.
    ///
    /// Milliseconds are the truncated sub-second remainder of the instant.
    pub fn format<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> String {
        let year = instant.year();
        let month = match self.month_style {
            MonthStyle::Number => format!("{:02}", instant.month()),
            MonthStyle::Name => month_abbrev(instant.month()).to_string(),
        };
        let day = instant.day();
        let millis = instant.timestamp_subsec_millis();

        let date = match self.date_order {
            DateOrder::MonthDayYear => format!("[{}-{:02}-{}|", month, day, year),
            DateOrder::DayMonthYear => format!("[{:02}-{}-{}|", day, month, year),
            DateOrder::YearMonthDay => format!("[{}-{}-{:02}|", year, month, day),
        };

        let time = match self.hour_style {
            HourStyle::TwentyFourHour => format!(
                "{:02}:{:02}:{:02}.{:03}]",
                instant.hour(),
                instant.minute(),
                instant.second(),
                millis
            ),
            HourStyle::TwelveHour => {
                let (hour, suffix) = to_twelve_hour(instant.hour());
                format!(
                    "{:02}:{:02}:{:02}.{:03} {}]",
                    hour,
                    instant.minute(),
                    instant.second(),
                    millis,
                    suffix
                )
            }
        };

        date + &time
    }
}

/// Map a 24-hour clock hour onto the 12-hour clock and its AM/PM suffix.
///
/// Noon and midnight both render as 12, not 00.
fn to_twelve_hour(hour: u32) -> (u32, &'static str) {
    match hour {
        0 => (12, "AM"),
        12 => (12, "PM"),
        h if h > 12 => (h - 12, "PM"),
        h => (h, "AM"),
    }
}

/// 3-letter abbreviation for a 1-based month number.
///
/// Month numbers outside 1-12 map to the sentinel `"N/A"`.
pub fn month_abbrev(month: u32) -> &'static str {
    MONTH_ABBREVIATIONS
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("N/A")
}

/// Rewrite a generated timestamp into a string safe for a file name:
/// square brackets and spaces are removed, `|` becomes `_`, `:` becomes
/// `-`. Pure string transform, no time-of-call dependency.
pub fn for_filename(timestamp: &str) -> String {
    timestamp
        .chars()
        .filter_map(|c| match c {
            '[' | ']' | ' ' => None,
            '|' => Some('_'),
            ':' => Some('-'),
            c => Some(c),
        })
        .collect()
}

/// Shared handle to the active formatter strategy.
///
/// Producers take a copy of the whole strategy under the read lock, so a
/// concurrent [`replace`](FormatterCell::replace) can never expose a
/// half-updated combination. This lock is independent of the message
/// queue's lock and the two are never held together.
#[derive(Debug)]
pub struct FormatterCell {
    active: RwLock<TimestampFormatter>,
}

impl FormatterCell {
    pub fn new(formatter: TimestampFormatter) -> Self {
        Self {
            active: RwLock::new(formatter),
        }
    }

    /// Copy of the currently active strategy
    pub fn snapshot(&self) -> TimestampFormatter {
        *self.active.read()
    }

    /// Swap in a new strategy wholesale
    pub fn replace(&self, formatter: TimestampFormatter) {
        *self.active.write() = formatter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{hour_format, month_format, write_to_log_file};
    use chrono::Utc;

    fn instant(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(i64::from(milli))
    }

    #[test]
    fn test_default_format_matches_default_config() {
        let from_config = TimestampFormatter::from_config(&ConfigStore::new());
        assert_eq!(from_config, TimestampFormatter::default());
    }

    #[test]
    fn test_year_month_day_with_month_name_24h() {
        let formatter = TimestampFormatter {
            date_order: DateOrder::YearMonthDay,
            month_style: MonthStyle::Name,
            hour_style: HourStyle::TwentyFourHour,
        };
        let result = formatter.format(&instant(2025, 2, 4, 20, 30, 0, 0));
        assert_eq!(result, "[2025-Feb-04|20:30:00.000]");
    }

    #[test]
    fn test_default_strategy_is_month_day_year_12h() {
        let formatter = TimestampFormatter::default();
        let result = formatter.format(&instant(2025, 2, 4, 20, 30, 0, 0));
        assert_eq!(result, "[02-04-2025|08:30:00.000 PM]");
    }

    #[test]
    fn test_day_month_year_order() {
        let formatter = TimestampFormatter {
            date_order: DateOrder::DayMonthYear,
            month_style: MonthStyle::Number,
            hour_style: HourStyle::TwentyFourHour,
        };
        let result = formatter.format(&instant(2025, 12, 31, 23, 59, 59, 999));
        assert_eq!(result, "[31-12-2025|23:59:59.999]");
    }

    #[test]
    fn test_midnight_renders_as_twelve_am() {
        let formatter = TimestampFormatter::default();
        let result = formatter.format(&instant(2025, 2, 4, 0, 15, 30, 7));
        assert_eq!(result, "[02-04-2025|12:15:30.007 AM]");
    }

    #[test]
    fn test_noon_renders_as_twelve_pm() {
        let formatter = TimestampFormatter::default();
        let result = formatter.format(&instant(2025, 2, 4, 12, 0, 0, 0));
        assert_eq!(result, "[02-04-2025|12:00:00.000 PM]");
    }

    #[test]
    fn test_morning_hour_keeps_padding() {
        let formatter = TimestampFormatter::default();
        let result = formatter.format(&instant(2025, 2, 4, 9, 5, 3, 42));
        assert_eq!(result, "[02-04-2025|09:05:03.042 AM]");
    }

    #[test]
    fn test_afternoon_hour_is_shifted_and_padded() {
        let formatter = TimestampFormatter::default();
        let result = formatter.format(&instant(2025, 2, 4, 13, 0, 0, 0));
        assert_eq!(result, "[02-04-2025|01:00:00.000 PM]");
    }

    #[test]
    fn test_milliseconds_are_truncated_not_rounded() {
        let formatter = TimestampFormatter {
            hour_style: HourStyle::TwentyFourHour,
            ..TimestampFormatter::default()
        };
        // 999,999 microseconds truncate to 999 milliseconds
        let with_micros = Utc
            .with_ymd_and_hms(2025, 2, 4, 10, 0, 0)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(999_999);
        let result = formatter.format(&with_micros);
        assert!(result.ends_with("10:00:00.999]"), "got {}", result);
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let formatter = TimestampFormatter::default();
        let at = instant(2031, 7, 9, 18, 45, 12, 345);
        assert_eq!(formatter.format(&at), formatter.format(&at));
    }

    #[test]
    fn test_month_abbrev() {
        assert_eq!(month_abbrev(1), "Jan");
        assert_eq!(month_abbrev(12), "Dec");
        assert_eq!(month_abbrev(0), "N/A");
        assert_eq!(month_abbrev(13), "N/A");
    }

    #[test]
    fn test_for_filename() {
        let converted = for_filename("[02-04-2025|08:30:00.000 PM]");
        assert_eq!(converted, "02-04-2025_08-30-00.000PM");
    }

    #[test]
    fn test_for_filename_is_pure() {
        assert_eq!(for_filename(""), "");
        assert_eq!(for_filename("no specials"), "nospecials");
    }

    #[test]
    fn test_from_config_reads_all_keys() {
        let mut config = ConfigStore::new();
        config.set("date_format", "YYYY_MM_DD");
        config.set(month_format::KEY, month_format::MONTH_NAME);
        config.set(hour_format::KEY, hour_format::TWENTY_FOUR_HOUR);
        // Unrelated keys do not affect the strategy
        config.set(write_to_log_file::KEY, write_to_log_file::DISABLE);

        let formatter = TimestampFormatter::from_config(&config);
        assert_eq!(formatter.date_order, DateOrder::YearMonthDay);
        assert_eq!(formatter.month_style, MonthStyle::Name);
        assert_eq!(formatter.hour_style, HourStyle::TwentyFourHour);
    }

    #[test]
    fn test_formatter_cell_replace_is_wholesale() {
        let cell = FormatterCell::new(TimestampFormatter::default());
        let next = TimestampFormatter {
            date_order: DateOrder::YearMonthDay,
            month_style: MonthStyle::Name,
            hour_style: HourStyle::TwentyFourHour,
        };
        cell.replace(next);
        assert_eq!(cell.snapshot(), next);
    }
}
