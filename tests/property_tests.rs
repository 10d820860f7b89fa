//! Property-based tests for the formatting pipeline and config store

use async_logger_system::prelude::*;
use async_logger_system::{for_filename, month_abbrev};
use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

fn formatter_strategy() -> impl Strategy<Value = TimestampFormatter> {
    (
        prop_oneof![
            Just(DateOrder::MonthDayYear),
            Just(DateOrder::DayMonthYear),
            Just(DateOrder::YearMonthDay),
        ],
        prop_oneof![Just(MonthStyle::Number), Just(MonthStyle::Name)],
        prop_oneof![Just(HourStyle::TwelveHour), Just(HourStyle::TwentyFourHour)],
    )
        .prop_map(|(date_order, month_style, hour_style)| TimestampFormatter {
            date_order,
            month_style,
            hour_style,
        })
}

fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    // 1970-01-01 .. 2100-01-01, millisecond precision
    (0i64..4_102_444_800i64, 0u32..1000u32).prop_map(|(secs, millis)| {
        Utc.timestamp_opt(secs, millis * 1_000_000)
            .single()
            .expect("valid instant")
    })
}

// ============================================================================
// Timestamp formatting
// ============================================================================

proptest! {
    /// The filename form of any generated timestamp is free of characters
    /// that are unsafe or awkward in file names
    #[test]
    fn test_filename_has_no_forbidden_characters(
        formatter in formatter_strategy(),
        at in instant_strategy(),
    ) {
        let name = for_filename(&formatter.format(&at));
        for forbidden in ['[', ']', ':', ' ', '|'] {
            prop_assert!(
                !name.contains(forbidden),
                "{:?} found in {}", forbidden, name
            );
        }
    }

    /// Formatting the same instant with the same strategy twice yields
    /// byte-identical strings
    #[test]
    fn test_formatting_is_idempotent(
        formatter in formatter_strategy(),
        at in instant_strategy(),
    ) {
        prop_assert_eq!(formatter.format(&at), formatter.format(&at));
    }

    /// Every timestamp is bracketed, has exactly one date/time divider,
    /// and a fixed-width time portion
    #[test]
    fn test_timestamp_shape(
        formatter in formatter_strategy(),
        at in instant_strategy(),
    ) {
        let timestamp = formatter.format(&at);
        prop_assert!(timestamp.starts_with('['));
        prop_assert!(timestamp.ends_with(']'));
        prop_assert_eq!(timestamp.matches('|').count(), 1);

        let time = timestamp.split('|').nth(1).expect("time portion");
        match formatter.hour_style {
            HourStyle::TwentyFourHour => {
                prop_assert_eq!(time.len(), "HH:MM:SS.mmm]".len());
            }
            HourStyle::TwelveHour => {
                prop_assert_eq!(time.len(), "HH:MM:SS.mmm AM]".len());
                prop_assert!(time.ends_with(" AM]") || time.ends_with(" PM]"));
            }
        }
        prop_assert_eq!(&time[2..3], ":");
        prop_assert_eq!(&time[5..6], ":");
        prop_assert_eq!(&time[8..9], ".");
    }

    /// On the 12-hour clock the rendered hour is always 01..=12
    #[test]
    fn test_twelve_hour_stays_in_range(at in instant_strategy()) {
        let formatter = TimestampFormatter {
            hour_style: HourStyle::TwelveHour,
            ..TimestampFormatter::default()
        };
        let timestamp = formatter.format(&at);
        let time = timestamp.split('|').nth(1).expect("time portion");
        let hour: u32 = time[0..2].parse().expect("two-digit hour");
        prop_assert!((1..=12).contains(&hour), "hour {} out of range", hour);
    }

    /// Month names never leak into number-mode timestamps
    #[test]
    fn test_month_number_mode_is_all_numeric(at in instant_strategy()) {
        let formatter = TimestampFormatter {
            date_order: DateOrder::YearMonthDay,
            month_style: MonthStyle::Number,
            hour_style: HourStyle::TwentyFourHour,
        };
        let timestamp = formatter.format(&at);
        let date = timestamp.split('|').next().expect("date portion");
        prop_assert!(
            date[1..].chars().all(|c| c.is_ascii_digit() || c == '-'),
            "unexpected character in {}", date
        );
    }
}

// ============================================================================
// Month sentinel
// ============================================================================

proptest! {
    /// Month numbers outside 1..=12 map to the sentinel, never panic
    #[test]
    fn test_month_abbrev_out_of_range_is_sentinel(month in 13u32..) {
        prop_assert_eq!(month_abbrev(month), "N/A");
    }

    /// Month numbers inside 1..=12 map to a 3-letter abbreviation
    #[test]
    fn test_month_abbrev_in_range(month in 1u32..=12) {
        let abbrev = month_abbrev(month);
        prop_assert_eq!(abbrev.len(), 3);
        prop_assert!(abbrev != "N/A");
    }
}

// ============================================================================
// Config store validation
// ============================================================================

proptest! {
    /// A `set` that fails validation has no observable effect
    #[test]
    fn test_invalid_set_has_no_effect(
        key in "[a-zA-Z_]{0,24}",
        value in "[a-zA-Z0-9_]{0,24}",
    ) {
        let mut config = ConfigStore::new();
        prop_assume!(!config.is_key_and_value_valid(&key, &value));

        let before = config.get(&key).to_string();
        config.set(&key, &value);
        prop_assert_eq!(config.get(&key), before);
    }

    /// `get` never fails, whatever the key
    #[test]
    fn test_get_never_fails(key in ".*") {
        let config = ConfigStore::new();
        let value = config.get(&key);
        prop_assert!(config.is_key_valid(&key) || value.is_empty());
    }

    /// An empty value is rejected for every key
    #[test]
    fn test_empty_value_is_always_invalid(key in ".*") {
        let config = ConfigStore::new();
        prop_assert!(!config.is_key_and_value_valid(&key, ""));
    }
}
