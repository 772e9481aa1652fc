//! Domain-specific assertions for chatlens harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which record broke which parser invariant.

use chatlens_core::segmenter;
use chatlens_core::NormalizedRecord;

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert that a record was sent by the named user.
///
/// ```rust
/// assert_sender!(record, "Alice");
/// ```
#[macro_export]
macro_rules! assert_sender {
    ($record:expr, $name:expr) => {{
        let record: &chatlens_core::NormalizedRecord = &$record;
        let expected: &str = $name;
        match &record.user {
            chatlens_core::Sender::User(actual) if actual == expected => {}
            other => panic!(
                "assert_sender! failed:\n  expected: User({:?})\n  actual:   {:?}\n  message: {:?}",
                expected, other, record.message
            ),
        }
    }};
}

/// Assert that a record is a system event.
#[macro_export]
macro_rules! assert_system_event {
    ($record:expr) => {{
        let record: &chatlens_core::NormalizedRecord = &$record;
        if !record.user.is_system() {
            panic!(
                "assert_system_event! failed: sender is {:?}\n  message: {:?}",
                record.user, record.message
            );
        }
    }};
}

/// Assert a record's 24-hour clock reading.
///
/// ```rust
/// assert_clock!(record, 14, 30);
/// ```
#[macro_export]
macro_rules! assert_clock {
    ($record:expr, $hour:expr, $minute:expr) => {{
        let record: &chatlens_core::NormalizedRecord = &$record;
        let expected: (u32, u32) = ($hour, $minute);
        let actual = (record.hour, record.minute);
        if actual != expected {
            panic!(
                "assert_clock! failed:\n  expected: {:02}:{:02}\n  actual:   {:02}:{:02}\n  message: {:?}",
                expected.0, expected.1, actual.0, actual.1, record.message
            );
        }
    }};
}

/// Assert a record's calendar date.
#[macro_export]
macro_rules! assert_date {
    ($record:expr, $year:expr, $month:expr, $day:expr) => {{
        let record: &chatlens_core::NormalizedRecord = &$record;
        let expected = chrono::NaiveDate::from_ymd_opt($year, $month, $day).unwrap();
        pretty_assertions::assert_eq!(record.date, expected, "message: {:?}", record.message);
    }};
}

// ---------------------------------------------------------------------------
// Invariant helpers
// ---------------------------------------------------------------------------

/// Assert that the segmenter's units tile the text from the first marker to
/// the end with no gaps and no overlap.
pub fn assert_reconstructs(text: &str) {
    let units = segmenter::segment(text);
    let offset = segmenter::first_marker_offset(text).unwrap_or(text.len());
    let rebuilt: String = units.iter().flat_map(|u| [u.header, u.body]).collect();
    pretty_assertions::assert_eq!(rebuilt, &text[offset..], "segments do not tile the transcript");
}

/// Assert the derived columns agree with `date` and `time`.
pub fn assert_derived_consistent(record: &NormalizedRecord) {
    use chrono::{Datelike, Timelike};

    assert_eq!(record.year, record.date.year());
    assert_eq!(record.month_num, record.date.month());
    assert_eq!(record.day, record.date.day());
    assert_eq!(record.only_date, record.date);
    assert_eq!(record.hour, record.time.hour());
    assert_eq!(record.minute, record.time.minute());
    assert_eq!(record.time.second(), 0, "seconds must be discarded");
    assert!(record.hour <= 23);
    assert_eq!(record.period, chatlens_core::types::period_label(record.hour));
}
