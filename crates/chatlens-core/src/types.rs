//! Core types for chatlens-core.
//!
//! This module defines the two entities the parser produces: the transient
//! [`RawUnit`] cut out of the transcript by the segmenter, and the durable
//! [`NormalizedRecord`] row handed to the statistics and export layers. The
//! [`Sender`] discriminant separates real participants from system events.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Serialize, Serializer};

/// One message-start marker and the text it owns, borrowed from the transcript.
///
/// `header` is the full marker text including any bracket, separator dash and
/// trailing whitespace. `body` runs up to (not including) the next marker and
/// may contain newlines. `date` and `time` are the raw tokens captured from
/// the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawUnit<'a> {
    pub header: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub body: &'a str,
}

/// Who produced a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sender {
    /// A participant, identified by the name shown in the export.
    User(String),
    /// A line with no `name:` prefix: membership changes, encryption notices,
    /// subject changes and the like.
    SystemEvent,
}

impl Sender {
    /// The participant name, or `None` for a system event.
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::User(name) => Some(name),
            Sender::SystemEvent => None,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Sender::SystemEvent)
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User(name) => write!(f, "{name}"),
            Sender::SystemEvent => write!(f, "(system)"),
        }
    }
}

/// Serialised as the bare name, or `null` for a system event, so the `user`
/// column never collides with a participant's name.
impl Serialize for Sender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Sender::User(name) => serializer.serialize_str(name),
            Sender::SystemEvent => serializer.serialize_none(),
        }
    }
}

/// A normalised message row.
///
/// Field names are the output table's column names. Everything after
/// `message` is derived from `date` and `time` once, in [`NormalizedRecord::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    /// Calendar date, resolved with the transcript's locked-in date format.
    pub date: NaiveDate,
    /// Time of day, 24-hour, seconds always zero.
    pub time: NaiveTime,
    pub user: Sender,
    /// Trimmed body with the `name:` prefix removed.
    pub message: String,
    pub year: i32,
    /// English month name, e.g. `"March"`.
    pub month: &'static str,
    pub month_num: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub only_date: NaiveDate,
    /// English weekday name, e.g. `"Sunday"`.
    pub day_name: &'static str,
    /// Hour bucket label, see [`period_label`].
    pub period: String,
}

impl NormalizedRecord {
    pub fn new(date: NaiveDate, time: NaiveTime, user: Sender, message: impl Into<String>) -> Self {
        // Minute resolution.
        let time = time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time);
        let hour = time.hour();
        Self {
            date,
            time,
            user,
            message: message.into(),
            year: date.year(),
            month: month_name(date.month()),
            month_num: date.month(),
            day: date.day(),
            hour,
            minute: time.minute(),
            only_date: date,
            day_name: weekday_name(date.weekday()),
            period: period_label(hour),
        }
    }

    pub fn is_system(&self) -> bool {
        self.user.is_system()
    }
}

/// Hour-bucket label `"HH-HH"` for an hour of day. Hour 23 wraps to `"23-00"`.
pub fn period_label(hour: u32) -> String {
    if hour == 23 {
        "23-00".to_string()
    } else {
        format!("{:02}-{:02}", hour, hour + 1)
    }
}

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
