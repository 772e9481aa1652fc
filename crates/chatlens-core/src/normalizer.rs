//! Normalizer — turns [`RawUnit`]s into typed [`NormalizedRecord`] rows.
//!
//! Dates are resolved once per transcript: the candidate [`DateFormat`]s are
//! tried in priority order and the winner is passed explicitly into every
//! per-record call. Times are resolved per token against an ordered rule
//! table, first match wins. A record whose date or time cannot be read is
//! dropped and reported in [`Normalized::dropped`]; only an unreadable first
//! date aborts the parse.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::error::{ParseError, RecordError};
use crate::types::{NormalizedRecord, RawUnit, Sender};

// ---------------------------------------------------------------------------
// Date formats
// ---------------------------------------------------------------------------

/// Which of the first two date fields is the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldOrder {
    DayFirst,
    MonthFirst,
}

/// Width of the year field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearWidth {
    /// Two digits, POSIX pivot: `69..=99` is 19xx, `00..=68` is 20xx.
    Short,
    Full,
}

/// A resolved transcript date format, e.g. `DD/MM/YY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateFormat {
    pub order: FieldOrder,
    pub year: YearWidth,
    pub separator: char,
}

impl DateFormat {
    const fn new(order: FieldOrder, year: YearWidth, separator: char) -> Self {
        Self { order, year, separator }
    }

    /// Candidates in resolution priority order.
    pub const CANDIDATES: [DateFormat; 8] = [
        DateFormat::new(FieldOrder::DayFirst, YearWidth::Short, '/'),
        DateFormat::new(FieldOrder::DayFirst, YearWidth::Full, '/'),
        DateFormat::new(FieldOrder::MonthFirst, YearWidth::Short, '/'),
        DateFormat::new(FieldOrder::MonthFirst, YearWidth::Full, '/'),
        DateFormat::new(FieldOrder::DayFirst, YearWidth::Short, '-'),
        DateFormat::new(FieldOrder::DayFirst, YearWidth::Full, '-'),
        DateFormat::new(FieldOrder::MonthFirst, YearWidth::Short, '-'),
        DateFormat::new(FieldOrder::MonthFirst, YearWidth::Full, '-'),
    ];

    /// Parse a date token under this format. The whole token must match.
    pub fn parse(&self, token: &str) -> Option<NaiveDate> {
        let mut fields = token.trim().split(self.separator);
        let (first, second, year) = (fields.next()?, fields.next()?, fields.next()?);
        if fields.next().is_some() {
            return None;
        }

        let first = small_number(first)?;
        let second = small_number(second)?;
        let year = match self.year {
            YearWidth::Short if year.len() == 2 => {
                let yy: i32 = digits(year)?;
                if yy >= 69 {
                    1900 + yy
                } else {
                    2000 + yy
                }
            }
            YearWidth::Full if year.len() == 4 => digits(year)?,
            _ => return None,
        };

        let (day, month) = match self.order {
            FieldOrder::DayFirst => (first, second),
            FieldOrder::MonthFirst => (second, first),
        };
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl std::fmt::Display for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, b) = match self.order {
            FieldOrder::DayFirst => ("DD", "MM"),
            FieldOrder::MonthFirst => ("MM", "DD"),
        };
        let y = match self.year {
            YearWidth::Short => "YY",
            YearWidth::Full => "YYYY",
        };
        let s = self.separator;
        write!(f, "{a}{s}{b}{s}{y}")
    }
}

fn digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// A one- or two-digit day or month field.
fn small_number(s: &str) -> Option<u32> {
    if s.len() > 2 {
        return None;
    }
    digits(s)
}

/// Pick the transcript's date format.
///
/// The first candidate that parses every unit's date wins. If none does, the
/// first candidate that parses the first unit's date is locked in and the
/// rows it cannot read are dropped later. Fails only when nothing reads the
/// first date (or there are no units at all).
pub fn resolve_date_format(units: &[RawUnit<'_>]) -> Result<DateFormat, ParseError> {
    let Some(first) = units.first() else {
        return Err(ParseError::FormatResolution { token: String::new() });
    };

    if let Some(format) = DateFormat::CANDIDATES
        .iter()
        .find(|f| units.iter().all(|u| f.parse(u.date).is_some()))
    {
        tracing::debug!(%format, "date format parses every record");
        return Ok(*format);
    }

    match DateFormat::CANDIDATES.iter().find(|f| f.parse(first.date).is_some()) {
        Some(format) => {
            tracing::debug!(%format, "date format locked in from first record");
            Ok(*format)
        }
        None => Err(ParseError::FormatResolution {
            token: first.date.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Time rules
// ---------------------------------------------------------------------------

/// The time token shapes the normalizer understands, in match order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeFormat {
    /// `14:30`, `14:30:15`
    Clock24,
    /// `2:30 PM`, `2:30:15 pm`
    Clock12Spaced,
    /// `2:30PM`
    Clock12Compact,
    /// `2.30 PM`
    Clock12DotSpaced,
    /// `2.30pm`
    Clock12DotCompact,
    /// `14.30`, `14.30.15`
    Dotted24,
}

struct TimeRule {
    format: TimeFormat,
    pattern: Regex,
    twelve_hour: bool,
}

impl TimeRule {
    fn new(format: TimeFormat, pattern: &str, twelve_hour: bool) -> Self {
        Self {
            format,
            pattern: Regex::new(pattern).expect("time rule pattern must compile"),
            twelve_hour,
        }
    }

    fn apply(&self, token: &str) -> Option<NaiveTime> {
        let caps = self.pattern.captures(token)?;
        let hour: u32 = caps.name("h")?.as_str().parse().ok()?;
        let minute: u32 = caps.name("m")?.as_str().parse().ok()?;
        if let Some(s) = caps.name("s") {
            let second: u32 = s.as_str().parse().ok()?;
            if second > 59 {
                return None;
            }
        }

        let hour = if self.twelve_hour {
            if !(1..=12).contains(&hour) {
                return None;
            }
            let pm = caps.name("mer")?.as_str().eq_ignore_ascii_case("pm");
            hour % 12 + if pm { 12 } else { 0 }
        } else {
            hour
        };

        NaiveTime::from_hms_opt(hour, minute, 0)
    }
}

static TIME_RULES: LazyLock<Vec<TimeRule>> = LazyLock::new(|| {
    vec![
        TimeRule::new(
            TimeFormat::Clock24,
            r"^(?P<h>\d{1,2}):(?P<m>\d{2})(?::(?P<s>\d{2}))?$",
            false,
        ),
        TimeRule::new(
            TimeFormat::Clock12Spaced,
            r"^(?P<h>\d{1,2}):(?P<m>\d{2})(?::(?P<s>\d{2}))?\s+(?P<mer>(?i:[ap]m))$",
            true,
        ),
        TimeRule::new(
            TimeFormat::Clock12Compact,
            r"^(?P<h>\d{1,2}):(?P<m>\d{2})(?::(?P<s>\d{2}))?(?P<mer>(?i:[ap]m))$",
            true,
        ),
        TimeRule::new(
            TimeFormat::Clock12DotSpaced,
            r"^(?P<h>\d{1,2})\.(?P<m>\d{2})\s+(?P<mer>(?i:[ap]m))$",
            true,
        ),
        TimeRule::new(
            TimeFormat::Clock12DotCompact,
            r"^(?P<h>\d{1,2})\.(?P<m>\d{2})(?P<mer>(?i:[ap]m))$",
            true,
        ),
        TimeRule::new(
            TimeFormat::Dotted24,
            r"^(?P<h>\d{1,2})\.(?P<m>\d{2})(?:\.(?P<s>\d{2}))?$",
            false,
        ),
    ]
});

/// Resolve a time token to the first rule that reads it, seconds dropped.
pub fn match_time(token: &str) -> Option<(TimeFormat, NaiveTime)> {
    let token = token.trim();
    TIME_RULES
        .iter()
        .find_map(|rule| rule.apply(token).map(|t| (rule.format, t)))
}

pub fn parse_time(token: &str) -> Result<NaiveTime, RecordError> {
    match_time(token)
        .map(|(_, t)| t)
        .ok_or_else(|| RecordError::TimeParse {
            token: token.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Sender split
// ---------------------------------------------------------------------------

/// Split a body into sender and message.
///
/// A sender is the non-empty run of non-colon characters that opens the
/// body's first line, up to the first `:`. Anything else is a system event
/// and keeps its whole (trimmed) text.
pub fn split_sender(body: &str) -> (Sender, String) {
    let first_line = body.split('\n').next().unwrap_or_default();
    if let Some(colon) = first_line.find(':') {
        let name = first_line[..colon].trim();
        if !name.is_empty() {
            return (Sender::User(name.to_string()), body[colon + 1..].trim().to_string());
        }
    }
    (Sender::SystemEvent, body.trim().to_string())
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// A unit the normalizer could not turn into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRecord {
    /// Position of the unit in the segmenter's output.
    pub index: usize,
    pub error: RecordError,
}

/// Output of one normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    /// `None` only when there were no units to resolve a format from.
    pub format: Option<DateFormat>,
    /// Records in document order.
    pub records: Vec<NormalizedRecord>,
    pub dropped: Vec<DroppedRecord>,
}

impl Normalized {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Normalize one unit under an already-resolved date format.
pub fn normalize_unit(unit: &RawUnit<'_>, format: DateFormat) -> Result<NormalizedRecord, RecordError> {
    let date = format.parse(unit.date).ok_or_else(|| RecordError::DateMismatch {
        token: unit.date.to_string(),
        format,
    })?;
    let time = parse_time(unit.time)?;
    let (user, message) = split_sender(unit.body);
    Ok(NormalizedRecord::new(date, time, user, message))
}

/// Normalize every unit, in order.
///
/// Fails with [`ParseError::FormatResolution`] when the first unit's date is
/// unreadable. Zero units is not an error: the result is simply empty.
pub fn normalize(units: &[RawUnit<'_>]) -> Result<Normalized, ParseError> {
    if units.is_empty() {
        tracing::debug!("no units to normalize");
        return Ok(Normalized::default());
    }

    let format = resolve_date_format(units)?;
    let mut out = Normalized {
        format: Some(format),
        records: Vec::with_capacity(units.len()),
        dropped: Vec::new(),
    };

    for (index, unit) in units.iter().enumerate() {
        match normalize_unit(unit, format) {
            Ok(record) => out.records.push(record),
            Err(error) => {
                tracing::debug!(index, header = unit.header, %error, "dropping record");
                out.dropped.push(DroppedRecord { index, error });
            }
        }
    }

    if !out.dropped.is_empty() {
        tracing::warn!(dropped = out.dropped.len(), "dropped malformed records");
    }
    tracing::info!(
        units = units.len(),
        records = out.records.len(),
        dropped = out.dropped.len(),
        %format,
        "normalized transcript"
    );
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
