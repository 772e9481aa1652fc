//! Test builders — ergonomic constructors for records and transcripts.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chatlens_core::{NormalizedRecord, Sender};
use chrono::{NaiveDate, NaiveTime};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`NormalizedRecord`] fixtures.
///
/// ```rust
/// let record = RecordBuilder::new("see you soon")
///     .user("Alice")
///     .on(2023, 3, 5)
///     .at(14, 30)
///     .build();
/// ```
pub struct RecordBuilder {
    date: NaiveDate,
    time: NaiveTime,
    user: Sender,
    message: String,
}

impl RecordBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            date: NaiveDate::from_ymd_opt(2023, 3, 5).unwrap(),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            user: Sender::User("test-user".to_string()),
            message: message.into(),
        }
    }

    pub fn user(mut self, name: impl Into<String>) -> Self {
        self.user = Sender::User(name.into());
        self
    }

    pub fn system(mut self) -> Self {
        self.user = Sender::SystemEvent;
        self
    }

    pub fn on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn at(mut self, hour: u32, minute: u32) -> Self {
        self.time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        self
    }

    pub fn build(self) -> NormalizedRecord {
        NormalizedRecord::new(self.date, self.time, self.user, self.message)
    }
}

/// A message from `user` at noon on 2023-03-05.
pub fn said(user: &str, message: &str) -> NormalizedRecord {
    RecordBuilder::new(message).user(user).build()
}

/// A system event at noon on 2023-03-05.
pub fn system_event(message: &str) -> NormalizedRecord {
    RecordBuilder::new(message).system().build()
}

// ---------------------------------------------------------------------------
// TranscriptBuilder
// ---------------------------------------------------------------------------

/// Builds Android-style (`DD/MM/YY, HH:MM - `) transcript text line by line.
#[derive(Default)]
pub struct TranscriptBuilder {
    text: String,
}

impl TranscriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. `date` is `(day, month, two-digit year)`.
    pub fn message(mut self, date: (u32, u32, u32), time: (u32, u32), sender: &str, body: &str) -> Self {
        self.header(date, time);
        self.text.push_str(&format!("{sender}: {body}\n"));
        self
    }

    pub fn system(mut self, date: (u32, u32, u32), time: (u32, u32), body: &str) -> Self {
        self.header(date, time);
        self.text.push_str(body);
        self.text.push('\n');
        self
    }

    /// Append raw text with no marker, e.g. a continuation line.
    pub fn raw(mut self, line: &str) -> Self {
        self.text.push_str(line);
        self.text.push('\n');
        self
    }

    fn header(&mut self, (day, month, year): (u32, u32, u32), (hour, minute): (u32, u32)) {
        self.text
            .push_str(&format!("{day:02}/{month:02}/{year:02}, {hour:02}:{minute:02} - "));
    }

    pub fn build(self) -> String {
        self.text
    }
}

// ---------------------------------------------------------------------------
// Corpus helpers
// ---------------------------------------------------------------------------

/// Parse a transcript that is expected to be clean.
pub fn parse_clean(text: &str) -> Vec<NormalizedRecord> {
    let parsed = chatlens_core::parse(text).expect("transcript should parse");
    assert_eq!(
        parsed.dropped_count(),
        0,
        "unexpected dropped records: {:?}",
        parsed.dropped
    );
    parsed.records
}

/// Build `n` messages rotating over `senders`, one per minute from 09:00 on
/// 2023-03-05, every tenth one a media placeholder.
pub fn build_corpus(n: usize, senders: &[String]) -> Vec<NormalizedRecord> {
    (0..n)
        .map(|i| {
            let minutes = i as u32;
            let message = if i % 10 == 0 {
                "<Media omitted>".to_string()
            } else {
                format!("message number {i} about lunch")
            };
            RecordBuilder::new(message)
                .user(senders[i % senders.len()].clone())
                .on(2023, 3, 5 + minutes / 900)
                .at(9 + (minutes / 60) % 15, minutes % 60)
                .build()
        })
        .collect()
}
