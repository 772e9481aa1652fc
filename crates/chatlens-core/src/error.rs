//! Error types for transcript parsing.
//!
//! [`ParseError`] aborts a whole parse. [`RecordError`] only drops the record
//! it was raised for; the normalizer collects those alongside the rows that
//! did parse.

use crate::normalizer::DateFormat;

/// A failure that makes the whole transcript unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No supported date format matches the first message's date token.
    #[error("unrecognized transcript format: no supported date format matches {token:?}")]
    FormatResolution { token: String },
}

/// A failure confined to one message. The record is dropped and counted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("unrecognized time {token:?}")]
    TimeParse { token: String },

    #[error("date {token:?} does not match the transcript's date format {format}")]
    DateMismatch { token: String, format: DateFormat },
}
