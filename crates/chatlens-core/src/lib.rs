//! chatlens-core — chat transcript parsing and statistics.
//!
//! This crate turns an exported chat transcript into typed rows and computes
//! descriptive statistics over them.
//!
//! # Architecture
//!
//! ```text
//! text ──► Segmenter ──► RawUnit* ──► Normalizer ──► NormalizedRecord* ──► Stats
//!                                                           │
//!                                                           └──► Export
//! ```
//!
//! Segmentation must finish before normalization starts: the normalizer
//! resolves the transcript's date format from the whole date column. Both
//! stages are synchronous and share nothing mutable, so separate transcripts
//! can be parsed on separate threads.

pub mod config;
pub mod error;
pub mod export;
pub mod normalizer;
pub mod segmenter;
pub mod stats;
pub mod stopwords;
pub mod types;

pub use error::{ParseError, RecordError};
pub use normalizer::{DateFormat, Normalized};
pub use types::{NormalizedRecord, RawUnit, Sender};

/// Segment and normalize a transcript in one call.
///
/// A transcript with no markers yields an empty [`Normalized`]; the caller
/// decides whether that means "not a chat export".
pub fn parse(text: &str) -> Result<Normalized, ParseError> {
    let units = segmenter::segment(text);
    normalizer::normalize(&units)
}
