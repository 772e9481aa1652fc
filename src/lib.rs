//! chatlens — statistics for exported chat transcripts.
//!
//! The parsing and statistics live in [`chatlens_core`]; this crate adds the
//! command-line surface and plain-text rendering, exposed as public modules
//! so the integration harnesses can drive them directly.
//!
//! # Architecture
//!
//! ```text
//! read_transcript ──► chatlens_core::parse ──► stats ──► report ──► stdout
//!                                   │
//!                                   └──► export ──► file / stdout
//! ```

pub mod cli;
pub mod commands;
pub mod report;

pub use chatlens_core::{NormalizedRecord, Sender};
