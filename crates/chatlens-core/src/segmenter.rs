//! Segmenter — cuts a transcript into [`RawUnit`]s, one per message-start marker.
//!
//! A marker is a timestamp header:
//!
//! ```text
//! 05/03/23, 14:30 - Alice: Hi           Android, 24-hour
//! 5/3/2023, 2:30 pm - Alice: Hi         Android, 12-hour
//! [05/03/23, 2:30:15 PM] Alice: Hi      iOS, bracketed, no dash
//! 05-03-2023 14.30.15 - Alice: Hi       dash dates, dotted time
//! ```
//!
//! Every occurrence splits, including one quoted in the middle of a message.
//! Everything between one marker and the next belongs to the first marker's
//! body, so multi-line messages stay attached to the line that opened them.
//! Whitespace after the separator never runs past the end of the line.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::RawUnit;

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\x{200E}?\[?(?P<date>\d{1,2}[/-]\d{1,2}[/-](?:\d{4}|\d{2})),?\s+(?P<time>\d{1,2}[:.]\d{2}(?:[:.]\d{2})?(?:\s*[AaPp][Mm])?)(?:\][^\S\r\n]*(?:-[^\S\r\n]*)?|[^\S\r\n]*-[^\S\r\n]*)",
    )
    .expect("marker pattern must compile")
});

/// Split `text` into units in document order.
///
/// Returns an empty vector when the text holds no marker; deciding that this
/// is not a chat export is left to the caller. Text before the first marker
/// belongs to no unit.
pub fn segment(text: &str) -> Vec<RawUnit<'_>> {
    let headers: Vec<_> = MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            Some((
                caps.get(0)?,
                caps.name("date")?.as_str(),
                caps.name("time")?.as_str(),
            ))
        })
        .collect();

    if let Some((first, ..)) = headers.first() {
        if first.start() > 0 {
            tracing::debug!(bytes = first.start(), "skipping text before first marker");
        }
    }

    let units: Vec<RawUnit<'_>> = headers
        .iter()
        .enumerate()
        .map(|(i, (marker, date, time))| {
            let body_end = headers
                .get(i + 1)
                .map_or(text.len(), |(next, ..)| next.start());
            RawUnit {
                header: marker.as_str(),
                date,
                time,
                body: &text[marker.end()..body_end],
            }
        })
        .collect();

    tracing::debug!(units = units.len(), "segmented transcript");
    units
}

/// Byte offset of the first marker, if any. Concatenating every unit's
/// `header` and `body` reproduces `text[offset..]`.
pub fn first_marker_offset(text: &str) -> Option<usize> {
    MARKER.find(text).map(|m| m.start())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
