//! Static transcripts used across harnesses.
//!
//! Each constant is a complete export in one of the shapes the segmenter
//! recognises. The Android 24-hour group chat is the workhorse: it has system
//! events, a multi-line message, a media placeholder, links and emoji.

/// Android export, day-first dates, 24-hour clock.
pub const ANDROID_24H: &str = "\
05/03/23, 14:30 - Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them.
05/03/23, 14:30 - Alice created group \"Weekend\"
05/03/23, 14:31 - Alice: Hi everyone 👋
05/03/23, 14:32 - Bob: Hello!
Who is bringing snacks?
05/03/23, 23:05 - Carol: <Media omitted>
13/03/23, 09:15 - Bob: pizza menu https://example.com/menu 🍕🍕
02/04/23, 18:00 - Alice: pizza it is, see you at 7: do not be late
";

/// Android export, month-first dates with four-digit years, 12-hour clock in
/// mixed spellings.
pub const ANDROID_12H_US: &str = "\
3/5/2023, 2:30 PM - Alice: Hi
3/5/2023, 2:31 pm - Bob: Hello
3/13/2023, 9:05AM - Alice: morning
";

/// iOS export: bracketed headers, seconds, no dash.
pub const IOS_BRACKETED: &str = "\
[05/03/23, 2:30:15 PM] Alice: Hi
[05/03/23, 2:31:00 PM] Bob: How are you?
[06/03/23, 11:59:59 PM] Alice: late one
";

/// Dash-separated dates with dotted times.
pub const DASH_DOTTED: &str = "\
05-03-2023 14.30 - Alice: Hi
06-03-2023 2.30pm - Bob: yo
06-03-2023 2.31 PM - Bob: still here
";

/// The continuation line has no marker and belongs to Alice's message.
pub const CONTINUATION: &str =
    "[05/03/23, 2:30 PM] Alice: Hi\nBob: Hello!\n[05/03/23, 2:31 PM] Bob: How are you?";

/// First date is ambiguous, second only reads day-first, third only reads
/// month-first.
pub const MIXED_DATES: &str = "\
05/03/23, 10:00 - Alice: a
13/02/23, 10:00 - Bob: b
02/13/23, 10:00 - Carol: c
";

/// Parses as a transcript but one time token is nonsense.
pub const BAD_TIME: &str = "\
05/03/23, 10:00 - Alice: fine
05/03/23, 10:75 - Bob: broken clock
05/03/23, 10:02 - Alice: fine again
";

/// Marker shape, but the date reads under no supported format.
pub const UNRESOLVABLE_DATE: &str = "\
31/31/23, 10:00 - Alice: what month is this
";

/// Plain prose, no markers at all.
pub const NOT_A_TRANSCRIPT: &str = "Dear diary,\ntoday nothing happened.\n";

/// Every fixture that should parse with zero drops, with its record count.
pub const CLEAN_CORPORA: &[(&str, usize)] = &[
    (ANDROID_24H, 7),
    (ANDROID_12H_US, 3),
    (IOS_BRACKETED, 3),
    (DASH_DOTTED, 3),
    (CONTINUATION, 2),
];
