//! Statistics over a normalised record set.
//!
//! Every function is a pure read of `&[NormalizedRecord]`; none of them
//! re-parse or mutate anything, so running the same query twice gives the
//! same answer. Functions that take a [`UserFilter`] restrict themselves to
//! one participant unless the filter is [`UserFilter::Overall`].
//!
//! Frequency tables are ordered most frequent first; ties keep the order in
//! which the keys first appeared in the transcript.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;

use crate::stopwords::StopWords;
use crate::types::{weekday_name, NormalizedRecord, Sender};

/// Selection label meaning "every participant".
pub const OVERALL: &str = "Overall";

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"]+"#).expect("url pattern must compile")
});

static EMOJI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Extended_Pictographic}").expect("emoji pattern must compile"));

// ---------------------------------------------------------------------------
// User filter
// ---------------------------------------------------------------------------

/// Which participant a statistic is computed for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserFilter {
    /// Everyone, system events included.
    #[default]
    Overall,
    User(String),
}

impl UserFilter {
    /// Interpret a selection label; [`OVERALL`] selects everyone.
    pub fn from_selection(selection: &str) -> Self {
        if selection == OVERALL {
            UserFilter::Overall
        } else {
            UserFilter::User(selection.to_string())
        }
    }

    pub fn matches(&self, record: &NormalizedRecord) -> bool {
        match self {
            UserFilter::Overall => true,
            UserFilter::User(name) => record.user.name() == Some(name.as_str()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            UserFilter::Overall => OVERALL,
            UserFilter::User(name) => name,
        }
    }
}

fn select<'a>(
    filter: &'a UserFilter,
    records: &'a [NormalizedRecord],
) -> impl Iterator<Item = &'a NormalizedRecord> + 'a {
    records.iter().filter(move |r| filter.matches(r))
}

/// Count keys in first-seen order, then sort most frequent first (stable).
fn tally<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Headline numbers
// ---------------------------------------------------------------------------

/// Headline counts for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatStats {
    pub messages: usize,
    pub words: usize,
    /// Messages containing the media placeholder.
    pub media_messages: usize,
    pub links: usize,
    /// Mean words per message, two decimals. Zero when there are no messages.
    pub avg_words: f64,
}

pub fn fetch_stats(filter: &UserFilter, records: &[NormalizedRecord], media_placeholder: &str) -> ChatStats {
    let mut stats = ChatStats {
        messages: 0,
        words: 0,
        media_messages: 0,
        links: 0,
        avg_words: 0.0,
    };
    for record in select(filter, records) {
        stats.messages += 1;
        stats.words += record.message.split_whitespace().count();
        if record.message.contains(media_placeholder) {
            stats.media_messages += 1;
        }
        stats.links += URL.find_iter(&record.message).count();
    }
    if stats.messages > 0 {
        stats.avg_words = round2(stats.words as f64 / stats.messages as f64);
    }
    stats
}

/// Distinct participant names, sorted. System events are not participants.
pub fn user_list(records: &[NormalizedRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.user.name())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Participants
// ---------------------------------------------------------------------------

/// One participant's share of the non-system messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub name: String,
    pub count: usize,
    /// Percentage of all non-system messages, two decimals.
    pub percent: f64,
}

/// The `limit` most active participants.
pub fn busy_users(records: &[NormalizedRecord], limit: usize) -> Vec<UserShare> {
    let counts = tally(records.iter().filter_map(|r| r.user.name()));
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    counts
        .into_iter()
        .take(limit)
        .map(|(name, count)| UserShare {
            name: name.to_string(),
            count,
            percent: round2(count as f64 / total as f64 * 100.0),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Words and emoji
// ---------------------------------------------------------------------------

/// The `limit` most frequent lowercase words, skipping system events, bare
/// media placeholders and stop words.
pub fn most_common_words(
    filter: &UserFilter,
    records: &[NormalizedRecord],
    stop_words: &StopWords,
    media_placeholder: &str,
    limit: usize,
) -> Vec<(String, usize)> {
    let words = select(filter, records)
        .filter(|r| r.user != Sender::SystemEvent && r.message != media_placeholder)
        .flat_map(|r| {
            r.message
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|w| !stop_words.contains(w));
    let mut counts = tally(words);
    counts.truncate(limit);
    counts
}

/// Every emoji character used, most frequent first.
pub fn emoji_counts(filter: &UserFilter, records: &[NormalizedRecord]) -> Vec<(String, usize)> {
    tally(
        select(filter, records)
            .flat_map(|r| EMOJI.find_iter(&r.message).map(|m| m.as_str().to_string())),
    )
}

// ---------------------------------------------------------------------------
// Timelines
// ---------------------------------------------------------------------------

/// Message count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month_num: u32,
    pub month: &'static str,
    pub count: usize,
}

impl MonthlyCount {
    /// `"March-2023"`
    pub fn label(&self) -> String {
        format!("{}-{}", self.month, self.year)
    }
}

/// Counts per month, chronological.
pub fn monthly_timeline(filter: &UserFilter, records: &[NormalizedRecord]) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<(i32, u32), MonthlyCount> = BTreeMap::new();
    for r in select(filter, records) {
        months
            .entry((r.year, r.month_num))
            .or_insert_with(|| MonthlyCount {
                year: r.year,
                month_num: r.month_num,
                month: r.month,
                count: 0,
            })
            .count += 1;
    }
    months.into_values().collect()
}

/// Counts per calendar day, chronological.
pub fn daily_timeline(filter: &UserFilter, records: &[NormalizedRecord]) -> Vec<(NaiveDate, usize)> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for r in select(filter, records) {
        *days.entry(r.only_date).or_default() += 1;
    }
    days.into_iter().collect()
}

/// Counts per weekday name, busiest first.
pub fn week_activity(filter: &UserFilter, records: &[NormalizedRecord]) -> Vec<(&'static str, usize)> {
    tally(select(filter, records).map(|r| r.day_name))
}

/// Counts per month name, busiest first.
pub fn month_activity(filter: &UserFilter, records: &[NormalizedRecord]) -> Vec<(&'static str, usize)> {
    tally(select(filter, records).map(|r| r.month))
}

// ---------------------------------------------------------------------------
// Heatmap
// ---------------------------------------------------------------------------

/// Message counts by weekday (rows, Monday first) and hour bucket (columns,
/// ascending). Only weekdays and buckets that occur are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    pub days: Vec<&'static str>,
    pub periods: Vec<String>,
    /// `cells[day][period]`
    pub cells: Vec<Vec<usize>>,
}

impl ActivityHeatmap {
    pub fn get(&self, day: &str, period: &str) -> usize {
        let row = self.days.iter().position(|d| *d == day);
        let col = self.periods.iter().position(|p| p == period);
        match (row, col) {
            (Some(r), Some(c)) => self.cells[r][c],
            _ => 0,
        }
    }
}

pub fn activity_heatmap(filter: &UserFilter, records: &[NormalizedRecord]) -> ActivityHeatmap {
    let mut counts: BTreeMap<(u32, &str), usize> = BTreeMap::new();
    let mut weekdays: BTreeMap<u32, &'static str> = BTreeMap::new();
    let mut periods: BTreeSet<&str> = BTreeSet::new();

    for r in select(filter, records) {
        let weekday = r.date.weekday();
        let row = weekday.num_days_from_monday();
        weekdays.insert(row, weekday_name(weekday));
        periods.insert(r.period.as_str());
        *counts.entry((row, r.period.as_str())).or_default() += 1;
    }

    let cells: Vec<Vec<usize>> = weekdays
        .keys()
        .map(|row| {
            periods
                .iter()
                .map(|p| counts.get(&(*row, *p)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    ActivityHeatmap {
        days: weekdays.into_values().collect(),
        periods: periods.into_iter().map(str::to_string).collect(),
        cells,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
