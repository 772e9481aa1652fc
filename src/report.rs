//! Plain-text rendering of statistics for the terminal.
//!
//! Tables are left-aligned, columns separated by two spaces, with trailing
//! whitespace trimmed so output diffs cleanly.

use std::fmt::Display;

use chatlens_core::stats::{ActivityHeatmap, ChatStats, MonthlyCount, UserShare};

/// Render a titled table. An empty table renders as `(none)`.
pub fn render_table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = format!("{title}\n");
    if rows.is_empty() {
        out.push_str("(none)\n");
        return out;
    }

    // Widths count chars, not terminal cells; a two-cell emoji pushes its row right by one.
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    for row in std::iter::once(&header_row).chain(rows) {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let pad = widths[i].saturating_sub(cell.chars().count());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn render_summary(label: &str, stats: &ChatStats) -> String {
    let rows = [
        ("messages", stats.messages.to_string()),
        ("words", stats.words.to_string()),
        ("media shared", stats.media_messages.to_string()),
        ("links shared", stats.links.to_string()),
        ("avg words/msg", format!("{:.2}", stats.avg_words)),
    ];
    let mut out = format!("Chat analysis for {label}\n");
    for (name, value) in rows {
        out.push_str(&format!("  {name:<15}{value}\n"));
    }
    out
}

pub fn render_busy_users(users: &[UserShare]) -> String {
    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|u| vec![u.name.clone(), u.count.to_string(), format!("{:.2}", u.percent)])
        .collect();
    render_table("Busiest users", &["name", "count", "percent"], &rows)
}

pub fn render_counts<K: Display>(title: &str, key: &str, counts: &[(K, usize)]) -> String {
    let rows: Vec<Vec<String>> = counts
        .iter()
        .map(|(k, n)| vec![k.to_string(), n.to_string()])
        .collect();
    render_table(title, &[key, "count"], &rows)
}

pub fn render_monthly(timeline: &[MonthlyCount]) -> String {
    let rows: Vec<Vec<String>> = timeline
        .iter()
        .map(|m| vec![m.label(), m.count.to_string()])
        .collect();
    render_table("Monthly timeline", &["month", "messages"], &rows)
}

/// One row per weekday, one column per hour bucket.
pub fn render_heatmap(map: &ActivityHeatmap) -> String {
    let mut headers = vec!["day"];
    headers.extend(map.periods.iter().map(String::as_str));
    let rows: Vec<Vec<String>> = map
        .days
        .iter()
        .zip(&map.cells)
        .map(|(day, cells)| {
            std::iter::once(day.to_string())
                .chain(cells.iter().map(usize::to_string))
                .collect()
        })
        .collect();
    render_table("Activity by day and hour", &headers, &rows)
}
