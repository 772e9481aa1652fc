//! Command execution for the `chatlens` binary.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{bail, Context};
use chatlens_core::config::Config;
use chatlens_core::stats::{self, UserFilter, OVERALL};
use chatlens_core::{export, Normalized};

use crate::cli::Command;
use crate::report;

/// Read a transcript from a file, or stdin when the path is `-`.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_transcript(path: &Path) -> anyhow::Result<String> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("reading transcript from stdin")?;
        buf
    } else {
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?
    };

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::warn!(path = %path.display(), "transcript is not valid UTF-8; replacing bad bytes");
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Parse a transcript, rejecting one that yields no records.
pub fn load_records(text: &str) -> anyhow::Result<Normalized> {
    let parsed = chatlens_core::parse(text)?;
    if parsed.is_empty() {
        bail!("not a valid chat export: no messages found");
    }
    if parsed.dropped_count() > 0 {
        tracing::warn!(
            dropped = parsed.dropped_count(),
            kept = parsed.records.len(),
            "some messages could not be read and were skipped"
        );
    }
    Ok(parsed)
}

/// Run one subcommand, writing its output to `out`.
pub fn execute(command: &Command, config: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Command::Stats { transcript, user, activity } => {
            let parsed = load_records(&read_transcript(transcript)?)?;
            let filter = user
                .as_deref()
                .map(UserFilter::from_selection)
                .unwrap_or_default();
            write_stats(&parsed, &filter, *activity, config, out)
        }
        Command::Users { transcript } => {
            let parsed = load_records(&read_transcript(transcript)?)?;
            writeln!(out, "{OVERALL}")?;
            for name in stats::user_list(&parsed.records) {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
        Command::Export { transcript, format, output, pretty } => {
            let parsed = load_records(&read_transcript(transcript)?)?;
            let format = format.map(Into::into).unwrap_or(config.export.format);
            let pretty = *pretty || config.export.pretty;
            match output {
                Some(path) => {
                    let file = std::fs::File::create(path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    export::write_records(&parsed.records, format, pretty, std::io::BufWriter::new(file))?;
                    tracing::info!(path = %path.display(), records = parsed.records.len(), "export written");
                }
                None => export::write_records(&parsed.records, format, pretty, &mut *out)?,
            }
            Ok(())
        }
    }
}

/// Write the statistics report for one selection. `activity` adds the
/// time-based breakdowns after the monthly timeline.
pub fn write_stats(
    parsed: &Normalized,
    filter: &UserFilter,
    activity: bool,
    config: &Config,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let analysis = &config.analysis;
    let records = &parsed.records;

    if let UserFilter::User(name) = filter {
        if !stats::user_list(records).iter().any(|u| u == name) {
            bail!("no participant named {name:?} in this transcript");
        }
    }

    let summary = stats::fetch_stats(filter, records, &analysis.media_placeholder);
    write!(out, "{}", report::render_summary(filter.label(), &summary))?;

    if *filter == UserFilter::Overall {
        writeln!(out)?;
        write!(out, "{}", report::render_busy_users(&stats::busy_users(records, analysis.busy_users)))?;
    }

    let stop_words = analysis.stop_words()?;
    let words = stats::most_common_words(
        filter,
        records,
        &stop_words,
        &analysis.media_placeholder,
        analysis.top_words,
    );
    writeln!(out)?;
    write!(out, "{}", report::render_counts("Most common words", "word", &words))?;

    let mut emojis = stats::emoji_counts(filter, records);
    emojis.truncate(analysis.top_emojis);
    writeln!(out)?;
    write!(out, "{}", report::render_counts("Emoji", "emoji", &emojis))?;

    writeln!(out)?;
    write!(out, "{}", report::render_monthly(&stats::monthly_timeline(filter, records)))?;

    if activity {
        writeln!(out)?;
        write!(
            out,
            "{}",
            report::render_counts("Daily timeline", "date", &stats::daily_timeline(filter, records))
        )?;
        writeln!(out)?;
        write!(
            out,
            "{}",
            report::render_counts("Busiest days", "day", &stats::week_activity(filter, records))
        )?;
        writeln!(out)?;
        write!(
            out,
            "{}",
            report::render_counts("Busiest months", "month", &stats::month_activity(filter, records))
        )?;
        writeln!(out)?;
        write!(out, "{}", report::render_heatmap(&stats::activity_heatmap(filter, records)))?;
    }
    Ok(())
}
