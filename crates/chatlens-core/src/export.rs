//! Export — serialises normalised records for downstream tools.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::types::NormalizedRecord;

/// Output encoding for [`write_records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// A single JSON array.
    Json,
    /// One JSON object per line.
    #[default]
    Jsonl,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Write `records` to `writer`. `pretty` only affects [`ExportFormat::Json`].
///
/// An empty record set writes `[]` for JSON and nothing for JSON Lines.
pub fn write_records<W: Write>(
    records: &[NormalizedRecord],
    format: ExportFormat,
    pretty: bool,
    mut writer: W,
) -> std::io::Result<()> {
    match format {
        ExportFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut writer, records)?;
            } else {
                serde_json::to_writer(&mut writer, records)?;
            }
            writeln!(writer)?;
        }
        ExportFormat::Jsonl => {
            for record in records {
                serde_json::to_writer(&mut writer, record)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    tracing::debug!(records = records.len(), %format, "exported records");
    Ok(())
}
