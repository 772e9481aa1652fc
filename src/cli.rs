//! Command-line surface for the `chatlens` binary.

use std::path::PathBuf;

use chatlens_core::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "chatlens", about = "Statistics for exported chat transcripts")]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Config file to use instead of ~/.config/chatlens/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Summary, busiest users, top words, emoji and monthly timeline.
    Stats {
        /// Transcript file, or `-` for stdin.
        transcript: PathBuf,
        /// Restrict to one participant ("Overall" for everyone).
        #[arg(long)]
        user: Option<String>,
        /// Add the daily timeline, busiest weekdays and months, and the
        /// weekday by hour heatmap.
        #[arg(long)]
        activity: bool,
    },
    /// List participants, preceded by "Overall".
    Users {
        /// Transcript file, or `-` for stdin.
        transcript: PathBuf,
    },
    /// Write the normalised records as JSON.
    Export {
        /// Transcript file, or `-` for stdin.
        transcript: PathBuf,
        /// Defaults to the config file's `[export] format`.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Defaults to stdout.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Pretty-print JSON arrays.
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Jsonl,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Jsonl => ExportFormat::Jsonl,
        }
    }
}
