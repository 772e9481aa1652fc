//! Configuration types for chatlens.
//!
//! [`Config::load`] reads `~/.config/chatlens/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] layers an
//! explicit file (TOML, YAML or JSON, by extension) over the same defaults.
//! [`Config::defaults`] returns the defaults without touching the filesystem
//! (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::export::ExportFormat;
use crate::stopwords::StopWords;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[analysis]
media_placeholder = "<Media omitted>"
top_words         = 20
top_emojis        = 10
busy_users        = 5
stop_words_path   = ""

[export]
format = "jsonl"
pretty = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// `[analysis]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_media_placeholder")]
    pub media_placeholder: String,
    #[serde(default = "default_top_words")]
    pub top_words: usize,
    #[serde(default = "default_top_emojis")]
    pub top_emojis: usize,
    #[serde(default = "default_busy_users")]
    pub busy_users: usize,
    /// Empty means the built-in list.
    #[serde(default)]
    pub stop_words_path: String,
}

fn default_media_placeholder() -> String { "<Media omitted>".to_string() }
fn default_top_words() -> usize { 20 }
fn default_top_emojis() -> usize { 10 }
fn default_busy_users() -> usize { 5 }

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_placeholder: default_media_placeholder(),
            top_words: default_top_words(),
            top_emojis: default_top_emojis(),
            busy_users: default_busy_users(),
            stop_words_path: String::new(),
        }
    }
}

impl AnalysisConfig {
    /// The configured stop-word file, or the built-in list when none is set.
    pub fn stop_words(&self) -> anyhow::Result<StopWords> {
        if self.stop_words_path.trim().is_empty() {
            Ok(StopWords::builtin())
        } else {
            StopWords::load(Path::new(self.stop_words_path.trim()))
        }
    }
}

/// `[export]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub format: ExportFormat,
    #[serde(default)]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/chatlens/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::debug!(path = %path.display(), "wrote default config");
        }

        Self::layered(&path, false)
    }

    /// Load an explicit config file over the built-in defaults. The file must
    /// exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::layered(path, true)
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("chatlens")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
