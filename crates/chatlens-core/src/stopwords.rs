//! Stop words excluded from word-frequency counts.
//!
//! A user-supplied list replaces the built-in one entirely; the two are never
//! merged.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;

/// Built-in English and romanised Hindi filler words, plus the tokens of the
/// media placeholder so `<Media omitted>` never tops the chart.
static BUILTIN: phf::Set<&'static str> = phf::phf_set! {
    "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "but", "by", "can", "could", "did", "do",
    "does", "for", "from", "get", "got", "had", "has", "have", "he", "her",
    "here", "him", "his", "how", "i", "if", "im", "in", "into", "is", "it",
    "its", "just", "me", "my", "no", "not", "now", "of", "ok", "okay", "on",
    "one", "or", "our", "out", "she", "so", "that", "the", "their", "them",
    "then", "there", "they", "this", "to", "too", "u", "up", "us", "was", "we",
    "were", "what", "when", "where", "which", "who", "why", "will", "with",
    "would", "yes", "you", "your",
    "aur", "bhi", "hai", "hain", "ho", "hu", "hum", "ka", "kar", "ke", "ki",
    "ko", "kya", "main", "mein", "na", "nahi", "se", "tha", "toh", "tum",
    "<media", "omitted>",
};

/// The set of words to skip when counting.
#[derive(Debug, Clone, Default)]
pub enum StopWords {
    #[default]
    Builtin,
    Custom(HashSet<String>),
}

impl StopWords {
    pub fn builtin() -> Self {
        StopWords::Builtin
    }

    /// Build a list from whitespace-separated words. Case is folded.
    pub fn from_text(text: &str) -> Self {
        StopWords::Custom(text.split_whitespace().map(str::to_lowercase).collect())
    }

    /// Read a stop-word file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading stop words from {}", path.display()))?;
        let words = Self::from_text(&text);
        tracing::debug!(path = %path.display(), words = words.len(), "loaded stop words");
        Ok(words)
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        match self {
            StopWords::Builtin => BUILTIN.contains(word.as_str()),
            StopWords::Custom(set) => set.contains(&word),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            StopWords::Builtin => BUILTIN.len(),
            StopWords::Custom(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
