//! Weighted opening book keyed by move history.

use std::collections::HashMap;
use std::sync::OnceLock;

use chess_core::Move;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key used for the initial position (empty history).
pub const START_KEY: &str = "start";

const BUILTIN_BOOK: &str = include_str!("book.toml");

#[derive(Error, Debug)]
pub enum BookError {
    #[error("failed to parse opening book: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("opening line `{key}` has no entries")]
    EmptyLine { key: String },

    #[error("opening line `{key}`: entry `{notation}` has zero weight")]
    ZeroWeight { key: String, notation: String },
}

/// One candidate move for a history key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningEntry {
    /// SAN (or LAN) of the move to play
    #[serde(rename = "move")]
    pub notation: String,
    /// Relative selection weight, always positive
    pub weight: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Usual continuation, kept for naming only; never searched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<OpeningEntry>,
}

/// All candidates for one history key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLine {
    pub key: String,
    #[serde(rename = "entry")]
    pub entries: Vec<OpeningEntry>,
}

#[derive(Debug, Deserialize)]
struct BookFile {
    #[serde(rename = "opening", default)]
    openings: Vec<BookLine>,
}

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    /// Lines in file order; naming depends on it
    lines: Vec<BookLine>,
    index: HashMap<String, usize>,
}

/// Joins SAN history into a book key.
pub fn history_key(history: &[String]) -> String {
    if history.is_empty() {
        START_KEY.to_string()
    } else {
        history.join(" ")
    }
}

impl OpeningBook {
    /// Parses and validates a TOML book.
    pub fn from_toml_str(text: &str) -> Result<Self, BookError> {
        let file: BookFile = toml::from_str(text)?;
        Self::from_lines(file.openings)
    }

    pub fn from_lines(lines: Vec<BookLine>) -> Result<Self, BookError> {
        let mut index = HashMap::with_capacity(lines.len());
        for (i, line) in lines.iter().enumerate() {
            if line.entries.is_empty() {
                return Err(BookError::EmptyLine {
                    key: line.key.clone(),
                });
            }
            if let Some(bad) = line.entries.iter().find(|e| e.weight == 0) {
                return Err(BookError::ZeroWeight {
                    key: line.key.clone(),
                    notation: bad.notation.clone(),
                });
            }
            // First definition of a key wins
            index.entry(line.key.clone()).or_insert(i);
        }
        Ok(Self { lines, index })
    }

    /// The book shipped with the engine.
    pub fn builtin() -> &'static OpeningBook {
        static BOOK: OnceLock<OpeningBook> = OnceLock::new();
        BOOK.get_or_init(|| {
            OpeningBook::from_toml_str(BUILTIN_BOOK).unwrap_or_else(|err| {
                tracing::error!(%err, "built-in opening book is invalid; playing without it");
                OpeningBook::default()
            })
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn entries(&self, key: &str) -> Option<&[OpeningEntry]> {
        self.index.get(key).map(|&i| self.lines[i].entries.as_slice())
    }

    /// Weighted random pick among the entries stored under exactly `key`.
    pub fn pick_entry<R: Rng>(&self, key: &str, rng: &mut R) -> Option<&OpeningEntry> {
        let entries = self.entries(key)?;
        let total: u32 = entries.iter().map(|e| e.weight).sum();
        let mut draw = rng.gen_range(0.0..f64::from(total));
        for entry in entries {
            draw -= f64::from(entry.weight);
            if draw <= 0.0 {
                return Some(entry);
            }
        }
        // Float rounding can leave a sliver past the last entry
        entries.last()
    }

    /// Picks a book move for `history` and resolves it against `legal`.
    ///
    /// Returns `None` when the history is not in the book or when the
    /// chosen notation matches no legal move.
    pub fn lookup<R: Rng>(
        &self,
        history: &[String],
        legal: &[Move],
        rng: &mut R,
    ) -> Option<Move> {
        let key = history_key(history);
        let Some(entry) = self.pick_entry(&key, rng) else {
            tracing::debug!(%key, "history not in opening book");
            return None;
        };

        let found = legal
            .iter()
            .find(|m| m.san == entry.notation)
            .or_else(|| legal.iter().find(|m| m.lan == entry.notation))
            .cloned();
        match &found {
            Some(mv) => tracing::debug!(%key, book_move = %mv.san, "opening book hit"),
            None => tracing::debug!(%key, notation = %entry.notation, "book move not legal here"),
        }
        found
    }

    /// Name of the opening the history is in, or an empty string.
    ///
    /// Uses the first line, in book order, whose key is a prefix of the
    /// joined history and whose first entry carries a name.
    pub fn opening_name(&self, history: &[String]) -> String {
        let joined = history.join(" ");
        self.lines
            .iter()
            .filter(|line| joined.starts_with(line.key.as_str()))
            .find_map(|line| line.entries.first().and_then(|e| e.name.clone()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod book_tests;
