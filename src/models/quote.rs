//! Quote hierarchy built by the quote extractor.

use std::collections::BTreeSet;

/// One quote block: the lines in speaking order and the canonical names of
/// everyone bolded as a speaker inside the block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quote {
    pub lines: Vec<String>,
    pub characters: BTreeSet<String>,
}

impl Quote {
    /// Check whether a canonical character name speaks in this quote.
    pub fn has_character(&self, name: &str) -> bool {
        self.characters.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// An episode and its quotes in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Episode {
    pub name: String,
    pub quotes: Vec<Quote>,
}

impl Episode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quotes: Vec::new(),
        }
    }
}

/// A scraped season. Episodes are kept in the order they appear on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Season {
    pub name: String,
    pub episodes: Vec<Episode>,
}

impl Season {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            episodes: Vec::new(),
        }
    }

    /// Find an episode by exact name.
    pub fn episode(&self, name: &str) -> Option<&Episode> {
        self.episodes.iter().find(|ep| ep.name == name)
    }

    /// Total number of quotes across all episodes.
    pub fn quote_count(&self) -> usize {
        self.episodes.iter().map(|ep| ep.quotes.len()).sum()
    }
}
