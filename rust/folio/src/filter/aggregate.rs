//! Tag and category frequency tables
//!
//! Built fresh from the current card snapshot on every call; nothing is
//! cached between page events.

use serde::Serialize;
use std::collections::HashMap;

use super::card::Card;

// =============================================================================
// Frequency Table
// =============================================================================

/// Label -> count, remembering the order labels were first seen
///
/// Insertion order is what the ranker falls back on for ties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `label`
    pub fn increment(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
            }
        }
    }

    pub fn count(&self, label: &str) -> usize {
        self.index
            .get(label)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Tag and category tables for one snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagTables {
    pub tags: FrequencyTable,
    pub categories: FrequencyTable,
}

/// Count tags and categories across `cards`
///
/// A tag repeated on one card counts once per repetition. Cards without a
/// tags attribute or meta node simply contribute nothing.
pub fn aggregate(cards: &[Card], separator: char) -> TagTables {
    let mut tables = TagTables::default();

    for card in cards {
        for tag in card.tags() {
            tables.tags.increment(tag);
        }

        if let Some(category) = card.category_with(separator) {
            tables.categories.increment(&category);
        }
    }

    tables
}
