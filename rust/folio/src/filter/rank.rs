//! Frequency ranking

use serde::Serialize;

use super::aggregate::{FrequencyTable, TagTables};

/// Default tag cap when the caller does not pick one
pub const DEFAULT_MAX_TAGS: usize = 8;

/// Categories are always capped at this many
pub const MAX_CATEGORIES: usize = 5;

/// The `max` most frequent labels, highest count first
///
/// `sort_by` is stable, so equal counts keep the table's first-seen order.
pub fn top_n(table: &FrequencyTable, max: usize) -> Vec<String> {
    let mut ranked: Vec<&(String, usize)> = table.entries().iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(max)
        .map(|(label, _)| label.clone())
        .collect()
}

/// Ranked tags and categories, ranked independently
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PopularTokens {
    pub tags: Vec<String>,
    pub categories: Vec<String>,
}

/// Rank both tables: tags capped at `max_tags`, categories at `max_categories`
pub fn most_popular(tables: &TagTables, max_tags: usize, max_categories: usize) -> PopularTokens {
    PopularTokens {
        tags: top_n(&tables.tags, max_tags),
        categories: top_n(&tables.categories, max_categories),
    }
}
