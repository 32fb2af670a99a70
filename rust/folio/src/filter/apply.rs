//! Card visibility decisions
//!
//! `compute_visibility` is a pure function of the cards and a `FilterState`;
//! every page event recomputes it from scratch. Writing the result to the
//! document is the DOM layer's job.
//!
//! Tag matching is a substring test against the raw tags attribute while
//! category matching is exact equality, so the token `"sec"` selects a card
//! tagged `"security"` but not a card whose category is `"security"`. Both
//! halves are kept as they are.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::card::{Card, CardId};
use crate::config::{ALL_TOKEN, CATEGORY_SEPARATOR};

/// Everything that decides visibility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    pub selected_tag: String,
    pub search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_tag: ALL_TOKEN.to_string(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    pub fn new(selected_tag: impl Into<String>, search_term: impl Into<String>) -> Self {
        Self {
            selected_tag: selected_tag.into(),
            search_term: search_term.into(),
        }
    }

    /// Tag-only filtering: the search term matches everything
    pub fn tag_only(selected_tag: impl Into<String>) -> Self {
        Self::new(selected_tag, "")
    }
}

/// Per-card shown/hidden flags, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Visibility {
    shown: Vec<(CardId, bool)>,
}

impl Visibility {
    pub fn is_visible(&self, id: CardId) -> bool {
        self.shown
            .iter()
            .any(|&(card, visible)| card == id && visible)
    }

    /// Ids of visible cards
    pub fn visible_ids(&self) -> BTreeSet<CardId> {
        self.shown
            .iter()
            .filter(|(_, visible)| *visible)
            .map(|(id, _)| *id)
            .collect()
    }

    /// (id, shown) pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (CardId, bool)> + '_ {
        self.shown.iter().copied()
    }

    pub fn visible_count(&self) -> usize {
        self.shown.iter().filter(|(_, visible)| *visible).count()
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}

/// Case-insensitive substring test over the card's whole text
pub fn matches_search(card: &Card, term: &str) -> bool {
    card.text.to_lowercase().contains(&term.to_lowercase())
}

/// `all`, a substring of the raw tags attribute, or the exact category
pub fn matches_tag(card: &Card, token: &str, separator: char) -> bool {
    if token == ALL_TOKEN {
        return true;
    }

    let tags = card.tags_attr.as_deref().unwrap_or_default();
    tags.contains(token) || card.category_with(separator).as_deref() == Some(token)
}

/// Decide visibility for every card under `state`
pub fn compute_visibility(cards: &[Card], state: &FilterState) -> Visibility {
    compute_visibility_with(cards, state, CATEGORY_SEPARATOR)
}

pub fn compute_visibility_with(cards: &[Card], state: &FilterState, separator: char) -> Visibility {
    let shown = cards
        .iter()
        .map(|card| {
            let visible = matches_search(card, &state.search_term)
                && matches_tag(card, &state.selected_tag, separator);
            (card.id, visible)
        })
        .collect();

    Visibility { shown }
}
