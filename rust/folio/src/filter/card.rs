//! Card snapshot and category parsing
//!
//! A `Card` is what the filter logic sees of one `.note-card` element: its raw
//! tags attribute, the text of its meta node, and its full text content. The
//! DOM layer builds these; nothing here touches the document.

use serde::{Deserialize, Serialize};

use crate::config::CATEGORY_SEPARATOR;

/// Position of a card in document order
pub type CardId = usize;

/// One listing entry, as read from the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// Raw comma-separated tags attribute, if present
    pub tags_attr: Option<String>,
    /// Text of the meta node, if the card has one
    pub meta_text: Option<String>,
    /// Entire text content of the card
    pub text: String,
}

impl Card {
    pub fn new(id: CardId, text: impl Into<String>) -> Self {
        Self {
            id,
            tags_attr: None,
            meta_text: None,
            text: text.into(),
        }
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags_attr = Some(tags.into());
        self
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta_text = Some(meta.into());
        self
    }

    /// Trimmed, non-empty tag labels in attribute order (duplicates kept)
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags_attr
            .as_deref()
            .into_iter()
            .flat_map(|attr| attr.split(','))
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    /// Derived category using the default separator
    pub fn category(&self) -> Option<String> {
        self.category_with(CATEGORY_SEPARATOR)
    }

    pub fn category_with(&self, separator: char) -> Option<String> {
        self.meta_text
            .as_deref()
            .and_then(|meta| parse_category_with(meta, separator))
    }
}

/// Category token of a meta line such as `"Security • March 2, 2025"`
///
/// First segment before the separator, trimmed and lowercased. `None` when
/// that segment is empty.
pub fn parse_category(meta_text: &str) -> Option<String> {
    parse_category_with(meta_text, CATEGORY_SEPARATOR)
}

pub fn parse_category_with(meta_text: &str, separator: char) -> Option<String> {
    let head = meta_text
        .split(separator)
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    if head.is_empty() {
        None
    } else {
        Some(head)
    }
}
