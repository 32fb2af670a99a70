//! Filter controls as plain data
//!
//! A `ControlSet` is the full, ordered list of filter buttons with exactly
//! one (or, for an empty curated list, zero) active entry. The DOM layer
//! renders it wholesale; it never patches individual buttons.

use serde::{Deserialize, Serialize};

use super::aggregate::aggregate;
use super::card::Card;
use super::rank::{most_popular, PopularTokens};
use crate::config::{CuratedEntry, FolioConfig, RenderMode, ALL_TOKEN};

/// One clickable filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterControl {
    pub token: String,
    pub label: String,
    pub active: bool,
}

impl FilterControl {
    fn new(token: &str, label: &str) -> Self {
        Self {
            token: token.to_string(),
            label: label.to_string(),
            active: false,
        }
    }
}

/// Ordered controls with mutually exclusive activation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSet {
    controls: Vec<FilterControl>,
}

impl ControlSet {
    /// "All", then ranked categories, then ranked tags
    pub fn ranked(popular: &PopularTokens) -> Self {
        let mut controls = vec![FilterControl::new(ALL_TOKEN, "All")];
        controls.extend(
            popular
                .categories
                .iter()
                .chain(popular.tags.iter())
                .map(|token| FilterControl::new(token, &capitalize_first(token))),
        );

        let mut set = Self { controls };
        set.activate(0);
        set
    }

    /// The curated list verbatim; its first entry starts active
    pub fn curated(entries: &[CuratedEntry]) -> Self {
        let controls = entries
            .iter()
            .map(|entry| FilterControl::new(&entry.token, &entry.label))
            .collect();

        let mut set = Self { controls };
        set.activate(0);
        set
    }

    /// Build the set for `config.mode` from the current cards
    ///
    /// Curated mode ignores `cards` entirely.
    pub fn build(cards: &[Card], config: &FolioConfig) -> Self {
        match config.mode {
            RenderMode::Ranked => {
                let tables = aggregate(cards, config.category_separator);
                let popular = most_popular(&tables, config.max_tags, config.max_categories);
                Self::ranked(&popular)
            }
            RenderMode::Curated => Self::curated(&config.curated),
        }
    }

    /// Make control `index` the only active one
    ///
    /// Returns the activated token, or `None` (and no change) when out of range.
    pub fn activate(&mut self, index: usize) -> Option<&str> {
        if index >= self.controls.len() {
            return None;
        }
        for (i, control) in self.controls.iter_mut().enumerate() {
            control.active = i == index;
        }
        Some(&self.controls[index].token)
    }

    /// Activate the first control carrying `token`
    pub fn activate_token(&mut self, token: &str) -> Option<&str> {
        let index = self.controls.iter().position(|c| c.token == token)?;
        self.activate(index)
    }

    /// Token of the active control, `"all"` when none is active
    pub fn active_token(&self) -> &str {
        self.controls
            .iter()
            .find(|c| c.active)
            .map(|c| c.token.as_str())
            .unwrap_or(ALL_TOKEN)
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    pub fn tokens(&self) -> Vec<&str> {
        self.controls.iter().map(|c| c.token.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
