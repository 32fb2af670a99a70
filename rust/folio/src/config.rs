//! Configuration types and defaults for the notes page
//!
//! Every field has a default matching the shipped markup, so JS may pass a
//! partial object (or nothing at all).

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::FolioError;

/// Token reserved for the "match every card" control
pub const ALL_TOKEN: &str = "all";

/// Glyph separating the category from the rest of a card's meta line
pub const CATEGORY_SEPARATOR: char = '•';

// =============================================================================
// Render Mode
// =============================================================================

/// Strategy used to build the filter controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Top categories and tags observed in the card list
    Ranked,
    /// Fixed list, independent of page content
    #[default]
    Curated,
}

// =============================================================================
// Curated Entries
// =============================================================================

/// One (token, label) pair of the curated control list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedEntry {
    pub token: String,
    pub label: String,
}

impl CuratedEntry {
    pub fn new(token: &str, label: &str) -> Self {
        Self {
            token: token.to_string(),
            label: label.to_string(),
        }
    }
}

/// The shipped curated list
pub fn default_curated() -> Vec<CuratedEntry> {
    vec![
        CuratedEntry::new(ALL_TOKEN, "All"),
        CuratedEntry::new("security", "Security"),
        CuratedEntry::new("devops", "DevOps"),
        CuratedEntry::new("kubernetes", "Kubernetes"),
        CuratedEntry::new("docker", "Docker"),
        CuratedEntry::new("programming", "Programming"),
        CuratedEntry::new("networking", "Networking"),
    ]
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Notes page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FolioConfig {
    /// Filter control strategy. Default: curated
    pub mode: RenderMode,
    /// Max tags shown in ranked mode. Default: 6
    pub max_tags: usize,
    /// Max categories shown in ranked mode. Default: 5
    pub max_categories: usize,
    /// Separator between category and the rest of the meta line. Default: '•'
    pub category_separator: char,
    /// Controls emitted in curated mode, in order
    pub curated: Vec<CuratedEntry>,

    // ===== SELECTORS =====
    /// Card elements. Default: ".note-card"
    pub card_selector: String,
    /// Meta node inside a card. Default: ".note-meta"
    pub meta_selector: String,
    /// Card attribute holding comma-separated tags. Default: "data-tags"
    pub tags_attribute: String,
    /// Container the controls are rendered into. Default: ".filter-tags"
    pub container_selector: String,
    /// Class of each rendered control. Default: "tag-btn"
    pub control_class: String,
    /// Attribute carrying a control's token. Default: "data-tag"
    pub token_attribute: String,
    /// Id of the free-text search input. Default: "searchInput"
    pub search_input_id: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Curated,
            max_tags: 6,
            max_categories: 5,
            category_separator: CATEGORY_SEPARATOR,
            curated: default_curated(),
            card_selector: ".note-card".to_string(),
            meta_selector: ".note-meta".to_string(),
            tags_attribute: "data-tags".to_string(),
            container_selector: ".filter-tags".to_string(),
            control_class: "tag-btn".to_string(),
            token_attribute: "data-tag".to_string(),
            search_input_id: "searchInput".to_string(),
        }
    }
}

impl FolioConfig {
    /// Parse a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        serde_json::from_str(json).map_err(|e| FolioError::Config(e.to_string()))
    }

    /// Parse a config object handed over from JS; `undefined`/`null` means defaults
    pub fn from_js(value: JsValue) -> Result<Self, FolioError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| FolioError::Config(e.to_string()))
    }
}
