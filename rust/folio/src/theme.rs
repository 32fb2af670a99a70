//! Dark mode preference
//!
//! One boolean stored under `darkMode` as the string `"true"` or `"false"`.
//! Read once when the page loads, written once per toggle.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::FolioError;

/// Storage key for the preference
pub const DARK_MODE_KEY: &str = "darkMode";

/// Class toggled on `<body>`
pub const DARK_CLASS: &str = "dark";

pub const LABEL_WHEN_DARK: &str = "☀️ Light";
pub const LABEL_WHEN_LIGHT: &str = "🌙 Dark";

// =============================================================================
// Storage
// =============================================================================

/// String key-value storage the preference lives in
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError>;
    fn set(&self, key: &str, value: &str) -> Result<(), FolioError>;
}

/// In-memory store, for tests and pages without local storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Preference
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePreference {
    pub dark: bool,
}

impl ThemePreference {
    /// Only the exact string `"true"` means dark
    pub fn load(store: &dyn PreferenceStore) -> Result<Self, FolioError> {
        let dark = store.get(DARK_MODE_KEY)?.as_deref() == Some("true");
        Ok(Self { dark })
    }

    pub fn save(&self, store: &dyn PreferenceStore) -> Result<(), FolioError> {
        store.set(DARK_MODE_KEY, if self.dark { "true" } else { "false" })
    }

    /// Flip, persist, and return the new state
    pub fn toggle(&mut self, store: &dyn PreferenceStore) -> Result<bool, FolioError> {
        self.dark = !self.dark;
        self.save(store)?;
        Ok(self.dark)
    }

    /// Text for the toggle button: it names the mode you would switch to
    pub fn button_label(&self) -> &'static str {
        if self.dark {
            LABEL_WHEN_DARK
        } else {
            LABEL_WHEN_LIGHT
        }
    }
}
