//! Dark mode toggle bound to `<body class="dark">` and `localStorage`

use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage};

use super::{document, window};
use crate::error::FolioError;
use crate::theme::{MemoryStore, PreferenceStore, ThemePreference, DARK_CLASS};

const TOGGLE_BUTTON_ID: &str = "darkModeToggle";

/// `PreferenceStore` over the browser's local storage
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// `None` when the page has no local storage (e.g. blocked by privacy settings)
    pub fn open() -> Option<Self> {
        window()
            .ok()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(|storage| Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        self.storage
            .get_item(key)
            .map_err(|e| FolioError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| FolioError::Storage(format!("{:?}", e)))
    }
}

/// Local storage if available, otherwise a throwaway in-memory store
fn open_store() -> Box<dyn PreferenceStore> {
    match LocalStore::open() {
        Some(store) => Box::new(store),
        None => {
            web_sys::console::warn_1(&"[Theme] localStorage unavailable; preference will not persist".into());
            Box::new(MemoryStore::new())
        }
    }
}

fn body_is_dark(document: &Document) -> bool {
    document
        .body()
        .map(|body| body.class_list().contains(DARK_CLASS))
        .unwrap_or(false)
}

fn render(document: &Document, pref: ThemePreference) -> Result<(), FolioError> {
    if let Some(body) = document.body() {
        body.class_list()
            .toggle_with_force(DARK_CLASS, pref.dark)
            .map_err(FolioError::dom)?;
    }
    if let Some(button) = document.get_element_by_id(TOGGLE_BUTTON_ID) {
        button.set_text_content(Some(pref.button_label()));
    }
    Ok(())
}

/// Apply the saved preference at page load; returns whether dark mode is on
#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme() -> Result<bool, JsValue> {
    let document = document()?;
    let store = open_store();

    let pref = match ThemePreference::load(store.as_ref()) {
        Ok(pref) => pref,
        Err(e) => {
            web_sys::console::warn_1(&format!("[Theme] {}; using light mode", e).into());
            ThemePreference::default()
        }
    };
    // the saved value only ever turns dark mode on
    let pref = ThemePreference {
        dark: pref.dark || body_is_dark(&document),
    };

    render(&document, pref)?;
    Ok(pref.dark)
}

/// Flip dark mode, persist it, and relabel the toggle; returns the new state
#[wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode() -> Result<bool, JsValue> {
    let document = document()?;
    let store = open_store();

    let mut pref = ThemePreference {
        dark: body_is_dark(&document),
    };
    if let Err(e) = pref.toggle(store.as_ref()) {
        web_sys::console::warn_1(&format!("[Theme] {}; preference not saved", e).into());
    }

    render(&document, pref)?;
    Ok(pref.dark)
}
