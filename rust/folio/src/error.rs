//! Crate error type
//!
//! Missing page elements are not errors (they are silent no-ops). This enum
//! only covers host failures: no browser globals, DOM calls that threw, and
//! configuration that could not be parsed.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum FolioError {
    /// `window` or `document` is not available (not running in a page)
    NoDocument,
    /// A DOM call threw; carries the stringified JS exception
    Dom(String),
    /// Configuration passed from JS did not deserialize
    Config(String),
    /// Local storage exists but a read or write failed
    Storage(String),
}

impl std::fmt::Display for FolioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FolioError::NoDocument => write!(f, "No browser document available"),
            FolioError::Dom(msg) => write!(f, "DOM error: {}", msg),
            FolioError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            FolioError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for FolioError {}

impl From<FolioError> for JsValue {
    fn from(e: FolioError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

impl FolioError {
    /// Wrap a thrown JS value as a DOM error
    pub fn dom(value: JsValue) -> Self {
        FolioError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
