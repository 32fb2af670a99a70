//! Browser bindings
//!
//! Everything that reads or writes the live document lives under here; the
//! modules above it only ever see `Card` snapshots and plain data.

pub mod navigation;
pub mod notes;
pub mod theme;

pub use navigation::*;
pub use notes::*;
pub use theme::*;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::error::FolioError;

pub(crate) fn window() -> Result<Window, FolioError> {
    web_sys::window().ok_or(FolioError::NoDocument)
}

pub(crate) fn document() -> Result<Document, FolioError> {
    window()?.document().ok_or(FolioError::NoDocument)
}

/// All elements matching `selector`, in document order
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, FolioError> {
    let list = document
        .query_selector_all(selector)
        .map_err(FolioError::dom)?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Remove `class` from every element matching `selector`
pub(crate) fn remove_class_all(document: &Document, selector: &str, class: &str) -> Result<(), FolioError> {
    for element in query_all(document, selector)? {
        element.class_list().remove_1(class).map_err(FolioError::dom)?;
    }
    Ok(())
}
