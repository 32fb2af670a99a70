//! Tab navigation between the About Me and CV sections

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::{document, remove_class_all};
use crate::error::FolioError;
use crate::navigation::Navigator;

const ACTIVE_CLASS: &str = "active";
const SECTION_SELECTOR: &str = ".section";
const NAV_BUTTON_SELECTOR: &str = ".nav-btn";

thread_local! {
    static NAVIGATOR: RefCell<Navigator> = RefCell::new(Navigator::new());
}

fn inject(document: &Document, container_id: &str, html: &str) {
    match document.get_element_by_id(container_id) {
        Some(container) => container.set_inner_html(html),
        None => web_sys::console::warn_1(&format!("[Navigation] Missing #{}", container_id).into()),
    }
}

fn show(document: &Document, section_id: &str, trigger: Option<&Element>) -> Result<(), FolioError> {
    let update = NAVIGATOR.with(|nav| nav.borrow_mut().show(section_id));

    remove_class_all(document, SECTION_SELECTOR, ACTIVE_CLASS)?;
    remove_class_all(document, NAV_BUTTON_SELECTOR, ACTIVE_CLASS)?;

    if let Some(section) = document.get_element_by_id(&update.section_id) {
        section.class_list().add_1(ACTIVE_CLASS).map_err(FolioError::dom)?;
    }
    if let Some(button) = trigger {
        button.class_list().add_1(ACTIVE_CLASS).map_err(FolioError::dom)?;
    }
    if let Some((container_id, html)) = update.inject {
        inject(document, container_id, html);
    }
    Ok(())
}

/// Show `section_id`, marking `trigger` (the clicked nav button) active
#[wasm_bindgen(js_name = showSection)]
pub fn show_section(section_id: &str, trigger: Option<Element>) -> Result<(), JsValue> {
    let document = document()?;
    show(&document, section_id, trigger.as_ref())?;
    Ok(())
}

/// Load the intro content; call on DOMContentLoaded
#[wasm_bindgen(js_name = initNavigation)]
pub fn init_navigation() -> Result<(), JsValue> {
    let document = document()?;
    let (container_id, html) = Navigator::initial_content();
    inject(&document, container_id, html);
    Ok(())
}

/// Id of the section currently shown
#[wasm_bindgen(js_name = activeSection)]
pub fn active_section() -> String {
    NAVIGATOR.with(|nav| nav.borrow().active().to_string())
}
