//! Notes listing page: filter controls, tag filter, and search
//!
//! The host calls `mount()` (or `cardsReady()`) once the card list is in the
//! document. Mounting renders the filter controls and hooks the search input;
//! every click or keystroke after that recomputes visibility for all cards.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

use super::{document, query_all};
use crate::config::{FolioConfig, RenderMode};
use crate::error::FolioError;
use crate::filter::apply::{compute_visibility_with, FilterState};
use crate::filter::card::Card;
use crate::filter::controls::ControlSet;

const ACTIVE_CLASS: &str = "active";

type Listener = Closure<dyn FnMut(Event)>;

// =============================================================================
// Page State
// =============================================================================

struct PageState {
    config: FolioConfig,
    document: Document,
    controls: RefCell<ControlSet>,
    /// One per rendered control; replaced wholesale on re-render
    control_listeners: RefCell<Vec<Listener>>,
    search_listener: RefCell<Option<Listener>>,
}

impl PageState {
    /// Read every card element into a snapshot, keeping the element alongside
    fn scan_cards(&self) -> Result<Vec<(Element, Card)>, FolioError> {
        let elements = query_all(&self.document, &self.config.card_selector)?;

        Ok(elements
            .into_iter()
            .enumerate()
            .map(|(id, element)| {
                let meta_text = element
                    .query_selector(&self.config.meta_selector)
                    .ok()
                    .flatten()
                    .and_then(|meta| meta.text_content());

                let card = Card {
                    id,
                    tags_attr: element.get_attribute(&self.config.tags_attribute),
                    meta_text,
                    text: element.text_content().unwrap_or_default(),
                };
                (element, card)
            })
            .collect())
    }

    /// Recompute and write visibility for every card; returns how many are shown
    fn apply(&self, state: &FilterState) -> Result<usize, FolioError> {
        let started = Instant::now();
        let pairs = self.scan_cards()?;
        let cards: Vec<Card> = pairs.iter().map(|(_, card)| card.clone()).collect();

        let vis = compute_visibility_with(&cards, state, self.config.category_separator);

        for ((element, _), (_, shown)) in pairs.iter().zip(vis.iter()) {
            if let Some(html) = element.dyn_ref::<HtmlElement>() {
                html.style()
                    .set_property("display", if shown { "block" } else { "none" })
                    .map_err(FolioError::dom)?;
            }
        }

        web_sys::console::log_1(
            &format!(
                "[NotesPage] tag={:?} search={:?}: {}/{} cards shown ({:.2}ms)",
                state.selected_tag,
                state.search_term,
                vis.visible_count(),
                vis.len(),
                started.elapsed().as_secs_f64() * 1000.0
            )
            .into(),
        );

        Ok(vis.visible_count())
    }

    fn container(&self) -> Option<Element> {
        self.document
            .query_selector(&self.config.container_selector)
            .ok()
            .flatten()
    }

    /// Rendered control elements, in container order
    fn control_elements(&self, container: &Element) -> Vec<Element> {
        let selector = format!(".{}", self.config.control_class);
        match container.query_selector_all(&selector) {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Rebuild the control set and re-render the container from it
    fn render_filters(self: &Rc<Self>) -> Result<usize, FolioError> {
        let Some(container) = self.container() else {
            return Ok(0);
        };

        let cards: Vec<Card> = match self.config.mode {
            RenderMode::Ranked => self.scan_cards()?.into_iter().map(|(_, c)| c).collect(),
            RenderMode::Curated => Vec::new(),
        };
        let set = ControlSet::build(&cards, &self.config);

        container.set_inner_html("");
        let mut listeners = Vec::with_capacity(set.len());

        for (index, control) in set.controls().iter().enumerate() {
            let button = self.document.create_element("button").map_err(FolioError::dom)?;
            let class = if control.active {
                format!("{} {}", self.config.control_class, ACTIVE_CLASS)
            } else {
                self.config.control_class.clone()
            };
            button.set_class_name(&class);
            button
                .set_attribute(&self.config.token_attribute, &control.token)
                .map_err(FolioError::dom)?;
            button.set_text_content(Some(&control.label));

            let weak: Weak<PageState> = Rc::downgrade(self);
            let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                if let Some(state) = weak.upgrade() {
                    if let Err(e) = state.on_control_click(index) {
                        web_sys::console::error_1(&format!("[NotesPage] Filter click failed: {}", e).into());
                    }
                }
            });
            button
                .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref::<js_sys::Function>())
                .map_err(FolioError::dom)?;

            container.append_child(&button).map_err(FolioError::dom)?;
            listeners.push(listener);
        }

        let count = set.len();
        web_sys::console::log_1(
            &format!("[NotesPage] Rendered {} filter controls ({:?} mode)", count, self.config.mode).into(),
        );

        *self.controls.borrow_mut() = set;
        *self.control_listeners.borrow_mut() = listeners;
        Ok(count)
    }

    /// Mirror the control set's active flags onto the rendered buttons
    fn sync_active(&self) -> Result<(), FolioError> {
        let Some(container) = self.container() else {
            return Ok(());
        };
        let controls = self.controls.borrow();

        for (element, control) in self.control_elements(&container).iter().zip(controls.controls()) {
            element
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, control.active)
                .map_err(FolioError::dom)?;
        }
        Ok(())
    }

    fn on_control_click(&self, index: usize) -> Result<(), FolioError> {
        let token = self.controls.borrow_mut().activate(index).map(str::to_string);

        if let Some(token) = token {
            self.sync_active()?;
            self.apply(&FilterState::tag_only(token))?;
        }
        Ok(())
    }

    fn search_input(&self) -> Option<HtmlInputElement> {
        self.document
            .get_element_by_id(&self.config.search_input_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    }

    fn filter_notes(&self) -> Result<usize, FolioError> {
        let search_term = self.search_input().map(|i| i.value()).unwrap_or_default();
        let selected_tag = self.controls.borrow().active_token().to_string();
        self.apply(&FilterState::new(selected_tag, search_term))
    }

    /// Hook the search input; re-attaching replaces the previous listener
    fn attach_search(self: &Rc<Self>) -> Result<bool, FolioError> {
        let Some(input) = self.search_input() else {
            return Ok(false);
        };

        if let Some(previous) = self.search_listener.borrow_mut().take() {
            input
                .remove_event_listener_with_callback("input", previous.as_ref().unchecked_ref::<js_sys::Function>())
                .map_err(FolioError::dom)?;
        }

        let weak: Weak<PageState> = Rc::downgrade(self);
        let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Some(state) = weak.upgrade() {
                if let Err(e) = state.filter_notes() {
                    web_sys::console::error_1(&format!("[NotesPage] Search failed: {}", e).into());
                }
            }
        });
        input
            .add_event_listener_with_callback("input", listener.as_ref().unchecked_ref::<js_sys::Function>())
            .map_err(FolioError::dom)?;

        *self.search_listener.borrow_mut() = Some(listener);
        Ok(true)
    }
}

// =============================================================================
// NotesPage (JS binding)
// =============================================================================

/// Controller for the notes listing page
#[wasm_bindgen]
pub struct NotesPage {
    state: Rc<PageState>,
}

#[wasm_bindgen]
impl NotesPage {
    /// `config` is an optional partial `FolioConfig` object
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<NotesPage, JsValue> {
        let config = FolioConfig::from_js(config)?;
        let controls = ControlSet::build(&[], &config);

        Ok(NotesPage {
            state: Rc::new(PageState {
                config,
                document: document()?,
                controls: RefCell::new(controls),
                control_listeners: RefCell::new(Vec::new()),
                search_listener: RefCell::new(None),
            }),
        })
    }

    /// Cards are in the document: render the filters and hook the search box
    #[wasm_bindgen]
    pub fn mount(&self) -> Result<(), JsValue> {
        let rendered = self.state.render_filters()?;
        let searchable = self.state.attach_search()?;

        if rendered == 0 {
            web_sys::console::warn_1(&"[NotesPage] No filter container; controls skipped".into());
        }
        if !searchable {
            web_sys::console::warn_1(&"[NotesPage] No search input; search disabled".into());
        }
        Ok(())
    }

    /// Rebuild the filter controls; returns how many were rendered
    #[wasm_bindgen(js_name = renderFilters)]
    pub fn render_filters(&self) -> Result<usize, JsValue> {
        Ok(self.state.render_filters()?)
    }

    /// Combined search + active tag filter; returns the visible card count
    #[wasm_bindgen(js_name = filterNotes)]
    pub fn filter_notes(&self) -> Result<usize, JsValue> {
        Ok(self.state.filter_notes()?)
    }

    /// Tag-only filter; returns the visible card count
    #[wasm_bindgen(js_name = filterByTag)]
    pub fn filter_by_tag(&self, tag: &str) -> Result<usize, JsValue> {
        Ok(self.state.apply(&FilterState::tag_only(tag))?)
    }

    /// Activate the control carrying `tag` and filter by it
    #[wasm_bindgen(js_name = selectTag)]
    pub fn select_tag(&self, tag: &str) -> Result<bool, JsValue> {
        let found = self.state.controls.borrow_mut().activate_token(tag).is_some();
        if found {
            self.state.sync_active()?;
            self.state.apply(&FilterState::tag_only(tag))?;
        }
        Ok(found)
    }

    #[wasm_bindgen(js_name = activeTag)]
    pub fn active_tag(&self) -> String {
        self.state.controls.borrow().active_token().to_string()
    }
}

/// Build a `NotesPage` and mount it in one call
#[wasm_bindgen(js_name = cardsReady)]
pub fn cards_ready(config: JsValue) -> Result<NotesPage, JsValue> {
    let page = NotesPage::new(config)?;
    page.mount()?;
    Ok(page)
}
