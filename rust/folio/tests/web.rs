//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use folio::dom::{cards_ready, init_theme, show_section, toggle_dark_mode, NotesPage};
use folio::filter::wasm::FilterEngine;
use folio::theme::DARK_MODE_KEY;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn setup_notes_page() {
    let body = document().body().unwrap();
    body.set_inner_html(
        r#"
        <input id="searchInput" value="">
        <div class="filter-tags"></div>
        <div class="note-card" data-tags="security, linux">
            <div class="note-meta">Security • Jan 2025</div>
            Hardening SSH keys
        </div>
        <div class="note-card" data-tags="kubernetes, helm">
            <div class="note-meta">DevOps • Feb 2025</div>
            Helm charts for beginners
        </div>
        <div class="note-card">
            Untagged scratch note
        </div>
        "#,
    );
}

/// Plain JS object; serde maps would arrive as a `Map`, which struct fields ignore
fn js_object(pairs: &[(&str, JsValue)]) -> JsValue {
    let obj = Object::new();
    for (key, value) in pairs {
        Reflect::set(&obj, &JsValue::from_str(key), value).unwrap();
    }
    obj.into()
}

fn tag_buttons() -> Vec<Element> {
    let list = document().query_selector_all(".filter-tags .tag-btn").unwrap();
    (0..list.length())
        .map(|i| list.item(i).unwrap().dyn_into::<Element>().unwrap())
        .collect()
}

fn button_tokens() -> Vec<String> {
    tag_buttons()
        .iter()
        .map(|b| b.get_attribute("data-tag").unwrap())
        .collect()
}

fn search_for(term: &str) {
    let input = document()
        .get_element_by_id("searchInput")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    input.set_value(term);
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
}

fn displays() -> Vec<String> {
    let cards = document().query_selector_all(".note-card").unwrap();
    (0..cards.length())
        .map(|i| {
            cards
                .item(i)
                .unwrap()
                .dyn_into::<HtmlElement>()
                .unwrap()
                .style()
                .get_property_value("display")
                .unwrap()
        })
        .collect()
}

#[wasm_bindgen_test]
fn curated_controls_render_with_first_active() {
    setup_notes_page();
    let _page = cards_ready(JsValue::UNDEFINED).unwrap();

    let buttons = document().query_selector_all(".filter-tags .tag-btn").unwrap();
    assert_eq!(buttons.length(), 7);

    let active = document().query_selector_all(".tag-btn.active").unwrap();
    assert_eq!(active.length(), 1);
}

#[wasm_bindgen_test]
fn rerender_does_not_duplicate_controls() {
    setup_notes_page();
    let page = cards_ready(JsValue::UNDEFINED).unwrap();
    page.render_filters().unwrap();
    page.render_filters().unwrap();

    let buttons = document().query_selector_all(".tag-btn").unwrap();
    assert_eq!(buttons.length(), 7);
}

#[wasm_bindgen_test]
fn select_tag_hides_non_matching_cards() {
    setup_notes_page();
    let page = cards_ready(JsValue::UNDEFINED).unwrap();

    assert!(page.select_tag("devops").unwrap());
    assert_eq!(page.active_tag(), "devops");
    assert_eq!(displays(), vec!["none", "block", "none"]);

    page.filter_by_tag("all").unwrap();
    assert_eq!(displays(), vec!["block", "block", "block"]);
}

#[wasm_bindgen_test]
fn ranked_mode_derives_controls_from_cards() {
    setup_notes_page();
    let config = js_object(&[("mode", JsValue::from_str("ranked"))]);
    let page = NotesPage::new(config).unwrap();
    page.mount().unwrap();

    // All, categories by frequency, then tags by frequency
    assert_eq!(
        button_tokens(),
        vec!["all", "security", "devops", "security", "linux", "kubernetes", "helm"]
    );
    assert_eq!(page.active_tag(), "all");
}

#[wasm_bindgen_test]
fn clicking_a_control_activates_it_and_filters() {
    setup_notes_page();
    let page = cards_ready(JsValue::UNDEFINED).unwrap();

    let buttons = tag_buttons();
    buttons[2].dyn_ref::<HtmlElement>().unwrap().click();

    let active = document().query_selector_all(".tag-btn.active").unwrap();
    assert_eq!(active.length(), 1);
    let active = active.item(0).unwrap().dyn_into::<Element>().unwrap();
    assert_eq!(active, buttons[2]);
    assert_eq!(active.get_attribute("data-tag").as_deref(), Some("devops"));

    assert_eq!(page.active_tag(), "devops");
    assert_eq!(displays(), vec!["none", "block", "none"]);
}

#[wasm_bindgen_test]
fn search_input_combines_with_active_control() {
    setup_notes_page();
    let _page = cards_ready(JsValue::UNDEFINED).unwrap();

    search_for("ssh");
    assert_eq!(displays(), vec!["block", "none", "none"]);

    tag_buttons()[2].dyn_ref::<HtmlElement>().unwrap().click();
    search_for("helm");
    assert_eq!(displays(), vec!["none", "block", "none"]);

    // devops is still active, so the security card stays hidden
    search_for("ssh");
    assert_eq!(displays(), vec!["none", "none", "none"]);
}

#[wasm_bindgen_test]
fn filter_engine_returns_plain_objects() {
    let mut engine = FilterEngine::new(JsValue::UNDEFINED).unwrap();

    let cards = Array::new();
    cards.push(&js_object(&[
        ("id", JsValue::from_f64(0.0)),
        ("tagsAttr", JsValue::from_str("docker, linux")),
        ("metaText", JsValue::from_str("DevOps • Jan")),
        ("text", JsValue::from_str("Writing a Dockerfile")),
    ]));
    cards.push(&js_object(&[
        ("id", JsValue::from_f64(1.0)),
        ("tagsAttr", JsValue::from_str("linux")),
        ("text", JsValue::from_str("Shell tricks")),
    ]));
    engine.set_cards(cards.into()).unwrap();
    assert_eq!(engine.card_count(), 2);

    let popular = engine.popular_tokens().unwrap();
    let tags = Reflect::get(&popular, &"tags".into()).unwrap();
    assert!(Array::is_array(&tags));
    let tags: Vec<String> = Array::from(&tags).iter().filter_map(|v| v.as_string()).collect();
    assert_eq!(tags, vec!["linux", "docker"]);
    let categories = Reflect::get(&popular, &"categories".into()).unwrap();
    assert!(Array::is_array(&categories));

    let state = js_object(&[("selectedTag", JsValue::from_str("docker"))]);
    assert_eq!(engine.visible_ids(state).unwrap(), vec![0]);
}

#[wasm_bindgen_test]
fn dark_mode_toggle_round_trips() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.set_item(DARK_MODE_KEY, "false").unwrap();
    document().body().unwrap().set_class_name("");

    assert!(!init_theme().unwrap());
    assert!(toggle_dark_mode().unwrap());
    assert_eq!(storage.get_item(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    assert!(!toggle_dark_mode().unwrap());
    assert_eq!(storage.get_item(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn show_section_injects_cv() {
    document().body().unwrap().set_inner_html(
        r#"<div id="intro" class="section active"><div id="intro-content"></div></div>
           <div id="cv" class="section"><div id="cv-content"></div></div>"#,
    );
    show_section("cv", None).unwrap();

    let cv = document().get_element_by_id("cv").unwrap();
    assert!(cv.class_list().contains("active"));
    let content = document().get_element_by_id("cv-content").unwrap();
    assert!(content.inner_html().contains("section-title"));
}
