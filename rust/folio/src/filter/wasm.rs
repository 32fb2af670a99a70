use wasm_bindgen::prelude::*;

use crate::config::FolioConfig;
use crate::filter::aggregate::aggregate;
use crate::filter::apply::{compute_visibility_with, FilterState};
use crate::filter::card::Card;
use crate::filter::controls::ControlSet;
use crate::filter::rank::most_popular;

/// DOM-free filter engine for hosts that render cards themselves
///
/// Cards and states cross the boundary as plain JS objects:
/// `{ id, tagsAttr?, metaText?, text }` and `{ selectedTag, searchTerm }`.
#[wasm_bindgen]
pub struct FilterEngine {
    config: FolioConfig,
    cards: Vec<Card>,
}

#[wasm_bindgen]
impl FilterEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FilterEngine, JsValue> {
        let config = FolioConfig::from_js(config)?;
        Ok(FilterEngine {
            config,
            cards: Vec::new(),
        })
    }

    /// Replace the card snapshot
    #[wasm_bindgen(js_name = setCards)]
    pub fn set_cards(&mut self, cards: JsValue) -> Result<(), JsValue> {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct CardData {
            id: usize,
            tags_attr: Option<String>,
            meta_text: Option<String>,
            #[serde(default)]
            text: String,
        }

        let data: Vec<CardData> = serde_wasm_bindgen::from_value(cards)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse cards: {}", e)))?;

        self.cards = data
            .into_iter()
            .map(|c| Card {
                id: c.id,
                tags_attr: c.tags_attr,
                meta_text: c.meta_text,
                text: c.text,
            })
            .collect();
        Ok(())
    }

    #[wasm_bindgen(js_name = cardCount)]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Ranked tags and categories: `{ tags: string[], categories: string[] }`
    #[wasm_bindgen(js_name = popularTokens)]
    pub fn popular_tokens(&self) -> Result<JsValue, JsValue> {
        let tables = aggregate(&self.cards, self.config.category_separator);
        let popular = most_popular(&tables, self.config.max_tags, self.config.max_categories);

        serde_wasm_bindgen::to_value(&popular).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Controls for the configured mode: `[{ token, label, active }]`
    #[wasm_bindgen]
    pub fn controls(&self) -> Result<JsValue, JsValue> {
        let set = ControlSet::build(&self.cards, &self.config);
        serde_wasm_bindgen::to_value(set.controls()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Ids of the cards visible under `state`
    #[wasm_bindgen(js_name = visibleIds)]
    pub fn visible_ids(&self, state: JsValue) -> Result<Vec<u32>, JsValue> {
        let state: FilterState = serde_wasm_bindgen::from_value(state)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse filter state: {}", e)))?;

        let vis = compute_visibility_with(&self.cards, &state, self.config.category_separator);
        Ok(vis.visible_ids().into_iter().map(|id| id as u32).collect())
    }
}
