//! Folio: portfolio page logic
//!
//! A Rust/WASM implementation of the portfolio site's client-side behavior.
//!
//! # Architecture
//!
//! ## Filter Core (no DOM access)
//! - `filter/card.rs` - Card snapshot + `parse_category`
//! - `filter/aggregate.rs` - Tag and category frequency tables
//! - `filter/rank.rs` - Top-N ranking (stable on ties)
//! - `filter/controls.rs` - Declarative filter controls (ranked / curated)
//! - `filter/apply.rs` - `compute_visibility(cards, &FilterState)`
//!
//! ## Page Collaborators
//! - `content.rs` - About Me / CV fragments
//! - `navigation.rs` - Tab state
//! - `theme.rs` - Dark mode preference + storage trait
//!
//! ## Browser Bindings
//! - `dom/notes.rs` - NotesPage: renders controls, wires clicks and search
//! - `dom/navigation.rs` - showSection
//! - `dom/theme.rs` - initTheme / toggleDarkMode over localStorage
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { cardsReady, initTheme, initNavigation, showSection } from 'folio';
//!
//! await init();
//! initNavigation();
//! initTheme();
//!
//! // once the note cards are in the DOM
//! const page = cardsReady({ mode: 'curated' });
//! page.selectTag('devops');
//! ```

pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod filter;
pub mod navigation;
pub mod theme;

pub use config::*;
pub use error::FolioError;
pub use filter::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("folio v{}", env!("CARGO_PKG_VERSION"))
}
