//! WASM bindings for the text comparison tool
//!
//! This module provides a stateful, session-based API for comparing two
//! texts. All state is held in Rust, minimizing JavaScript complexity.
//!
//! ## Architecture
//!
//! - Source texts and the derived comparison live in Rust via
//!   `CompareSession`
//! - Tokenization, alignment, and statistics come from `textcompare-core`
//! - JavaScript only handles DOM events (text edits, the Copy Results and
//!   Clear All buttons) and renders the returned values
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { CompareSession, displayToken, formatSimilarity } from './pkg/textcompare_wasm.js';
//!
//! await init();
//!
//! const session = new CompareSession();
//! session.setFirstText(firstTextarea.value);
//! session.setSecondText(secondTextarea.value);
//!
//! const stats = session.stats();
//! similarityEl.textContent = formatSimilarity(stats.similarity_percent) + '%';
//! for (const pair of session.pairs()) {
//!     renderRow(displayToken(pair.left), displayToken(pair.right), pair.differs);
//! }
//!
//! await session.copyReport(); // "Copy Results"
//! session.clearAll();         // "Clear All"
//! ```

pub mod clipboard;
pub mod display;
pub mod session;

use wasm_bindgen::prelude::*;

// Re-export main types for JavaScript
pub use session::CompareSession;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// One-shot comparison without creating a session
/// Returns `{ pairs: [...], stats: {...} }`
#[wasm_bindgen(js_name = compareTexts)]
pub fn compare_texts(first: &str, second: &str) -> Result<JsValue, JsValue> {
    let comparison = textcompare_core::compare(first, second);

    serde_wasm_bindgen::to_value(&comparison)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
