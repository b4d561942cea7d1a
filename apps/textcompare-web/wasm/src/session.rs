//! Stateful comparison session
//!
//! Holds the two source texts and the comparison derived from them. The
//! setters skip recomputation when the incoming text matches what is
//! already stored, so the host page can forward every keystroke.

use crate::clipboard;
use textcompare_core::{compare, render_report, Comparison};
use wasm_bindgen::prelude::*;

/// Stateful comparison session holding both source texts in Rust memory
#[wasm_bindgen]
pub struct CompareSession {
    first_text: String,
    second_text: String,
    comparison: Comparison,
}

#[wasm_bindgen]
impl CompareSession {
    /// Create a session with both texts empty
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            first_text: String::new(),
            second_text: String::new(),
            comparison: compare("", ""),
        }
    }

    /// Get the first source text
    #[wasm_bindgen(getter, js_name = firstText)]
    pub fn first_text(&self) -> String {
        self.first_text.clone()
    }

    /// Get the second source text
    #[wasm_bindgen(getter, js_name = secondText)]
    pub fn second_text(&self) -> String {
        self.second_text.clone()
    }

    /// Replace the first source text, recomputing only on change
    #[wasm_bindgen(js_name = setFirstText)]
    pub fn set_first_text(&mut self, text: &str) {
        if self.first_text != text {
            self.first_text = text.to_string();
            self.recompute();
        }
    }

    /// Replace the second source text, recomputing only on change
    #[wasm_bindgen(js_name = setSecondText)]
    pub fn set_second_text(&mut self, text: &str) {
        if self.second_text != text {
            self.second_text = text.to_string();
            self.recompute();
        }
    }

    /// Reset both source texts to empty ("Clear All")
    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) {
        self.first_text.clear();
        self.second_text.clear();
        self.recompute();
    }

    /// Aligned token pairs as an array of `{ left, right, differs }`
    pub fn pairs(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.comparison.pairs)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Aggregate statistics as `{ total_pairs, different_pairs, similarity_percent }`
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.comparison.stats)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Display-ready summary as `{ total_pairs, different_pairs, similarity }`
    /// with the similarity preformatted to one decimal digit
    #[wasm_bindgen(js_name = displaySummary)]
    pub fn display_summary(&self) -> Result<JsValue, JsValue> {
        let stats = &self.comparison.stats;
        let summary = DisplaySummaryJs {
            total_pairs: stats.total_pairs,
            different_pairs: stats.different_pairs,
            similarity: crate::display::format_similarity(stats.similarity_percent),
        };

        serde_wasm_bindgen::to_value(&summary)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Clipboard payload: one `<left> <marker> <right>` line per pair
    pub fn report(&self) -> String {
        render_report(&self.comparison.pairs)
    }

    /// Write the report to the system clipboard ("Copy Results").
    /// A denied clipboard rejects the promise with a presentable message
    /// and leaves the displayed comparison untouched.
    #[wasm_bindgen(js_name = copyReport)]
    pub fn copy_report(&self) -> js_sys::Promise {
        let payload = self.report();

        wasm_bindgen_futures::future_to_promise(async move {
            clipboard::write_text(&payload)
                .await
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(JsValue::UNDEFINED)
        })
    }

    fn recompute(&mut self) {
        self.comparison = compare(&self.first_text, &self.second_text);
    }
}

impl Default for CompareSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary for JS serialization, similarity already formatted for display
#[derive(serde::Serialize)]
struct DisplaySummaryJs {
    total_pairs: usize,
    different_pairs: usize,
    similarity: String,
}
