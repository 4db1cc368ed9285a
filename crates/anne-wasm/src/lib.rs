// WASM bindings for the anne spelling-correction engine.
//
// Provides a `WasmAnne` class exported via wasm-bindgen that wraps the
// `Anne` engine from anne-en. Candidates and snapshots cross the boundary
// as plain JavaScript values through serde-wasm-bindgen. Definite weights
// appear in JavaScript as `Infinity`.
//
// Usage from JavaScript:
//
//   const anne = new WasmAnne();
//   anne.learn("this is a test");
//   anne.learn("this is a test");
//   anne.fix("ths is a test");          // => "this is a test"
//   anne.suggest("ths");                // => [{ word: "this", weight: 1, frequency: 2 }]
//   anne.define("receive");
//   anne.frequency("receive");          // => Infinity
//   const snapshot = anne.toJSON();     // => { t: { h: { i: { s: { _: 2 } } } }, ... }
//   other.fromJSON(snapshot);

use serde::Serialize;
use wasm_bindgen::prelude::*;

use anne_core::enums::Spacing;
use anne_en::{Anne, AnneError, FrequencyTrie, Weight};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a ranked candidate.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCandidate {
    word: String,
    weight: f64,
    frequency: f64,
}

// ============================================================================
// Conversion helpers
// ============================================================================

/// Definite weights become `Infinity`, matching how JavaScript hosts have
/// always seen them.
fn weight_to_number(weight: Weight) -> f64 {
    match weight {
        Weight::Finite(n) => n as f64,
        Weight::Definite => f64::INFINITY,
    }
}

fn anne_error_to_js(e: AnneError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmAnne
// ============================================================================

/// Self-training spelling corrector for WebAssembly.
#[wasm_bindgen]
pub struct WasmAnne {
    anne: Anne,
}

#[wasm_bindgen]
impl WasmAnne {
    /// Create an empty engine.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmAnne {
        WasmAnne { anne: Anne::new() }
    }

    /// Learn every word of `text`.
    pub fn learn(&mut self, text: &str) {
        self.anne.learn(text);
    }

    /// Pin a word to the highest rank.
    pub fn define(&mut self, word: &str) {
        self.anne.define(word);
    }

    /// Define every word of a list written as text (whitespace, newlines,
    /// or commas between items).
    #[wasm_bindgen(js_name = "importText")]
    pub fn import_text(&mut self, text: &str) {
        self.anne.import_text(text);
    }

    /// Define every word of an array of strings.
    #[wasm_bindgen(js_name = "importWords")]
    pub fn import_words(&mut self, words: Vec<String>) {
        self.anne.import(words);
    }

    /// Correct every word of `text`.
    pub fn fix(&self, text: &str) -> String {
        self.anne.fix(text)
    }

    /// Correct `text`, then learn from it as given.
    #[wasm_bindgen(js_name = "fixAndLearn")]
    pub fn fix_and_learn(&mut self, text: &str) -> String {
        self.anne.fix_and_learn(text)
    }

    /// Ranked candidates for a word.
    ///
    /// Returns a JavaScript array of objects with fields `word`, `weight`
    /// (normalized), and `frequency` (raw, `Infinity` when defined).
    pub fn suggest(&self, word: &str) -> Result<JsValue, JsError> {
        let js_candidates: Vec<JsCandidate> = self
            .anne
            .suggest(word)
            .into_iter()
            .map(|c| JsCandidate {
                word: c.word,
                weight: c.weight,
                frequency: weight_to_number(c.frequency),
            })
            .collect();
        serde_wasm_bindgen::to_value(&js_candidates).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Learned frequency of a word; `Infinity` for defined words.
    pub fn frequency(&self, word: &str) -> f64 {
        weight_to_number(self.anne.frequency(word))
    }

    /// Number of distinct known words.
    #[wasm_bindgen(js_name = "wordCount")]
    pub fn word_count(&self) -> usize {
        self.anne.word_count()
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// The learned state as a plain JavaScript object.
    #[wasm_bindgen(js_name = "toJSON")]
    pub fn to_json(&self) -> Result<JsValue, JsError> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        self.anne
            .to_snapshot()
            .serialize(&serializer)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// The learned state as JSON text.
    #[wasm_bindgen(js_name = "toJSONString")]
    pub fn to_json_string(&self) -> Result<String, JsError> {
        self.anne.to_json().map_err(anne_error_to_js)
    }

    /// Replace the learned state with a snapshot given either as an object
    /// or as JSON text. On error the current state is kept.
    #[wasm_bindgen(js_name = "fromJSON")]
    pub fn from_json(&mut self, snapshot: JsValue) -> Result<(), JsError> {
        if let Some(text) = snapshot.as_string() {
            self.anne.from_json(&text).map_err(anne_error_to_js)?;
            return Ok(());
        }
        if !snapshot.is_object() || js_sys::Array::is_array(&snapshot) {
            return Err(JsError::new("snapshot must be an object or a JSON string"));
        }
        let trie: FrequencyTrie = serde_wasm_bindgen::from_value(snapshot)
            .map_err(|e| JsError::new(&format!("snapshot error: {e}")))?;
        self.anne.from_snapshot(trie).map_err(anne_error_to_js)?;
        Ok(())
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the maximum number of candidates returned by `suggest`.
    #[wasm_bindgen(js_name = "setMaxSuggestions")]
    pub fn set_max_suggestions(&mut self, max: usize) {
        self.anne.set_max_suggestions(max);
    }

    /// Set whether `fix` keeps the original whitespace (default) or joins
    /// words with single spaces.
    #[wasm_bindgen(js_name = "setPreserveWhitespace")]
    pub fn set_preserve_whitespace(&mut self, value: bool) {
        let spacing = if value {
            Spacing::Preserve
        } else {
            Spacing::Collapse
        };
        self.anne.set_spacing(spacing);
    }
}

impl Default for WasmAnne {
    fn default() -> Self {
        Self::new()
    }
}
