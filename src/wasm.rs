//! WASM bindings for texspan
//!
//! Exposes rendering and segmentation to JavaScript.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::{restore_segment, Segment, TypstEngine};

/// Segmentation result handed to JavaScript
#[derive(Serialize, Deserialize)]
pub struct SegmentResult {
    /// Segments with user escapes restored to literal characters
    pub segments: Vec<Segment>,
    /// Whether segmentation succeeded
    pub success: bool,
    /// Error message if it did not
    pub error: Option<String>,
}

/// Safely serialize a value to JsValue, returning an error object on failure.
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        let error_obj = SegmentResult {
            segments: vec![],
            success: false,
            error: Some(format!("Serialization error: {}", e)),
        };
        serde_wasm_bindgen::to_value(&error_obj).unwrap_or(JsValue::NULL)
    })
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render mixed text and math, typesetting math as Typst
#[wasm_bindgen(js_name = "renderMath")]
pub fn render_math_wasm(input: &str) -> String {
    crate::render_math_with(&TypstEngine, input)
}

/// Split mixed text and math into segments
///
/// # Returns
/// `{ segments: [{ kind, mode?, content }], success, error }`
#[wasm_bindgen(js_name = "segmentMath")]
pub fn segment_math_wasm(input: &str) -> JsValue {
    let result = match crate::segment_math(input) {
        Ok(segments) => SegmentResult {
            segments: segments.iter().map(restore_segment).collect(),
            success: true,
            error: None,
        },
        Err(err) => SegmentResult {
            segments: vec![],
            success: false,
            error: Some(err.to_string()),
        },
    };
    to_js_value(&result)
}
