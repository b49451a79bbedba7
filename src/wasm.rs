//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::Diagnostic;
use crate::model;
use crate::validate::{Target, Validator};

/// Validate a definitions JSON document in batch mode.
/// Returns a JSON array of diagnostic objects.
#[wasm_bindgen]
pub fn validate_definitions(json: &str) -> JsValue {
    let result = validate_definitions_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_definitions_inner(json: &str) -> Vec<DiagnosticDto> {
    let definitions = match model::parse(json) {
        Ok(d) => d,
        Err(e) => return vec![DiagnosticDto::parse_failure(e.to_string())],
    };

    Validator::default()
        .validate(Target::Definitions(&definitions))
        .diagnostics
        .into_iter()
        .map(DiagnosticDto::from)
        .collect()
}

/// Validate the container enclosing one element (or the whole document when
/// `id` names the definitions or one of its diagrams).
/// Returns a JSON array of diagnostic objects.
#[wasm_bindgen]
pub fn validate_element(json: &str, id: &str) -> JsValue {
    let result = validate_element_inner(json, id);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_element_inner(json: &str, id: &str) -> Vec<DiagnosticDto> {
    let definitions = match model::parse(json) {
        Ok(d) => d,
        Err(e) => return vec![DiagnosticDto::parse_failure(e.to_string())],
    };

    Validator::default()
        .validate(Target::resolve(&definitions, id))
        .diagnostics
        .into_iter()
        .map(DiagnosticDto::from)
        .collect()
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct DiagnosticDto {
    code: String,
    severity: String,
    message: String,
    element_id: Option<String>,
}

impl DiagnosticDto {
    fn parse_failure(message: String) -> Self {
        DiagnosticDto {
            code: "M001".into(),
            severity: "error".into(),
            message,
            element_id: None,
        }
    }
}

impl From<Diagnostic> for DiagnosticDto {
    fn from(d: Diagnostic) -> Self {
        DiagnosticDto {
            code: d.code,
            severity: d.severity.to_string(),
            message: d.message,
            element_id: d.element_id,
        }
    }
}
