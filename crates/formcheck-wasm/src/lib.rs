//! formcheck WASM
//!
//! WebAssembly bindings so a browser form can run the same rules as the
//! server. The page collects its input elements and hands them over on submit:
//!
//! ```javascript
//! form.addEventListener('submit', (e) => {
//!     const fields = [...e.target.elements].map((el) => ({
//!         name: el.name,
//!         value: el.value,
//!         kind: el.tagName.toLowerCase() === 'input' ? 'input' : 'other',
//!     }));
//!     const result = validateForm(fields);
//!     errors.innerText = result.display;
//!     if (!result.ok) e.preventDefault();
//! });
//! ```

use formcheck::{validate_submission, FieldInput, FieldValue, Schema};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of validating a whole form, returned to JavaScript
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FormResult {
    /// True when the submission may proceed
    pub ok: bool,
    pub messages: Vec<String>,
    /// Messages joined by newlines; empty on success so the error box clears
    pub display: String,
}

impl FormResult {
    fn from_fields(fields: Vec<FieldInput>) -> Self {
        let report = validate_submission(Schema::reference(), fields);
        Self {
            ok: report.is_empty(),
            display: report.to_display(),
            messages: report.into_messages(),
        }
    }
}

/// Validate a submission against the sign-up schema
///
/// # Arguments
/// * `fields` - array of `{ name, value, kind? }` objects, in form order
///
/// # Returns
/// `{ ok, messages, display }`
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(fields: JsValue) -> Result<JsValue, JsValue> {
    let fields: Vec<FieldInput> = serde_wasm_bindgen::from_value(fields)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse fields: {}", e)))?;

    Ok(serde_wasm_bindgen::to_value(&FormResult::from_fields(fields))?)
}

/// Messages for one field value (empty array when valid or unknown)
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(name: &str, value: Option<String>) -> Vec<String> {
    Schema::reference().validate_field(name, &FieldValue::from(value))
}

/// Names of the fields the sign-up schema validates
#[wasm_bindgen(js_name = referenceFields)]
pub fn reference_fields() -> Vec<String> {
    Schema::reference()
        .field_names()
        .into_iter()
        .map(String::from)
        .collect()
}
