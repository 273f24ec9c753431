//! Form Guard WASM
//!
//! Browser side of form-guard: installs submit guards on the registration,
//! review and contact forms once the page content has loaded, annotates
//! invalid fields inline, and cancels submission while any check fails.

#[macro_use]
mod logging;

pub mod dom;
pub mod error;
pub mod install;

use std::collections::BTreeMap;

use form_guard_core::{self as core, FormKind, GuardConfig};
use wasm_bindgen::prelude::*;

pub use dom::DomPage;
pub use error::DomError;
pub use install::{install_guards, on_content_loaded};

/// Set panic hook and, with `auto-install`, guard the page's forms
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "auto-install")]
    {
        let document = dom::current_document()?;
        let target = document.clone();
        on_content_loaded(&document, move || {
            if let Err(err) = install_guards(&target, &GuardConfig::default()) {
                error_log!("form guards not installed: {}", err);
            }
        })?;
    }

    Ok(())
}

fn parse_config(config: JsValue) -> Result<GuardConfig, DomError> {
    if config.is_undefined() || config.is_null() {
        return Ok(GuardConfig::default());
    }
    let config: GuardConfig =
        serde_wasm_bindgen::from_value(config).map_err(|e| DomError::Config(e.to_string()))?;
    config.check().map_err(|e| DomError::Config(e.to_string()))?;
    Ok(config)
}

/// Install guards on the current document
///
/// # Example (JavaScript)
/// ```javascript
/// const guarded = installFormGuards({
///     forms: ['contact'],
///     annotation: { errorClass: 'is-invalid', messageClass: 'invalid-feedback' },
/// });
/// // guarded == ['contact-form']
/// ```
#[wasm_bindgen(js_name = installFormGuards)]
pub fn install_form_guards(config: JsValue) -> Result<JsValue, JsValue> {
    let config = parse_config(config)?;
    let document = dom::current_document()?;
    let installed: Vec<&str> = install_guards(&document, &config)?
        .into_iter()
        .map(FormKind::form_id)
        .collect();
    Ok(serde_wasm_bindgen::to_value(&installed)?)
}

/// Validate plain field values for one of the guarded forms
///
/// # Arguments
/// * `form_id` - `registration-form`, `review-form` or `contact-form`
/// * `values` - object mapping field ids to their string values; absent
///   keys are validated as empty strings
///
/// # Returns
/// Array of `{ field, message }` (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateForm('contact-form', {
///     name: 'Al',
///     email: 'not-an-email',
///     message: 'Hi',
/// });
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: &str, values: JsValue) -> Result<JsValue, JsValue> {
    let kind = FormKind::from_form_id(form_id)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown form: {}", form_id)))?;
    let mut values: BTreeMap<String, String> = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;
    for field in kind.spec().referenced_fields() {
        values.entry(field.to_string()).or_default();
    }

    let report = kind.validate(&values);
    Ok(serde_wasm_bindgen::to_value(&report.errors)?)
}

/// Quick email shape check
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}
