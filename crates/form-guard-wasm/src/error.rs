use wasm_bindgen::JsValue;

/// Failures of the host page, as opposed to invalid form input
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("field {0} is not attached to a parent node")]
    Detached(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("DOM operation failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
