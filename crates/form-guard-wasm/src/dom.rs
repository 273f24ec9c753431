//! DOM rendering surface
//!
//! Fields are looked up by document-wide id. The element immediately after a
//! field is its message element: reused if present, created otherwise.
//! Created elements are tagged so clearing removes them; reused elements are
//! tagged too and only lose the message class and text. Elements the guard
//! never wrote, such as server-rendered errors, are left alone.

use form_guard_core::{AnnotationStyle, FormSurface};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::error::DomError;

/// Set on message elements this module created
pub const MESSAGE_ATTR: &str = "data-form-guard-message";

/// Set on existing siblings this module wrote a message into
pub const REUSED_ATTR: &str = "data-form-guard-reused";

/// The live page as a [`FormSurface`]
#[derive(Debug, Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The page of the current global window
    pub fn current() -> Result<Self, DomError> {
        current_document().map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

pub fn current_document() -> Result<Document, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    window.document().ok_or(DomError::NoDocument)
}

/// Value of a form control, `None` for elements that carry no value
pub fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(textarea.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    None
}

impl FormSurface for DomPage {
    type Error = DomError;

    fn read_value(&self, field: &str) -> Option<String> {
        let element = self.element(field)?;
        let value = control_value(&element);
        if value.is_none() {
            warn_log!("#{} is a <{}>, not a form control", field, element.tag_name().to_lowercase());
        }
        value
    }

    fn show_error(&mut self, field: &str, message: &str, style: &AnnotationStyle) -> Result<(), DomError> {
        let Some(input) = self.element(field) else {
            return Ok(());
        };

        let display = match input.next_element_sibling() {
            Some(existing) => {
                if !existing.has_attribute(MESSAGE_ATTR) {
                    existing.set_attribute(REUSED_ATTR, "")?;
                }
                existing
            }
            None => {
                let created = self.document.create_element(&style.message_tag)?;
                created.set_attribute(MESSAGE_ATTR, "")?;
                let parent = input
                    .parent_node()
                    .ok_or_else(|| DomError::Detached(field.to_string()))?;
                parent.insert_before(&created, input.next_sibling().as_ref())?;
                created
            }
        };

        display.set_class_name(&style.message_class);
        display.set_text_content(Some(message));
        input.class_list().add_1(&style.error_class)?;
        Ok(())
    }

    fn clear_error(&mut self, field: &str, style: &AnnotationStyle) -> Result<(), DomError> {
        let Some(input) = self.element(field) else {
            return Ok(());
        };

        input.class_list().remove_1(&style.error_class)?;
        if let Some(next) = input.next_element_sibling() {
            if next.has_attribute(MESSAGE_ATTR) {
                next.remove();
            } else if next.has_attribute(REUSED_ATTR) {
                next.class_list().remove_1(&style.message_class)?;
                next.set_text_content(None);
                next.remove_attribute(REUSED_ATTR)?;
            }
        }
        Ok(())
    }
}
