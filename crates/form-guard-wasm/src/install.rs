//! Submit listener wiring

use form_guard_core::{FormGuard, FormKind, GuardConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::dom::DomPage;
use crate::error::DomError;

/// Marks forms that already carry a guard so repeated installs are no-ops
pub const INSTALLED_ATTR: &str = "data-form-guard";

/// Attach a submit guard to every configured form present in `document`
///
/// Returns the forms that were guarded by this call.
pub fn install_guards(document: &Document, config: &GuardConfig) -> Result<Vec<FormKind>, DomError> {
    let mut installed = Vec::new();

    for kind in config.forms.iter().copied() {
        let Some(form) = document.get_element_by_id(kind.form_id()) else {
            continue;
        };
        if form.has_attribute(INSTALLED_ATTR) {
            warn_log!("#{} is already guarded, configuration ignored", kind);
            continue;
        }

        attach(&form, FormGuard::new(kind, config.clone()), document.clone())?;
        form.set_attribute(INSTALLED_ATTR, "")?;
        installed.push(kind);
    }

    info_log!("form guards installed: {:?}", installed);
    Ok(installed)
}

fn attach(form: &Element, guard: FormGuard, document: Document) -> Result<(), DomError> {
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let mut page = DomPage::new(document.clone());
        let report = guard.evaluate(&page);

        if !report.missing.is_empty() {
            warn_log!("#{}: fields not found: {}", guard.spec().form_id, report.missing.join(", "));
        }
        if let Err(err) = guard.render(&mut page, &report) {
            error_log!("#{}: could not render errors: {}", guard.spec().form_id, err);
        }
        if guard.decide(&report).is_blocked() {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once the document's content has loaded
pub fn on_content_loaded<F>(document: &Document, f: F) -> Result<(), DomError>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let callback = Closure::once_into_js(f);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    Ok(())
}
