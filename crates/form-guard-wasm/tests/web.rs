//! Browser tests: real DOM, synthetic submit events
//!
//! Run with `wasm-pack test --headless --firefox crates/form-guard-wasm`.

#![cfg(target_arch = "wasm32")]

use form_guard_core::forms::messages;
use form_guard_core::{FormKind, GuardConfig, MissingFieldPolicy};
use form_guard_wasm::{install_guards, DomPage};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlInputElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

const REGISTRATION: &str = r#"
<form id="registration-form">
  <input id="id_username"><input id="id_email"><input id="id_password1" type="password"><input id="id_password2" type="password">
</form>"#;

const CONTACT: &str = r#"
<form id="contact-form">
  <p><input id="name"></p>
  <p><input id="email"></p>
  <p><textarea id="message"></textarea></p>
</form>"#;

const REVIEW: &str = r#"
<form id="review-form">
  <p><input id="name"></p>
  <p><textarea id="review"></textarea></p>
</form>"#;

fn page(html: &str) -> Document {
    let document = DomPage::current().unwrap().document().clone();
    document.body().unwrap().set_inner_html(html);
    document
}

fn by_id(document: &Document, id: &str) -> Element {
    document.get_element_by_id(id).unwrap()
}

fn set(document: &Document, id: &str, value: &str) {
    let element = by_id(document, id);
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value(value);
    }
}

/// Dispatch a cancelable submit event, return whether it was cancelled
fn submit(document: &Document, form_id: &str) -> bool {
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    by_id(document, form_id).dispatch_event(&event).unwrap();
    event.default_prevented()
}

fn message(document: &Document, id: &str) -> Option<String> {
    by_id(document, id)
        .next_element_sibling()
        .filter(|next| next.class_list().contains("error-message"))
        .and_then(|next| next.text_content())
}

fn has_error_class(document: &Document, id: &str) -> bool {
    by_id(document, id).class_list().contains("error")
}

#[wasm_bindgen_test]
fn contact_scenario_blocks_and_annotates() {
    let document = page(CONTACT);
    install_guards(&document, &GuardConfig::default()).unwrap();
    set(&document, "name", "Al");
    set(&document, "email", "not-an-email");
    set(&document, "message", "Hi");

    assert!(submit(&document, "contact-form"));
    assert_eq!(message(&document, "name"), None);
    assert_eq!(message(&document, "email").as_deref(), Some(messages::INVALID_EMAIL));
    assert_eq!(message(&document, "message").as_deref(), Some(messages::MESSAGE_TOO_SHORT));
    assert!(has_error_class(&document, "email"));
    assert!(!has_error_class(&document, "name"));
    assert_eq!(document.get_elements_by_class_name("error-message").length(), 2);
}

#[wasm_bindgen_test]
fn valid_registration_is_not_cancelled() {
    let document = page(REGISTRATION);
    install_guards(&document, &GuardConfig::default()).unwrap();
    set(&document, "id_username", "bob");
    set(&document, "id_email", "a@b.co");
    set(&document, "id_password1", "abcdefgh");
    set(&document, "id_password2", "abcdefgh");

    assert!(!submit(&document, "registration-form"));
    assert_eq!(document.get_elements_by_class_name("error-message").length(), 0);
}

#[wasm_bindgen_test]
fn adjacent_inputs_reuse_next_sibling() {
    let document = page(REGISTRATION);
    install_guards(&document, &GuardConfig::default()).unwrap();
    set(&document, "id_username", "bob");
    set(&document, "id_email", "bob@example.com");
    set(&document, "id_password1", "Secret123");
    set(&document, "id_password2", "Secret124");

    assert!(submit(&document, "registration-form"));
    // The confirmation input is the last child, so a new element is inserted
    assert_eq!(
        message(&document, "id_password2").as_deref(),
        Some(messages::PASSWORDS_DO_NOT_MATCH)
    );

    set(&document, "id_username", "bo");
    assert!(submit(&document, "registration-form"));
    // The email input right after the username becomes its message element
    let sibling = by_id(&document, "id_username").next_element_sibling().unwrap();
    assert_eq!(sibling.id(), "id_email");
    assert_eq!(sibling.class_name(), "error-message");
    assert_eq!(sibling.text_content().as_deref(), Some(messages::USERNAME_TOO_SHORT));
}

#[wasm_bindgen_test]
fn corrected_review_leaves_no_residue() {
    let document = page(REVIEW);
    install_guards(&document, &GuardConfig::default()).unwrap();
    set(&document, "name", "J");
    set(&document, "review", "meh");
    assert!(submit(&document, "review-form"));
    assert!(has_error_class(&document, "name"));

    set(&document, "name", "Jo");
    set(&document, "review", "Lovely stay, thanks");
    assert!(!submit(&document, "review-form"));
    assert!(!submit(&document, "review-form"));
    assert!(!has_error_class(&document, "name"));
    assert!(!has_error_class(&document, "review"));
    assert_eq!(document.get_elements_by_class_name("error-message").length(), 0);
}

#[wasm_bindgen_test]
fn server_rendered_errors_survive_clearing() {
    let document = page(
        r#"<form id="review-form">
  <p><input id="name"><span class="error-message">Name already taken</span></p>
  <p><textarea id="review"></textarea></p>
</form>"#,
    );
    install_guards(&document, &GuardConfig::default()).unwrap();
    set(&document, "name", "Jo");
    set(&document, "review", "Lovely stay, thanks");

    assert!(!submit(&document, "review-form"));
    assert!(!submit(&document, "review-form"));
    assert_eq!(message(&document, "name").as_deref(), Some("Name already taken"));
}

#[wasm_bindgen_test]
fn reused_sibling_is_cleared_after_correction() {
    let document = page(
        r#"<form id="review-form">
  <p><input id="name"><span class="hint">Your first name</span></p>
  <p><textarea id="review"></textarea></p>
</form>"#,
    );
    install_guards(&document, &GuardConfig::default()).unwrap();
    set(&document, "name", "J");
    set(&document, "review", "Lovely stay, thanks");
    assert!(submit(&document, "review-form"));
    assert_eq!(message(&document, "name").as_deref(), Some(messages::NAME_TOO_SHORT));

    set(&document, "name", "Jo");
    assert!(!submit(&document, "review-form"));
    let sibling = by_id(&document, "name").next_element_sibling().unwrap();
    assert!(!sibling.class_list().contains("error-message"));
    assert!(!sibling.has_attribute("data-form-guard-reused"));
    assert_eq!(sibling.text_content().as_deref(), Some(""));
}

#[wasm_bindgen_test]
fn install_skips_absent_and_already_guarded_forms() {
    let document = page(CONTACT);
    let installed = install_guards(&document, &GuardConfig::default()).unwrap();
    assert_eq!(installed, vec![FormKind::Contact]);

    let again = install_guards(&document, &GuardConfig::default()).unwrap();
    assert!(again.is_empty());

    // A later configuration does not replace the first guard
    let custom = GuardConfig {
        clear_stale: false,
        ..GuardConfig::default()
    };
    assert!(install_guards(&document, &custom).unwrap().is_empty());
    assert!(by_id(&document, "contact-form").has_attribute("data-form-guard"));
}

#[wasm_bindgen_test]
fn missing_field_block_policy_cancels() {
    let document = page(r#"<form id="contact-form"><p><input id="name" value="Alice"></p></form>"#);
    let config = GuardConfig {
        missing_fields: MissingFieldPolicy::Block,
        ..GuardConfig::default()
    };
    install_guards(&document, &config).unwrap();

    assert!(submit(&document, "contact-form"));
}

#[wasm_bindgen_test]
fn missing_field_skip_policy_allows() {
    let document = page(r#"<form id="contact-form"><p><input id="name" value="Alice"></p></form>"#);
    install_guards(&document, &GuardConfig::default()).unwrap();

    assert!(!submit(&document, "contact-form"));
}
