//! Form Guard Core
//!
//! Submit-time validation for the registration, review and contact forms.
//! Decision logic is pure: each form is a fixed checklist evaluated against
//! field values into a [`ValidationReport`]. Rendering goes through the
//! [`FormSurface`] trait so the same guard drives the browser DOM and tests.

pub mod checks;
pub mod config;
pub mod forms;
pub mod guard;
pub mod report;
pub mod rules;

pub use checks::{is_valid_email, EMAIL_PATTERN};
pub use config::{AnnotationStyle, GuardConfig, MissingFieldPolicy};
pub use forms::{
    validate_contact, validate_registration, validate_review, ContactInput, FormKind,
    RegistrationInput, ReviewInput,
};
pub use guard::{FormGuard, FormSurface, SubmitDecision};
pub use report::{FieldError, ValidationReport};
pub use rules::{validate, Check, FieldValues, FormSpec, Rule};
