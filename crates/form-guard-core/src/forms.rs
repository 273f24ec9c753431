// File: src/forms.rs
// Purpose: The three guarded forms: ids, checklists, typed inputs

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::report::ValidationReport;
use crate::rules::{validate, Check, FieldValues, FormSpec, Rule};

/// DOM ids of the guarded forms and their inputs
pub mod ids {
    pub const REGISTRATION_FORM: &str = "registration-form";
    pub const REVIEW_FORM: &str = "review-form";
    pub const CONTACT_FORM: &str = "contact-form";

    pub const USERNAME: &str = "id_username";
    pub const REGISTRATION_EMAIL: &str = "id_email";
    pub const PASSWORD: &str = "id_password1";
    pub const PASSWORD_CONFIRMATION: &str = "id_password2";

    pub const NAME: &str = "name";
    pub const REVIEW: &str = "review";
    pub const EMAIL: &str = "email";
    pub const MESSAGE: &str = "message";
}

pub mod messages {
    pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters long";
    pub const INVALID_EMAIL: &str = "Enter a valid email address";
    pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
    pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
    pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
    pub const REVIEW_TOO_SHORT: &str = "Review must be at least 10 characters long";
    pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long";
}

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_NAME_LEN: usize = 2;
pub const MIN_TEXT_LEN: usize = 10;

pub static REGISTRATION: FormSpec = FormSpec {
    form_id: ids::REGISTRATION_FORM,
    checks: &[
        Check::new(
            ids::USERNAME,
            Rule::MinLength(MIN_USERNAME_LEN),
            messages::USERNAME_TOO_SHORT,
        ),
        Check::new(ids::REGISTRATION_EMAIL, Rule::Email, messages::INVALID_EMAIL),
        Check::new(
            ids::PASSWORD,
            Rule::MinLength(MIN_PASSWORD_LEN),
            messages::PASSWORD_TOO_SHORT,
        ),
        Check::new(
            ids::PASSWORD_CONFIRMATION,
            Rule::Matches(ids::PASSWORD),
            messages::PASSWORDS_DO_NOT_MATCH,
        ),
    ],
};

pub static REVIEW: FormSpec = FormSpec {
    form_id: ids::REVIEW_FORM,
    checks: &[
        Check::new(ids::NAME, Rule::MinLength(MIN_NAME_LEN), messages::NAME_TOO_SHORT),
        Check::new(ids::REVIEW, Rule::MinLength(MIN_TEXT_LEN), messages::REVIEW_TOO_SHORT),
    ],
};

pub static CONTACT: FormSpec = FormSpec {
    form_id: ids::CONTACT_FORM,
    checks: &[
        Check::new(ids::NAME, Rule::MinLength(MIN_NAME_LEN), messages::NAME_TOO_SHORT),
        Check::new(ids::EMAIL, Rule::Email, messages::INVALID_EMAIL),
        Check::new(ids::MESSAGE, Rule::MinLength(MIN_TEXT_LEN), messages::MESSAGE_TOO_SHORT),
    ],
};

/// One of the built-in guarded forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Registration,
    Review,
    Contact,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::Registration, FormKind::Review, FormKind::Contact];

    pub fn spec(self) -> &'static FormSpec {
        match self {
            FormKind::Registration => &REGISTRATION,
            FormKind::Review => &REVIEW,
            FormKind::Contact => &CONTACT,
        }
    }

    pub fn form_id(self) -> &'static str {
        self.spec().form_id
    }

    /// Looks a form up by its DOM id
    pub fn from_form_id(form_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.form_id() == form_id)
    }

    pub fn validate<V: FieldValues + ?Sized>(self, values: &V) -> ValidationReport {
        validate(self.spec(), values)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_id())
    }
}

/// Values of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl FieldValues for RegistrationInput {
    fn value(&self, field: &str) -> Option<Cow<'_, str>> {
        let value = match field {
            ids::USERNAME => &self.username,
            ids::REGISTRATION_EMAIL => &self.email,
            ids::PASSWORD => &self.password,
            ids::PASSWORD_CONFIRMATION => &self.password_confirmation,
            _ => return None,
        };
        Some(Cow::Borrowed(value.as_str()))
    }
}

/// Values of the review form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInput {
    pub name: String,
    pub review: String,
}

impl FieldValues for ReviewInput {
    fn value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            ids::NAME => Some(Cow::Borrowed(self.name.as_str())),
            ids::REVIEW => Some(Cow::Borrowed(self.review.as_str())),
            _ => None,
        }
    }
}

/// Values of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues for ContactInput {
    fn value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            ids::NAME => Some(Cow::Borrowed(self.name.as_str())),
            ids::EMAIL => Some(Cow::Borrowed(self.email.as_str())),
            ids::MESSAGE => Some(Cow::Borrowed(self.message.as_str())),
            _ => None,
        }
    }
}

pub fn validate_registration(input: &RegistrationInput) -> ValidationReport {
    FormKind::Registration.validate(input)
}

pub fn validate_review(input: &ReviewInput) -> ValidationReport {
    FormKind::Review.validate(input)
}

pub fn validate_contact(input: &ContactInput) -> ValidationReport {
    FormKind::Contact.validate(input)
}
