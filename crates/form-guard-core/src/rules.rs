// File: src/rules.rs
// Purpose: Declarative checklists and the evaluator that runs them

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::checks;
use crate::report::ValidationReport;

/// A single pass/fail rule applied to one field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// At least this many characters
    MinLength(usize),
    /// `local@domain.tld` shape
    Email,
    /// Exactly equal to the value of another field
    Matches(&'static str),
}

/// A rule bound to the field it checks and the message shown when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub field: &'static str,
    pub rule: Rule,
    pub message: &'static str,
}

impl Check {
    pub const fn new(field: &'static str, rule: Rule, message: &'static str) -> Self {
        Self {
            field,
            rule,
            message,
        }
    }
}

/// The fixed checklist guarding one form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSpec {
    /// DOM id of the `<form>` element
    pub form_id: &'static str,
    pub checks: &'static [Check],
}

impl FormSpec {
    /// Fields that receive annotations, in declaration order
    pub fn annotated_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::with_capacity(self.checks.len());
        for check in self.checks {
            if !fields.contains(&check.field) {
                fields.push(check.field);
            }
        }
        fields
    }

    /// Every field a check reads, including `Matches` targets
    pub fn referenced_fields(&self) -> Vec<&'static str> {
        let mut fields = self.annotated_fields();
        for check in self.checks {
            if let Rule::Matches(other) = check.rule {
                if !fields.contains(&other) {
                    fields.push(other);
                }
            }
        }
        fields
    }
}

/// Source of current field values, keyed by field id
///
/// `None` means the field does not exist, which is distinct from an empty
/// value.
pub trait FieldValues {
    fn value(&self, field: &str) -> Option<Cow<'_, str>>;
}

impl<S: BuildHasher> FieldValues for HashMap<String, String, S> {
    fn value(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl FieldValues for BTreeMap<String, String> {
    fn value(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl<V: FieldValues + ?Sized> FieldValues for &V {
    fn value(&self, field: &str) -> Option<Cow<'_, str>> {
        (**self).value(field)
    }
}

/// Runs every check of `spec` against `values`
///
/// Checks whose field (or, for `Matches`, the field compared against) is
/// absent are skipped and recorded in `missing`. Whether that blocks
/// submission is decided by the caller's `MissingFieldPolicy`.
pub fn validate<V: FieldValues + ?Sized>(spec: &FormSpec, values: &V) -> ValidationReport {
    let mut report = ValidationReport::default();

    for check in spec.checks {
        let Some(value) = values.value(check.field) else {
            tracing::warn!(form = spec.form_id, field = check.field, "field not found, check skipped");
            report.push_missing(check.field);
            continue;
        };

        let passed = match check.rule {
            Rule::MinLength(min) => checks::has_min_length(&value, min),
            Rule::Email => checks::is_valid_email(&value),
            Rule::Matches(other) => match values.value(other) {
                Some(expected) => checks::equals(&value, &expected),
                None => {
                    tracing::warn!(form = spec.form_id, field = other, "field not found, check skipped");
                    report.push_missing(other);
                    continue;
                }
            },
        };

        if !passed {
            report.push_error(check.field, check.message);
        }
    }

    tracing::debug!(
        form = spec.form_id,
        errors = report.errors.len(),
        missing = report.missing.len(),
        "form evaluated"
    );
    report
}
