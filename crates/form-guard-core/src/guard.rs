// File: src/guard.rs
// Purpose: Submit-time guard, independent of where fields and annotations live

use std::borrow::Cow;

use crate::config::{AnnotationStyle, GuardConfig};
use crate::forms::FormKind;
use crate::report::ValidationReport;
use crate::rules::{validate, FieldValues, FormSpec};

/// Where field values come from and where annotations are rendered
///
/// The browser adapter implements this over the DOM; tests implement it
/// over plain maps.
pub trait FormSurface {
    type Error;

    /// Current value of a field, `None` if the field does not exist
    fn read_value(&self, field: &str) -> Option<String>;

    /// Attach or update the inline error annotation of `field`
    fn show_error(&mut self, field: &str, message: &str, style: &AnnotationStyle) -> Result<(), Self::Error>;

    /// Remove the annotation and error marker of `field`, if any
    fn clear_error(&mut self, field: &str, style: &AnnotationStyle) -> Result<(), Self::Error>;
}

/// Decision handed back to the submit event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the browser submit the form unmodified
    Allow,
    /// Cancel the default submission
    Block,
}

impl SubmitDecision {
    pub fn is_blocked(self) -> bool {
        self == SubmitDecision::Block
    }
}

struct SurfaceValues<'a, S: ?Sized>(&'a S);

impl<S: FormSurface + ?Sized> FieldValues for SurfaceValues<'_, S> {
    fn value(&self, field: &str) -> Option<Cow<'_, str>> {
        self.0.read_value(field).map(Cow::Owned)
    }
}

/// Guard for one form
#[derive(Debug, Clone)]
pub struct FormGuard {
    spec: &'static FormSpec,
    config: GuardConfig,
}

impl FormGuard {
    pub fn new(kind: FormKind, config: GuardConfig) -> Self {
        Self::with_spec(kind.spec(), config)
    }

    pub fn with_spec(spec: &'static FormSpec, config: GuardConfig) -> Self {
        Self { spec, config }
    }

    pub fn spec(&self) -> &'static FormSpec {
        self.spec
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Read every field fresh from the surface and run the checklist
    pub fn evaluate<S: FormSurface + ?Sized>(&self, surface: &S) -> ValidationReport {
        validate(self.spec, &SurfaceValues(surface))
    }

    /// Render a report: clear stale annotations, then annotate each failure
    pub fn render<S: FormSurface + ?Sized>(&self, surface: &mut S, report: &ValidationReport) -> Result<(), S::Error> {
        let style = &self.config.annotation;

        if self.config.clear_stale {
            for field in self.spec.annotated_fields() {
                if report.missing.iter().any(|m| m == field) {
                    continue;
                }
                surface.clear_error(field, style)?;
            }
        }

        for error in &report.errors {
            surface.show_error(&error.field, &error.message, style)?;
        }
        Ok(())
    }

    /// Decision for a report under this guard's missing-field policy
    pub fn decide(&self, report: &ValidationReport) -> SubmitDecision {
        if report.blocks_submission(self.config.missing_fields) {
            SubmitDecision::Block
        } else {
            SubmitDecision::Allow
        }
    }

    /// Full submit reaction: evaluate, render, decide
    pub fn on_submit<S: FormSurface + ?Sized>(&self, surface: &mut S) -> Result<SubmitDecision, S::Error> {
        let report = self.evaluate(surface);
        self.render(surface, &report)?;
        Ok(self.decide(&report))
    }
}
