// File: src/config.rs
// Purpose: Guard configuration, from TOML or any serde source

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::forms::FormKind;

/// Guard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardConfig {
    #[serde(default)]
    pub annotation: AnnotationStyle,

    /// Remove annotations left by a previous submit before re-checking
    #[serde(default = "default_true", alias = "clear_stale")]
    pub clear_stale: bool,

    #[serde(default, alias = "missing_fields")]
    pub missing_fields: MissingFieldPolicy,

    /// Forms to guard when installing
    #[serde(default = "default_forms")]
    pub forms: Vec<FormKind>,
}

/// Class names and tag used when rendering error annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationStyle {
    /// Added to the invalid field itself
    #[serde(default = "default_error_class", alias = "error_class")]
    pub error_class: String,

    /// Set on the element holding the message text
    #[serde(default = "default_message_class", alias = "message_class")]
    pub message_class: String,

    /// Tag of newly created message elements
    #[serde(default = "default_message_tag", alias = "message_tag")]
    pub message_tag: String,
}

/// What to do when a field named by a check is not on the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFieldPolicy {
    /// Skip checks touching the field
    #[default]
    Skip,
    /// Cancel submission
    Block,
}

fn default_true() -> bool {
    true
}

fn default_forms() -> Vec<FormKind> {
    FormKind::ALL.to_vec()
}

fn default_error_class() -> String {
    "error".to_string()
}

fn default_message_class() -> String {
    "error-message".to_string()
}

fn default_message_tag() -> String {
    "div".to_string()
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            annotation: AnnotationStyle::default(),
            clear_stale: true,
            missing_fields: MissingFieldPolicy::default(),
            forms: default_forms(),
        }
    }
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            error_class: default_error_class(),
            message_class: default_message_class(),
            message_tag: default_message_tag(),
        }
    }
}

impl GuardConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GuardConfig =
            toml::from_str(content).context("Failed to parse form guard configuration")?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, or return defaults if it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("{} not found, using default guard configuration", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Rejects values that cannot be rendered
    pub fn check(&self) -> Result<()> {
        let style = &self.annotation;
        for (key, value) in [
            ("errorClass", &style.error_class),
            ("messageClass", &style.message_class),
        ] {
            if value.trim().is_empty() || value.contains(char::is_whitespace) {
                anyhow::bail!("annotation.{} must be a single class name, got {:?}", key, value);
            }
        }
        if style.message_tag.is_empty() || !style.message_tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            anyhow::bail!("annotation.messageTag must be a plain tag name, got {:?}", style.message_tag);
        }
        Ok(())
    }

    pub fn guards(&self, kind: FormKind) -> bool {
        self.forms.contains(&kind)
    }
}
