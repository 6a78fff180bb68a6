//! Core types used throughout the validation system.

use std::time::Duration;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// The structured outcome of a single validation call.
///
/// A failed check is a normal result, not an error: the backend re-validates
/// everything, so the only job here is to tell the caller whether the input
/// passed, what to show the user when it did not, and the normalized value to
/// submit when normalization applies (lowercased email, scheme-fixed URL,
/// trimmed text). Serializes to the `{valid, error?, value?}` object the
/// frontend exchanges, with absent fields omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the input passed the check.
    pub valid: bool,
    /// Human-readable message describing the first failed rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Normalized value to submit in place of the raw input, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ValidationResult {
    /// A pass that carries no normalized value (passwords never echo one).
    pub fn pass() -> Self {
        Self {
            valid: true,
            error: None,
            value: None,
        }
    }

    /// A pass carrying the normalized value the caller should submit.
    pub fn pass_with(value: impl Into<String>) -> Self {
        Self {
            valid: true,
            error: None,
            value: Some(value.into()),
        }
    }

    /// A failure with a human-readable message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
            value: None,
        }
    }
}

/// A navigation instruction for the UI shell: where to go, and how long to
/// leave the accompanying alert on screen first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub target: String,
    pub delay: Duration,
}

impl Redirect {
    pub fn new(target: impl Into<String>, delay: Duration) -> Self {
        Self {
            target: target.into(),
            delay,
        }
    }
}

/// Reading status of a resource, with the exact labels the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Status {
    #[strum(serialize = "Not Started")]
    NotStarted,
    #[strum(serialize = "In Progress")]
    InProgress,
    Paused,
    Completed,
}
