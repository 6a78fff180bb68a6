//! Form-level validation built from explicit field registrations.
//!
//! A [`FormValidator`] holds (field name, rule) pairs registered by the page
//! that owns the form. Nothing is wired up by field-name convention: a field
//! participates in validation exactly when a rule was registered for it, and
//! a name without a rule always passes untouched.
//!
//! [`FormBinding`] layers the visual feedback on top of a validator and an
//! explicit list of bound inputs: it tracks the marking each input should
//! carry (`is-valid` / `is-invalid` styling and the feedback message) as
//! blur, focus and submit events come in. Only bound inputs ever change
//! state, and only bound inputs are checked on submit.

use std::collections::BTreeMap;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::fields;
use crate::types::ValidationResult;

/// The validator a rule dispatches to. Each kind corresponds to one of the
/// field validators in [`crate::fields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum FieldKind {
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "username")]
    Username,
    #[strum(serialize = "password")]
    Password,
    #[strum(serialize = "title")]
    Title,
    #[strum(serialize = "description")]
    Description,
    #[strum(serialize = "authors")]
    Authors,
    #[strum(serialize = "url")]
    Url,
    #[strum(serialize = "status")]
    Status,
}

impl FieldKind {
    /// Label used in generic "... is required" messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Email => "Email",
            FieldKind::Username => "Username",
            FieldKind::Password => "Password",
            FieldKind::Title => "Title",
            FieldKind::Description => "Description",
            FieldKind::Authors => "Authors",
            FieldKind::Url => "URL",
            FieldKind::Status => "Status",
        }
    }

    /// Whether a field of this kind rejects empty input unless the
    /// registration says otherwise.
    pub fn required_by_default(&self) -> bool {
        matches!(
            self,
            FieldKind::Email | FieldKind::Password | FieldKind::Title
        )
    }
}

/// A registered validation rule: which validator to run, and whether empty
/// input is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    kind: FieldKind,
    required: bool,
}

impl FieldRule {
    /// Creates the rule for `kind` with its default required flag.
    pub fn of(kind: FieldKind) -> Self {
        Self {
            kind,
            required: kind.required_by_default(),
        }
    }

    /// Marks the field as required, rejecting empty input.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Runs the rule against a raw input value.
    pub fn check(&self, raw: &str) -> ValidationResult {
        if self.required && raw.trim().is_empty() {
            return ValidationResult::fail(format!("{} is required", self.kind.label()));
        }

        match self.kind {
            FieldKind::Email => fields::validate_email(raw),
            FieldKind::Username => fields::validate_username(raw, self.required),
            FieldKind::Password => fields::validate_password(raw),
            FieldKind::Title => fields::validate_title(raw),
            FieldKind::Description => fields::validate_description(raw, self.required),
            FieldKind::Authors => fields::validate_authors(raw),
            FieldKind::Url => fields::validate_url(raw),
            FieldKind::Status => fields::validate_status(raw),
        }
    }
}

/// An explicit set of (field name, rule) registrations for one form.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    rules: BTreeMap<String, FieldRule>,
}

impl FormValidator {
    /// Creates an empty validator with no fields registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registrations shared by the account and resource forms: every
    /// kind except `status` under its canonical name, with default
    /// required flags. Pages with extra needs register on top of this.
    pub fn standard() -> Self {
        let mut validator = Self::new();
        for kind in [
            FieldKind::Email,
            FieldKind::Username,
            FieldKind::Password,
            FieldKind::Title,
            FieldKind::Description,
            FieldKind::Authors,
            FieldKind::Url,
        ] {
            validator.register(kind.to_string(), FieldRule::of(kind));
        }
        validator
    }

    /// Registers `rule` under `name`, replacing any previous registration.
    pub fn register(&mut self, name: impl Into<String>, rule: FieldRule) -> &mut Self {
        self.rules.insert(name.into(), rule);
        self
    }

    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.rules.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Validates a single field. A name with no registered rule passes.
    pub fn check_field(&self, name: &str, raw: &str) -> ValidationResult {
        match self.rules.get(name) {
            Some(rule) => rule.check(raw),
            None => ValidationResult::pass(),
        }
    }

    /// Validates every registered field against `values`. A registered field
    /// missing from `values` is checked as empty; values without a
    /// registration are ignored.
    pub fn check_all(&self, values: &BTreeMap<String, String>) -> FormReport {
        let mut outcomes = BTreeMap::new();
        for (name, rule) in &self.rules {
            let raw = values.get(name).map(String::as_str).unwrap_or("");
            outcomes.insert(name.clone(), rule.check(raw));
        }
        FormReport { outcomes }
    }
}

/// The per-field outcomes of a whole-form validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormReport {
    outcomes: BTreeMap<String, ValidationResult>,
}

impl FormReport {
    /// True when every checked field passed.
    pub fn is_valid(&self) -> bool {
        self.outcomes.values().all(|outcome| outcome.valid)
    }

    pub fn outcome(&self, name: &str) -> Option<&ValidationResult> {
        self.outcomes.get(name)
    }

    pub fn outcomes(&self) -> impl Iterator<Item = (&str, &ValidationResult)> {
        self.outcomes
            .iter()
            .map(|(name, outcome)| (name.as_str(), outcome))
    }

    /// The (field, message) pairs of every failed field.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes.iter().filter_map(|(name, outcome)| {
            outcome.error.as_deref().map(|error| (name.as_str(), error))
        })
    }

    /// The normalized values of every field that passed and produced one.
    /// These are the strings to submit.
    pub fn normalized(&self) -> BTreeMap<String, String> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.valid)
            .filter_map(|(name, outcome)| {
                outcome.value.clone().map(|value| (name.clone(), value))
            })
            .collect()
    }
}

/// Visual marking an input element should carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldMark {
    /// No validation styling.
    #[default]
    Unset,
    /// The `is-valid` styling.
    Valid,
    /// The `is-invalid` styling, paired with a feedback message.
    Invalid,
}

/// The feedback state of a single input: its marking, the feedback message
/// shown under it, and a value to write back into the input when
/// normalization changed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub mark: FieldMark,
    pub error: Option<String>,
    pub value: Option<String>,
}

impl FieldState {
    /// Marking after the error styling clears: valid, no message.
    fn clear(&mut self) {
        self.mark = FieldMark::Valid;
        self.error = None;
        self.value = None;
    }

    fn apply(&mut self, kind: FieldKind, outcome: &ValidationResult) {
        if outcome.valid {
            self.mark = FieldMark::Valid;
            self.error = None;
            // Only URL inputs get the normalized value pushed back, so the
            // user sees the scheme fix before submitting.
            self.value = if kind == FieldKind::Url {
                outcome.value.clone()
            } else {
                None
            };
        } else {
            self.mark = FieldMark::Invalid;
            self.error = outcome.error.clone();
            self.value = None;
        }
    }
}

/// Drives the feedback states of one form from its input events.
///
/// The caller names the inputs the form actually contains. A blur or focus
/// on anything else is ignored, and fields that are registered but not bound
/// never appear in a submit report.
#[derive(Debug, Clone)]
pub struct FormBinding {
    validator: FormValidator,
    bound: Vec<String>,
    states: BTreeMap<String, FieldState>,
}

impl FormBinding {
    pub fn new(
        validator: FormValidator,
        bound: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            validator,
            bound: bound.into_iter().map(Into::into).collect(),
            states: BTreeMap::new(),
        }
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    pub fn bound_fields(&self) -> impl Iterator<Item = &str> {
        self.bound.iter().map(String::as_str)
    }

    fn is_bound(&self, name: &str) -> bool {
        self.bound.iter().any(|bound| bound == name)
    }

    /// Handles a bound input losing focus: validates it and updates its
    /// state. A bound input with no registered rule passes and is marked
    /// valid, exactly as if its check had succeeded.
    pub fn on_blur(&mut self, name: &str, raw: &str) -> &FieldState {
        if !self.is_bound(name) {
            return self.states.entry(name.to_string()).or_default();
        }

        match self.validator.rule(name).copied() {
            Some(rule) => {
                let outcome = rule.check(raw);
                let state = self.states.entry(name.to_string()).or_default();
                state.apply(rule.kind(), &outcome);
                state
            }
            None => {
                let state = self.states.entry(name.to_string()).or_default();
                state.clear();
                state
            }
        }
    }

    /// Handles a bound input gaining focus: any error clears and the field
    /// is marked valid while the user edits it.
    pub fn on_focus(&mut self, name: &str) {
        if !self.is_bound(name) {
            return;
        }
        self.states.entry(name.to_string()).or_default().clear();
    }

    /// Handles a submit attempt: validates every bound field that has a
    /// rule, updates their states, and returns the report. Submission should
    /// proceed only when the report is valid.
    pub fn on_submit(&mut self, values: &BTreeMap<String, String>) -> FormReport {
        let mut outcomes = BTreeMap::new();
        for name in self.bound.clone() {
            let Some(rule) = self.validator.rule(&name).copied() else {
                continue;
            };
            let raw = values.get(&name).map(String::as_str).unwrap_or("");
            let outcome = rule.check(raw);
            self.states
                .entry(name.clone())
                .or_default()
                .apply(rule.kind(), &outcome);
            outcomes.insert(name, outcome);
        }
        FormReport { outcomes }
    }

    /// Resets every field back to unmarked, as after a form reset.
    pub fn clear_all(&mut self) {
        self.states.clear();
    }

    pub fn state(&self, name: &str) -> FieldState {
        self.states.get(name).cloned().unwrap_or_default()
    }

    /// True while no field is marked invalid.
    pub fn is_clean(&self) -> bool {
        self.states
            .values()
            .all(|state| state.mark != FieldMark::Invalid)
    }
}
