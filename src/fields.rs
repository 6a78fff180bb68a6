//! Field-level validators mirroring the backend's limits.
//!
//! Each function trims its input first. A value that is empty after trimming
//! is either a "required" failure or a valid empty, depending on the field.
//! Length bounds come next, then the format predicate. On success the outcome
//! carries the normalized value to submit, where normalization applies
//! (lowercased email, scheme-fixed URL, trimmed text). Passwords never echo a
//! value.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use strum::IntoEnumIterator;

use crate::constants::{
    MAX_AUTHORS_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_EMAIL_LENGTH, MAX_PASSWORD_LENGTH,
    MAX_TITLE_LENGTH, MAX_URL_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH,
    MIN_USERNAME_LENGTH,
};
use crate::types::{Status, ValidationResult};

/// Simplified ASCII email pattern, shared with the backend's registration
/// check. Deliberately stricter than RFC 5322: one local part, one domain,
/// a TLD of at least two letters.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("Failed to compile username regex"));

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://.+").expect("Failed to compile url regex"));

/// Validates an email address. Required; at most 254 chars; must match the
/// simplified ASCII pattern. The returned value is trimmed and lowercased.
pub fn validate_email(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Email is required");
    }

    let normalized = trimmed.to_lowercase();
    if normalized.chars().count() > MAX_EMAIL_LENGTH {
        return ValidationResult::fail("Email too long");
    }

    if !EMAIL_REGEX.is_match(&normalized) {
        return ValidationResult::fail("Invalid email format");
    }

    ValidationResult::pass_with(normalized)
}

/// Validates a username: 3-50 chars from `[A-Za-z0-9_-]`. Empty input is
/// valid unless `required` is set.
pub fn validate_username(raw: &str, required: bool) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        if required {
            return ValidationResult::fail("Username is required");
        }
        return ValidationResult::pass_with("");
    }

    let length = trimmed.chars().count();
    if length < MIN_USERNAME_LENGTH {
        return ValidationResult::fail(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LENGTH
        ));
    }
    if length > MAX_USERNAME_LENGTH {
        return ValidationResult::fail(format!(
            "Username too long (max {} characters)",
            MAX_USERNAME_LENGTH
        ));
    }

    if !USERNAME_REGEX.is_match(trimmed) {
        return ValidationResult::fail(
            "Username can only contain letters, numbers, hyphens, and underscores",
        );
    }

    ValidationResult::pass_with(trimmed)
}

/// Validates a password: required, 8-128 chars, and at least one ASCII
/// uppercase letter, one lowercase letter and one digit. No value is echoed
/// back, so the caller always submits exactly what the user typed.
pub fn validate_password(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Password is required");
    }

    let length = trimmed.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return ValidationResult::fail(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }
    if length > MAX_PASSWORD_LENGTH {
        return ValidationResult::fail(format!(
            "Password too long (max {} characters)",
            MAX_PASSWORD_LENGTH
        ));
    }

    if !trimmed.chars().any(|c| c.is_ascii_uppercase()) {
        return ValidationResult::fail("Password must contain at least one uppercase letter");
    }
    if !trimmed.chars().any(|c| c.is_ascii_lowercase()) {
        return ValidationResult::fail("Password must contain at least one lowercase letter");
    }
    if !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return ValidationResult::fail("Password must contain at least one number");
    }

    ValidationResult::pass()
}

/// Validates a title: required, at most 300 chars. The value is the trimmed
/// input.
pub fn validate_title(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Title is required");
    }

    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return ValidationResult::fail(format!(
            "Title too long (max {} characters)",
            MAX_TITLE_LENGTH
        ));
    }

    ValidationResult::pass_with(trimmed)
}

/// Validates a description: at most 1000 chars. Empty input is valid unless
/// `required` is set.
pub fn validate_description(raw: &str, required: bool) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        if required {
            return ValidationResult::fail("Description is required");
        }
        return ValidationResult::pass_with("");
    }

    if trimmed.chars().count() > MAX_DESCRIPTION_LENGTH {
        return ValidationResult::fail(format!(
            "Description too long (max {} characters)",
            MAX_DESCRIPTION_LENGTH
        ));
    }

    ValidationResult::pass_with(trimmed)
}

/// Validates the comma-separated authors field: optional, at most 500 chars.
pub fn validate_authors(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::pass_with("");
    }

    if trimmed.chars().count() > MAX_AUTHORS_LENGTH {
        return ValidationResult::fail(format!(
            "Authors field too long (max {} characters)",
            MAX_AUTHORS_LENGTH
        ));
    }

    ValidationResult::pass_with(trimmed)
}

/// Splits an authors value into its individual entries: comma-separated,
/// trimmed, empties dropped.
pub fn authors_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|author| !author.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validates a URL: optional, at most 1000 chars. A missing scheme is fixed
/// by prepending `https://`; the result must then look like an http(s) URL.
/// The length bound applies to the input before the fix, so a maximal URL
/// stays submittable after it.
pub fn validate_url(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::pass_with("");
    }

    if trimmed.chars().count() > MAX_URL_LENGTH {
        return ValidationResult::fail(format!(
            "URL too long (max {} characters)",
            MAX_URL_LENGTH
        ));
    }

    let fixed = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    if !URL_REGEX.is_match(&fixed) {
        return ValidationResult::fail("Invalid URL format");
    }

    ValidationResult::pass_with(fixed)
}

/// Scheme detection for the auto-fix. Case-insensitive, so an upper-cased
/// scheme is left as typed instead of being prefixed a second time.
fn has_scheme(url: &str) -> bool {
    url.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("http://"))
        || url.get(..8).is_some_and(|p| p.eq_ignore_ascii_case("https://"))
}

/// Validates a resource status label: optional, but a non-empty value must be
/// one of the exact labels the backend accepts. The value is the canonical
/// label.
pub fn validate_status(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::pass_with("");
    }

    match Status::from_str(trimmed) {
        Ok(status) => ValidationResult::pass_with(status.to_string()),
        Err(_) => {
            let valid_values: Vec<String> = Status::iter().map(|s| s.to_string()).collect();
            ValidationResult::fail(format!(
                "Invalid status. Valid values: {}",
                valid_values.join(", ")
            ))
        }
    }
}

/// Checks that the two password entries are exactly equal. No trimming here:
/// the comparison must see what the user will actually submit.
pub fn validate_password_match(password1: &str, password2: &str) -> ValidationResult {
    if password1 != password2 {
        return ValidationResult::fail("Passwords do not match");
    }
    ValidationResult::pass()
}
