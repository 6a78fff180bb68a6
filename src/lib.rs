//! Form validation and page-guard plumbing for the SutraAtlas web client.
//!
//! The crate mirrors the checks the backend enforces, with the same limits
//! and the same messages, so a form can reject bad input before a request is
//! ever sent. Validation outcomes are data, not errors: a
//! [`ValidationResult`] says whether the value passed, the message to show
//! when it did not, and the normalized value to submit when one applies.
//!
//! What lives where:
//!
//! - [`fields`]: the per-field validators and their normalizations
//! - [`form`]: explicit (field name, rule) registration per form, plus the
//!   blur/focus/submit feedback states
//! - [`alert`]: the transient banner stack
//! - [`route`]: sanity checks on ids found in the URL path
//! - [`auth`]: the session probe and the login redirect
//! - [`csrf`]: the pre-submit token presence check
//!
//! ```
//! use atlas_forms::{FieldKind, FieldRule, FormValidator};
//!
//! let mut validator = FormValidator::new();
//! validator.register("email", FieldRule::of(FieldKind::Email));
//! validator.register("url", FieldRule::of(FieldKind::Url));
//!
//! let outcome = validator.check_field("email", "  USER@Example.com ");
//! assert!(outcome.valid);
//! assert_eq!(outcome.value.as_deref(), Some("user@example.com"));
//!
//! let outcome = validator.check_field("url", "sutra-atlas.org");
//! assert_eq!(outcome.value.as_deref(), Some("https://sutra-atlas.org"));
//! ```

pub mod alert;
pub mod auth;
pub mod constants;
pub mod csrf;
pub mod fields;
pub mod form;
pub mod route;
pub mod types;

pub use alert::{Alert, AlertKind, AlertStack};
pub use auth::{AuthGate, AuthProbe, LoginRedirect};
pub use constants::*;
pub use csrf::{validate_csrf_token, CsrfRejection};
pub use fields::{
    authors_list, validate_authors, validate_description, validate_email, validate_password,
    validate_password_match, validate_status, validate_title, validate_url, validate_username,
};
pub use form::{
    FieldKind, FieldMark, FieldRule, FieldState, FormBinding, FormReport, FormValidator,
};
pub use route::{guard_path, validate_route_param, EntityKind, RouteRejection};
pub use types::{Redirect, Status, ValidationResult};
