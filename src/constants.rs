//! Shared limits and timing for the validation system.
//!
//! The field limits duplicate the backend's authoritative column sizes; the
//! client-side checks are advisory and must be kept in sync with the server.

use std::time::Duration;

/// Maximum length for an email address
pub const MAX_EMAIL_LENGTH: usize = 254;
/// Minimum length for a username
pub const MIN_USERNAME_LENGTH: usize = 3;
/// Maximum length for a username
pub const MAX_USERNAME_LENGTH: usize = 50;
/// Minimum length for a password
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Maximum length for a password
pub const MAX_PASSWORD_LENGTH: usize = 128;
/// Maximum length for a resource title
pub const MAX_TITLE_LENGTH: usize = 300;
/// Maximum length for a description
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;
/// Maximum length for the comma-separated authors field
pub const MAX_AUTHORS_LENGTH: usize = 500;
/// Maximum length for a URL
pub const MAX_URL_LENGTH: usize = 1000;
/// Minimum length for a CSRF token
pub const MIN_CSRF_TOKEN_LENGTH: usize = 10;

pub const AUTH_PROBE_PATH: &str = "/api/auth/me"; // Boundary endpoint answering "is this session authenticated".
pub const LOGIN_PATH: &str = "/login"; // Where unauthenticated visitors are sent.
pub const COLLECTIONS_PATH: &str = "/collections"; // Safe landing page after a bad route parameter.

/// Default prompt shown before redirecting an unauthenticated visitor.
pub const LOGIN_PROMPT: &str = "Please log in to access this page.";

/// How long an alert banner stays up before it is dismissed.
pub const ALERT_DISMISS_AFTER: Duration = Duration::from_secs(5);
/// Pause before navigating to the login page, so the alert is readable.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1500);
/// Pause before navigating away from a page with a bad route parameter.
pub const ROUTE_REDIRECT_DELAY: Duration = Duration::from_millis(2000);
/// Upper bound on the authentication probe round-trip.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);
