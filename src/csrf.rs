//! Pre-submit check on the CSRF token embedded in a form.
//!
//! This does not verify the token cryptographically, the backend does that.
//! It only catches the obviously broken cases, a missing or truncated token,
//! before a doomed request is sent.

use thiserror::Error;

use crate::alert::Alert;
use crate::constants::MIN_CSRF_TOKEN_LENGTH;

/// A token that cannot possibly be accepted by the backend, with the banner
/// asking the user to refresh.
#[derive(Debug, Clone, Error)]
#[error("missing or invalid csrf token")]
pub struct CsrfRejection {
    pub alert: Alert,
}

/// Checks that a form's CSRF token is present and plausibly long enough.
pub fn validate_csrf_token(token: &str) -> Result<(), CsrfRejection> {
    if token.chars().count() < MIN_CSRF_TOKEN_LENGTH {
        log::error!("Missing or invalid CSRF token");
        return Err(CsrfRejection {
            alert: Alert::error("Security token missing. Please refresh the page."),
        });
    }
    Ok(())
}
