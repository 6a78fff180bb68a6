//! Session probe and page guard.
//!
//! Pages that need a signed-in user ask the backend before rendering. The
//! probe never blocks a page on a transport error: a failed request is
//! logged and treated exactly like a missing session, so the user lands on
//! the login page instead of a broken one.

use reqwest::Client;

use crate::alert::Alert;
use crate::constants::{
    AUTH_PROBE_PATH, LOGIN_PATH, LOGIN_PROMPT, LOGIN_REDIRECT_DELAY, PROBE_TIMEOUT,
};
use crate::types::Redirect;

/// Asks the backend session endpoint whether the current cookies belong to a
/// signed-in user.
#[derive(Debug, Clone)]
pub struct AuthProbe {
    client: Client,
    base_url: String,
}

impl AuthProbe {
    /// Builds a probe against `base_url`. The client carries a cookie store
    /// so the session cookie rides along with every request.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(PROBE_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Builds a probe on top of an already configured client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), AUTH_PROBE_PATH)
    }

    /// Returns whether the session is signed in. Any transport failure
    /// counts as not authenticated.
    pub async fn check_authentication(&self) -> bool {
        match self.client.get(self.endpoint()).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                log::error!("Authentication check failed: {}", err);
                false
            }
        }
    }

    /// Guards a page at `current_path` with the default login prompt.
    pub async fn require_authentication(&self, current_path: &str) -> AuthGate {
        self.require_authentication_with(current_path, LOGIN_PROMPT)
            .await
    }

    /// Guards a page at `current_path`, showing `message` when the user has
    /// to sign in first.
    pub async fn require_authentication_with(&self, current_path: &str, message: &str) -> AuthGate {
        if self.check_authentication().await {
            AuthGate::Granted
        } else {
            AuthGate::Denied(LoginRedirect::new(current_path, message))
        }
    }
}

/// Outcome of guarding a page behind authentication.
#[derive(Debug, Clone)]
pub enum AuthGate {
    /// Session present, render the page.
    Granted,
    /// No session, show the prompt and send the user to login.
    Denied(LoginRedirect),
}

impl AuthGate {
    pub fn is_granted(&self) -> bool {
        matches!(self, AuthGate::Granted)
    }
}

/// Hand-off to the login flow: where the user meant to go, the banner to
/// show, and the delayed redirect.
#[derive(Debug, Clone)]
pub struct LoginRedirect {
    /// Stored so login can bounce the user back here afterwards.
    pub intended_destination: String,
    pub alert: Alert,
    pub redirect: Redirect,
}

impl LoginRedirect {
    fn new(current_path: &str, message: &str) -> Self {
        Self {
            intended_destination: current_path.to_string(),
            alert: Alert::info(format!("{} Redirecting to login...", message)),
            redirect: Redirect::new(LOGIN_PATH, LOGIN_REDIRECT_DELAY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertKind;

    #[test]
    fn test_endpoint_joins_base_url() {
        let probe = AuthProbe::new("http://localhost:8000").unwrap();
        assert_eq!(probe.endpoint(), "http://localhost:8000/api/auth/me");

        let probe = AuthProbe::new("http://localhost:8000/").unwrap();
        assert_eq!(probe.endpoint(), "http://localhost:8000/api/auth/me");
    }

    #[test]
    fn test_login_redirect_carries_prompt_and_destination() {
        let denied = LoginRedirect::new("/collection/5", LOGIN_PROMPT);

        assert_eq!(denied.intended_destination, "/collection/5");
        assert_eq!(denied.alert.kind, AlertKind::Info);
        assert_eq!(
            denied.alert.message,
            "Please log in to access this page. Redirecting to login..."
        );
        assert_eq!(denied.redirect.target, LOGIN_PATH);
        assert_eq!(denied.redirect.delay, LOGIN_REDIRECT_DELAY);
    }

    #[test]
    fn test_custom_prompt_is_prefixed() {
        let denied = LoginRedirect::new("/resource/3", "Sign in to edit resources.");
        assert_eq!(
            denied.alert.message,
            "Sign in to edit resources. Redirecting to login..."
        );
    }
}
