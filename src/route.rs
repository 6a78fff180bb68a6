//! Sanity checks on ids extracted from the URL path.
//!
//! Detail pages carry a numeric id right after their `collection` or
//! `resource` segment. A hand-edited or truncated id is caught here before
//! the page fires any API request: the user gets an error banner and is sent
//! back to the listing after a short delay.

use derive_more::Display;
use thiserror::Error;

use crate::alert::Alert;
use crate::constants::{COLLECTIONS_PATH, ROUTE_REDIRECT_DELAY};
use crate::types::Redirect;

/// The two kinds of detail page that carry an id in their path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntityKind {
    #[display("collection")]
    Collection,
    #[display("resource")]
    Resource,
}

impl EntityKind {
    /// The listing page a rejected id falls back to. Resources return to the
    /// collections listing too, since they only exist inside a collection.
    pub fn listing_path(&self) -> &'static str {
        COLLECTIONS_PATH
    }
}

/// A rejected id, carrying the feedback to render and where to send the
/// user.
#[derive(Debug, Clone, Error)]
#[error("invalid {kind} id in url: {raw:?}")]
pub struct RouteRejection {
    pub kind: EntityKind,
    pub raw: String,
    pub alert: Alert,
    pub redirect: Redirect,
}

/// Checks one id taken from the URL path. Valid ids are positive integers;
/// anything else is logged and rejected with an error banner and a delayed
/// redirect to the listing.
pub fn validate_route_param(kind: EntityKind, raw: &str) -> Result<u64, RouteRejection> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            log::error!("Invalid {} ID in URL: {}", kind, raw);
            Err(RouteRejection {
                kind,
                raw: raw.to_string(),
                alert: Alert::error(format!(
                    "Invalid {} ID. Redirecting to {}s page.",
                    kind, kind
                )),
                redirect: Redirect::new(kind.listing_path(), ROUTE_REDIRECT_DELAY),
            })
        }
    }
}

/// Scans a path for detail-page segments and checks the id following each.
///
/// Only the first `collection` and first `resource` segment are inspected,
/// in that order, and a segment with nothing after it counts as an empty id.
/// Paths of at most two segments have no id to check and always pass.
pub fn guard_path(path: &str) -> Result<(), RouteRejection> {
    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() <= 2 {
        return Ok(());
    }

    for (segment, kind) in [
        ("collection", EntityKind::Collection),
        ("resource", EntityKind::Resource),
    ] {
        if let Some(index) = parts.iter().position(|part| *part == segment) {
            let id = parts.get(index + 1).copied().unwrap_or("");
            validate_route_param(kind, id)?;
        }
    }

    Ok(())
}
