//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard, the login/sign-up pages and the OAuth callback page share
//! these pure decisions so their behavior stays identical and testable
//! without a browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::AppRoute;
use crate::state::session::{Session, SessionPhase};

/// What a guarded route should show for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Initial identity check still running: neutral placeholder, no redirect.
    Pending,
    /// Signed in: render the protected subtree.
    Allow,
    /// Signed out: replace the attempted navigation with this path.
    Redirect(&'static str),
}

pub fn guard_decision(session: &Session) -> GuardDecision {
    match session.phase() {
        SessionPhase::Loading => GuardDecision::Pending,
        SessionPhase::Authenticated => GuardDecision::Allow,
        SessionPhase::Unauthenticated => GuardDecision::Redirect(AppRoute::Login.path()),
    }
}

/// Trim and require both login fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// A fresh random value for the OAuth `state`/`nonce` round trip.
pub fn new_oauth_state() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Parameters Google appends to the redirect URI fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthRedirect {
    pub id_token: String,
    pub state: String,
}

/// Parse the `#id_token=...&state=...` fragment of the OAuth callback URL.
///
/// # Errors
///
/// Returns the provider's `error` value, or a message naming the missing field.
pub fn parse_oauth_fragment(fragment: &str) -> Result<OAuthRedirect, String> {
    let mut id_token = None;
    let mut state = None;
    let mut error = None;
    for pair in fragment.trim_start_matches('#').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = urlencoding::decode(value).map_or_else(|_| value.to_owned(), |v| v.into_owned());
        match key {
            "id_token" => id_token = Some(value),
            "state" => state = Some(value),
            "error" => error = Some(value),
            _ => {}
        }
    }

    if let Some(error) = error {
        return Err(format!("Google sign-in was cancelled ({error})."));
    }
    match (id_token, state) {
        (Some(id_token), Some(state)) => Ok(OAuthRedirect { id_token, state }),
        (None, _) => Err("Google did not return an id token.".to_owned()),
        (_, None) => Err("Google did not return the sign-in state.".to_owned()),
    }
}
