//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root `App` builds one `RwSignal<Session>` and provides it as context.
//! Its only writer is the identity-change subscription installed by
//! `provide_session`; route guards and pages read it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::identity::IdentityProvider;
use crate::net::types::UserIdentity;

/// Who is signed in right now, and whether we know yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: Option<UserIdentity>,
    /// True until the first identity-change notification arrives.
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// Coarse session state used by guards and navigation chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Authenticated,
    Unauthenticated,
}

impl Session {
    pub fn phase(&self) -> SessionPhase {
        match (self.loading, self.user.is_some()) {
            (true, _) => SessionPhase::Loading,
            (false, true) => SessionPhase::Authenticated,
            (false, false) => SessionPhase::Unauthenticated,
        }
    }

    /// Apply one identity-change notification.
    pub fn apply_identity_change(&mut self, user: Option<UserIdentity>) {
        self.user = user;
        self.loading = false;
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.email.as_deref())
    }
}

/// Create the session signal, subscribe it to `identity`, and provide both
/// as context for the current reactive scope.
///
/// The subscription is released when the scope is cleaned up.
pub fn provide_session(identity: IdentityProvider) -> RwSignal<Session> {
    let session = RwSignal::new(Session::default());
    let subscription = identity.on_identity_change(move |user| {
        session.update(|s| s.apply_identity_change(user));
    });
    on_cleanup(move || subscription.unsubscribe());

    provide_context(session);
    provide_context(identity);
    session
}
