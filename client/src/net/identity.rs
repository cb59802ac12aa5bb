//! Identity provider adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! `IdentityProvider` wraps an `IdentityBackend` (the hosted identity REST
//! API in production) and a `SessionStorage` (browser `localStorage`). It
//! owns the current auth session and pushes every change to registered
//! listeners. The session store in `state::session` is the main listener.
//!
//! DESIGN
//! ======
//! Listeners are invoked after the registry lock is released, so a listener
//! may call back into the provider. `restore` is the source of the first
//! notification; operations that finish before it win and `restore` is then
//! ignored.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::net::types::UserIdentity;

/// Tokens issued by the identity backend for one signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub id_token: String,
    pub refresh_token: String,
}

/// A signed-in user together with the tokens that prove it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: UserIdentity,
    pub tokens: AuthTokens,
}

/// Third-party identity providers offered on the login and sign-up pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FederatedProvider {
    Google,
}

impl FederatedProvider {
    /// Provider id understood by the identity backend.
    pub fn provider_id(self) -> &'static str {
        match self {
            Self::Google => "google.com",
        }
    }
}

/// Proof of identity returned by a federated provider's redirect flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FederatedCredential {
    pub provider: FederatedProvider,
    pub id_token: String,
}

/// Profile fields to change. `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Remote identity service operations.
#[async_trait(?Send)]
pub trait IdentityBackend {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    async fn sign_in_with_idp(&self, credential: &FederatedCredential) -> Result<AuthSession, AuthError>;

    async fn update_profile(&self, id_token: &str, update: &ProfileUpdate) -> Result<UserIdentity, AuthError>;

    /// Resolve the user behind an id token; fails once the token expires.
    async fn lookup(&self, id_token: &str) -> Result<UserIdentity, AuthError>;

    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, AuthError>;

    /// URL that starts the provider's consent screen; `state` comes back on the callback.
    fn authorize_url(&self, provider: FederatedProvider, state: &str) -> Result<String, AuthError>;
}

/// Where the signed-in session survives page reloads.
pub trait SessionStorage {
    fn load(&self) -> Option<AuthSession>;
    fn save(&self, session: &AuthSession);
    fn clear(&self);
}

type Listener = Arc<dyn Fn(Option<UserIdentity>) + Send + Sync>;

#[derive(Default)]
struct Registry {
    current: Option<AuthSession>,
    /// Set once the first notification has gone out.
    resolved: bool,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

impl Registry {
    fn current_user(&self) -> Option<UserIdentity> {
        self.current.as_ref().map(|s| s.user.clone())
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle for one identity-change listener. Dropping it unregisters the listener.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Unregister the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Shared handle to the identity adapter. Cheap to clone.
#[derive(Clone)]
pub struct IdentityProvider {
    backend: Arc<dyn IdentityBackend + Send + Sync>,
    storage: Arc<dyn SessionStorage + Send + Sync>,
    registry: Arc<Mutex<Registry>>,
}

impl IdentityProvider {
    pub fn new<B, S>(backend: B, storage: S) -> Self
    where
        B: IdentityBackend + Send + Sync + 'static,
        S: SessionStorage + Send + Sync + 'static,
    {
        Self {
            backend: Arc::new(backend),
            storage: Arc::new(storage),
            registry: Arc::new(Mutex::new(Registry::default())),
        }
    }

    /// Register `callback` for identity changes.
    ///
    /// If the initial state is already known the callback runs immediately
    /// with the current user.
    pub fn on_identity_change<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Option<UserIdentity>) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(callback);
        let (id, immediate) = {
            let mut registry = lock(&self.registry);
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, Arc::clone(&listener)));
            (id, registry.resolved.then(|| registry.current_user()))
        };
        if let Some(user) = immediate {
            listener(user);
        }
        Subscription { id, registry: Arc::downgrade(&self.registry) }
    }

    pub fn current_user(&self) -> Option<UserIdentity> {
        lock(&self.registry).current_user()
    }

    /// Whether the first identity notification has been sent.
    pub fn is_resolved(&self) -> bool {
        lock(&self.registry).resolved
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }

    /// Load the persisted session, verify it with the backend, and publish
    /// the result as the first notification.
    pub async fn restore(&self) {
        let restored = match self.storage.load() {
            Some(saved) => self.verify(saved).await,
            None => None,
        };

        if self.is_resolved() {
            log::debug!("identity already resolved; ignoring restored session");
            return;
        }
        match &restored {
            Some(session) => {
                log::info!("restored session for user {}", session.user.id);
                self.storage.save(session);
            }
            None => self.storage.clear(),
        }
        self.publish(restored);
    }

    async fn verify(&self, saved: AuthSession) -> Option<AuthSession> {
        match self.backend.lookup(&saved.tokens.id_token).await {
            Ok(user) => return Some(AuthSession { user, tokens: saved.tokens }),
            // Offline: keep the cached user rather than signing them out.
            Err(AuthError::Network(e)) => {
                log::warn!("session check failed, keeping cached user: {e}");
                return Some(saved);
            }
            Err(e) => log::info!("stored id token rejected ({e}); refreshing"),
        }

        let tokens = match self.backend.refresh(&saved.tokens.refresh_token).await {
            Ok(tokens) => tokens,
            Err(e) => {
                log::warn!("session refresh failed: {e}");
                return None;
            }
        };
        match self.backend.lookup(&tokens.id_token).await {
            Ok(user) => Some(AuthSession { user, tokens }),
            Err(e) => {
                log::warn!("lookup after refresh failed: {e}");
                None
            }
        }
    }

    /// Create an email/password account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns the backend's `AuthError` unchanged.
    pub async fn create_account(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError> {
        let session = self
            .backend
            .sign_up(email, password)
            .await
            .inspect_err(|e| log::warn!("sign-up failed: {e}"))?;
        Ok(self.establish(session))
    }

    /// # Errors
    ///
    /// Returns the backend's `AuthError` unchanged.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError> {
        let session = self
            .backend
            .sign_in_with_password(email, password)
            .await
            .inspect_err(|e| log::warn!("password sign-in failed: {e}"))?;
        Ok(self.establish(session))
    }

    /// Exchange a federated credential for a session.
    ///
    /// # Errors
    ///
    /// Returns the backend's `AuthError` unchanged.
    pub async fn sign_in_with_federated(&self, credential: &FederatedCredential) -> Result<UserIdentity, AuthError> {
        let session = self
            .backend
            .sign_in_with_idp(credential)
            .await
            .inspect_err(|e| log::warn!("{} sign-in failed: {e}", credential.provider.provider_id()))?;
        Ok(self.establish(session))
    }

    /// # Errors
    ///
    /// Fails when the provider is not configured.
    pub fn federated_authorize_url(&self, provider: FederatedProvider, state: &str) -> Result<String, AuthError> {
        self.backend.authorize_url(provider, state)
    }

    /// Forget the current session locally and notify listeners.
    pub fn sign_out(&self) {
        self.storage.clear();
        self.publish(None);
        log::info!("signed out");
    }

    /// Update the signed-in user's display name and/or photo.
    ///
    /// # Errors
    ///
    /// `AuthError::NotSignedIn` without a current session, otherwise the
    /// backend's error.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserIdentity, AuthError> {
        let current = lock(&self.registry).current.clone();
        let Some(current) = current else {
            return Err(AuthError::NotSignedIn);
        };
        let mut user = self
            .backend
            .update_profile(&current.tokens.id_token, update)
            .await
            .inspect_err(|e| log::warn!("profile update failed: {e}"))?;
        let still_current = lock(&self.registry)
            .current
            .as_ref()
            .is_some_and(|s| s.tokens.id_token == current.tokens.id_token);
        if !still_current {
            log::info!("session changed during profile update; dropping result");
            return Err(AuthError::NotSignedIn);
        }
        // Some responses omit unchanged fields.
        if user.email.is_none() {
            user.email = current.user.email.clone();
        }
        Ok(self.establish(AuthSession { user, tokens: current.tokens }))
    }

    fn establish(&self, session: AuthSession) -> UserIdentity {
        self.storage.save(&session);
        let user = session.user.clone();
        log::info!("signed in as {}", user.id);
        self.publish(Some(session));
        user
    }

    fn publish(&self, session: Option<AuthSession>) {
        let (listeners, user) = {
            let mut registry = lock(&self.registry);
            registry.current = session;
            registry.resolved = true;
            let listeners: Vec<Listener> = registry.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (listeners, registry.current_user())
        };
        for listener in listeners {
            listener(user.clone());
        }
    }
}
