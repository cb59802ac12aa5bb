use std::sync::atomic::{AtomicUsize, Ordering};

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;

// =============================================================
// Fakes
// =============================================================

fn user(id: &str) -> UserIdentity {
    UserIdentity {
        id: id.to_owned(),
        display_name: None,
        email: Some(format!("{id}@example.com")),
        photo_url: None,
    }
}

fn tokens(tag: &str) -> AuthTokens {
    AuthTokens { id_token: format!("id-{tag}"), refresh_token: format!("refresh-{tag}") }
}

fn session(id: &str, tag: &str) -> AuthSession {
    AuthSession { user: user(id), tokens: tokens(tag) }
}

#[derive(Default)]
struct FakeBackend {
    calls: AtomicUsize,
    reject_sign_in: bool,
    /// Id tokens that `lookup` accepts.
    valid_tokens: Vec<String>,
    offline_lookup: bool,
    refresh_ok: bool,
}

#[async_trait(?Send)]
impl IdentityBackend for FakeBackend {
    async fn sign_up(&self, email: &str, _password: &str) -> Result<AuthSession, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let id = email.split('@').next().unwrap_or_default();
        Ok(session(id, "signup"))
    }

    async fn sign_in_with_password(&self, email: &str, _password: &str) -> Result<AuthSession, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.reject_sign_in {
            return Err(AuthError::from_provider_code("INVALID_LOGIN_CREDENTIALS"));
        }
        let id = email.split('@').next().unwrap_or_default();
        Ok(session(id, "password"))
    }

    async fn sign_in_with_idp(&self, credential: &FederatedCredential) -> Result<AuthSession, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(session(&format!("google-{}", credential.id_token), "idp"))
    }

    async fn update_profile(&self, _id_token: &str, update: &ProfileUpdate) -> Result<UserIdentity, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(UserIdentity {
            id: "ana".to_owned(),
            display_name: update.display_name.clone(),
            email: None,
            photo_url: update.photo_url.clone(),
        })
    }

    async fn lookup(&self, id_token: &str) -> Result<UserIdentity, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline_lookup {
            return Err(AuthError::Network("offline".to_owned()));
        }
        if self.valid_tokens.iter().any(|t| t == id_token) {
            Ok(user("ana"))
        } else {
            Err(AuthError::from_provider_code("INVALID_ID_TOKEN"))
        }
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<AuthTokens, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.refresh_ok {
            Ok(tokens("refreshed"))
        } else {
            Err(AuthError::from_provider_code("TOKEN_EXPIRED"))
        }
    }

    fn authorize_url(&self, provider: FederatedProvider, state: &str) -> Result<String, AuthError> {
        Ok(format!("https://idp.test/{}?state={state}", provider.provider_id()))
    }
}

#[derive(Clone, Default)]
struct MemoryStorage(Arc<Mutex<Option<AuthSession>>>);

impl MemoryStorage {
    fn with(session: AuthSession) -> Self {
        Self(Arc::new(Mutex::new(Some(session))))
    }

    fn get(&self) -> Option<AuthSession> {
        self.0.lock().unwrap().clone()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<AuthSession> {
        self.get()
    }

    fn save(&self, session: &AuthSession) {
        *self.0.lock().unwrap() = Some(session.clone());
    }

    fn clear(&self) {
        *self.0.lock().unwrap() = None;
    }
}

/// Records every notification a listener receives.
fn recorder(provider: &IdentityProvider) -> (Subscription, Arc<Mutex<Vec<Option<String>>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = provider.on_identity_change(move |u| sink.lock().unwrap().push(u.map(|u| u.id)));
    (sub, seen)
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn listener_registered_before_resolution_waits_for_first_notification() {
    let provider = IdentityProvider::new(FakeBackend::default(), MemoryStorage::default());
    let (_sub, seen) = recorder(&provider);
    assert!(seen.lock().unwrap().is_empty());
    assert!(!provider.is_resolved());

    block_on(provider.restore());
    assert_eq!(*seen.lock().unwrap(), vec![None]);
    assert!(provider.is_resolved());
}

#[test]
fn late_listener_is_called_immediately_with_current_user() {
    let provider = IdentityProvider::new(FakeBackend::default(), MemoryStorage::default());
    block_on(provider.sign_in_with_password("ana@example.com", "Secret1")).unwrap();

    let (_sub, seen) = recorder(&provider);
    assert_eq!(*seen.lock().unwrap(), vec![Some("ana".to_owned())]);
}

#[test]
fn unsubscribe_releases_listener() {
    let provider = IdentityProvider::new(FakeBackend::default(), MemoryStorage::default());
    let (sub, seen) = recorder(&provider);
    assert_eq!(provider.listener_count(), 1);

    sub.unsubscribe();
    assert_eq!(provider.listener_count(), 0);

    provider.sign_out();
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn dropping_subscription_releases_only_its_listener() {
    let provider = IdentityProvider::new(FakeBackend::default(), MemoryStorage::default());
    let (first, _) = recorder(&provider);
    let (_second, seen_second) = recorder(&provider);
    assert_eq!(provider.listener_count(), 2);

    drop(first);
    assert_eq!(provider.listener_count(), 1);

    provider.sign_out();
    assert_eq!(*seen_second.lock().unwrap(), vec![None]);
}

#[test]
fn subscription_outliving_provider_drops_cleanly() {
    let provider = IdentityProvider::new(FakeBackend::default(), MemoryStorage::default());
    let (sub, _) = recorder(&provider);
    drop(provider);
    drop(sub);
}

// =============================================================
// Operations
// =============================================================

#[test]
fn sign_in_persists_and_notifies() {
    let storage = MemoryStorage::default();
    let provider = IdentityProvider::new(FakeBackend::default(), storage.clone());
    let (_sub, seen) = recorder(&provider);

    let signed_in = block_on(provider.sign_in_with_password("ana@example.com", "Secret1")).unwrap();
    assert_eq!(signed_in.id, "ana");
    assert_eq!(provider.current_user().map(|u| u.id), Some("ana".to_owned()));
    assert_eq!(storage.get().map(|s| s.tokens), Some(tokens("password")));
    assert_eq!(*seen.lock().unwrap(), vec![Some("ana".to_owned())]);
}

#[test]
fn rejected_sign_in_leaves_state_untouched() {
    let backend = FakeBackend { reject_sign_in: true, ..FakeBackend::default() };
    let storage = MemoryStorage::default();
    let provider = IdentityProvider::new(backend, storage.clone());
    let (_sub, seen) = recorder(&provider);

    let err = block_on(provider.sign_in_with_password("ana@example.com", "nope")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid email or password.");
    assert!(provider.current_user().is_none());
    assert!(storage.get().is_none());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn create_account_signs_the_new_user_in() {
    let provider = IdentityProvider::new(FakeBackend::default(), MemoryStorage::default());
    let created = block_on(provider.create_account("leo@example.com", "Abcdef")).unwrap();
    assert_eq!(created.id, "leo");
    assert_eq!(provider.current_user(), Some(created));
}

#[test]
fn federated_sign_in_uses_credential() {
    let provider = IdentityProvider::new(FakeBackend::default(), MemoryStorage::default());
    let credential = FederatedCredential { provider: FederatedProvider::Google, id_token: "jwt".to_owned() };
    let signed_in = block_on(provider.sign_in_with_federated(&credential)).unwrap();
    assert_eq!(signed_in.id, "google-jwt");
}

#[test]
fn federated_authorize_url_comes_from_backend() {
    let provider = IdentityProvider::new(FakeBackend::default(), MemoryStorage::default());
    let url = provider.federated_authorize_url(FederatedProvider::Google, "s1").unwrap();
    assert_eq!(url, "https://idp.test/google.com?state=s1");
}

#[test]
fn sign_out_clears_storage_and_notifies_none() {
    let storage = MemoryStorage::with(session("ana", "saved"));
    let provider = IdentityProvider::new(FakeBackend::default(), storage.clone());
    block_on(provider.sign_in_with_password("ana@example.com", "Secret1")).unwrap();
    let (_sub, seen) = recorder(&provider);

    provider.sign_out();
    assert!(storage.get().is_none());
    assert!(provider.current_user().is_none());
    assert_eq!(*seen.lock().unwrap(), vec![Some("ana".to_owned()), None]);
}

#[test]
fn update_profile_requires_a_session() {
    let backend = FakeBackend::default();
    let provider = IdentityProvider::new(backend, MemoryStorage::default());
    let err = block_on(provider.update_profile(&ProfileUpdate::default())).unwrap_err();
    assert_eq!(err, AuthError::NotSignedIn);
}

#[test]
fn update_profile_notifies_with_new_identity_and_keeps_email() {
    let provider = IdentityProvider::new(FakeBackend::default(), MemoryStorage::default());
    block_on(provider.sign_in_with_password("ana@example.com", "Secret1")).unwrap();
    let (_sub, seen) = recorder(&provider);

    let update = ProfileUpdate {
        display_name: Some("Ana Flores".to_owned()),
        photo_url: Some("https://img.test/ana.png".to_owned()),
    };
    let updated = block_on(provider.update_profile(&update)).unwrap();
    assert_eq!(updated.display_name.as_deref(), Some("Ana Flores"));
    assert_eq!(updated.email.as_deref(), Some("ana@example.com"));
    assert_eq!(seen.lock().unwrap().len(), 2);
}

/// Wraps `FakeBackend` but holds `update_profile` until released.
struct HeldProfileBackend {
    inner: FakeBackend,
    release: Mutex<Option<oneshot::Receiver<()>>>,
}

#[async_trait(?Send)]
impl IdentityBackend for HeldProfileBackend {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        self.inner.sign_up(email, password).await
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        self.inner.sign_in_with_password(email, password).await
    }

    async fn sign_in_with_idp(&self, credential: &FederatedCredential) -> Result<AuthSession, AuthError> {
        self.inner.sign_in_with_idp(credential).await
    }

    async fn update_profile(&self, id_token: &str, update: &ProfileUpdate) -> Result<UserIdentity, AuthError> {
        let release = self.release.lock().unwrap().take();
        if let Some(release) = release {
            let _ = release.await;
        }
        self.inner.update_profile(id_token, update).await
    }

    async fn lookup(&self, id_token: &str) -> Result<UserIdentity, AuthError> {
        self.inner.lookup(id_token).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, AuthError> {
        self.inner.refresh(refresh_token).await
    }

    fn authorize_url(&self, provider: FederatedProvider, state: &str) -> Result<String, AuthError> {
        self.inner.authorize_url(provider, state)
    }
}

#[test]
fn sign_out_during_profile_update_stays_signed_out() {
    let (tx, rx) = oneshot::channel();
    let backend = HeldProfileBackend { inner: FakeBackend::default(), release: Mutex::new(Some(rx)) };
    let storage = MemoryStorage::default();
    let provider = IdentityProvider::new(backend, storage.clone());
    block_on(provider.sign_in_with_password("ana@example.com", "Secret1")).unwrap();
    let (_sub, seen) = recorder(&provider);

    let update = ProfileUpdate { display_name: Some("Ana Flores".to_owned()), photo_url: None };
    let (result, ()) = block_on(futures::future::join(provider.update_profile(&update), async {
        provider.sign_out();
        tx.send(()).unwrap();
    }));

    assert_eq!(result.unwrap_err(), AuthError::NotSignedIn);
    assert_eq!(provider.current_user(), None);
    assert_eq!(storage.get(), None);
    assert_eq!(*seen.lock().unwrap(), vec![Some("ana".to_owned()), None]);
}

#[test]
fn new_sign_in_during_profile_update_is_not_overwritten() {
    let (tx, rx) = oneshot::channel();
    let backend = HeldProfileBackend { inner: FakeBackend::default(), release: Mutex::new(Some(rx)) };
    let storage = MemoryStorage::default();
    let provider = IdentityProvider::new(backend, storage.clone());
    block_on(provider.sign_in_with_password("ana@example.com", "Secret1")).unwrap();

    let update = ProfileUpdate { display_name: Some("Ana Flores".to_owned()), photo_url: None };
    let (result, ()) = block_on(futures::future::join(provider.update_profile(&update), async {
        provider.sign_out();
        provider.create_account("leo@example.com", "Secret1").await.unwrap();
        tx.send(()).unwrap();
    }));

    assert_eq!(result.unwrap_err(), AuthError::NotSignedIn);
    assert_eq!(provider.current_user().map(|u| u.id).as_deref(), Some("leo"));
    assert_eq!(storage.get().map(|s| s.tokens), Some(tokens("signup")));
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_without_saved_session_resolves_signed_out() {
    let backend = FakeBackend::default();
    let provider = IdentityProvider::new(backend, MemoryStorage::default());
    block_on(provider.restore());
    assert!(provider.is_resolved());
    assert!(provider.current_user().is_none());
}

#[test]
fn restore_accepts_valid_saved_token() {
    let backend = FakeBackend { valid_tokens: vec!["id-saved".to_owned()], ..FakeBackend::default() };
    let provider = IdentityProvider::new(backend, MemoryStorage::with(session("ana", "saved")));
    block_on(provider.restore());
    assert_eq!(provider.current_user().map(|u| u.id), Some("ana".to_owned()));
}

#[test]
fn restore_refreshes_expired_token() {
    let backend = FakeBackend {
        valid_tokens: vec!["id-refreshed".to_owned()],
        refresh_ok: true,
        ..FakeBackend::default()
    };
    let storage = MemoryStorage::with(session("ana", "saved"));
    let provider = IdentityProvider::new(backend, storage.clone());
    block_on(provider.restore());
    assert_eq!(provider.current_user().map(|u| u.id), Some("ana".to_owned()));
    assert_eq!(storage.get().map(|s| s.tokens), Some(tokens("refreshed")));
}

#[test]
fn restore_signs_out_when_refresh_fails() {
    let storage = MemoryStorage::with(session("ana", "saved"));
    let provider = IdentityProvider::new(FakeBackend::default(), storage.clone());
    let (_sub, seen) = recorder(&provider);
    block_on(provider.restore());
    assert!(provider.current_user().is_none());
    assert!(storage.get().is_none());
    assert_eq!(*seen.lock().unwrap(), vec![None]);
}

#[test]
fn restore_keeps_cached_user_when_offline() {
    let backend = FakeBackend { offline_lookup: true, ..FakeBackend::default() };
    let provider = IdentityProvider::new(backend, MemoryStorage::with(session("ana", "saved")));
    block_on(provider.restore());
    assert_eq!(provider.current_user().map(|u| u.id), Some("ana".to_owned()));
}

#[test]
fn restore_after_explicit_sign_in_is_ignored() {
    let provider = IdentityProvider::new(FakeBackend::default(), MemoryStorage::default());
    block_on(provider.sign_in_with_password("ana@example.com", "Secret1")).unwrap();
    let (_sub, seen) = recorder(&provider);

    block_on(provider.restore());
    assert_eq!(provider.current_user().map(|u| u.id), Some("ana".to_owned()));
    assert_eq!(seen.lock().unwrap().len(), 1);
}
