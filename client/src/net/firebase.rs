//! Identity backend speaking the hosted Identity Toolkit REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `AuthError::Unavailable`; the
//! session store stays in its loading state during server rendering.
//!
//! Request/response shapes follow the `accounts:*` endpoints and the Secure
//! Token `token` endpoint. Error bodies look like
//! `{"error":{"code":400,"message":"EMAIL_EXISTS"}}`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firebase_test.rs"]
mod firebase_test;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::AuthError;
use crate::net::identity::{
    AuthSession, AuthTokens, FederatedCredential, FederatedProvider, IdentityBackend, ProfileUpdate,
};
use crate::net::types::UserIdentity;

const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// `IdentityBackend` backed by the Identity Toolkit REST API.
#[derive(Clone, Debug)]
pub struct FirebaseBackend {
    config: ClientConfig,
}

impl FirebaseBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn accounts_url(&self, method: &str) -> String {
        accounts_endpoint(&self.config.identity_url, method, &self.config.firebase_api_key)
    }

    fn token_url(&self) -> String {
        token_endpoint(&self.config.secure_token_url, &self.config.firebase_api_key)
    }
}

fn accounts_endpoint(base: &str, method: &str, api_key: &str) -> String {
    format!("{base}/accounts:{method}?key={}", urlencoding::encode(api_key))
}

fn token_endpoint(base: &str, api_key: &str) -> String {
    format!("{base}/token?key={}", urlencoding::encode(api_key))
}

fn idp_post_body(credential: &FederatedCredential) -> String {
    format!(
        "id_token={}&providerId={}",
        urlencoding::encode(&credential.id_token),
        credential.provider.provider_id()
    )
}

fn google_authorize_url(client_id: &str, redirect_uri: &str, state: &str) -> String {
    format!(
        "{GOOGLE_AUTHORIZE_URL}?client_id={}&redirect_uri={}&response_type=id_token&scope={}&state={}&nonce={}&prompt=select_account",
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode("openid email profile"),
        urlencoding::encode(state),
        urlencoding::encode(state),
    )
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map a non-success response to an `AuthError`.
fn error_from_response(status: u16, body: &str) -> AuthError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => AuthError::from_provider_code(&envelope.error.message),
        Err(_) => AuthError::Provider {
            code: status.to_string(),
            message: format!("identity service responded with status {status}"),
        },
    }
}

/// Body shared by `signUp`, `signInWithPassword`, and `signInWithIdp`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    id_token: String,
    refresh_token: String,
}

impl From<SignInResponse> for AuthSession {
    fn from(r: SignInResponse) -> Self {
        Self {
            user: UserIdentity {
                id: r.local_id,
                email: non_empty(r.email),
                display_name: non_empty(r.display_name),
                photo_url: non_empty(r.photo_url),
            },
            tokens: AuthTokens { id_token: r.id_token, refresh_token: r.refresh_token },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountInfo {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
}

impl From<AccountInfo> for UserIdentity {
    fn from(a: AccountInfo) -> Self {
        Self {
            id: a.local_id,
            email: non_empty(a.email),
            display_name: non_empty(a.display_name),
            photo_url: non_empty(a.photo_url),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<AccountInfo>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    id_token: String,
    refresh_token: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn profile_update_body(id_token: &str, update: &ProfileUpdate) -> serde_json::Value {
    let mut body = serde_json::json!({ "idToken": id_token, "returnSecureToken": false });
    if let Some(name) = &update.display_name {
        body["displayName"] = serde_json::Value::from(name.as_str());
    }
    if let Some(photo) = &update.photo_url {
        body["photoUrl"] = serde_json::Value::from(photo.as_str());
    }
    body
}

/// POST a JSON body and decode the JSON response.
async fn post_json<T: DeserializeOwned>(url: &str, body: &serde_json::Value) -> Result<T, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let text = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp.status(), &text));
        }
        serde_json::from_str(&text).map_err(|e| AuthError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(AuthError::Unavailable)
    }
}

#[async_trait(?Send)]
impl IdentityBackend for FirebaseBackend {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let body = serde_json::json!({ "email": email, "password": password, "returnSecureToken": true });
        let resp: SignInResponse = post_json(&self.accounts_url("signUp"), &body).await?;
        Ok(resp.into())
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let body = serde_json::json!({ "email": email, "password": password, "returnSecureToken": true });
        let resp: SignInResponse = post_json(&self.accounts_url("signInWithPassword"), &body).await?;
        let mut session = AuthSession::from(resp);
        // The password endpoint omits the photo; fill the profile in when we can.
        match self.lookup(&session.tokens.id_token).await {
            Ok(user) => session.user = user,
            Err(e) => log::warn!("profile lookup after sign-in failed: {e}"),
        }
        Ok(session)
    }

    async fn sign_in_with_idp(&self, credential: &FederatedCredential) -> Result<AuthSession, AuthError> {
        let body = serde_json::json!({
            "postBody": idp_post_body(credential),
            "requestUri": self.config.oauth_redirect_uri,
            "returnIdpCredential": true,
            "returnSecureToken": true,
        });
        let resp: SignInResponse = post_json(&self.accounts_url("signInWithIdp"), &body).await?;
        Ok(resp.into())
    }

    async fn update_profile(&self, id_token: &str, update: &ProfileUpdate) -> Result<UserIdentity, AuthError> {
        let body = profile_update_body(id_token, update);
        let resp: AccountInfo = post_json(&self.accounts_url("update"), &body).await?;
        Ok(resp.into())
    }

    async fn lookup(&self, id_token: &str) -> Result<UserIdentity, AuthError> {
        let body = serde_json::json!({ "idToken": id_token });
        let resp: LookupResponse = post_json(&self.accounts_url("lookup"), &body).await?;
        resp.users
            .into_iter()
            .next()
            .map(UserIdentity::from)
            .ok_or_else(|| AuthError::from_provider_code("USER_NOT_FOUND"))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, AuthError> {
        let body = serde_json::json!({ "grant_type": "refresh_token", "refresh_token": refresh_token });
        let resp: TokenResponse = post_json(&self.token_url(), &body).await?;
        Ok(AuthTokens { id_token: resp.id_token, refresh_token: resp.refresh_token })
    }

    fn authorize_url(&self, provider: FederatedProvider, state: &str) -> Result<String, AuthError> {
        match provider {
            FederatedProvider::Google => {
                let client_id = self.config.google_client_id.as_deref().ok_or_else(|| {
                    AuthError::from_provider_code("OPERATION_NOT_ALLOWED : Google sign-in is not configured")
                })?;
                Ok(google_authorize_url(client_id, &self.config.oauth_redirect_uri, state))
            }
        }
    }
}
