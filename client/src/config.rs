//! Build-time client configuration.
//!
//! The browser bundle cannot read process environment at runtime, so values
//! are captured with `option_env!` when the crate is compiled. Parsing goes
//! through a lookup closure so defaults and normalization stay testable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PLANTS_API_URL: &str = "https://project-web-b11-a10-plant-care-serv.vercel.app";
pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_SECURE_TOKEN_URL: &str = "https://securetoken.googleapis.com/v1";
pub const DEFAULT_OAUTH_REDIRECT_URI: &str = "http://127.0.0.1:3000/auth/callback";

/// Endpoints and credentials used by the identity adapter and plant client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Web API key of the identity project.
    pub firebase_api_key: String,
    /// Identity Toolkit REST base URL, without trailing slash.
    pub identity_url: String,
    /// Secure Token REST base URL, without trailing slash.
    pub secure_token_url: String,
    /// Plant service base URL, without trailing slash.
    pub plants_api_url: String,
    /// Google OAuth web client id; Google sign-in is hidden when absent.
    pub google_client_id: Option<String>,
    /// Where Google sends the browser back after consent.
    pub oauth_redirect_uri: String,
}

impl ClientConfig {
    /// Config captured from `PLANTCARE_*` variables at compile time.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                "PLANTCARE_FIREBASE_API_KEY" => option_env!("PLANTCARE_FIREBASE_API_KEY"),
                "PLANTCARE_IDENTITY_URL" => option_env!("PLANTCARE_IDENTITY_URL"),
                "PLANTCARE_SECURE_TOKEN_URL" => option_env!("PLANTCARE_SECURE_TOKEN_URL"),
                "PLANTCARE_PLANTS_API_URL" => option_env!("PLANTCARE_PLANTS_API_URL"),
                "PLANTCARE_GOOGLE_CLIENT_ID" => option_env!("PLANTCARE_GOOGLE_CLIENT_ID"),
                "PLANTCARE_OAUTH_REDIRECT_URI" => option_env!("PLANTCARE_OAUTH_REDIRECT_URI"),
                _ => None,
            }
            .map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let url = |key: &str, default: &str| {
            get(key)
                .unwrap_or_else(|| default.to_owned())
                .trim_end_matches('/')
                .to_owned()
        };

        Self {
            firebase_api_key: get("PLANTCARE_FIREBASE_API_KEY").unwrap_or_default(),
            identity_url: url("PLANTCARE_IDENTITY_URL", DEFAULT_IDENTITY_URL),
            secure_token_url: url("PLANTCARE_SECURE_TOKEN_URL", DEFAULT_SECURE_TOKEN_URL),
            plants_api_url: url("PLANTCARE_PLANTS_API_URL", DEFAULT_PLANTS_API_URL),
            google_client_id: get("PLANTCARE_GOOGLE_CLIENT_ID"),
            oauth_redirect_uri: get("PLANTCARE_OAUTH_REDIRECT_URI")
                .unwrap_or_else(|| DEFAULT_OAUTH_REDIRECT_URI.to_owned()),
        }
    }

    pub fn google_enabled(&self) -> bool {
        self.google_client_id.is_some()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
