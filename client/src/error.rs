//! Error types surfaced by the identity adapter, the plant API client, and
//! local form validation.
//!
//! ERROR HANDLING
//! ==============
//! Auth failures are passed through to the user verbatim; there is no retry
//! and no classification beyond the provider's own error code. Fetch
//! failures are rendered as page-level error states.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of an identity-provider operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The provider rejected the request (bad credentials, weak password,
    /// existing email, expired token, ...).
    #[error("{message}")]
    Provider { code: String, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with a body we could not read.
    #[error("unexpected auth response: {0}")]
    Decode(String),

    /// An operation that needs a signed-in user was called without one.
    #[error("no user is signed in")]
    NotSignedIn,

    /// The identity backend is browser-only and was called during SSR.
    #[error("authentication is not available on the server")]
    Unavailable,
}

impl AuthError {
    /// Build a provider error from a raw provider code such as
    /// `EMAIL_EXISTS` or `WEAK_PASSWORD : Password should be at least 6 characters`.
    pub fn from_provider_code(raw: &str) -> Self {
        let (code, detail) = match raw.split_once(" : ") {
            Some((code, detail)) => (code.trim(), Some(detail.trim())),
            None => (raw.trim(), None),
        };
        let message = match code {
            "EMAIL_EXISTS" => "An account with this email already exists.".to_owned(),
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                "Invalid email or password.".to_owned()
            }
            "USER_DISABLED" => "This account has been disabled.".to_owned(),
            "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Try again later.".to_owned(),
            "INVALID_EMAIL" => "The email address is badly formatted.".to_owned(),
            _ => detail.map_or_else(|| code.replace('_', " ").to_lowercase(), str::to_owned),
        };
        Self::Provider { code: code.to_owned(), message }
    }
}

/// Failure of a request to the remote plant service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataFetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("plant service responded with status {status}")]
    Status { status: u16 },

    #[error("could not read plant data: {0}")]
    Decode(String),

    #[error("plant data is not available on the server")]
    Unavailable,
}

impl DataFetchError {
    /// Whether the service reported the record as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404 })
    }
}

/// A password complexity rule that a candidate password violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PasswordRule {
    #[error("Password must contain a lowercase letter.")]
    MissingLowercase,
    #[error("Password must contain an uppercase letter.")]
    MissingUppercase,
    #[error("Password must be at least 6 characters.")]
    TooShort,
}
