//! Server settings parsed from environment variables.
//!
//! Leptos options (site address, site root, output name) come from the
//! workspace `Cargo.toml`; the variables here override them per deployment.

use leptos::prelude::LeptosOptions;

use crate::error::ServerError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Replaces the port of the configured site address.
    pub port: Option<u16>,
    /// Replaces the directory holding the compiled site (`pkg/`, assets).
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Build config from process environment.
    ///
    /// Optional:
    /// - `PORT`: listen port
    /// - `SITE_ROOT`: compiled site directory
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let port = get("PORT")
            .map(|raw| raw.parse::<u16>().map_err(|_| ServerError::Config(format!("invalid PORT: {raw}"))))
            .transpose()?;
        Ok(Self { port, site_root: get("SITE_ROOT") })
    }

    /// Apply the overrides to the Leptos options.
    pub fn apply(&self, mut options: LeptosOptions) -> LeptosOptions {
        if let Some(port) = self.port {
            options.site_addr.set_port(port);
        }
        if let Some(root) = &self.site_root {
            options.site_root = root.as_str().into();
        }
        options
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
