//! Startup and serve failures.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The `[workspace.metadata.leptos]` section is missing or malformed.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
