//! Host startup failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    /// An environment value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The Leptos site configuration is missing or malformed.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// Binding or serving the listener failed.
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}
