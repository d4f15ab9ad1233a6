//! The remote seam between session logic and the hosted backend.

use async_trait::async_trait;

use super::error::RemoteError;
use super::types::{Registration, RemoteUser};

/// Account operations offered by the backend-as-a-service.
///
/// Futures are `?Send` because the browser implementation runs on the single
/// WASM thread through `spawn_local`.
#[async_trait(?Send)]
pub trait Backend {
    /// Exchange credentials for an authenticated account.
    async fn login(&self, username: &str, password: &str, stay_logged_in: bool) -> Result<RemoteUser, RemoteError>;

    /// Create an account and sign it in.
    async fn register(&self, registration: &Registration) -> Result<RemoteUser, RemoteError>;

    /// End the backend session. Local credentials are dropped even if the call fails.
    async fn logout(&self) -> Result<(), RemoteError>;

    /// Account for the persisted session, or `None` when nobody is signed in.
    async fn current_user(&self) -> Result<Option<RemoteUser>, RemoteError>;

    /// Permanently delete an account.
    async fn remove_user(&self, user: &RemoteUser) -> Result<(), RemoteError>;
}
