//! Backendless REST client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! token kept in memory and, for stay-signed-in logins, in `localStorage`.
//! Server-side (SSR): no backend session exists, so calls report
//! `RemoteError::Unavailable` (or "nobody signed in" for `current_user`).
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are decoded as backend faults so the service's own
//! message reaches the caller unchanged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use super::backend::Backend;
use super::error::RemoteError;
use super::types::{Registration, RemoteUser, StoredCredentials};
use crate::config::BackendConfig;

/// `localStorage` key holding persisted [`StoredCredentials`].
pub const STORAGE_KEY: &str = "timeline_session";

/// Header carrying the session token on authenticated calls.
#[cfg(any(test, feature = "hydrate"))]
const TOKEN_HEADER: &str = "user-token";

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "login": username, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn user_data_path(object_id: &str) -> String {
    format!("data/Users/{object_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn token_check_path(user_token: &str) -> String {
    format!("users/isvalidusertoken/{user_token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn credentials_from(user: &RemoteUser) -> Option<StoredCredentials> {
    let user_token = user.user_token.clone().filter(|t| !t.is_empty())?;
    Some(StoredCredentials { user_token, object_id: user.object_id.clone() })
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_credentials(credentials: &StoredCredentials) -> String {
    serde_json::to_string(credentials).unwrap_or_default()
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_credentials(raw: &str) -> Option<StoredCredentials> {
    serde_json::from_str::<StoredCredentials>(raw)
        .ok()
        .filter(|c| !c.user_token.is_empty() && !c.object_id.is_empty())
}

/// Backend implementation talking to the Backendless REST API.
#[derive(Clone, Debug)]
pub struct BackendlessClient {
    config: BackendConfig,
    credentials: Arc<Mutex<Option<StoredCredentials>>>,
}

impl BackendlessClient {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self { config, credentials: Arc::new(Mutex::new(None)) }
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Credentials of the active session: in-memory first, then persisted.
    #[cfg(feature = "hydrate")]
    fn session_credentials(&self) -> Option<StoredCredentials> {
        let held = self.credentials.lock().unwrap_or_else(PoisonError::into_inner).clone();
        held.or_else(storage::load)
    }

    #[cfg(feature = "hydrate")]
    fn remember(&self, credentials: StoredCredentials, persist: bool) {
        if persist {
            storage::save(&credentials);
        }
        *self.credentials.lock().unwrap_or_else(PoisonError::into_inner) = Some(credentials);
    }

    /// Drop credentials from memory and storage, returning what was held.
    fn forget(&self) -> Option<StoredCredentials> {
        let held = self.credentials.lock().unwrap_or_else(PoisonError::into_inner).take();
        #[cfg(feature = "hydrate")]
        {
            let persisted = storage::load();
            storage::clear();
            held.or(persisted)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            held
        }
    }
}

#[async_trait(?Send)]
impl Backend for BackendlessClient {
    async fn login(&self, username: &str, password: &str, stay_logged_in: bool) -> Result<RemoteUser, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint("users/login"))
                .json(&login_payload(username, password))
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let user: RemoteUser = read_json(resp).await?;
            if let Some(credentials) = credentials_from(&user) {
                self.remember(credentials, stay_logged_in);
            }
            Ok(user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password, stay_logged_in);
            Err(RemoteError::Unavailable)
        }
    }

    async fn register(&self, registration: &Registration) -> Result<RemoteUser, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint("users/register"))
                .json(registration)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let _created: RemoteUser = read_json(resp).await?;
            // Registration does not open a session on the backend.
            self.login(&registration.username, &registration.password, true).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
            Err(RemoteError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), RemoteError> {
        let Some(credentials) = self.forget() else {
            return Ok(());
        };
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.endpoint("users/logout"))
                .header(TOKEN_HEADER, &credentials.user_token)
                .send()
                .await
                .map_err(transport)?;
            expect_ok(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Ok(())
        }
    }

    async fn current_user(&self) -> Result<Option<RemoteUser>, RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(credentials) = self.session_credentials() else {
                return Ok(None);
            };
            let resp = gloo_net::http::Request::get(&self.config.endpoint(&token_check_path(&credentials.user_token)))
                .send()
                .await
                .map_err(transport)?;
            let valid: bool = read_json(resp).await?;
            if !valid {
                self.forget();
                return Ok(None);
            }
            let resp = gloo_net::http::Request::get(&self.config.endpoint(&user_data_path(&credentials.object_id)))
                .header(TOKEN_HEADER, &credentials.user_token)
                .send()
                .await
                .map_err(transport)?;
            let mut user: RemoteUser = read_json(resp).await?;
            user.user_token = Some(credentials.user_token);
            Ok(Some(user))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    async fn remove_user(&self, user: &RemoteUser) -> Result<(), RemoteError> {
        #[cfg(feature = "hydrate")]
        {
            let user_token = user
                .user_token
                .clone()
                .or_else(|| self.session_credentials().map(|c| c.user_token))
                .unwrap_or_default();
            let resp = gloo_net::http::Request::delete(&self.config.endpoint(&user_data_path(&user.object_id)))
                .header(TOKEN_HEADER, &user_token)
                .send()
                .await
                .map_err(transport)?;
            expect_ok(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
            Err(RemoteError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> RemoteError {
    RemoteError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, RemoteError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(RemoteError::from_response(status, &body));
    }
    resp.json::<T>().await.map_err(|e| RemoteError::Parse(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn expect_ok(resp: gloo_net::http::Response) -> Result<(), RemoteError> {
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(RemoteError::from_response(status, &body))
}

#[cfg(feature = "hydrate")]
mod storage {
    use super::{STORAGE_KEY, StoredCredentials, decode_credentials, encode_credentials};

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub(super) fn load() -> Option<StoredCredentials> {
        let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        decode_credentials(&raw)
    }

    pub(super) fn save(credentials: &StoredCredentials) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, &encode_credentials(credentials));
        }
    }

    pub(super) fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
