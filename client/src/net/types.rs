//! Wire types for the backend-as-a-service boundary.
//!
//! DESIGN
//! ======
//! `RemoteUser` mirrors the Backendless user record (camelCase keys plus the
//! hyphenated `user-token`). The session layer only ever holds the reduced
//! `User` principal; conversion happens at the seam.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated principal held by the session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name.
    pub username: String,
    /// Contact email, if the account has one.
    pub email: Option<String>,
}

/// User account as returned by the hosted backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    /// Backend row identifier, required for account deletion.
    #[serde(rename = "objectId")]
    pub object_id: String,
    /// Login name. Older accounts may lack it, in which case it is empty.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Session token, present only on login responses.
    #[serde(rename = "user-token", default, skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
}

impl From<&RemoteUser> for User {
    fn from(remote: &RemoteUser) -> Self {
        Self { username: remote.username.clone(), email: remote.email.clone() }
    }
}

impl From<RemoteUser> for User {
    fn from(remote: RemoteUser) -> Self {
        Self { username: remote.username, email: remote.email }
    }
}

/// Account fields submitted on registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Error body returned by the backend on rejected calls.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RemoteFault {
    #[serde(default)]
    pub code: Option<u32>,
    pub message: String,
}

/// Credentials persisted between page loads when a login asks to stay signed in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub user_token: String,
    pub object_id: String,
}
