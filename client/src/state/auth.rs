//! Reactive mirror of the session for rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is authoritative but not reactive. `AuthState` lives in an
//! `RwSignal` provided through context and is kept in step with the store by
//! a subscription, so components re-render on every session transition.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::{SessionStore, SubscriptionId};
use crate::net::types::User;

/// Signed-in user plus whether a restore-on-load is still in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Name shown in the header, or `None` when anonymous.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(|u| format!("@{}", u.username))
    }
}

/// Keep `auth.user` equal to the store's principal from now on.
pub fn bind_to_store(store: &SessionStore, auth: RwSignal<AuthState>) -> SubscriptionId {
    auth.update(|state| state.user = store.get());
    store.subscribe(move |user| {
        let user = user.cloned();
        auth.update(|state| state.user = user);
    })
}
