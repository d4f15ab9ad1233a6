//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded pages install the same check. It only reports a missing session;
//! pages stay reachable while signed out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// True when a guarded page is showing without a signed-in user.
pub fn is_unguarded_view(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Log whenever `page` renders with no user. Never redirects.
pub fn protect_route(auth: RwSignal<AuthState>, page: &'static str) {
    Effect::new(move || {
        let state = auth.get();
        if is_unguarded_view(&state) {
            log::debug!("{page}: no session user, not redirecting");
        }
    });
}
