use super::*;
use leptos::prelude::Owner;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_signed_in());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn display_name_prefixes_username() {
    let state = AuthState { user: Some(User { username: "twil".to_owned(), email: None }), loading: false };
    assert!(state.is_signed_in());
    assert_eq!(state.display_name().as_deref(), Some("@twil"));
    assert_eq!(AuthState::default().display_name(), None);
}

// =============================================================
// bind_to_store
// =============================================================

fn user(username: &str) -> User {
    User { username: username.to_owned(), email: None }
}

#[test]
fn bind_copies_current_store_user() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::new();
        store.set(Some(user("alexj")));
        let auth = RwSignal::new(AuthState::default());

        bind_to_store(&store, auth);

        assert_eq!(auth.get_untracked().user, Some(user("alexj")));
    });
}

#[test]
fn bound_signal_follows_every_store_set() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::new();
        let auth = RwSignal::new(AuthState { user: None, loading: true });
        bind_to_store(&store, auth);

        store.set(Some(user("msmith")));
        assert_eq!(auth.get_untracked().user, Some(user("msmith")));
        assert!(auth.get_untracked().loading);

        store.set(None);
        assert_eq!(auth.get_untracked().user, None);
    });
}

#[test]
fn unsubscribed_binding_stops_following() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::new();
        let auth = RwSignal::new(AuthState::default());
        let id = bind_to_store(&store, auth);

        assert!(store.unsubscribe(id));
        store.set(Some(user("twil")));

        assert_eq!(auth.get_untracked().user, None);
    });
}
