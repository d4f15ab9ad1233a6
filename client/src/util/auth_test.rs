use super::*;
use crate::net::types::User;

#[test]
fn unguarded_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(is_unguarded_view(&state));
}

#[test]
fn not_unguarded_while_restore_in_flight() {
    let state = AuthState { user: None, loading: true };
    assert!(!is_unguarded_view(&state));
}

#[test]
fn not_unguarded_when_user_exists() {
    let state = AuthState {
        user: Some(User { username: "alexj".to_owned(), email: Some("alex@example.com".to_owned()) }),
        loading: false,
    };
    assert!(!is_unguarded_view(&state));
}
