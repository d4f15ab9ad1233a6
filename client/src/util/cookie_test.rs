use super::*;

#[test]
fn hint_found_among_other_cookies() {
    assert!(hint_in_cookie_header("theme=dark; auth=true; lang=en"));
    assert!(hint_in_cookie_header("auth=true"));
}

#[test]
fn hint_absent_when_cleared_or_missing() {
    assert!(!hint_in_cookie_header(""));
    assert!(!hint_in_cookie_header("auth="));
    assert!(!hint_in_cookie_header("theme=dark"));
}

#[test]
fn hint_requires_exact_cookie_name() {
    assert!(!hint_in_cookie_header("oauth=true"));
    assert!(!hint_in_cookie_header("auth_state=true"));
}

#[test]
fn assignments_set_and_expire_root_path_cookie() {
    assert_eq!(cookie_assignment(true), "auth=true; path=/");
    assert_eq!(cookie_assignment(false), "auth=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/");
}

#[test]
fn memory_hint_tracks_writes() {
    let hint = MemoryHint::new(false);
    assert!(!hint.is_set());
    hint.set();
    assert!(hint.is_set());
    hint.clear();
    assert!(!hint.is_set());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn cookie_hint_reads_unset_outside_browser() {
    let hint = CookieHint;
    hint.set();
    assert!(!hint.is_set());
}
