use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alexj  ", "secret"),
        Ok(("alexj".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(validate_login_input("alexj", " pw "), Ok(("alexj".to_owned(), " pw ".to_owned())));
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("alexj", ""), Err("Enter both username and password."));
}

#[test]
fn successful_login_lands_on_timeline() {
    assert_eq!(AFTER_AUTH_REDIRECT, "/timeline");
}
