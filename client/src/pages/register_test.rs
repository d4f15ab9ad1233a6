use super::*;

#[test]
fn validate_register_input_trims_identity_fields() {
    assert_eq!(
        validate_register_input(" newbie ", " new@example.com ", "pw"),
        Ok(RegisterInput {
            username: "newbie".to_owned(),
            email: "new@example.com".to_owned(),
            password: "pw".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input("", "a@b.com", "pw"), Err("Enter a username, email and password."));
    assert_eq!(validate_register_input("u", "  ", "pw"), Err("Enter a username, email and password."));
    assert_eq!(validate_register_input("u", "a@b.com", ""), Err("Enter a username, email and password."));
}

#[test]
fn validate_register_input_rejects_malformed_email() {
    assert_eq!(validate_register_input("u", "no-at-sign", "pw"), Err("Enter a valid email address."));
    assert_eq!(validate_register_input("u", "@b.com", "pw"), Err("Enter a valid email address."));
    assert_eq!(validate_register_input("u", "a@", "pw"), Err("Enter a valid email address."));
    assert_eq!(validate_register_input("u", "a@b@c", "pw"), Err("Enter a valid email address."));
}
