use super::*;

#[test]
fn remote_user_deserializes_backend_keys() {
    let body = serde_json::json!({
        "objectId": "A1B2",
        "username": "alexj",
        "email": "alex@example.com",
        "user-token": "tok-1",
        "ownerId": "A1B2",
        "___class": "Users"
    });
    let user: RemoteUser = serde_json::from_value(body).unwrap();
    assert_eq!(user.object_id, "A1B2");
    assert_eq!(user.username, "alexj");
    assert_eq!(user.email.as_deref(), Some("alex@example.com"));
    assert_eq!(user.user_token.as_deref(), Some("tok-1"));
}

#[test]
fn remote_user_tolerates_missing_optional_fields() {
    let user: RemoteUser = serde_json::from_value(serde_json::json!({"objectId": "X"})).unwrap();
    assert_eq!(user.username, "");
    assert!(user.email.is_none());
    assert!(user.user_token.is_none());
}

#[test]
fn remote_user_converts_to_principal_without_token() {
    let remote = RemoteUser {
        object_id: "X".to_owned(),
        username: "msmith".to_owned(),
        email: None,
        user_token: Some("secret".to_owned()),
    };
    let user = User::from(&remote);
    assert_eq!(user, User { username: "msmith".to_owned(), email: None });
}

#[test]
fn remote_fault_code_is_optional() {
    let fault: RemoteFault = serde_json::from_str(r#"{"message":"Invalid login or password"}"#).unwrap();
    assert_eq!(fault.code, None);
    assert_eq!(fault.message, "Invalid login or password");
}
