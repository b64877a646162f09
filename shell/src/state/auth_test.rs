use super::*;
use serde_json::json;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn from_json_null_user_is_unauthenticated() {
    let state = AuthState::from_json(r#"{ "user": null }"#).unwrap();
    assert!(!state.is_authenticated());
}

#[test]
fn from_json_missing_user_is_unauthenticated() {
    let state = AuthState::from_json("{}").unwrap();
    assert!(!state.is_authenticated());
}

#[test]
fn from_json_numeric_id() {
    let state = AuthState::from_json(r#"{ "user": { "id": 1 } }"#).unwrap();
    let user = state.user.unwrap();
    assert_eq!(user.id, UserId::Number(1));
    assert!(user.attributes.is_empty());
}

#[test]
fn from_json_string_id_with_attributes() {
    let raw = json!({ "user": { "id": "u-1", "name": "Alice", "roles": ["admin"] } }).to_string();
    let user = AuthState::from_json(&raw).unwrap().user.unwrap();
    assert_eq!(user.id, UserId::Text("u-1".to_owned()));
    assert_eq!(user.name(), Some("Alice"));
    assert_eq!(user.attributes["roles"], json!(["admin"]));
}

#[test]
fn from_json_user_without_id_fails() {
    assert!(AuthState::from_json(r#"{ "user": { "name": "Alice" } }"#).is_err());
}

// =============================================================
// UserRecord
// =============================================================

#[test]
fn user_records_with_same_fields_are_equal() {
    assert_eq!(UserRecord::new(1_i64), UserRecord::new(1_i64));
    assert_ne!(UserRecord::new(1_i64), UserRecord::new("1"));
}

#[test]
fn user_id_display() {
    assert_eq!(UserId::from(42_i64).to_string(), "42");
    assert_eq!(UserId::from("u-9").to_string(), "u-9");
}
