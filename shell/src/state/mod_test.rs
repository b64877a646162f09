use super::*;

#[test]
fn decode_error_names_the_model() {
    let err = app_model::ApplicationState::from_json("{").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("failed to decode application state:"), "{message}");
}

#[test]
fn decode_error_keeps_serde_source() {
    let err = auth::AuthState::from_json("42").unwrap_err();
    let StateError::Decode { model, .. } = &err;
    assert_eq!(*model, "auth");
    assert!(std::error::Error::source(&err).is_some());
}
