use super::*;
use serde_json::json;

#[test]
fn register_new_form() {
    let mut registry = FormRegistry::default();
    assert!(registry.register("filters"));
    assert_eq!(registry.fields("filters").map(BTreeMap::len), Some(0));
}

#[test]
fn re_register_keeps_fields() {
    let mut registry = FormRegistry::default();
    registry.register("filters");
    registry.set_field("filters", "q", json!("acme")).unwrap();
    assert!(!registry.register("filters"));
    assert_eq!(registry.fields("filters").unwrap()["q"], json!("acme"));
}

#[test]
fn set_field_on_unknown_form_fails() {
    let mut registry = FormRegistry::default();
    let err = registry.set_field("missing", "q", json!(1)).unwrap_err();
    assert_eq!(err, FormScopeError::UnknownForm("missing".to_owned()));
    assert_eq!(err.to_string(), "form not registered: missing");
}

#[test]
fn breadcrumb_and_page_fields_share_one_form() {
    let mut registry = FormRegistry::default();
    registry.register("report");
    registry.set_field("report", "range", json!("7d")).unwrap();
    registry.set_field("report", "owner", json!("alice")).unwrap();
    let fields = registry.fields("report").unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields["range"], json!("7d"));
}

#[test]
fn unregister_returns_last_values() {
    let mut registry = FormRegistry::default();
    registry.register("a");
    registry.set_field("a", "x", json!(true)).unwrap();
    let fields = registry.unregister("a").unwrap();
    assert_eq!(fields["x"], json!(true));
    assert!(registry.fields("a").is_none());
    assert!(registry.unregister("a").is_none());
}
