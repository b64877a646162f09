use super::*;
use serde_json::json;

fn panels(value: serde_json::Value) -> SiderPanels {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_splits_current_panel_from_entries() {
    let p = panels(json!({ "currentPanel": "x", "x": { "a": 1 }, "y": { "b": 2 } }));
    assert_eq!(p.current_panel.as_deref(), Some("x"));
    assert_eq!(p.panels.len(), 2);
    assert!(!p.panels.contains_key("currentPanel"));
}

#[test]
fn decode_null_current_panel_is_none() {
    let p = panels(json!({ "currentPanel": null, "x": {} }));
    assert!(p.current_panel.is_none());
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_selected_panel_returns_its_props() {
    let p = panels(json!({ "currentPanel": "x", "x": { "foo": 1, "bar": "baz" } }));
    let resolved = p.resolve();
    assert_eq!(resolved.key(), Some("x"));
    let props = resolved.props();
    assert_eq!(props.get("foo"), Some(&json!(1)));
    assert_eq!(props.get("bar"), Some(&json!("baz")));
}

#[test]
fn resolve_without_current_panel_is_none() {
    let p = panels(json!({ "y": { "foo": 1 } }));
    assert!(p.resolve().is_none());
}

#[test]
fn resolve_dangling_current_panel_is_none() {
    let p = panels(json!({ "currentPanel": "x", "y": { "foo": 1 } }));
    let resolved = p.resolve();
    assert_eq!(resolved, SiderPanel::None);
    assert!(resolved.props().is_empty());
}

#[test]
fn resolve_non_object_entry_is_none() {
    let p = panels(json!({ "currentPanel": "x", "x": "not-a-panel" }));
    assert!(p.resolve().is_none());
}

#[test]
fn resolve_strips_on_close_from_panel_props() {
    let p = panels(json!({ "currentPanel": "x", "x": { "onClose": "stale", "foo": 1 } }));
    let props = p.resolve().props();
    assert!(!props.contains_key(ON_CLOSE_KEY));
    assert_eq!(props.get("foo"), Some(&json!(1)));
}

#[test]
fn resolve_is_case_sensitive() {
    let p = panels(json!({ "currentPanel": "X", "x": { "foo": 1 } }));
    assert!(p.resolve().is_none());
}

// =============================================================
// resolve_sider_props
// =============================================================

#[test]
fn sider_props_for_dangling_key_carry_only_on_close() {
    let p = panels(json!({ "currentPanel": "x", "y": { "foo": 1 } }));
    let props = resolve_sider_props(&p, "close");
    assert!(props.panel.is_none());
    assert_eq!(props.on_close, "close");
}

#[test]
fn sider_props_for_selected_panel_keep_on_close() {
    let p = panels(json!({ "currentPanel": "y", "y": { "foo": 1 } }));
    let props = resolve_sider_props(&p, 7_u8);
    assert_eq!(props.panel.key(), Some("y"));
    assert_eq!(props.on_close, 7);
}
