#![cfg(feature = "serde")]

use tagexpr::{FormValue, Rule, RuleList, TagExprError};

#[test]
fn parse_form_layer_json() {
    let json = r#"{
        "express": "a&b",
        "rules": [
            {"_order": "a", "key": "host", "op": "eq", "value": "123"},
            {"_order": "b", "key": "ip", "op": "eq", "value": "4123"}
        ]
    }"#;
    let value = FormValue::from_json(json).unwrap();
    assert_eq!(value.express, "a&b");
    assert_eq!(value.labels(), vec!["a", "b"]);
    assert_eq!(value.rules[1].field("key"), Some("ip"));
    assert_eq!(value.rules[1].field("_order"), None);
}

#[test]
fn serialize_flattens_fields() {
    let value = FormValue::new("a", vec![Rule::new("a").with("op", "eq")]);
    let json = value.to_json().unwrap();
    assert_eq!(json, r#"{"express":"a","rules":[{"_order":"a","op":"eq"}]}"#);
}

#[test]
fn json_round_trip_through_controller() {
    let list = RuleList::builder().default_field("op", "eq").build();
    let value = list.add_rule(list.initial());
    let restored = FormValue::from_json(&value.to_json().unwrap()).unwrap();
    assert_eq!(restored, value);

    let value = list.remove_rule(restored, 0);
    assert_eq!(
        value.to_json().unwrap(),
        r#"{"express":"a","rules":[{"_order":"a","op":"eq"}]}"#
    );
}

#[test]
fn missing_members_default() {
    let value = FormValue::from_json(r#"{"rules": [{"key": "host"}]}"#).unwrap();
    assert_eq!(value.express, "");
    assert_eq!(value.rules[0].order, "");

    // A rule without `_order` picks up its label on the next renumber.
    let value = tagexpr::renumber(value);
    assert_eq!(value.labels(), vec!["a"]);
}

#[test]
fn malformed_json_is_reported() {
    let err = FormValue::from_json("{\"express\": 1}").unwrap_err();
    assert!(matches!(err, TagExprError::Json(_)));
    assert!(err.to_string().starts_with("invalid form value JSON"));
}
