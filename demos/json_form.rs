use tagexpr::{FormValue, RuleList, TagExprError};

fn main() -> Result<(), TagExprError> {
    let input = r#"{
        "express": "a|(b&c)",
        "rules": [
            {"_order": "a", "key": "host", "op": "eq", "value": "123"},
            {"_order": "b", "key": "host", "op": "eq", "value": "324"},
            {"_order": "c", "key": "ip", "op": "eq", "value": "4123"}
        ]
    }"#;

    let list = RuleList::builder().default_field("op", "eq").build();
    let value = FormValue::from_json(input)?;
    let value = list.remove_rule(value, 0);
    println!("{}", value.to_json()?);
    Ok(())
}
