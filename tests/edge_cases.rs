use std::collections::HashMap;

use tagexpr::{
    append, decode, delete_label, encode, encode_signed, on_move_rule, on_remove_rule,
    remove_brackets, rename_all, renumber, tokenize, FormValue, Rule,
};

#[test]
fn codec_degenerate_inputs() {
    assert_eq!(encode(0), "");
    assert_eq!(encode_signed(-1), "");
    assert_eq!(decode(""), 0);
    assert_eq!(decode("a b"), 0);
    assert_eq!(decode("ä"), 0);
}

#[test]
fn tokenize_degenerate_inputs() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("()").is_empty());
    assert!(tokenize(")(&|").is_empty());
    assert_eq!(tokenize("))a((").len(), 1);
}

#[test]
fn tokenize_multibyte_offsets_are_bytes() {
    let tokens = tokenize("é&b");
    assert_eq!(tokens[0].text, "é");
    assert_eq!((tokens[0].begin, tokens[0].end), (0, 2));
    assert_eq!((tokens[1].begin, tokens[1].end), (3, 4));
}

#[test]
fn append_ignores_substring_matches() {
    assert_eq!(append("aa|ab", "a"), "aa|ab&a");
}

#[test]
fn delete_from_unbalanced_expression() {
    assert_eq!(delete_label("(a|b", "a"), "(b");
    assert_eq!(delete_label("a|b)", "b"), "a)");
}

#[test]
fn delete_multichar_label() {
    assert_eq!(delete_label("a&aa|ab", "aa"), "a|ab");
}

#[test]
fn delete_with_adjacent_operators() {
    // Malformed input: only one neighbour is consumed per occurrence.
    assert_eq!(delete_label("a&&b", "b"), "a&");
}

#[test]
fn rename_with_empty_mapping_is_identity() {
    let empty: HashMap<String, String> = HashMap::new();
    assert_eq!(rename_all("(a|b)&c", &empty), "(a|b)&c");
    assert_eq!(rename_all("", &empty), "");
}

#[test]
fn brackets_on_deeply_nested_label() {
    let expr = format!("{}a{}", "(".repeat(50), ")".repeat(50));
    assert_eq!(remove_brackets(&expr), "a");
}

#[test]
fn remove_from_empty_sequence_is_noop() {
    let value = on_remove_rule(Vec::new(), "", 0);
    assert_eq!(value, FormValue::default());
}

#[test]
fn remove_when_expression_never_mentioned_rule() {
    let value = on_remove_rule(vec![Rule::new("a"), Rule::new("b")], "b", 0);
    assert_eq!(value.express, "a");
    assert_eq!(value.labels(), vec!["a"]);
}

#[test]
fn move_to_same_position_changes_nothing() {
    let rules = vec![Rule::new("a"), Rule::new("b")];
    let value = on_move_rule(rules.clone(), "a|b", 1, 1);
    assert_eq!(value, FormValue::new("a|b", rules));
}

#[test]
fn renumber_empty_value() {
    assert_eq!(renumber(FormValue::default()), FormValue::default());
}

#[test]
fn remove_from_many_rules() {
    let rules: Vec<Rule> = (1..=100).map(|n| Rule::new(encode(n))).collect();
    let express = rules
        .iter()
        .map(|r| r.order.as_str())
        .collect::<Vec<_>>()
        .join("|");
    let value = on_remove_rule(rules, &express, 0);
    assert_eq!(value.rules.len(), 99);
    assert_eq!(value.rules[98].order, encode(99));
    assert!(value.express.starts_with("a|b|"));
    assert!(value.express.ends_with(&format!("|{}", encode(99))));
    assert!(value.dangling_labels().is_empty());
}
