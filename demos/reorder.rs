use tagexpr::{on_move_rule, tokenize, Rule};

fn main() {
    let rules = vec![
        Rule::new("a").with("key", "host").with("value", "123"),
        Rule::new("b").with("key", "ip").with("value", "4123"),
        Rule::new("c").with("key", "ip").with("value", "12513"),
    ];
    let express = "a&(b|c)";

    // Drag the last row to the top: labels follow positions, and the
    // expression is rewritten so each operand still means the same row.
    let value = on_move_rule(rules, express, 2, 0);
    println!("{express} -> {}", value.express);
    for rule in &value.rules {
        println!(
            "  {}: {} = {}",
            rule.order,
            rule.field("key").unwrap_or("?"),
            rule.field("value").unwrap_or("?"),
        );
    }

    for token in tokenize(&value.express) {
        println!("  operand {token}");
    }
}
