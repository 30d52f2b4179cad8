use tagexpr::RuleListBuilder;

fn main() {
    // New rules start as `<key> eq <value>` rows, ANDed onto the expression.
    let list = RuleListBuilder::new().default_field("op", "eq").build();

    let mut value = list.initial();
    for _ in 0..3 {
        value = list.add_rule(value);
    }
    println!("{value}");

    // The user regroups the expression by hand.
    value.express = "(a|b)&(c|d)".to_owned();
    println!("edited: {value}");

    // Removing `b` drops it from its group and shifts `c`, `d` down.
    let value = list.remove_rule(value, 1);
    println!("removed b: {value}");

    let value = list.remove_rule(value, 0);
    println!("removed a: {value}");
}
