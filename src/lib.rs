//! Keep a list of labelled filter rules and a hand-editable boolean
//! expression over their labels in sync.
//!
//! Rules are labelled by position with bijective base-26 labels (`a`..`z`,
//! `aa`, `ab`, ...). The expression combines labels with `&`, `|` and
//! parentheses. Adding, removing or moving a rule edits the expression text
//! so that every operand keeps pointing at the rule it meant.
//!
//! ```
//! use tagexpr::RuleList;
//!
//! let list = RuleList::default();
//! let value = list.add_rule(list.add_rule(list.initial()));
//! assert_eq!(value.express, "a&b&c");
//!
//! let value = list.remove_rule(value, 0);
//! assert_eq!(value.express, "a&b");
//! ```

mod brackets;
mod controller;
mod edit;
mod error;
mod parse;
mod types;

pub use brackets::remove_brackets;
pub use controller::{
    on_add_rule, on_move_rule, on_remove_rule, renumber, RuleList, RuleListBuilder,
};
pub use edit::{append, append_with, delete_label, rename_all};
pub use error::TagExprError;
pub use parse::{split_string, tokenize};
pub use types::{
    decode, encode, encode_signed, encode_with, FormValue, Label, LabelError, Operator, Rule,
    Structural, Token,
};
