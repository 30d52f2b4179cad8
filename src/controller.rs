use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};

use crate::{append_with, delete_label, encode, remove_brackets, rename_all};
use crate::{FormValue, Label, Operator, Rule, TagExprError};

/// Builder for a configured [`RuleList`] controller.
///
/// # Example
///
/// ```
/// use tagexpr::{FormValue, Operator, RuleListBuilder};
///
/// let list = RuleListBuilder::new()
///     .join_with(Operator::Or)
///     .default_field("op", "eq")
///     .build();
///
/// let value = list.add_rule(list.add_rule(FormValue::default()));
/// assert_eq!(value.express, "a|b");
/// assert_eq!(value.rules[1].field("op"), Some("eq"));
/// ```
#[derive(Debug, Default)]
pub struct RuleListBuilder {
    join: Operator,
    defaults: BTreeMap<String, String>,
}

impl RuleListBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Operator used to join a new rule's label onto the expression.
    /// Defaults to [`Operator::And`].
    #[must_use]
    pub fn join_with(mut self, op: Operator) -> Self {
        self.join = op;
        self
    }

    /// Field every newly added rule starts with.
    #[must_use]
    pub fn default_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.defaults.insert(name.to_owned(), value.into());
        self
    }

    #[must_use]
    pub fn build(self) -> RuleList {
        RuleList {
            join: self.join,
            defaults: self.defaults,
        }
    }
}

/// Keeps a rule sequence and its expression consistent across add, remove
/// and move events.
///
/// Every operation takes the current [`FormValue`] and returns the next one.
/// Afterwards `rules[i].order == encode(i + 1)` holds for every rule.
#[derive(Debug, Clone, Default)]
pub struct RuleList {
    join: Operator,
    defaults: BTreeMap<String, String>,
}

impl RuleList {
    #[must_use]
    pub fn builder() -> RuleListBuilder {
        RuleListBuilder::new()
    }

    /// A value holding a single rule `a`, with the expression `a`.
    #[must_use]
    pub fn initial(&self) -> FormValue {
        self.add_rule(FormValue::default())
    }

    /// Append a rule labelled after the current last one and add its label
    /// to the expression.
    #[must_use]
    pub fn add_rule(&self, value: FormValue) -> FormValue {
        let FormValue { express, mut rules } = value;
        let label = encode(rules.len() + 1);
        let express = append_with(&express, &label, self.join);
        debug!("add rule {label}: {express:?}");
        rules.push(Rule {
            order: label,
            fields: self.defaults.clone(),
        });
        FormValue { express, rules }
    }

    /// Remove the rule at `index`, delete its label from the expression and
    /// shift the labels of every later rule down by one.
    ///
    /// An out-of-range `index` returns `value` unchanged.
    ///
    /// ```
    /// use tagexpr::RuleList;
    ///
    /// let list = RuleList::default();
    /// let value = list.add_rule(list.add_rule(list.initial()));
    /// assert_eq!(value.express, "a&b&c");
    ///
    /// let value = list.remove_rule(value, 0);
    /// assert_eq!(value.express, "a&b");
    /// assert_eq!(value.labels(), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn remove_rule(&self, value: FormValue, index: usize) -> FormValue {
        let FormValue { express, mut rules } = value;
        if index >= rules.len() {
            warn!(
                "remove rule: index {index} out of range for {} rules",
                rules.len()
            );
            return FormValue { express, rules };
        }
        rules.remove(index);
        let removed = encode(index + 1);
        let express = if rules.is_empty() {
            String::new()
        } else {
            delete_label(&express, &removed)
        };
        debug!("remove rule {removed}: {express:?}");
        renumber(FormValue { express, rules })
    }

    /// [`remove_rule()`](Self::remove_rule) addressed by label instead of index.
    ///
    /// # Errors
    ///
    /// Returns [`TagExprError::Label`] if `label` is not a valid label.
    pub fn remove_labelled(
        &self,
        value: FormValue,
        label: &str,
    ) -> Result<FormValue, TagExprError> {
        let label: Label = label.parse()?;
        Ok(self.remove_rule(value, label.ordinal() - 1))
    }

    /// Move the rule at `from` to position `to`, relabelling rules and
    /// expression so every operand still refers to the same rule.
    ///
    /// Out-of-range indices return `value` unchanged.
    #[must_use]
    pub fn move_rule(&self, value: FormValue, from: usize, to: usize) -> FormValue {
        let FormValue { express, mut rules } = value;
        if from >= rules.len() || to >= rules.len() {
            warn!(
                "move rule: {from} -> {to} out of range for {} rules",
                rules.len()
            );
            return FormValue { express, rules };
        }
        let rule = rules.remove(from);
        rules.insert(to, rule);
        let mapping = relabel(&mut rules);
        let express = rename_all(&express, &mapping);
        debug!("move rule {from} -> {to}: {express:?}");
        FormValue { express, rules }
    }
}

/// Relabel every rule from its position, then simplify brackets and rename
/// the expression's operands to match.
///
/// Brackets are simplified before renaming, on the old labels.
#[must_use]
pub fn renumber(value: FormValue) -> FormValue {
    let FormValue { express, mut rules } = value;
    let mapping = relabel(&mut rules);
    let express = remove_brackets(&express);
    let express = rename_all(&express, &mapping);
    FormValue { express, rules }
}

/// Add a rule using the default [`RuleList`] configuration.
#[must_use]
pub fn on_add_rule(rules: Vec<Rule>, express: &str) -> FormValue {
    RuleList::default().add_rule(FormValue::new(express, rules))
}

/// Remove the rule at `index` using the default [`RuleList`] configuration.
#[must_use]
pub fn on_remove_rule(rules: Vec<Rule>, express: &str, index: usize) -> FormValue {
    RuleList::default().remove_rule(FormValue::new(express, rules), index)
}

/// Move a rule using the default [`RuleList`] configuration.
#[must_use]
pub fn on_move_rule(rules: Vec<Rule>, express: &str, from: usize, to: usize) -> FormValue {
    RuleList::default().move_rule(FormValue::new(express, rules), from, to)
}

/// Set each rule's label from its position. Returns old -> new for every
/// label that changed.
fn relabel(rules: &mut [Rule]) -> HashMap<String, String> {
    let mut mapping = HashMap::new();
    for (i, rule) in rules.iter_mut().enumerate() {
        let label = encode(i + 1);
        if rule.order != label {
            let old = std::mem::replace(&mut rule.order, label.clone());
            if !old.is_empty() {
                mapping.insert(old, label);
            }
        }
    }
    mapping
}
