use std::collections::BTreeMap;

/// One filter rule row, e.g. `host eq 10.0.0.1`.
///
/// `order` is the rule's current label. It is derived from the rule's
/// position in the sequence and rewritten by the
/// [`RuleList`](crate::RuleList) controller; `fields` holds the domain
/// columns (`key`, `op`, `value`, ...) and is never inspected by the core.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    #[cfg_attr(feature = "serde", serde(rename = "_order", default))]
    pub order: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub fields: BTreeMap<String, String>,
}

impl Rule {
    #[must_use]
    pub fn new(order: impl Into<String>) -> Self {
        Self {
            order: order.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Set a domain field.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_owned(), value.into());
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
