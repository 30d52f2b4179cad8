use std::collections::BTreeSet;
use std::fmt;

use super::rule::Rule;

/// The unit exchanged with the form layer: the expression text plus the
/// ordered rule rows it refers to.
///
/// Every [`RuleList`](crate::RuleList) operation consumes a `FormValue` and
/// returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormValue {
    #[cfg_attr(feature = "serde", serde(default))]
    pub express: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rules: Vec<Rule>,
}

impl FormValue {
    #[must_use]
    pub fn new(express: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            express: express.into(),
            rules,
        }
    }

    /// The labels currently carried by the rules, in sequence order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.order.as_str()).collect()
    }

    /// Operands in the expression that no rule carries, in order of first
    /// appearance. Hand edits can leave these behind; the editor leaves them
    /// untouched.
    #[must_use]
    pub fn dangling_labels(&self) -> Vec<String> {
        let known: BTreeSet<&str> = self.labels().into_iter().collect();
        let mut seen = BTreeSet::new();
        crate::parse::tokenize(&self.express)
            .into_iter()
            .filter(|t| !known.contains(t.text.as_str()))
            .filter(|t| seen.insert(t.text.clone()))
            .map(|t| t.text)
            .collect()
    }

    /// Rule labels that the expression never mentions.
    #[must_use]
    pub fn unreferenced_labels(&self) -> Vec<&str> {
        let used: BTreeSet<String> = crate::parse::tokenize(&self.express)
            .into_iter()
            .map(|t| t.text)
            .collect();
        self.labels()
            .into_iter()
            .filter(|label| !used.contains(*label))
            .collect()
    }
}

#[cfg(feature = "serde")]
impl FormValue {
    /// Parse the form layer's JSON shape:
    /// `{"express": "a&b", "rules": [{"_order": "a", "op": "eq"}, ...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`TagExprError::Json`](crate::TagExprError::Json) on malformed input.
    pub fn from_json(input: &str) -> Result<Self, crate::TagExprError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Render this value as JSON for the form layer.
    ///
    /// # Errors
    ///
    /// Returns [`TagExprError::Json`](crate::TagExprError::Json) if encoding fails.
    pub fn to_json(&self) -> Result<String, crate::TagExprError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FormValue({:?}, [{}])",
            self.express,
            self.labels().join(", ")
        )
    }
}
