use std::fmt;

/// A character with structural meaning in an expression: a binary operator or
/// a parenthesis. Everything else belongs to an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structural {
    And,
    Or,
    Open,
    Close,
}

impl Structural {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '&' => Some(Structural::And),
            '|' => Some(Structural::Or),
            '(' => Some(Structural::Open),
            ')' => Some(Structural::Close),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Structural::And => '&',
            Structural::Or => '|',
            Structural::Open => '(',
            Structural::Close => ')',
        }
    }

    /// Operators bind tighter than parentheses when a neighbouring operand is
    /// deleted: `&`/`|` are 2, `(`/`)` are 1.
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            Structural::And | Structural::Or => 2,
            Structural::Open | Structural::Close => 1,
        }
    }

    /// Priority of an optional neighbour. A string boundary is 0.
    #[must_use]
    pub fn priority_of(side: Option<Self>) -> u8 {
        side.map_or(0, Self::priority)
    }
}

impl fmt::Display for Structural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Binary operator used to join a newly appended label onto an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    #[default]
    And,
    Or,
}

impl From<Operator> for Structural {
    fn from(op: Operator) -> Self {
        match op {
            Operator::And => Structural::And,
            Operator::Or => Structural::Or,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Structural::from(*self), f)
    }
}

/// An operand occurrence found by [`tokenize()`](crate::tokenize).
///
/// `begin..end` is the byte range of `text` in the scanned string. `prev` and
/// `next` are the structural characters on either side, `None` at a string
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub begin: usize,
    pub end: usize,
    pub prev: Option<Structural>,
    pub next: Option<Structural>,
}

impl Token {
    #[must_use]
    pub fn prev_priority(&self) -> u8 {
        Structural::priority_of(self.prev)
    }

    #[must_use]
    pub fn next_priority(&self) -> u8 {
        Structural::priority_of(self.next)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.text, self.begin, self.end)
    }
}
