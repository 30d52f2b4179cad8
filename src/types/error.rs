use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("label is empty")]
    Empty,

    #[error("invalid character '{ch}' at index {index} in label; only 'a'..='z' are allowed")]
    InvalidChar { ch: char, index: usize },
}
