mod error;
mod form;
mod label;
mod rule;
mod token;

pub use error::LabelError;
pub use form::FormValue;
pub use label::{decode, encode, encode_signed, encode_with, Label};
pub use rule::Rule;
pub use token::{Operator, Structural, Token};
