use std::fmt;
use std::str::FromStr;

use super::error::LabelError;

const RADIX: usize = 26;

/// Encode a 1-based ordinal as a bijective base-26 label: 1 -> `a`, 26 -> `z`,
/// 27 -> `aa`, 28 -> `ab`, ..., 703 -> `aaa`.
///
/// `0` has no label and encodes to the empty string.
#[must_use]
pub fn encode(n: usize) -> String {
    encode_with(n, 'a')
}

/// Like [`encode()`], but digits start at `first` instead of `'a'`
/// (e.g. `'A'` for uppercase labels).
///
/// `first` must be the start of a run of 26 consecutive `char`s; digits that
/// would fall outside the `char` range are skipped.
#[must_use]
pub fn encode_with(n: usize, first: char) -> String {
    let mut digits = Vec::new();
    let mut num = n;
    while num > 0 {
        // Bijective base: there is no zero digit, so a remainder of 0 is the
        // highest digit and borrows one from the quotient.
        let mut rem = num % RADIX;
        let mut quot = num / RADIX;
        if rem == 0 {
            rem = RADIX;
            quot -= 1;
        }
        digits.push(digit(rem, first));
        num = quot;
    }
    digits.iter().rev().flatten().collect()
}

/// [`encode()`] for signed callers. Non-positive ordinals encode to `""`.
#[must_use]
pub fn encode_signed(n: i64) -> String {
    usize::try_from(n).map(encode).unwrap_or_default()
}

/// Decode a label back to its 1-based ordinal.
///
/// Returns `0` when `label` is empty or contains anything other than
/// `a..=z`. Use [`Label::from_str`] for a checked parse.
#[must_use]
pub fn decode(label: &str) -> usize {
    if label.is_empty() || !label.bytes().all(|b| b.is_ascii_lowercase()) {
        return 0;
    }
    label.bytes().fold(0_usize, |acc, b| {
        acc.saturating_mul(RADIX)
            .saturating_add(usize::from(b - b'a') + 1)
    })
}

fn digit(value: usize, first: char) -> Option<char> {
    u32::try_from(value - 1)
        .ok()
        .and_then(|offset| char::from_u32(u32::from(first) + offset))
}

/// A validated rule label: a non-empty run of `a..=z`.
///
/// ```
/// use tagexpr::Label;
///
/// let label: Label = "ab".parse().unwrap();
/// assert_eq!(label.ordinal(), 28);
/// assert_eq!(label.next().as_str(), "ac");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    /// The label for a 1-based position. Returns `None` for `0`.
    #[must_use]
    pub fn from_ordinal(n: usize) -> Option<Self> {
        (n > 0).then(|| Self(encode(n)))
    }

    #[must_use]
    pub fn ordinal(&self) -> usize {
        decode(&self.0)
    }

    /// The label that follows this one (`z` -> `aa`).
    #[must_use]
    pub fn next(&self) -> Self {
        Self(encode(self.ordinal().saturating_add(1)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::label(s).map(|text| Self(text.to_owned()))
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
