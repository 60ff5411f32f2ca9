//! Sequence validation.
//!
//! Raw input is cleaned (all whitespace removed, uppercased) and checked
//! against the accepted alphabet `A C G T U N`.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::{Sequence, ALPHABET};

/// Reasons a raw string is not a usable sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSequence {
    #[error("Sequence is empty")]
    Empty,

    #[error("Invalid bases detected: {}", format_bases(.0))]
    InvalidBases(BTreeSet<char>),
}

impl InvalidSequence {
    /// Short machine-friendly reason.
    pub fn reason(&self) -> &'static str {
        match self {
            InvalidSequence::Empty => "empty",
            InvalidSequence::InvalidBases(_) => "invalid bases",
        }
    }

    /// The distinct offending characters, if any.
    pub fn invalid_bases(&self) -> Option<&BTreeSet<char>> {
        match self {
            InvalidSequence::Empty => None,
            InvalidSequence::InvalidBases(bases) => Some(bases),
        }
    }
}

fn format_bases(bases: &BTreeSet<char>) -> String {
    bases.iter().map(char::to_string).collect::<Vec<_>>().join(", ")
}

/// Result type for validation.
pub type ValidateResult<T> = Result<T, InvalidSequence>;

/// Returns true for a base of the accepted alphabet (uppercase only).
pub fn is_valid_base(c: char) -> bool {
    ALPHABET.contains(&c)
}

/// Characters stripped from raw input: Unicode whitespace plus the ASCII
/// information separators `\x1c`..=`\x1f`.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Cleans and validates a raw sequence.
///
/// # Examples
///
/// ```
/// use seqproc::validate::validate;
///
/// let seq = validate(" at\tgc\n").unwrap();
/// assert_eq!(seq.as_str(), "ATGC");
/// assert!(validate("ATGX").is_err());
/// ```
pub fn validate(raw: &str) -> ValidateResult<Sequence> {
    let cleaned: String = raw
        .chars()
        .filter(|&c| !is_separator(c))
        .flat_map(char::to_uppercase)
        .collect();

    if cleaned.is_empty() {
        return Err(InvalidSequence::Empty);
    }

    let invalid: BTreeSet<char> = cleaned.chars().filter(|&c| !is_valid_base(c)).collect();
    if !invalid.is_empty() {
        return Err(InvalidSequence::InvalidBases(invalid));
    }

    Ok(Sequence::new_unchecked(cleaned))
}
