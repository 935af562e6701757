//! Single-character encoding of repeat counts.
//!
//! Counts 0-9 are written as the matching digit and counts 10-35 as the
//! letters `A`-`Z`. An unknown count is written as the ambiguous symbol,
//! `-` unless configured otherwise.

use thiserror::Error;

use crate::core::types::RepeatCount;

/// Default symbol for a locus whose repeat count is unknown
pub const AMBIGUOUS_SYMBOL: char = '-';

/// Largest repeat count that fits in one character ('Z')
pub const MAX_REPEAT_COUNT: RepeatCount = 35;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Invalid allele symbol '{0}': expected 0-9, A-Z or the ambiguous symbol")]
    InvalidSymbol(char),

    #[error("Invalid repeat count {0}: counts cannot be negative")]
    NegativeCount(i64),

    #[error("Invalid repeat count {0}: maximum is {MAX_REPEAT_COUNT}")]
    CountOutOfRange(i64),

    #[error("Invalid ambiguous symbol '{0}': it clashes with the value alphabet")]
    InvalidAmbiguousSymbol(char),
}

/// A value supplied for a locus, before it is resolved to a count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlleleValue {
    /// One interchange character, e.g. '7', 'C' or the ambiguous symbol
    Symbol(char),
    /// A raw repeat count
    Count(i64),
}

impl From<char> for AlleleValue {
    fn from(c: char) -> Self {
        Self::Symbol(c)
    }
}

impl From<i64> for AlleleValue {
    fn from(n: i64) -> Self {
        Self::Count(n)
    }
}

impl From<RepeatCount> for AlleleValue {
    fn from(n: RepeatCount) -> Self {
        Self::Count(i64::from(n))
    }
}

impl AlleleValue {
    /// Resolve to a repeat count, `None` meaning ambiguous
    ///
    /// # Errors
    ///
    /// Returns a `ValueError` if the symbol is outside the alphabet or the
    /// count is negative or too large to encode.
    pub fn resolve(self, ambiguous_symbol: char) -> Result<Option<RepeatCount>, ValueError> {
        match self {
            Self::Symbol(c) => char_to_count(c, ambiguous_symbol),
            Self::Count(n) => checked_count(n).map(Some),
        }
    }
}

/// Validate a raw integer as a repeat count
///
/// # Errors
///
/// Returns `ValueError::NegativeCount` or `ValueError::CountOutOfRange`.
pub fn checked_count(n: i64) -> Result<RepeatCount, ValueError> {
    if n < 0 {
        return Err(ValueError::NegativeCount(n));
    }
    RepeatCount::try_from(n)
        .ok()
        .filter(|v| *v <= MAX_REPEAT_COUNT)
        .ok_or(ValueError::CountOutOfRange(n))
}

/// Check that a symbol can stand for "unknown" without shadowing a value
///
/// # Errors
///
/// Returns `ValueError::InvalidAmbiguousSymbol` for digits and uppercase letters.
pub fn validate_ambiguous_symbol(c: char) -> Result<char, ValueError> {
    if c.is_ascii_digit() || c.is_ascii_uppercase() {
        Err(ValueError::InvalidAmbiguousSymbol(c))
    } else {
        Ok(c)
    }
}

/// Decode one interchange character.
///
/// ```
/// use tb_typing::core::allele::char_to_count;
///
/// assert_eq!(char_to_count('7', '-').unwrap(), Some(7));
/// assert_eq!(char_to_count('C', '-').unwrap(), Some(12));
/// assert_eq!(char_to_count('-', '-').unwrap(), None);
/// assert!(char_to_count('c', '-').is_err());
/// ```
///
/// # Errors
///
/// Returns `ValueError::InvalidSymbol` for anything other than the ambiguous
/// symbol, a decimal digit, or an uppercase ASCII letter.
pub fn char_to_count(c: char, ambiguous_symbol: char) -> Result<Option<RepeatCount>, ValueError> {
    if c == ambiguous_symbol {
        return Ok(None);
    }
    match c {
        '0'..='9' | 'A'..='Z' => c
            .to_digit(36)
            .and_then(|d| RepeatCount::try_from(d).ok())
            .map(Some)
            .ok_or(ValueError::InvalidSymbol(c)),
        _ => Err(ValueError::InvalidSymbol(c)),
    }
}

/// Encode a repeat count as one interchange character.
///
/// # Errors
///
/// Returns `ValueError::CountOutOfRange` for counts above 35.
pub fn count_to_char(
    count: Option<RepeatCount>,
    ambiguous_symbol: char,
) -> Result<char, ValueError> {
    match count {
        None => Ok(ambiguous_symbol),
        Some(v) if v <= MAX_REPEAT_COUNT => char::from_digit(u32::from(v), 36)
            .map(|c| c.to_ascii_uppercase())
            .ok_or(ValueError::CountOutOfRange(i64::from(v))),
        Some(v) => Err(ValueError::CountOutOfRange(i64::from(v))),
    }
}
