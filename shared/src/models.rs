use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in the Latin alphabet; every rotation is taken modulo this.
pub const ALPHABET_LEN: i64 = 26;

/// A Caesar rotation key, kept as its residue modulo 26.
///
/// Keys of any sign and any magnitude are valid. Parsing from text reduces the
/// digit string as it is read, so `"100000000000000000000000000"` is as good a
/// key as `"3"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShiftKey(u8);

impl ShiftKey {
    pub fn new(key: i64) -> Self {
        // rem_euclid keeps the residue in 0..26 for negative keys too
        ShiftKey(key.rem_euclid(ALPHABET_LEN) as u8)
    }

    pub fn residue(&self) -> u8 {
        self.0
    }

    /// The key that undoes this one.
    pub fn inverse(&self) -> Self {
        ShiftKey::new(-(self.0 as i64))
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a whole number")]
pub struct ParseShiftKeyError {
    pub input: String,
}

impl FromStr for ShiftKey {
    type Err = ParseShiftKeyError;

    // Accepts an optional sign followed by ASCII digits, with single underscores
    // allowed between digits ("1_000"). Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseShiftKeyError { input: s.to_string() };
        let trimmed = s.trim();

        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        if digits.is_empty() {
            return Err(err());
        }

        let mut residue: i64 = 0;
        let mut prev_was_digit = false;
        for b in digits.bytes() {
            match b {
                b'0'..=b'9' => {
                    residue = (residue * 10 + (b - b'0') as i64) % ALPHABET_LEN;
                    prev_was_digit = true;
                }
                b'_' if prev_was_digit => prev_was_digit = false,
                _ => return Err(err()),
            }
        }
        // A trailing underscore leaves prev_was_digit unset
        if !prev_was_digit {
            return Err(err());
        }

        Ok(ShiftKey::new(if negative { -residue } else { residue }))
    }
}

/// A price paired with the year (0-based position) it was observed in.
///
/// Field order matters: the derived ordering compares `price` first and
/// breaks ties on `year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PriceYear<T> {
    pub price: T,
    pub year: usize,
}

impl<T> PriceYear<T> {
    pub fn new(price: T, year: usize) -> Self {
        PriceYear { price, year }
    }
}

/// The three console programs shipped by this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Problem {
    Caesar,
    IndianFormat,
    MinimumLoss,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Problem::Caesar => "caesar",
            Problem::IndianFormat => "indian-format",
            Problem::MinimumLoss => "minimum-loss",
        };
        f.write_str(name)
    }
}
