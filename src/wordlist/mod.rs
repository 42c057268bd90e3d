//! Wordlist generation - enumerate every fixed-length string over an alphabet
//!
//! The enumeration is lazy and ordered: rank `k` maps to the base-`|alphabet|`
//! representation of `k`, zero-padded to the requested length.

mod generator;
mod writer;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WordlistError};
use crate::invalid_argument;

pub use generator::Combinations;
pub use writer::{CancelToken, WordlistWriter};

/// Symbols used when no alphabet is given
pub const DEFAULT_DIGITS: &str = "0123456789";

/// Longest combination the generator accepts
pub const MAX_LENGTH: usize = 1 << 16;

/// Ordered, non-empty set of symbols combinations are drawn from.
///
/// Duplicate symbols are allowed; they simply produce repeated lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `symbols`, in order
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(invalid_argument!("alphabet must contain at least one symbol"));
        }
        Ok(Self { symbols })
    }

    /// The ten decimal digits `0-9`
    pub fn digits() -> Self {
        Self {
            symbols: DEFAULT_DIGITS.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub(crate) fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Number of combinations of `length` symbols, `len ^ length`.
    ///
    /// Fails when `length` exceeds [`MAX_LENGTH`] or the count does not fit
    /// in a `u128`.
    pub fn total_combinations(&self, length: usize) -> Result<u128> {
        if length > MAX_LENGTH {
            return Err(invalid_argument!(
                "length {} is too large (maximum {})",
                length,
                MAX_LENGTH
            ));
        }
        (self.symbols.len() as u128)
            .checked_pow(length as u32)
            .ok_or_else(|| {
                invalid_argument!(
                    "{} symbols at length {} overflow the enumeration range",
                    self.symbols.len(),
                    length
                )
            })
    }

    /// Fresh enumeration of every combination of `length` symbols, from rank 0
    pub fn combinations(&self, length: usize) -> Result<Combinations> {
        Combinations::new(self.clone(), length)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::digits()
    }
}

impl FromStr for Alphabet {
    type Err = WordlistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Total number of combinations of `length` symbols drawn from `alphabet`
pub fn total(alphabet: &str, length: usize) -> Result<u128> {
    Alphabet::new(alphabet)?.total_combinations(length)
}

/// Lazily enumerate every combination of `length` symbols drawn from `alphabet`.
///
/// Each call returns an independent sequence starting at rank 0. Use the
/// standard `skip`/`take` adapters to select a window; `skip` seeks directly
/// to the target rank instead of generating the skipped prefix.
pub fn produce(alphabet: &str, length: usize) -> Result<Combinations> {
    Alphabet::new(alphabet)?.combinations(length)
}
