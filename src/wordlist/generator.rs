//! Odometer-style combination generator

use std::iter::FusedIterator;

use super::Alphabet;
use crate::error::Result;

/// Lazy, ordered enumeration of fixed-length combinations.
///
/// Keeps one cursor per position; after each emission the rightmost cursor is
/// incremented and carries cascade to the left. Memory use is proportional to
/// the length only, never to the number of combinations.
#[derive(Debug, Clone)]
pub struct Combinations {
    alphabet: Alphabet,
    cursors: Vec<usize>,
    position: u128,
    total: u128,
}

impl Combinations {
    /// Create a generator positioned at rank 0
    pub fn new(alphabet: Alphabet, length: usize) -> Result<Self> {
        let total = alphabet.total_combinations(length)?;
        Ok(Self {
            alphabet,
            cursors: vec![0; length],
            position: 0,
            total,
        })
    }

    /// Create a generator positioned at `rank` (for resume)
    pub fn starting_at(alphabet: Alphabet, length: usize, rank: u128) -> Result<Self> {
        let mut combinations = Self::new(alphabet, length)?;
        combinations.seek(rank);
        Ok(combinations)
    }

    /// Length of every produced combination
    pub fn length(&self) -> usize {
        self.cursors.len()
    }

    /// Get total number of combinations
    pub fn total(&self) -> u128 {
        self.total
    }

    /// Rank of the next combination to be produced
    pub fn position(&self) -> u128 {
        self.position
    }

    /// Remaining count
    pub fn remaining(&self) -> u128 {
        self.total - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.total
    }

    /// Combination at a specific rank, independent of the cursor
    pub fn combination_at(&self, rank: u128) -> Option<String> {
        if rank >= self.total {
            return None;
        }

        let base = self.alphabet.len() as u128;
        let mut result = vec![' '; self.cursors.len()];
        let mut n = rank;

        for slot in result.iter_mut().rev() {
            *slot = self.alphabet.symbol((n % base) as usize);
            n /= base;
        }

        Some(result.into_iter().collect())
    }

    /// Move past the next `n` combinations without producing them
    pub fn skip_ahead(&mut self, n: u128) {
        self.seek(self.position.saturating_add(n));
    }

    fn seek(&mut self, rank: u128) {
        if rank >= self.total {
            self.position = self.total;
            return;
        }

        let base = self.alphabet.len() as u128;
        let mut n = rank;
        for cursor in self.cursors.iter_mut().rev() {
            *cursor = (n % base) as usize;
            n /= base;
        }
        self.position = rank;
    }

    fn current(&self) -> String {
        self.cursors
            .iter()
            .map(|&index| self.alphabet.symbol(index))
            .collect()
    }

    fn advance(&mut self) {
        self.position += 1;
        let base = self.alphabet.len();
        for cursor in self.cursors.iter_mut().rev() {
            *cursor += 1;
            if *cursor < base {
                return;
            }
            *cursor = 0;
        }
        // Leftmost cursor overflowed: every cursor wrapped back to zero and
        // `position` has reached `total`.
    }
}

impl Iterator for Combinations {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        let combination = self.current();
        self.advance();
        Some(combination)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.skip_ahead(n as u128);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn count(self) -> usize {
        usize::try_from(self.remaining()).unwrap_or(usize::MAX)
    }
}

impl FusedIterator for Combinations {}
