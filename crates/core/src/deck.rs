//! Deck construction.
//!
//! Symbols are taken in alphabet order (the first `pair_count` of them), so the
//! same pair count always deals the same faces. Only board positions are random.

use crate::error::ConfigurationError;
use crate::rng::{shuffle, RandomSource};
use crate::types::{Card, CardId, Symbol};

/// Builds shuffled decks from a fixed alphabet.
#[derive(Debug, Clone, Copy)]
pub struct DeckBuilder<'a> {
    alphabet: &'a [Symbol],
}

impl<'a> DeckBuilder<'a> {
    pub fn new(alphabet: &'a [Symbol]) -> Self {
        Self { alphabet }
    }

    /// Deal `2 * pair_count` cards with ids `1..=2 * pair_count`, shuffled.
    pub fn build<R: RandomSource + ?Sized>(
        &self,
        pair_count: usize,
        rng: &mut R,
    ) -> Result<Vec<Card>, ConfigurationError> {
        if pair_count > self.alphabet.len() {
            return Err(ConfigurationError::InsufficientSymbols {
                requested: pair_count,
                available: self.alphabet.len(),
            });
        }

        let mut deck = Vec::with_capacity(pair_count * 2);
        let mut next_id = 1u32;
        for &symbol in &self.alphabet[..pair_count] {
            for _ in 0..2 {
                deck.push(Card::new(CardId(next_id), symbol));
                next_id += 1;
            }
        }

        shuffle(&mut deck, rng);
        Ok(deck)
    }
}
