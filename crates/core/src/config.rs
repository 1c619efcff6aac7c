//! Static game configuration.
//!
//! Built once at startup and read-only afterwards.

use crate::types::{
    find_preset, Difficulty, Symbol, DIFFICULTY_PRESETS, HISTORY_CAPACITY, MISMATCH_REVEAL_MS,
    SYMBOL_ALPHABET,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Difficulty table, looked up by name.
    pub presets: Vec<Difficulty>,
    /// Ordered symbol alphabet; decks take a prefix.
    pub alphabet: Vec<Symbol>,
    /// How long a mismatched pair stays face up.
    pub mismatch_reveal_ms: u32,
    /// Finished sessions kept in the history log.
    pub history_capacity: usize,
}

impl GameConfig {
    pub fn with_mismatch_reveal_ms(mut self, ms: u32) -> Self {
        self.mismatch_reveal_ms = ms;
        self
    }

    pub fn preset(&self, name: &str) -> Option<Difficulty> {
        find_preset(&self.presets, name)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            presets: DIFFICULTY_PRESETS.to_vec(),
            alphabet: SYMBOL_ALPHABET.to_vec(),
            mismatch_reveal_ms: MISMATCH_REVEAL_MS,
            history_capacity: HISTORY_CAPACITY,
        }
    }
}
