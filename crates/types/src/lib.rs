//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (session engine, terminal rendering, tests).
//!
//! # Difficulty Presets
//!
//! The board is a `columns x rows` grid. Every preset has an even cell count so
//! the deck splits into pairs:
//!
//! | Name | Grid | Cards | Pairs |
//! |------|------|-------|-------|
//! | `easy` | 2x3 | 6 | 3 |
//! | `medium` | 3x4 | 12 | 6 |
//! | `hard` | 4x4 | 16 | 8 |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Runner frame interval (~60 FPS) |
//! | `CLOCK_TICK_MS` | 1000 | Session clock period (one elapsed second) |
//! | `MISMATCH_REVEAL_MS` | 600 | How long a mismatched pair stays face up |
//! | `MESSAGE_TTL_MS` | 1500 | How long a status-bar message stays visible |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{Difficulty, GameAction, Direction, HISTORY_CAPACITY};
//!
//! // Look up a preset (case-insensitive)
//! let easy = Difficulty::from_name("Easy").unwrap();
//! assert_eq!(easy.cells(), 6);
//! assert_eq!(easy.pair_count(), 3);
//!
//! // Parse an action
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveCursor(Direction::Left));
//!
//! assert_eq!(HISTORY_CAPACITY, 5);
//! ```

use std::fmt;

/// Runner frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Session clock period: one elapsed second per tick
pub const CLOCK_TICK_MS: u32 = 1000;

/// Delay before a mismatched pair is turned face down again
pub const MISMATCH_REVEAL_MS: u32 = 600;

/// Number of finished sessions retained in the history log
pub const HISTORY_CAPACITY: usize = 5;

/// Lifetime of a one-line status message in the terminal view
pub const MESSAGE_TTL_MS: u32 = 1500;

/// Ordered symbol alphabet. Decks always take a prefix of this list.
pub const SYMBOL_ALPHABET: [Symbol; 12] = [
    Symbol('●'),
    Symbol('■'),
    Symbol('▲'),
    Symbol('◆'),
    Symbol('★'),
    Symbol('♠'),
    Symbol('♥'),
    Symbol('♦'),
    Symbol('♣'),
    Symbol('♪'),
    Symbol('☼'),
    Symbol('Ω'),
];

/// Built-in difficulty table.
pub const DIFFICULTY_PRESETS: [Difficulty; 3] = [
    Difficulty::new("easy", 2, 3),
    Difficulty::new("medium", 3, 4),
    Difficulty::new("hard", 4, 4),
];

/// A face symbol. Two cards in a deck share each symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(pub char);

impl Symbol {
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card identity. Ids start at 1 and are stable for the life of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

impl CardId {
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub value: Symbol,
    pub matched: bool,
}

impl Card {
    pub fn new(id: CardId, value: Symbol) -> Self {
        Self {
            id,
            value,
            matched: false,
        }
    }
}

/// Named board preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Difficulty {
    pub name: &'static str,
    pub columns: u8,
    pub rows: u8,
}

impl Difficulty {
    pub const fn new(name: &'static str, columns: u8, rows: u8) -> Self {
        Self {
            name,
            columns,
            rows,
        }
    }

    /// Total number of cards on the board.
    pub fn cells(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Number of pairs needed to fill the board.
    pub fn pair_count(&self) -> usize {
        self.cells() / 2
    }

    /// Whether the board can be filled with pairs.
    pub fn splits_into_pairs(&self) -> bool {
        self.cells() > 0 && self.cells() % 2 == 0
    }

    /// Look up a built-in preset by name (case-insensitive, surrounding whitespace ignored)
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_name("hard").map(|d| d.cells()), Some(16));
    /// assert_eq!(Difficulty::from_name(" MEDIUM ").map(|d| d.columns), Some(3));
    /// assert_eq!(Difficulty::from_name("insane"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        find_preset(&DIFFICULTY_PRESETS, name)
    }
}

/// Look up a preset by name in an arbitrary preset table.
pub fn find_preset(presets: &[Difficulty], name: &str) -> Option<Difficulty> {
    let name = name.trim();
    presets
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(name))
        .copied()
}

/// Session lifecycle.
///
/// - **Idle**: no session
/// - **Running**: deck dealt, clock active, picks accepted
/// - **Locked**: a mismatched pair is being shown; picks rejected
/// - **Finished**: every pair matched, clock stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Locked,
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Locked => "locked",
            Phase::Finished => "finished",
        }
    }

    /// Running or its Locked sub-state.
    pub fn is_live(&self) -> bool {
        matches!(self, Phase::Running | Phase::Locked)
    }
}

/// Counters shown while a session is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Status {
    pub move_count: u32,
    pub pairs_matched: u32,
    pub total_pairs: u32,
    pub elapsed_seconds: u32,
}

/// Immutable record of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionSummary {
    pub player_label: String,
    pub difficulty: &'static str,
    pub move_count: u32,
    pub elapsed_seconds: u32,
    pub pairs_matched: u32,
}

/// Cursor movement direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Player actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the board cursor one cell
    MoveCursor(Direction),
    /// Flip the card under the cursor
    Flip,
    /// Restart with the current difficulty
    Restart,
    /// Restart with the preset at this index of the preset table
    RestartPreset(usize),
    /// Start a session from idle using the last settings
    NewSession,
    /// Abandon the session and go back to idle
    Reset,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("flip"), Some(GameAction::Flip));
    /// assert_eq!(GameAction::from_str("preset2"), Some(GameAction::RestartPreset(1)));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if let Some(n) = lower.strip_prefix("preset") {
            return match n.parse::<usize>() {
                Ok(n) if n >= 1 => Some(GameAction::RestartPreset(n - 1)),
                _ => None,
            };
        }
        match lower.as_str() {
            "moveup" => Some(GameAction::MoveCursor(Direction::Up)),
            "movedown" => Some(GameAction::MoveCursor(Direction::Down)),
            "moveleft" => Some(GameAction::MoveCursor(Direction::Left)),
            "moveright" => Some(GameAction::MoveCursor(Direction::Right)),
            "flip" => Some(GameAction::Flip),
            "restart" => Some(GameAction::Restart),
            "newsession" => Some(GameAction::NewSession),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_split_into_pairs_and_fit_alphabet() {
        for preset in DIFFICULTY_PRESETS {
            assert!(preset.splits_into_pairs(), "{} is odd", preset.name);
            assert!(preset.pair_count() <= SYMBOL_ALPHABET.len());
        }
    }

    #[test]
    fn preset_dimensions() {
        assert_eq!(Difficulty::from_name("easy"), Some(Difficulty::new("easy", 2, 3)));
        assert_eq!(Difficulty::from_name("medium").map(|d| d.cells()), Some(12));
        assert_eq!(Difficulty::from_name("hard").map(|d| d.pair_count()), Some(8));
    }

    #[test]
    fn alphabet_has_no_duplicates() {
        let mut seen = SYMBOL_ALPHABET.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), SYMBOL_ALPHABET.len());
    }

    #[test]
    fn odd_grid_does_not_split() {
        assert!(!Difficulty::new("odd", 3, 3).splits_into_pairs());
        assert!(!Difficulty::new("empty", 0, 4).splits_into_pairs());
    }

    #[test]
    fn timing_defaults() {
        assert_eq!(MISMATCH_REVEAL_MS, 600);
        assert_eq!(CLOCK_TICK_MS, 1000);
    }

    #[test]
    fn phase_liveness() {
        assert!(Phase::Running.is_live());
        assert!(Phase::Locked.is_live());
        assert!(!Phase::Idle.is_live());
        assert!(!Phase::Finished.is_live());
    }

    #[test]
    fn preset_action_rejects_zero() {
        assert_eq!(GameAction::from_str("preset0"), None);
        assert_eq!(GameAction::from_str("PRESET3"), Some(GameAction::RestartPreset(2)));
    }
}
