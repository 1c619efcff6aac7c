//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` key events. It maps keys into [`crate::types::GameAction`] and
//! tracks the board cursor the player flips cards with.

pub mod cursor;
pub mod map;

pub use memory_match_types as types;

pub use cursor::BoardCursor;
pub use map::{handle_key_event, should_quit};
