//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the session rules, state management, and timing logic
//! of the memory game. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed deals identical boards
//! - **Testable**: Time only moves when the caller advances it
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`rng`]: Seeded LCG and the unbiased Fisher-Yates shuffle
//! - [`deck`]: Paired deck construction from a fixed symbol alphabet
//! - [`scheduler`]: Deferred tasks with cancellation tokens
//! - [`clock`]: Per-session elapsed-seconds clock
//! - [`engine`]: The session state machine (picks, matches, lock, win)
//! - [`history`]: Bounded log of finished sessions
//! - [`event`]: Notifications for the presentation layer
//! - [`snapshot`]: Detached view model for renderers
//!
//! # Game Rules
//!
//! - Cards are dealt face down in pairs; a move is two picks
//! - Matching values stay face up; a mismatch is shown for 600ms, during which
//!   picks are rejected, then both cards turn back
//! - The session finishes when every pair is matched; its summary goes to the
//!   front of a five-entry history
//!
//! # Example
//!
//! ```
//! use memory_match_core::{GameConfig, GameEngine, PickOutcome};
//! use memory_match_core::types::Phase;
//!
//! let mut game = GameEngine::new(GameConfig::default(), 12345);
//! game.start(Some("easy"), "Ann").unwrap();
//! assert_eq!(game.session().deck().len(), 6);
//!
//! let first = game.session().deck()[0].id;
//! assert_eq!(game.pick(first), PickOutcome::Flipped);
//!
//! // One elapsed second
//! game.advance(1000);
//! assert_eq!(game.status().elapsed_seconds, 1);
//! assert_eq!(game.phase(), Phase::Running);
//! ```
//!
//! # Timing
//!
//! Call [`GameEngine::advance`](engine::GameEngine::advance) every frame with
//! the elapsed milliseconds. The session clock ticks once per 1000ms and the
//! mismatch reveal fires 600ms after the second pick.

pub mod clock;
pub mod config;
pub mod deck;
pub mod engine;
pub mod error;
pub mod event;
pub mod history;
pub mod rng;
pub mod scheduler;
pub mod session;
pub mod snapshot;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use clock::{ClockHandle, SessionClock};
pub use config::GameConfig;
pub use deck::DeckBuilder;
pub use engine::{GameEngine, PickOutcome};
pub use error::{ConfigurationError, RejectReason, Rejection};
pub use event::GameEvent;
pub use history::HistoryLog;
pub use rng::{shuffle, RandomSource, SimpleRng};
pub use scheduler::{Scheduler, Task, TaskToken};
pub use session::SessionState;
pub use snapshot::{CardView, SessionSnapshot};
