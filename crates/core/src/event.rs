//! Notifications published by the engine for the presentation layer.
//!
//! The engine queues events as it mutates state; the presentation drains them
//! with [`crate::GameEngine::drain_events`] after each input or frame.

use crate::error::Rejection;
use crate::types::{Card, CardId, SessionSummary, Status};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new deck was dealt, in board order.
    DeckReady(Vec<Card>),
    /// A card turned face up or face down.
    CardFlipped { id: CardId, face_up: bool },
    /// Counters or elapsed time changed.
    StatusChanged(Status),
    /// Every pair was matched.
    SessionFinished(SessionSummary),
    /// The history log changed, most recent first.
    HistoryChanged(Vec<SessionSummary>),
    /// A pick or start request was refused.
    Rejected(Rejection),
    /// The session was discarded and the board cleared.
    SessionReset,
}

impl GameEvent {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::DeckReady(_) => "deck_ready",
            GameEvent::CardFlipped { .. } => "card_flipped",
            GameEvent::StatusChanged(_) => "status_changed",
            GameEvent::SessionFinished(_) => "session_finished",
            GameEvent::HistoryChanged(_) => "history_changed",
            GameEvent::Rejected(_) => "rejected",
            GameEvent::SessionReset => "session_reset",
        }
    }
}
