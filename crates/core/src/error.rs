//! Error and rejection types.

use thiserror::Error;

use crate::types::Phase;

/// Why a session could not be started.
///
/// Raised by [`crate::GameEngine::start`] before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("no difficulty selected")]
    MissingDifficulty,

    #[error("unknown difficulty `{0}`")]
    UnknownDifficulty(String),

    #[error("player label must not be empty")]
    EmptyPlayerLabel,

    #[error("difficulty `{name}` has {cells} cells, which cannot be split into pairs")]
    OddCellCount { name: &'static str, cells: usize },

    #[error("insufficient distinct symbols: {requested} pairs requested, {available} available")]
    InsufficientSymbols { requested: usize, available: usize },
}

/// Why a pick was ignored. Picks are rejected often during normal play, so this
/// is a value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// No session in progress (idle or finished).
    NotRunning(Phase),
    /// A mismatched pair is still being shown.
    Locked,
    /// No card with that id on the board.
    UnknownCard,
    /// The card already belongs to a matched pair.
    AlreadyMatched,
    /// The card is the currently open first pick.
    AlreadyPicked,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::NotRunning(Phase::Finished) => "session finished",
            RejectReason::NotRunning(_) => "no session running",
            RejectReason::Locked => "wait for the cards to turn back",
            RejectReason::UnknownCard => "no such card",
            RejectReason::AlreadyMatched => "card already matched",
            RejectReason::AlreadyPicked => "card already picked",
        }
    }
}

/// A rejected inbound request, as published to the presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Pick(RejectReason),
    Start(ConfigurationError),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Pick(reason) => f.write_str(reason.as_str()),
            Rejection::Start(err) => write!(f, "{err}"),
        }
    }
}
