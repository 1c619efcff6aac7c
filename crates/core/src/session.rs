//! Live state of the current session.

use crate::clock::ClockHandle;
use crate::scheduler::TaskToken;
use crate::types::{Card, CardId, Difficulty, Phase, Status};

/// Mutable aggregate owned by the engine.
///
/// Invariants upheld by [`crate::GameEngine`]:
/// - `pairs_matched <= total_pairs`
/// - `first_pick != second_pick` whenever both are set
/// - a matched card is never a pick
/// - `second_pick` is only set while the pair is being resolved (Locked)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) phase: Phase,
    pub(crate) player_label: String,
    pub(crate) difficulty: Option<Difficulty>,
    /// Board order; fixed once dealt.
    pub(crate) deck: Vec<Card>,
    pub(crate) first_pick: Option<CardId>,
    pub(crate) second_pick: Option<CardId>,
    pub(crate) move_count: u32,
    pub(crate) pairs_matched: u32,
    pub(crate) total_pairs: u32,
    pub(crate) elapsed_seconds: u32,
    pub(crate) clock: Option<ClockHandle>,
    pub(crate) pending_reveal: Option<TaskToken>,
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Running, including the Locked sub-state.
    pub fn is_running(&self) -> bool {
        self.phase.is_live()
    }

    pub fn player_label(&self) -> &str {
        &self.player_label
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.iter().find(|c| c.id == id)
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.deck.iter_mut().find(|c| c.id == id)
    }

    pub fn first_pick(&self) -> Option<CardId> {
        self.first_pick
    }

    pub fn second_pick(&self) -> Option<CardId> {
        self.second_pick
    }

    /// Matched cards and open picks are face up.
    pub fn is_face_up(&self, id: CardId) -> bool {
        self.first_pick == Some(id)
            || self.second_pick == Some(id)
            || self.card(id).is_some_and(|c| c.matched)
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn pairs_matched(&self) -> u32 {
        self.pairs_matched
    }

    pub fn total_pairs(&self) -> u32 {
        self.total_pairs
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn clock_handle(&self) -> Option<ClockHandle> {
        self.clock
    }

    pub fn pending_reveal(&self) -> Option<TaskToken> {
        self.pending_reveal
    }

    pub fn status(&self) -> Status {
        Status {
            move_count: self.move_count,
            pairs_matched: self.pairs_matched,
            total_pairs: self.total_pairs,
            elapsed_seconds: self.elapsed_seconds,
        }
    }
}
