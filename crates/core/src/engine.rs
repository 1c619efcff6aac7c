//! Game engine - owns the session state machine
//!
//! This module ties together the deck builder, scheduler, session clock and
//! history log. It handles picks, match resolution, the mismatch-reveal lock,
//! win detection and the session lifecycle.
//!
//! ```text
//!  Idle --start--> Running --pick (mismatch)--> Locked --reveal--> Running
//!                     |                                               |
//!                     +--pick (last pair)--> Finished <---------------+
//! ```
//!
//! `reset` returns to Idle from any state; `start` supersedes any state.

use tracing::{debug, info, trace};

use crate::clock::SessionClock;
use crate::config::GameConfig;
use crate::deck::DeckBuilder;
use crate::error::{ConfigurationError, RejectReason, Rejection};
use crate::event::GameEvent;
use crate::history::HistoryLog;
use crate::rng::SimpleRng;
use crate::scheduler::{Scheduler, Task, TaskToken};
use crate::session::SessionState;
use crate::snapshot::{CardView, SessionSnapshot};
use crate::types::{CardId, Phase, SessionSummary, Status};

/// Result of a single pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Ignored; nothing changed.
    Rejected(RejectReason),
    /// First card of a pair turned face up.
    Flipped,
    /// Second card matched the first.
    Matched,
    /// Second card did not match; the board is locked until the reveal fires.
    Mismatched,
    /// The last pair was matched.
    Finished(SessionSummary),
}

/// Complete game engine
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    rng: SimpleRng,
    scheduler: Scheduler,
    clock: SessionClock,
    session: SessionState,
    history: HistoryLog,
    events: Vec<GameEvent>,
    /// Monotonic session id (increments on every successful start).
    session_id: u32,
}

impl GameEngine {
    /// Create an idle engine dealing with the given RNG seed
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let history = HistoryLog::new(config.history_capacity);
        Self {
            config,
            rng: SimpleRng::new(seed),
            scheduler: Scheduler::new(),
            clock: SessionClock::default(),
            session: SessionState::default(),
            history,
            events: Vec::new(),
            session_id: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn status(&self) -> Status {
        self.session.status()
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    /// Live deferred tasks (clock and pending reveal).
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Milliseconds of game time advanced so far.
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Take all queued notifications, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Deal a new session, superseding whatever was running.
    ///
    /// On error nothing changes except a [`GameEvent::Rejected`] being queued.
    pub fn start(
        &mut self,
        difficulty: Option<&str>,
        player_label: &str,
    ) -> Result<(), ConfigurationError> {
        match self.try_start(difficulty, player_label) {
            Ok(()) => Ok(()),
            Err(err) => {
                debug!(error = %err, "start rejected");
                self.events.push(GameEvent::Rejected(Rejection::Start(err.clone())));
                Err(err)
            }
        }
    }

    fn try_start(
        &mut self,
        difficulty: Option<&str>,
        player_label: &str,
    ) -> Result<(), ConfigurationError> {
        let name = difficulty
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ConfigurationError::MissingDifficulty)?;
        let preset = self
            .config
            .preset(name)
            .ok_or_else(|| ConfigurationError::UnknownDifficulty(name.to_string()))?;

        let label = player_label.trim();
        if label.is_empty() {
            return Err(ConfigurationError::EmptyPlayerLabel);
        }
        if !preset.splits_into_pairs() {
            return Err(ConfigurationError::OddCellCount {
                name: preset.name,
                cells: preset.cells(),
            });
        }

        let deck =
            DeckBuilder::new(&self.config.alphabet).build(preset.pair_count(), &mut self.rng)?;

        // Validation passed; from here on the old session is gone.
        self.stop_timers();
        self.session_id = self.session_id.wrapping_add(1);
        let clock = self.clock.start(&mut self.scheduler);
        self.session = SessionState {
            phase: Phase::Running,
            player_label: label.to_string(),
            difficulty: Some(preset),
            deck,
            total_pairs: preset.pair_count() as u32,
            clock: Some(clock),
            ..SessionState::default()
        };

        info!(
            session = self.session_id,
            player = label,
            difficulty = preset.name,
            cards = self.session.deck.len(),
            "session started"
        );
        self.events.push(GameEvent::DeckReady(self.session.deck.clone()));
        self.push_status();
        Ok(())
    }

    /// Abandon the session and return to Idle. Always succeeds.
    ///
    /// Cancels the clock and any pending reveal; history is kept.
    pub fn reset(&mut self) {
        let from = self.session.phase;
        self.stop_timers();
        self.session = SessionState::default();

        info!(session = self.session_id, from = from.as_str(), "session reset");
        self.events.push(GameEvent::SessionReset);
        self.push_status();
    }

    /// Reset, then start again with the current player label.
    pub fn request_restart(&mut self, difficulty: Option<&str>) -> Result<(), ConfigurationError> {
        let label = std::mem::take(&mut self.session.player_label);
        self.reset();
        self.start(difficulty, &label)
    }

    /// Pick a face-down card.
    pub fn pick(&mut self, id: CardId) -> PickOutcome {
        if let Err(reason) = self.check_pick(id) {
            debug!(card = id.get(), reason = reason.as_str(), "pick rejected");
            self.events.push(GameEvent::Rejected(Rejection::Pick(reason)));
            return PickOutcome::Rejected(reason);
        }

        let Some(first) = self.session.first_pick else {
            self.session.first_pick = Some(id);
            debug!(card = id.get(), "first pick");
            self.events.push(GameEvent::CardFlipped { id, face_up: true });
            return PickOutcome::Flipped;
        };

        self.session.second_pick = Some(id);
        self.session.move_count += 1;
        self.events.push(GameEvent::CardFlipped { id, face_up: true });

        let first_value = self.session.card(first).map(|c| c.value);
        let second_value = self.session.card(id).map(|c| c.value);

        if first_value.is_some() && first_value == second_value {
            self.resolve_match(first, id)
        } else {
            self.resolve_mismatch(first, id)
        }
    }

    fn check_pick(&self, id: CardId) -> Result<(), RejectReason> {
        let session = &self.session;
        match session.phase {
            Phase::Running => {}
            Phase::Locked => return Err(RejectReason::Locked),
            other => return Err(RejectReason::NotRunning(other)),
        }
        if session.second_pick.is_some() {
            return Err(RejectReason::Locked);
        }

        let card = session.card(id).ok_or(RejectReason::UnknownCard)?;
        if card.matched {
            return Err(RejectReason::AlreadyMatched);
        }
        if session.first_pick == Some(id) {
            return Err(RejectReason::AlreadyPicked);
        }
        Ok(())
    }

    fn resolve_match(&mut self, first: CardId, second: CardId) -> PickOutcome {
        for id in [first, second] {
            if let Some(card) = self.session.card_mut(id) {
                card.matched = true;
            }
        }
        self.session.pairs_matched += 1;
        self.session.first_pick = None;
        self.session.second_pick = None;

        debug!(
            first = first.get(),
            second = second.get(),
            pairs = self.session.pairs_matched,
            "pair matched"
        );

        if self.session.pairs_matched >= self.session.total_pairs {
            PickOutcome::Finished(self.finish())
        } else {
            self.push_status();
            PickOutcome::Matched
        }
    }

    fn resolve_mismatch(&mut self, first: CardId, second: CardId) -> PickOutcome {
        self.session.phase = Phase::Locked;
        let token = self.scheduler.schedule_once(
            self.config.mismatch_reveal_ms,
            Task::RevealMismatch { first, second },
        );
        self.session.pending_reveal = Some(token);

        debug!(
            first = first.get(),
            second = second.get(),
            reveal_ms = self.config.mismatch_reveal_ms,
            "mismatch, board locked"
        );
        self.push_status();
        PickOutcome::Mismatched
    }

    fn finish(&mut self) -> SessionSummary {
        self.clock.stop(&mut self.scheduler, self.session.clock.take());
        self.session.phase = Phase::Finished;

        let summary = SessionSummary {
            player_label: self.session.player_label.clone(),
            difficulty: self.session.difficulty.map_or("", |d| d.name),
            move_count: self.session.move_count,
            elapsed_seconds: self.session.elapsed_seconds,
            pairs_matched: self.session.pairs_matched,
        };
        self.history.record(summary.clone());

        info!(
            session = self.session_id,
            player = %summary.player_label,
            difficulty = summary.difficulty,
            moves = summary.move_count,
            seconds = summary.elapsed_seconds,
            "session finished"
        );
        self.push_status();
        self.events.push(GameEvent::SessionFinished(summary.clone()));
        self.events.push(GameEvent::HistoryChanged(self.history.entries()));
        summary
    }

    /// Advance game time, running every deferred task that falls due.
    pub fn advance(&mut self, elapsed_ms: u32) {
        let deadline = self.scheduler.now_ms() + u64::from(elapsed_ms);
        while let Some((token, task)) = self.scheduler.pop_due(deadline) {
            self.run_task(token, task);
        }
        self.scheduler.settle(deadline);
    }

    /// Run a fired task. Tasks whose token is not the live one are ignored.
    fn run_task(&mut self, token: TaskToken, task: Task) {
        match task {
            Task::ClockTick => {
                if self.session.clock.map(|h| h.token()) != Some(token) {
                    trace!("stale clock tick ignored");
                    return;
                }
                self.session.elapsed_seconds += 1;
                trace!(elapsed = self.session.elapsed_seconds, "clock tick");
                self.push_status();
            }
            Task::RevealMismatch { first, second } => {
                if self.session.pending_reveal != Some(token) {
                    debug!("stale reveal ignored");
                    return;
                }
                self.session.pending_reveal = None;
                self.session.first_pick = None;
                self.session.second_pick = None;
                self.session.phase = Phase::Running;

                debug!(first = first.get(), second = second.get(), "mismatch hidden");
                self.events.push(GameEvent::CardFlipped {
                    id: first,
                    face_up: false,
                });
                self.events.push(GameEvent::CardFlipped {
                    id: second,
                    face_up: false,
                });
            }
        }
    }

    fn stop_timers(&mut self) {
        self.clock.stop(&mut self.scheduler, self.session.clock.take());
        if let Some(token) = self.session.pending_reveal.take() {
            self.scheduler.cancel(token);
        }
    }

    fn push_status(&mut self) {
        self.events.push(GameEvent::StatusChanged(self.session.status()));
    }

    /// Fill `out` with the current state, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        let session = &self.session;
        out.phase = session.phase;
        out.session_id = self.session_id;
        out.player_label.clear();
        out.player_label.push_str(&session.player_label);
        out.difficulty = session.difficulty.map(|d| d.name);
        out.columns = session.difficulty.map_or(0, |d| d.columns);
        out.rows = session.difficulty.map_or(0, |d| d.rows);
        out.cards.clear();
        out.cards.extend(session.deck.iter().map(|card| CardView {
            id: card.id,
            value: card.value,
            face_up: session.is_face_up(card.id),
            matched: card.matched,
        }));
        out.status = session.status();
        out.history.truncate(self.history.len());
        for (i, entry) in self.history.iter().enumerate() {
            match out.history.get_mut(i) {
                Some(slot) => copy_summary(slot, entry),
                None => out.history.push(entry.clone()),
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut out = SessionSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

/// Overwrite `dst` with `src`, keeping the label's buffer.
fn copy_summary(dst: &mut SessionSummary, src: &SessionSummary) {
    dst.player_label.clone_from(&src.player_label);
    dst.difficulty = src.difficulty;
    dst.move_count = src.move_count;
    dst.elapsed_seconds = src.elapsed_seconds;
    dst.pairs_matched = src.pairs_matched;
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, Symbol};

    /// Ids of two cards sharing a value, and one card with a different value.
    fn pair_and_other(engine: &GameEngine) -> (CardId, CardId, CardId) {
        let deck = engine.session().deck();
        let a = deck[0];
        let b = deck
            .iter()
            .find(|c| c.id != a.id && c.value == a.value)
            .unwrap();
        let c = deck.iter().find(|c| c.value != a.value).unwrap();
        (a.id, b.id, c.id)
    }

    fn running(seed: u32) -> GameEngine {
        let mut engine = GameEngine::new(GameConfig::default(), seed);
        engine.start(Some("easy"), "Ann").unwrap();
        engine.drain_events().for_each(drop);
        engine
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = GameEngine::default();
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.status(), Status::default());
        assert_eq!(engine.session_id(), 0);
        assert_eq!(engine.pending_tasks(), 0);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_start_deals_and_arms_clock() {
        let mut engine = GameEngine::default();
        engine.start(Some("easy"), "Ann").unwrap();

        let session = engine.session();
        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.deck().len(), 6);
        assert_eq!(session.total_pairs(), 3);
        assert_eq!(session.player_label(), "Ann");
        assert!(session.clock_handle().is_some());
        assert_eq!(engine.pending_tasks(), 1);
        assert_eq!(engine.session_id(), 1);

        let events: Vec<_> = engine.drain_events().collect();
        assert!(matches!(events[0], GameEvent::DeckReady(ref d) if d.len() == 6));
        assert!(matches!(events[1], GameEvent::StatusChanged(s) if s.total_pairs == 3));
    }

    #[test]
    fn test_start_trims_label_and_difficulty() {
        let mut engine = GameEngine::default();
        engine.start(Some("  Medium "), "  Bo ").unwrap();
        assert_eq!(engine.session().player_label(), "Bo");
        assert_eq!(engine.session().deck().len(), 12);
    }

    #[test]
    fn test_start_rejects_bad_config_without_state_change() {
        let mut engine = running(4);
        let before = engine.session().clone();

        assert_eq!(
            engine.start(None, "Ann"),
            Err(ConfigurationError::MissingDifficulty)
        );
        assert_eq!(
            engine.start(Some("nightmare"), "Ann"),
            Err(ConfigurationError::UnknownDifficulty("nightmare".into()))
        );
        assert_eq!(
            engine.start(Some("easy"), "   "),
            Err(ConfigurationError::EmptyPlayerLabel)
        );

        assert_eq!(engine.session(), &before);
        assert_eq!(engine.pending_tasks(), 1);
        let rejected = engine
            .drain_events()
            .filter(|e| matches!(e, GameEvent::Rejected(Rejection::Start(_))))
            .count();
        assert_eq!(rejected, 3);
    }

    #[test]
    fn test_start_rejects_odd_preset_and_small_alphabet() {
        let config = GameConfig {
            presets: vec![Difficulty::new("odd", 3, 3), Difficulty::new("big", 4, 4)],
            alphabet: vec![Symbol('a'), Symbol('b')],
            ..GameConfig::default()
        };
        let mut engine = GameEngine::new(config, 1);

        assert_eq!(
            engine.start(Some("odd"), "Ann"),
            Err(ConfigurationError::OddCellCount {
                name: "odd",
                cells: 9
            })
        );
        assert_eq!(
            engine.start(Some("big"), "Ann"),
            Err(ConfigurationError::InsufficientSymbols {
                requested: 8,
                available: 2
            })
        );
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.pending_tasks(), 0);
    }

    #[test]
    fn test_first_pick_flips_without_counting_a_move() {
        let mut engine = running(1);
        let (a, _, _) = pair_and_other(&engine);

        assert_eq!(engine.pick(a), PickOutcome::Flipped);
        assert_eq!(engine.session().first_pick(), Some(a));
        assert_eq!(engine.session().move_count(), 0);
        assert_eq!(
            engine.drain_events().collect::<Vec<_>>(),
            vec![GameEvent::CardFlipped {
                id: a,
                face_up: true
            }]
        );
    }

    #[test]
    fn test_matching_pair() {
        let mut engine = running(2);
        let (a, b, _) = pair_and_other(&engine);

        engine.pick(a);
        assert_eq!(engine.pick(b), PickOutcome::Matched);

        let session = engine.session();
        assert_eq!(session.pairs_matched(), 1);
        assert_eq!(session.move_count(), 1);
        assert!(session.first_pick().is_none());
        assert!(session.second_pick().is_none());
        assert!(session.card(a).unwrap().matched);
        assert!(session.card(b).unwrap().matched);
        assert_eq!(session.phase(), Phase::Running);
    }

    #[test]
    fn test_mismatch_locks_until_reveal() {
        let mut engine = running(3);
        let (a, _, c) = pair_and_other(&engine);

        engine.pick(a);
        assert_eq!(engine.pick(c), PickOutcome::Mismatched);
        assert_eq!(engine.phase(), Phase::Locked);
        assert_eq!(engine.session().move_count(), 1);
        assert!(engine.session().pending_reveal().is_some());
        engine.drain_events().for_each(drop);

        engine.advance(599);
        assert_eq!(engine.phase(), Phase::Locked);

        engine.advance(1);
        assert_eq!(engine.phase(), Phase::Running);
        assert!(engine.session().first_pick().is_none());
        assert!(engine.session().second_pick().is_none());
        assert!(engine.session().pending_reveal().is_none());
        assert_eq!(engine.session().pairs_matched(), 0);
        assert_eq!(
            engine.drain_events().collect::<Vec<_>>(),
            vec![
                GameEvent::CardFlipped {
                    id: a,
                    face_up: false
                },
                GameEvent::CardFlipped {
                    id: c,
                    face_up: false
                },
            ]
        );
    }

    #[test]
    fn test_pick_rejections() {
        let mut engine = running(5);
        let (a, b, c) = pair_and_other(&engine);

        assert_eq!(
            engine.pick(CardId(999)),
            PickOutcome::Rejected(RejectReason::UnknownCard)
        );
        engine.pick(a);
        assert_eq!(
            engine.pick(a),
            PickOutcome::Rejected(RejectReason::AlreadyPicked)
        );
        engine.pick(b);
        assert_eq!(
            engine.pick(a),
            PickOutcome::Rejected(RejectReason::AlreadyMatched)
        );

        engine.pick(c);
        let other = engine
            .session()
            .deck()
            .iter()
            .find(|card| !card.matched && card.value != engine.session().card(c).unwrap().value)
            .unwrap()
            .id;
        engine.pick(other);
        assert_eq!(engine.phase(), Phase::Locked);
        assert_eq!(engine.pick(c), PickOutcome::Rejected(RejectReason::Locked));
    }

    #[test]
    fn test_pick_when_idle_is_rejected() {
        let mut engine = GameEngine::default();
        assert_eq!(
            engine.pick(CardId(1)),
            PickOutcome::Rejected(RejectReason::NotRunning(Phase::Idle))
        );
    }

    #[test]
    fn test_clock_counts_seconds() {
        let mut engine = running(6);
        for _ in 0..10 {
            engine.advance(250);
        }
        assert_eq!(engine.session().elapsed_seconds(), 2);
        assert_eq!(engine.now_ms(), 2500);
    }

    #[test]
    fn test_reset_while_locked_cancels_reveal() {
        let mut engine = running(7);
        let (a, _, c) = pair_and_other(&engine);
        engine.pick(a);
        engine.pick(c);
        let reveal = engine.session().pending_reveal().unwrap();
        let (first, second) = (a, c);

        engine.reset();
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.pending_tasks(), 0);

        // A reveal that somehow still fires must not touch the idle session.
        let before = engine.session().clone();
        engine.run_task(reveal, Task::RevealMismatch { first, second });
        assert_eq!(engine.session(), &before);

        engine.advance(10_000);
        assert_eq!(engine.session(), &before);
    }

    #[test]
    fn test_stale_reveal_does_not_unlock_new_session() {
        let mut engine = running(8);
        let (a, _, c) = pair_and_other(&engine);
        engine.pick(a);
        engine.pick(c);
        let stale = engine.session().pending_reveal().unwrap();

        engine.start(Some("easy"), "Ann").unwrap();
        let (x, _, z) = pair_and_other(&engine);
        engine.pick(x);
        engine.pick(z);
        assert_eq!(engine.phase(), Phase::Locked);

        engine.run_task(
            stale,
            Task::RevealMismatch {
                first: a,
                second: c,
            },
        );
        assert_eq!(engine.phase(), Phase::Locked);
    }

    #[test]
    fn test_stale_clock_tick_is_ignored() {
        let mut engine = running(9);
        let old = engine.session().clock_handle().unwrap();
        engine.start(Some("easy"), "Ann").unwrap();

        engine.run_task(old.token(), Task::ClockTick);
        assert_eq!(engine.session().elapsed_seconds(), 0);
        assert_eq!(engine.pending_tasks(), 1);
    }

    #[test]
    fn test_finishing_records_history_and_stops_clock() {
        let mut engine = running(10);
        engine.advance(3000);

        let summary = loop {
            let deck = engine.session().deck().to_vec();
            let a = deck.iter().find(|c| !c.matched).unwrap();
            let b = deck
                .iter()
                .find(|c| c.id != a.id && c.value == a.value)
                .unwrap();
            engine.pick(a.id);
            if let PickOutcome::Finished(summary) = engine.pick(b.id) {
                break summary;
            }
        };

        assert_eq!(engine.phase(), Phase::Finished);
        assert_eq!(summary.pairs_matched, 3);
        assert_eq!(summary.move_count, 3);
        assert_eq!(summary.elapsed_seconds, 3);
        assert_eq!(summary.difficulty, "easy");
        assert_eq!(engine.history().latest(), Some(&summary));
        assert_eq!(engine.pending_tasks(), 0);

        engine.advance(5000);
        assert_eq!(engine.session().elapsed_seconds(), 3);

        let events: Vec<_> = engine.drain_events().collect();
        assert!(events.contains(&GameEvent::SessionFinished(summary.clone())));
        assert!(events.contains(&GameEvent::HistoryChanged(vec![summary])));
        assert_eq!(
            engine.pick(CardId(1)),
            PickOutcome::Rejected(RejectReason::NotRunning(Phase::Finished))
        );
    }

    #[test]
    fn test_request_restart_keeps_player() {
        let mut engine = running(11);
        engine.request_restart(Some("hard")).unwrap();
        assert_eq!(engine.session().player_label(), "Ann");
        assert_eq!(engine.session().deck().len(), 16);
        assert_eq!(engine.session_id(), 2);
        assert_eq!(engine.pending_tasks(), 1);
    }

    #[test]
    fn test_request_restart_from_idle_needs_a_player() {
        let mut engine = GameEngine::default();
        assert_eq!(
            engine.request_restart(Some("easy")),
            Err(ConfigurationError::EmptyPlayerLabel)
        );
    }

    #[test]
    fn test_zero_reveal_delay_fires_on_next_advance() {
        let mut engine = GameEngine::new(GameConfig::default().with_mismatch_reveal_ms(0), 12);
        engine.start(Some("easy"), "Ann").unwrap();
        let (a, _, c) = pair_and_other(&engine);
        engine.pick(a);
        engine.pick(c);
        assert_eq!(engine.phase(), Phase::Locked);
        engine.advance(0);
        assert_eq!(engine.phase(), Phase::Running);
    }

    #[test]
    fn test_snapshot_reflects_face_up_cards() {
        let mut engine = running(13);
        let (a, _, _) = pair_and_other(&engine);
        engine.pick(a);

        let snap = engine.snapshot();
        assert_eq!(snap.phase, Phase::Running);
        assert_eq!((snap.columns, snap.rows), (2, 3));
        assert_eq!(snap.player_label, "Ann");
        assert_eq!(snap.difficulty, Some("easy"));
        let up: Vec<CardId> = snap.cards.iter().filter(|c| c.face_up).map(|c| c.id).collect();
        assert_eq!(up, vec![a]);
    }

    fn play_out(engine: &mut GameEngine, label: &str) {
        engine.start(Some("easy"), label).unwrap();
        let deck = engine.session().deck().to_vec();
        for (i, a) in deck.iter().enumerate() {
            if let Some(b) = deck[i + 1..].iter().find(|b| b.value == a.value) {
                engine.pick(a.id);
                engine.pick(b.id);
            }
        }
        assert_eq!(engine.phase(), Phase::Finished);
    }

    #[test]
    fn test_snapshot_history_tracks_log_when_reused() {
        let mut engine = GameEngine::new(GameConfig::default(), 21);
        let mut snap = SessionSnapshot::default();

        play_out(&mut engine, "Ann");
        engine.snapshot_into(&mut snap);
        let label_buf = snap.history[0].player_label.as_ptr();
        engine.snapshot_into(&mut snap);
        assert_eq!(snap.history[0].player_label.as_ptr(), label_buf);

        play_out(&mut engine, "Bo");
        engine.snapshot_into(&mut snap);
        let expected: Vec<SessionSummary> = engine.history().iter().cloned().collect();
        assert_eq!(snap.history, expected);
        assert_eq!(snap.history[0].player_label, "Bo");

        engine.reset();
        engine.snapshot_into(&mut snap);
        assert_eq!(snap.history.len(), 2);
        assert!(snap.cards.is_empty());
    }
}
