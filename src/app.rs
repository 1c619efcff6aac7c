//! Headless presentation controller.
//!
//! [`App`] owns the engine, the board cursor and a reusable snapshot. Key
//! presses arrive as [`GameAction`]s; frames arrive as elapsed milliseconds.
//! Engine notifications are drained after every call and turned into log lines
//! and a short-lived status message for the terminal view.

use tracing::{debug, info};

use crate::core::{GameEngine, GameEvent, PickOutcome, Rejection, SessionSnapshot};
use crate::input::BoardCursor;
use crate::term::Hud;
use crate::types::{GameAction, Phase, MESSAGE_TTL_MS};

/// Player label and difficulty used when a session is started from idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub player: String,
    pub difficulty: String,
}

#[derive(Debug, Clone)]
struct Message {
    text: String,
    ttl_ms: u32,
}

#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    settings: Settings,
    cursor: BoardCursor,
    snapshot: SessionSnapshot,
    message: Option<Message>,
}

impl App {
    pub fn new(engine: GameEngine, settings: Settings) -> Self {
        Self {
            engine,
            settings,
            cursor: BoardCursor::default(),
            snapshot: SessionSnapshot::default(),
            message: None,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cursor(&self) -> BoardCursor {
        self.cursor
    }

    /// Text currently shown in the message bar.
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }

    /// Start a session from the stored settings.
    pub fn start(&mut self) {
        let Settings { player, difficulty } = &self.settings;
        // Failures are queued as a Rejected event and surface as a message.
        let _ = self.engine.start(Some(difficulty.as_str()), player);
        self.process_events();
    }

    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::MoveCursor(direction) => {
                if let Some(d) = self.engine.session().difficulty() {
                    self.cursor.step(direction, d.columns, d.rows);
                }
            }
            GameAction::Flip => self.flip(),
            GameAction::Restart => self.restart(None),
            GameAction::RestartPreset(index) => {
                let name = self.engine.config().presets.get(index).map(|d| d.name);
                match name {
                    Some(name) => {
                        self.settings.difficulty = name.to_string();
                        self.restart(Some(name));
                    }
                    None => self.show(format!("no preset {}", index + 1)),
                }
            }
            GameAction::NewSession => {
                if self.engine.phase().is_live() {
                    self.show("game in progress, r restarts".to_string());
                } else {
                    self.start();
                }
            }
            GameAction::Reset => {
                self.engine.reset();
                self.process_events();
            }
        }
    }

    /// Advance game time by one frame.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.engine.advance(elapsed_ms);
        if let Some(message) = self.message.as_mut() {
            message.ttl_ms = message.ttl_ms.saturating_sub(elapsed_ms);
            if message.ttl_ms == 0 {
                self.message = None;
            }
        }
        self.process_events();
    }

    /// Refresh the cached snapshot from the engine.
    pub fn refresh(&mut self) {
        self.engine.snapshot_into(&mut self.snapshot);
    }

    /// Snapshot as of the last [`App::refresh`].
    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    pub fn hud(&self) -> Hud<'_> {
        let cursor = self
            .engine
            .phase()
            .is_live()
            .then_some((self.cursor.column, self.cursor.row));
        Hud {
            cursor,
            message: self.message(),
        }
    }

    fn flip(&mut self) {
        let Some(d) = self.engine.session().difficulty() else {
            self.show("press n to start".to_string());
            return;
        };
        let index = self.cursor.index(d.columns);
        let Some(id) = self.engine.session().deck().get(index).map(|c| c.id) else {
            return;
        };
        if let PickOutcome::Finished(summary) = self.engine.pick(id) {
            self.show(format!(
                "{} finished {} in {} moves, {}s",
                summary.player_label,
                summary.difficulty,
                summary.move_count,
                summary.elapsed_seconds
            ));
        }
        self.process_events();
    }

    fn restart(&mut self, difficulty: Option<&str>) {
        if self.engine.phase() == Phase::Idle {
            if let Some(name) = difficulty {
                self.settings.difficulty = name.to_string();
            }
            self.start();
            return;
        }
        let current = self.engine.session().difficulty().map(|d| d.name);
        let _ = self.engine.request_restart(difficulty.or(current));
        self.process_events();
    }

    fn show(&mut self, text: String) {
        self.message = Some(Message {
            text,
            ttl_ms: MESSAGE_TTL_MS,
        });
    }

    fn process_events(&mut self) {
        let events: Vec<GameEvent> = self.engine.drain_events().collect();
        for event in events {
            match event {
                GameEvent::DeckReady(cards) => {
                    self.cursor = BoardCursor::default();
                    debug!(cards = cards.len(), "deck ready");
                }
                GameEvent::SessionFinished(summary) => {
                    debug!(
                        player = %summary.player_label,
                        difficulty = summary.difficulty,
                        moves = summary.move_count,
                        seconds = summary.elapsed_seconds,
                        "session finished"
                    );
                }
                GameEvent::HistoryChanged(entries) => {
                    debug!(entries = entries.len(), "history changed");
                }
                GameEvent::Rejected(Rejection::Pick(reason)) => {
                    self.show(reason.as_str().to_string());
                }
                GameEvent::Rejected(rejection @ Rejection::Start(_)) => {
                    info!(%rejection, "start refused");
                    self.show(rejection.to_string());
                }
                GameEvent::SessionReset => {
                    self.cursor = BoardCursor::default();
                }
                GameEvent::CardFlipped { .. } | GameEvent::StatusChanged(_) => {}
            }
        }
    }
}
