use crate::types::{CardId, Phase, SessionSummary, Status, Symbol};

/// Renderable view of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardView {
    pub id: CardId,
    pub value: Symbol,
    pub face_up: bool,
    pub matched: bool,
}

/// Everything a renderer needs, detached from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub session_id: u32,
    pub player_label: String,
    pub difficulty: Option<&'static str>,
    pub columns: u8,
    pub rows: u8,
    /// Board order, row-major.
    pub cards: Vec<CardView>,
    pub status: Status,
    /// Most recent first.
    pub history: Vec<SessionSummary>,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.phase = Phase::Idle;
        self.session_id = 0;
        self.player_label.clear();
        self.difficulty = None;
        self.columns = 0;
        self.rows = 0;
        self.cards.clear();
        self.status = Status::default();
        self.history.clear();
    }

    /// Card at a grid position, if the board has one there.
    pub fn card_at(&self, column: u8, row: u8) -> Option<&CardView> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        let idx = row as usize * self.columns as usize + column as usize;
        self.cards.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32) -> CardView {
        CardView {
            id: CardId(id),
            value: Symbol('x'),
            face_up: false,
            matched: false,
        }
    }

    #[test]
    fn card_at_is_row_major() {
        let snap = SessionSnapshot {
            columns: 3,
            rows: 2,
            cards: (1..=6).map(card).collect(),
            ..Default::default()
        };
        assert_eq!(snap.card_at(0, 0).map(|c| c.id), Some(CardId(1)));
        assert_eq!(snap.card_at(2, 0).map(|c| c.id), Some(CardId(3)));
        assert_eq!(snap.card_at(0, 1).map(|c| c.id), Some(CardId(4)));
        assert!(snap.card_at(3, 0).is_none());
        assert!(snap.card_at(0, 2).is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut snap = SessionSnapshot {
            phase: Phase::Running,
            player_label: "Ann".into(),
            columns: 2,
            rows: 1,
            cards: vec![card(1), card(2)],
            ..Default::default()
        };
        snap.clear();
        assert_eq!(snap, SessionSnapshot::default());
    }
}
