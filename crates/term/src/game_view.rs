//! GameView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CardView, SessionSnapshot};
use crate::fb::{BoxGlyphs, CellStyle, FrameBuffer, Rgb};
use crate::types::Phase;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Presentation-only state layered over the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud<'a> {
    /// Highlighted grid cell as `(column, row)`.
    pub cursor: Option<(u8, u8)>,
    /// One-line message shown instead of the key help.
    pub message: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Width of the side panel, including its left gap.
const PANEL_W: u16 = 30;
/// Board area used when there is no deck to lay out.
const IDLE_BOARD_W: u16 = 31;
const IDLE_BOARD_H: u16 = 7;
const HISTORY_NAME_W: usize = 8;
const KEY_HELP: &str = "←↑↓→ move  space flip  r restart  1-3 level  n new  x reset  q quit";

const BG: Rgb = Rgb::new(0, 0, 0);
const TABLE_BG: Rgb = Rgb::new(20, 40, 30);

/// Screen geometry of the board frame for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    card_w: u16,
    card_h: u16,
    gap: u16,
}

impl BoardLayout {
    /// Top-left terminal cell of the card at a grid position.
    pub fn card_origin(&self, column: u8, row: u8) -> (u16, u16) {
        let x = self.frame_x + 2 + column as u16 * (self.card_w + self.gap);
        let y = self.frame_y + 1 + row as u16 * (self.card_h + self.gap / 2);
        (x, y)
    }
}

/// A lightweight terminal renderer for the memory board.
pub struct GameView {
    /// Card width in terminal columns (including its border).
    card_w: u16,
    /// Card height in terminal rows (including its border).
    card_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps a card roughly square on typical terminal glyphs.
        Self {
            card_w: 7,
            card_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w: card_w.max(3),
            card_h: card_h.max(3),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the board frame lands for this snapshot and viewport.
    pub fn layout(&self, snap: &SessionSnapshot, viewport: Viewport) -> BoardLayout {
        let gap = 2;
        let (inner_w, inner_h) = if snap.cards.is_empty() || snap.columns == 0 {
            (IDLE_BOARD_W, IDLE_BOARD_H)
        } else {
            let cols = snap.columns as u16;
            let rows = snap.rows as u16;
            (
                cols * self.card_w + (cols - 1) * gap + 2,
                rows * self.card_h + (rows - 1) * (gap / 2),
            )
        };
        let frame_w = inner_w + 2;
        let frame_h = inner_h + 2;

        let total_w = if viewport.width >= frame_w + PANEL_W {
            frame_w + PANEL_W
        } else {
            frame_w
        };
        let frame_x = viewport.width.saturating_sub(total_w) / 2;
        // Keep the last row free for the message bar.
        let usable_h = viewport.height.saturating_sub(1);
        let frame_y = match self.anchor_y {
            AnchorY::Center => usable_h.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            card_w: self.card_w,
            card_h: self.card_h,
            gap,
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        hud: &Hud<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap, viewport);
        let table = CellStyle::new(Rgb::new(90, 110, 100), TABLE_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), BG);

        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            table,
        );
        fb.draw_box(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            BoxGlyphs::LIGHT,
            border,
        );
        fb.put_str(layout.frame_x + 2, layout.frame_y, " MEMORY ", border.bold());

        if snap.cards.is_empty() {
            self.draw_idle_prompt(fb, &layout);
        } else {
            for row in 0..snap.rows {
                for column in 0..snap.columns {
                    if let Some(card) = snap.card_at(column, row) {
                        let (x, y) = layout.card_origin(column, row);
                        let selected = hud.cursor == Some((column, row));
                        self.draw_card(fb, x, y, card, selected);
                    }
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if snap.phase == Phase::Finished {
            self.draw_overlay_text(fb, &layout, "FINISHED - press r");
        }

        let bar_y = viewport.height.saturating_sub(1);
        match hud.message {
            Some(msg) => {
                let style = CellStyle::new(Rgb::new(255, 210, 90), BG).bold();
                fb.put_str(0, bar_y, msg, style);
            }
            None => {
                let style = CellStyle::new(Rgb::new(140, 140, 140), BG).dim();
                fb.put_str(0, bar_y, KEY_HELP, style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: &CardView, selected: bool) {
        let (edge, face, glyph) = if card.matched {
            (
                CellStyle::new(Rgb::new(90, 180, 110), TABLE_BG).dim(),
                CellStyle::new(Rgb::new(120, 230, 140), Rgb::new(30, 60, 40)),
                card.value.as_char(),
            )
        } else if card.face_up {
            (
                CellStyle::new(Rgb::new(240, 240, 240), TABLE_BG),
                CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(230, 230, 220)).bold(),
                card.value.as_char(),
            )
        } else {
            (
                CellStyle::new(Rgb::new(110, 130, 170), TABLE_BG),
                CellStyle::new(Rgb::new(70, 90, 150), Rgb::new(35, 45, 80)),
                '░',
            )
        };

        let (glyphs, edge) = if selected {
            (
                BoxGlyphs::HEAVY,
                CellStyle::new(Rgb::new(255, 210, 90), TABLE_BG).bold(),
            )
        } else {
            (BoxGlyphs::LIGHT, edge)
        };

        let inner_w = self.card_w - 2;
        let inner_h = self.card_h - 2;
        let fill = if card.face_up || card.matched { ' ' } else { '░' };
        fb.fill_rect(x + 1, y + 1, inner_w, inner_h, fill, face);
        fb.put_char(x + self.card_w / 2, y + self.card_h / 2, glyph, face);
        fb.draw_box(x, y, self.card_w, self.card_h, glyphs, edge);
    }

    fn draw_idle_prompt(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let title = CellStyle::new(Rgb::new(240, 240, 240), TABLE_BG).bold();
        let hint = CellStyle::new(Rgb::new(180, 200, 190), TABLE_BG);
        let x = layout.frame_x + 1;
        let w = layout.frame_w - 2;
        let y = layout.frame_y + 2;
        fb.put_str_centered(x, y, w, "No game in progress", title);
        fb.put_str_centered(x, y + 2, w, "n  new game", hint);
        fb.put_str_centered(x, y + 3, w, "1/2/3  easy/medium/hard", hint);
        fb.put_str_centered(x, y + 4, w, "q  quit", hint);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout.frame_x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x.saturating_add(PANEL_W - 2) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let dim = value.dim();

        let mut y = layout.frame_y;
        fb.put_str(panel_x, y, "PLAYER", label);
        y += 1;
        if snap.player_label.is_empty() {
            fb.put_str(panel_x, y, "-", value);
        } else {
            fb.put_str(panel_x, y, &snap.player_label, value);
        }
        y += 2;

        fb.put_str(panel_x, y, "LEVEL", label);
        y += 1;
        match snap.difficulty {
            Some(name) => {
                let end = fb.put_str(panel_x, y, name, value);
                let end = fb.put_u32(end + 1, y, snap.columns as u32, dim);
                let end = fb.put_str(end, y, "x", dim);
                fb.put_u32(end, y, snap.rows as u32, dim);
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
            }
        }
        y += 2;

        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_str(panel_x + 8, y, "PAIRS", label);
        fb.put_str(panel_x + 16, y, "TIME", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.status.move_count, value);
        let end = fb.put_u32(panel_x + 8, y, snap.status.pairs_matched, value);
        let end = fb.put_str(end, y, "/", dim);
        fb.put_u32(end, y, snap.status.total_pairs, dim);
        put_clock(fb, panel_x + 16, y, snap.status.elapsed_seconds, value);
        y += 2;

        fb.put_str(panel_x, y, "HISTORY", label);
        y += 1;
        if snap.history.is_empty() {
            fb.put_str(panel_x, y, "no finished games", dim);
            return;
        }
        for (i, entry) in snap.history.iter().enumerate() {
            if y >= viewport.height.saturating_sub(1) {
                break;
            }
            let rank = if i == 0 { value.bold() } else { value };
            fb.put_u32(panel_x, y, i as u32 + 1, dim);
            let name_x = panel_x + 2;
            for (dx, ch) in entry.player_label.chars().take(HISTORY_NAME_W).enumerate() {
                fb.put_char(name_x + dx as u16, y, ch, rank);
            }
            let x = name_x + HISTORY_NAME_W as u16 + 1;
            fb.put_str(x, y, entry.difficulty, dim);
            fb.put_u32(x + 7, y, entry.move_count, rank);
            put_clock(fb, x + 11, y, entry.elapsed_seconds, rank);
            y += 1;
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) {
        let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
        fb.put_str_centered(layout.frame_x, mid_y, layout.frame_w, text, style);
    }
}

/// Write seconds as `m:ss`; returns the column after it.
fn put_clock(fb: &mut FrameBuffer, x: u16, y: u16, seconds: u32, style: CellStyle) -> u16 {
    let end = fb.put_u32(x, y, seconds / 60, style);
    fb.put_char(end, y, ':', style);
    let secs = seconds % 60;
    let mut x = end + 1;
    if secs < 10 {
        fb.put_char(x, y, '0', style);
        x += 1;
    }
    fb.put_u32(x, y, secs, style)
}
