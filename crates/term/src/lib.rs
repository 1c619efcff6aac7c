//! Terminal presentation for the memory game.
//!
//! Renders core snapshots into a simple framebuffer that can be flushed to a
//! terminal backend, without a widget/layout library.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so layouts can be asserted on in tests
//! - Only push changed cells to the terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use fb::{BoxGlyphs, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, Hud, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
