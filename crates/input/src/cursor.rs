//! Board cursor: which grid cell a flip applies to.

use crate::types::Direction;

/// Grid position, clamped to the current board and wrapping at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardCursor {
    pub column: u8,
    pub row: u8,
}

impl BoardCursor {
    pub fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// Move one cell, wrapping around the board edges.
    ///
    /// A zero-sized board leaves the cursor at the origin.
    pub fn step(&mut self, direction: Direction, columns: u8, rows: u8) {
        if columns == 0 || rows == 0 {
            *self = Self::default();
            return;
        }
        self.clamp(columns, rows);
        match direction {
            Direction::Left => self.column = wrap_dec(self.column, columns),
            Direction::Right => self.column = wrap_inc(self.column, columns),
            Direction::Up => self.row = wrap_dec(self.row, rows),
            Direction::Down => self.row = wrap_inc(self.row, rows),
        }
    }

    /// Pull the cursor back inside a (possibly smaller) board.
    pub fn clamp(&mut self, columns: u8, rows: u8) {
        self.column = self.column.min(columns.saturating_sub(1));
        self.row = self.row.min(rows.saturating_sub(1));
    }

    /// Row-major index into the board.
    pub fn index(&self, columns: u8) -> usize {
        self.row as usize * columns as usize + self.column as usize
    }
}

fn wrap_dec(v: u8, len: u8) -> u8 {
    if v == 0 {
        len - 1
    } else {
        v - 1
    }
}

fn wrap_inc(v: u8, len: u8) -> u8 {
    if v + 1 >= len {
        0
    } else {
        v + 1
    }
}
