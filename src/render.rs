use std::fmt;

use serde::Serialize;

use crate::board::Board;
use crate::types::{BOARD_WIDTH, Cell, Position};

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

/// Board diagram with `A..H` across the top and `1..8` down the side.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from(" ");
    for col in 0..BOARD_WIDTH as u8 {
        out.push(' ');
        out.push((b'A' + col) as char);
    }
    out.push('\n');

    for (row, line) in board.to_grid().iter().enumerate() {
        out.push_str(&(row + 1).to_string());
        for cell in line {
            out.push(' ');
            out.push(cell.symbol());
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

/// `"<cursor> / <total>"` progress label.
pub fn move_info(cursor: usize, total: usize) -> String {
    format!("{cursor} / {total}")
}

/// Cell label with its occupant, e.g. `"B: F5"`; `None` for empty squares.
pub fn disc_label(board: &Board, pos: Position) -> Option<String> {
    match board.cell(pos) {
        Cell::Empty => None,
        cell => Some(format!("{}: {}", cell.symbol(), pos.notation())),
    }
}

/// Which navigation buttons are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavState {
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
}

impl NavState {
    pub fn new(cursor: usize, total: usize) -> Self {
        let can_back = cursor > 0;
        let can_forward = cursor < total;
        Self {
            first: can_back,
            previous: can_back,
            next: can_forward,
            last: can_forward,
        }
    }
}
