use serde::{Deserialize, Serialize};

pub const BOARD_WIDTH: usize = 8;
pub const BOARD_LEN: usize = BOARD_WIDTH * BOARD_WIDTH;

/// A board coordinate, zero-based. `row` follows the notation digit, `col` the letter.
/// Always on the board: every constructor range-checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = String;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col)
            .ok_or_else(|| format!("position ({}, {}) is off the board", raw.row, raw.col))
    }
}

impl Position {
    /// Returns `None` when either coordinate is outside the 8x8 grid.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_WIDTH && (col as usize) < BOARD_WIDTH {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_LEN {
            Some(Self {
                row: (index / BOARD_WIDTH) as u8,
                col: (index % BOARD_WIDTH) as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn index(self) -> usize {
        (self.row as usize) * BOARD_WIDTH + self.col as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// Contents of one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Wire encoding used by `ReplayState::board`: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A ply that replay skipped, kept for display alongside the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveWarning {
    /// Zero-based index into the move list.
    pub index: usize,
    pub notation: String,
    pub reason: String,
}

/// Public replay state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayState {
    pub board: Vec<u8>,
    pub next_player: Player,
    pub move_index: usize,
    pub total_moves: usize,
    pub black_count: u8,
    pub white_count: u8,
    /// Contract:
    /// - The ply at `move_index - 1` when it was applied.
    /// - `None` at the start position or when that ply was skipped.
    pub last_move: Option<Position>,
    /// Squares (0..=63) flipped by `last_move`; empty when `last_move` is `None`.
    pub flipped: Vec<u8>,
    pub warnings: Vec<MoveWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_index_round_trips_through_from_index() {
        for index in 0..BOARD_LEN {
            let pos = Position::from_index(index).unwrap();
            assert_eq!(pos.index(), index);
        }
        assert_eq!(Position::from_index(BOARD_LEN), None);
    }

    #[test]
    fn position_new_rejects_out_of_range() {
        assert_eq!(Position::new(7, 7), Position::from_index(63));
        assert_eq!(Position::new(8, 0), None);
        assert_eq!(Position::new(0, 8), None);
    }

    #[test]
    fn deserialized_position_is_range_checked() {
        let pos: Position = serde_json::from_str(r#"{"row":4,"col":5}"#).unwrap();
        assert_eq!((pos.row(), pos.col()), (4, 5));

        assert!(serde_json::from_str::<Position>(r#"{"row":8,"col":3}"#).is_err());
        assert!(serde_json::from_str::<Position>(r#"{"row":0,"col":200}"#).is_err());
    }

    #[test]
    fn opponent_alternates() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }
}
