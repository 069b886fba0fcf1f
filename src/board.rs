use crate::error::ReplayError;
use crate::types::{BOARD_LEN, BOARD_WIDTH, Cell, Player, Position};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Reversi board state represented by two bitboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// Places one disc for `player` and flips every bracketed run.
    ///
    /// Returns the flipped bit mask. A placement that brackets nothing is still
    /// accepted and returns 0, so records that are not rule-legal can be replayed.
    /// An occupied target is rejected and the board is left untouched.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<u64, ReplayError> {
        let index = pos.index();
        let move_bit = bit(index);
        if ((self.black | self.white) & move_bit) != 0 {
            return Err(ReplayError::OccupiedCell { position: pos });
        }

        let (me, opp) = self.sides(player);
        let flips = Self::collect_flips(index, me, opp);
        let next_me = me | move_bit | flips;
        let next_opp = opp & !flips;

        match player {
            Player::Black => {
                self.black = next_me;
                self.white = next_opp;
            }
            Player::White => {
                self.white = next_me;
                self.black = next_opp;
            }
        }

        Ok(flips)
    }

    pub fn cell(&self, pos: Position) -> Cell {
        let square = bit(pos.index());
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        BOARD_LEN as u8 - black_count - white_count
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; BOARD_LEN] {
        let mut board = [0u8; BOARD_LEN];
        for (index, cell) in board.iter_mut().enumerate() {
            *cell = self.cell_at(index).code();
        }
        board
    }

    /// Row-major grid view.
    pub fn to_grid(&self) -> [[Cell; BOARD_WIDTH]; BOARD_WIDTH] {
        let mut grid = [[Cell::Empty; BOARD_WIDTH]; BOARD_WIDTH];
        for (row, line) in grid.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = self.cell_at(row * BOARD_WIDTH + col);
            }
        }
        grid
    }

    fn cell_at(&self, index: usize) -> Cell {
        match Position::from_index(index) {
            Some(pos) => self.cell(pos),
            None => Cell::Empty,
        }
    }

    fn sides(&self, player: Player) -> (u64, u64) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }

    // Each ray reads only the pre-move `me`/`opp` masks.
    fn collect_flips(pos: usize, me: u64, opp: u64) -> u64 {
        let (row, col) = pos_to_row_col(pos);
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let mut r = row + dr;
            let mut c = col + dc;
            let mut line = 0u64;

            while in_bounds(r, c) {
                let square = bit((r as usize) * BOARD_WIDTH + c as usize);
                if (opp & square) != 0 {
                    line |= square;
                } else if (me & square) != 0 {
                    flips |= line;
                    break;
                } else {
                    break;
                }

                r += dr;
                c += dc;
            }
        }

        flips
    }

    #[cfg(test)]
    pub(crate) fn from_bitboards(black: u64, white: u64) -> Self {
        debug_assert_eq!(black & white, 0);
        Self { black, white }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Expands a bit mask into ascending square indices.
pub fn bitmask_to_indices(mask: u64) -> Vec<u8> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        let idx = bits.trailing_zeros() as u8;
        out.push(idx);
        bits &= bits - 1;
    }

    out
}

fn bit(pos: usize) -> u64 {
    if pos < BOARD_LEN { 1u64 << pos } else { 0 }
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_WIDTH) as i32, (pos % BOARD_WIDTH) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_WIDTH as i32).contains(&row) && (0..BOARD_WIDTH as i32).contains(&col)
}
