use tracing::{debug, warn};

use crate::board::{Board, bitmask_to_indices};
use crate::notation::parse_move;
use crate::types::{MoveWarning, Player, Position, ReplayState};

/// Board reconstructed from the first `move_index` plies of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub board: Board,
    pub next_player: Player,
    pub move_index: usize,
    pub total_moves: usize,
    pub last_move: Option<Position>,
    /// Flipped mask of `last_move`.
    pub flipped: u64,
    pub warnings: Vec<MoveWarning>,
}

impl ReplayOutcome {
    pub fn to_state(&self) -> ReplayState {
        let (black_count, white_count) = self.board.count();
        ReplayState {
            board: self.board.to_array().to_vec(),
            next_player: self.next_player,
            move_index: self.move_index,
            total_moves: self.total_moves,
            black_count,
            white_count,
            last_move: self.last_move,
            flipped: bitmask_to_indices(self.flipped),
            warnings: self.warnings.clone(),
        }
    }
}

/// Player to move after `n` plies. Skipped plies still count.
pub fn player_at(n: usize) -> Player {
    if n % 2 == 0 {
        Player::Black
    } else {
        Player::White
    }
}

/// Clamps a requested cursor into `0..=len`.
pub fn clamp_cursor(target: i64, len: usize) -> usize {
    if target <= 0 {
        0
    } else {
        usize::try_from(target).map_or(len, |t| t.min(len))
    }
}

/// Rebuilds the board from the start position through `upto` plies.
///
/// Malformed tokens and plies onto occupied squares are skipped and reported in
/// `warnings`; the turn still passes to the other side.
pub fn replay<S: AsRef<str>>(moves: &[S], upto: i64) -> ReplayOutcome {
    let move_index = clamp_cursor(upto, moves.len());
    let mut board = Board::new();
    let mut player = Player::Black;
    let mut last_move = None;
    let mut flipped = 0u64;
    let mut warnings = Vec::new();

    for (index, notation) in moves[..move_index].iter().enumerate() {
        let notation: &str = notation.as_ref();
        let applied = parse_move(notation).and_then(|pos| {
            let flips = board.place(pos, player)?;
            Ok((pos, flips))
        });

        match applied {
            Ok((pos, flips)) => {
                last_move = Some(pos);
                flipped = flips;
            }
            Err(err) => {
                warn!(index, notation, %err, "skipping move during replay");
                last_move = None;
                flipped = 0;
                warnings.push(MoveWarning {
                    index,
                    notation: notation.to_string(),
                    reason: err.to_string(),
                });
            }
        }

        player = player.opponent();
    }

    ReplayOutcome {
        board,
        next_player: player,
        move_index,
        total_moves: moves.len(),
        last_move,
        flipped,
        warnings,
    }
}

/// Navigation state over one record's move list.
///
/// Every navigation call consumes the session and returns the moved session
/// together with a fresh `replay` of its cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    moves: Vec<String>,
    cursor: usize,
}

impl Session {
    pub fn new(moves: Vec<String>) -> Self {
        Self { moves, cursor: 0 }
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_moves(&self) -> usize {
        self.moves.len()
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.moves.len()
    }

    /// Replays the current cursor without moving it.
    pub fn outcome(&self) -> ReplayOutcome {
        replay(&self.moves, self.cursor as i64)
    }

    pub fn seek(self, target: i64) -> (Self, ReplayOutcome) {
        let cursor = clamp_cursor(target, self.moves.len());
        debug!(target, cursor, total = self.moves.len(), "seek");
        let next = Self { cursor, ..self };
        let outcome = next.outcome();
        (next, outcome)
    }

    pub fn first(self) -> (Self, ReplayOutcome) {
        self.seek(0)
    }

    pub fn previous(self) -> (Self, ReplayOutcome) {
        let target = self.cursor as i64 - 1;
        self.seek(target)
    }

    pub fn next(self) -> (Self, ReplayOutcome) {
        let target = self.cursor as i64 + 1;
        self.seek(target)
    }

    pub fn last(self) -> (Self, ReplayOutcome) {
        let target = self.moves.len() as i64;
        self.seek(target)
    }
}
