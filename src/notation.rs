use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::ReplayError;
use crate::types::{BOARD_LEN, BOARD_WIDTH, Position};

static LABELS: Lazy<Vec<String>> = Lazy::new(|| {
    (0..BOARD_LEN)
        .map(|index| {
            let col = (b'A' + (index % BOARD_WIDTH) as u8) as char;
            format!("{col}{}", index / BOARD_WIDTH + 1)
        })
        .collect()
});

/// Parses a move token such as `"F5"` into a zero-based position.
///
/// The letter is case-sensitive (`A`..=`H`) and must be followed by exactly
/// one digit `1`..=`8`.
pub fn parse_move(notation: &str) -> Result<Position, ReplayError> {
    let invalid = || ReplayError::InvalidNotation {
        notation: notation.to_string(),
    };

    let mut chars = notation.chars();
    let letter = chars.next().ok_or_else(invalid)?;
    if !('A'..='H').contains(&letter) {
        return Err(invalid());
    }
    let col = letter as u8 - b'A';

    let row = match chars.as_str().as_bytes() {
        [digit @ b'1'..=b'8'] => digit - b'1',
        _ => return Err(invalid()),
    };

    Position::new(row, col).ok_or_else(invalid)
}

impl Position {
    /// Canonical notation, e.g. `"F5"` for row 4, col 5.
    pub fn notation(self) -> &'static str {
        &LABELS[self.index()]
    }
}

impl FromStr for Position {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}
