use thiserror::Error;

use crate::types::Position;

/// Per-ply failures. Replay recovers from both locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// Token is not a letter A-H followed by a single digit 1-8.
    #[error("invalid move notation: {notation:?}")]
    InvalidNotation { notation: String },

    /// Target square already holds a disc.
    #[error("cell {position} is already occupied")]
    OccupiedCell { position: Position },
}

/// Errors raised while loading or querying a game record store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown folder: {path}")]
    UnknownFolder { path: String },

    #[error("kifu #{index} not found in {path}")]
    KifuNotFound { path: String, index: usize },
}
