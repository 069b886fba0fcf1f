use wasm_bindgen::prelude::*;

pub mod autoplay;
pub mod board;
pub mod config;
pub mod error;
pub mod notation;
pub mod render;
pub mod replay;
pub mod store;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use error::{ReplayError, StoreError};
pub use notation::parse_move;
pub use replay::{ReplayOutcome, Session, player_at, replay};
pub use types::{Cell, Player, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
