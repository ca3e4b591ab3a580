pub mod board;
pub mod capture;
pub mod codec;
pub mod error;
pub mod game;
pub mod geometry;
pub mod moves;
pub mod types;
pub mod wasm;

#[cfg(test)]
mod fixtures;

pub use board::Board;
pub use error::{Error, Result};
pub use game::Game;
pub use moves::{CaptureMove, ComboCaptureMove, Move, SimpleMove};
pub use types::{GameOverReason, GameState, Piece, PieceClass, Player};
