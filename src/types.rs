use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{BoardRecord, MoveRecord};

/// Side owning a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceClass {
    Man,
    King,
}

/// Occupant of a square. Owner and class are always set together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub player: Player,
    pub class: PieceClass,
}

impl Piece {
    pub const fn new(player: Player, class: PieceClass) -> Self {
        Self { player, class }
    }

    pub fn is_king(self) -> bool {
        self.class == PieceClass::King
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReason {
    WhiteWon,
    BlackWon,
    Draw,
}

impl GameOverReason {
    /// Outcome when `player` is the one left without a move.
    pub fn loss_for(player: Player) -> Self {
        match player {
            Player::White => Self::BlackWon,
            Player::Black => Self::WhiteWon,
        }
    }
}

/// Snapshot of a game session handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: BoardRecord,
    pub turn: Player,
    /// `None` while the game is still in progress.
    pub game_over: Option<GameOverReason>,
    /// Contract:
    /// - `None` before the first move.
    /// - Otherwise the move that produced `board`.
    pub last_move: Option<MoveRecord>,
    pub move_count: usize,
}
