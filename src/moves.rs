use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::codec::MoveRecord;
use crate::error::{Error, Result};
use crate::geometry::{indexes_between, is_valid_square};
use crate::types::Player;

/// Non-capturing slide along a diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleMove {
    pub start: usize,
    pub end: usize,
}

impl SimpleMove {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the board after the move. `board` itself is never modified.
    pub fn apply(&self, board: &Board) -> Result<Board> {
        check_squares(self.start, self.end)?;
        let Some(piece) = board.piece(self.start) else {
            return Err(empty_start(self.start));
        };
        if !board.is_empty(self.end) {
            return Err(occupied_end(self.end));
        }

        let is_backward = match piece.player {
            Player::White => self.end > self.start,
            Player::Black => self.end < self.start,
        };
        if is_backward && !piece.is_king() {
            return Err(Error::invalid_move(
                "cannot freely move backwards unless the piece is a king",
            ));
        }

        let path = indexes_between(self.start, self.end)?;
        if let Some(blocker) = path.iter().find(|&&index| !board.is_empty(index)) {
            return Err(Error::InvalidMove(format!(
                "cannot move through an occupied square ({blocker})"
            )));
        }
        if !path.is_empty() && !piece.is_king() {
            return Err(Error::invalid_move("a man moves a single square at a time"));
        }

        let mut next = *board;
        next.move_piece(self.start, self.end);
        Ok(next)
    }
}

/// Jump over exactly one opposing piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureMove {
    pub start: usize,
    pub end: usize,
}

impl CaptureMove {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the board after the capture with the captured piece removed.
    pub fn apply(&self, board: &Board) -> Result<Board> {
        let mut next = self.apply_pending(board)?;
        next.flush_captured();
        Ok(next)
    }

    /// Validates and performs the jump, leaving the captured square pending.
    pub(crate) fn apply_pending(&self, board: &Board) -> Result<Board> {
        check_squares(self.start, self.end)?;
        let Some(piece) = board.piece(self.start) else {
            return Err(empty_start(self.start));
        };
        if !board.is_empty(self.end) {
            return Err(occupied_end(self.end));
        }

        let path = indexes_between(self.start, self.end)?;
        let own_squares: Vec<String> = path
            .iter()
            .filter(|&&index| board.owner(index) == Some(piece.player))
            .map(|index| index.to_string())
            .collect();
        if !own_squares.is_empty() {
            return Err(Error::InvalidMove(format!(
                "cannot capture when own pieces are in the way: {}",
                own_squares.join(", ")
            )));
        }
        if let Some(captured) = path.iter().find(|&&index| board.is_pending(index)) {
            return Err(Error::InvalidMove(format!(
                "cannot jump over an already captured piece ({captured})"
            )));
        }

        let opponent = piece.player.opponent();
        let opponent_squares: Vec<usize> = path
            .iter()
            .copied()
            .filter(|&index| board.owner(index) == Some(opponent))
            .collect();
        let [captured] = opponent_squares[..] else {
            return Err(Error::invalid_move(
                "cannot capture: must have exactly one opponent piece along the way",
            ));
        };
        if path.len() > 1 && !piece.is_king() {
            return Err(Error::invalid_move(
                "a man captures only an adjacent piece",
            ));
        }

        let mut next = *board;
        next.capture(self.start, self.end, captured);
        Ok(next)
    }
}

/// Chain of captures made by one piece in a single turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComboCaptureMove {
    moves: Vec<CaptureMove>,
}

impl ComboCaptureMove {
    /// Builds a chain; every step must start where the previous one landed.
    pub fn new(moves: Vec<CaptureMove>) -> Result<Self> {
        if moves.len() < 2 {
            return Err(Error::invalid_move(
                "a combo capture needs at least two captures",
            ));
        }
        if let Some(pair) = moves.windows(2).find(|pair| pair[0].end != pair[1].start) {
            return Err(Error::InvalidMove(format!(
                "capture chain breaks between {} and {}",
                pair[0].end, pair[1].start
            )));
        }
        Ok(Self { moves })
    }

    pub fn moves(&self) -> &[CaptureMove] {
        &self.moves
    }

    pub fn step_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the board after the whole chain.
    ///
    /// Captured pieces stay on the board as pending captures until the last step, so no later
    /// step may land on, jump over or take them again. Only the final landing square can crown
    /// a man.
    pub fn apply(&self, board: &Board) -> Result<Board> {
        let mut next = *board;
        let last = self.moves.len() - 1;

        for (i, step) in self.moves.iter().enumerate() {
            let class_before = next.piece_class(step.start);
            next = step.apply_pending(&next)?;

            if i < last
                && let Some(class) = class_before
            {
                next.set_piece_class(step.end, class);
            }
        }

        next.flush_captured();
        Ok(next)
    }
}

/// Any legal move kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoveRecord", into = "MoveRecord")]
pub enum Move {
    Simple(SimpleMove),
    Capture(CaptureMove),
    Combo(ComboCaptureMove),
}

impl Move {
    pub fn apply(&self, board: &Board) -> Result<Board> {
        match self {
            Self::Simple(mv) => mv.apply(board),
            Self::Capture(mv) => mv.apply(board),
            Self::Combo(mv) => mv.apply(board),
        }
    }

    pub fn start(&self) -> usize {
        match self {
            Self::Simple(mv) => mv.start,
            Self::Capture(mv) => mv.start,
            Self::Combo(mv) => mv.moves[0].start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Self::Simple(mv) => mv.end,
            Self::Capture(mv) => mv.end,
            Self::Combo(mv) => mv.moves[mv.moves.len() - 1].end,
        }
    }

    /// Number of pieces the move takes.
    pub fn capture_count(&self) -> usize {
        match self {
            Self::Simple(_) => 0,
            Self::Capture(_) => 1,
            Self::Combo(mv) => mv.step_count(),
        }
    }

    /// Wraps a chain found by the capture search. The chain must be non-empty and continuous.
    pub(crate) fn from_chain(mut chain: Vec<CaptureMove>) -> Self {
        if chain.len() == 1 {
            Self::Capture(chain.remove(0))
        } else {
            Self::Combo(ComboCaptureMove { moves: chain })
        }
    }
}

impl From<SimpleMove> for Move {
    fn from(mv: SimpleMove) -> Self {
        Self::Simple(mv)
    }
}

impl From<CaptureMove> for Move {
    fn from(mv: CaptureMove) -> Self {
        Self::Capture(mv)
    }
}

impl From<ComboCaptureMove> for Move {
    fn from(mv: ComboCaptureMove) -> Self {
        Self::Combo(mv)
    }
}

impl fmt::Display for SimpleMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move: {} -> {}", self.start, self.end)
    }
}

impl fmt::Display for CaptureMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capture: {} -> {}", self.start, self.end)
    }
}

impl fmt::Display for ComboCaptureMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps: Vec<String> = self.moves.iter().map(ToString::to_string).collect();
        write!(f, "Combo x{}: [{}]", self.moves.len(), steps.join(", "))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(mv) => mv.fmt(f),
            Self::Capture(mv) => mv.fmt(f),
            Self::Combo(mv) => mv.fmt(f),
        }
    }
}

fn check_squares(start: usize, end: usize) -> Result<()> {
    for index in [start, end] {
        if !is_valid_square(index) {
            return Err(Error::InvalidMove(format!("square {index} is not on the board")));
        }
    }
    Ok(())
}

fn empty_start(index: usize) -> Error {
    Error::InvalidMove(format!("cannot move from an empty square ({index})"))
}

fn occupied_end(index: usize) -> Error {
    Error::InvalidMove(format!("cannot move to a non-empty square ({index})"))
}
