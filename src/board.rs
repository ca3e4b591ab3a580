use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::BoardRecord;
use crate::geometry::{
    BOARD_DIM, SQUARES_PER_ROW, TOTAL_SQUARES, coords_to_index, in_bounds, index_to_coords,
    is_black_home_row, is_valid_square, is_white_home_row, lines_of_sight,
};
use crate::types::{Piece, PieceClass, Player};

const KING_RANGE: usize = BOARD_DIM as usize;
const MAN_MOVE_RANGE: usize = 1;
const MAN_CAPTURE_RANGE: usize = 2;
const STARTING_ROWS: usize = 4;

/// Draughts board indexed by square number (1..=50).
///
/// Besides the pieces, the board tracks squares whose piece was captured earlier in the chain
/// being built but has not been lifted yet. Such squares read as occupied yet belong to nobody.
/// Boards handed out by public operations never carry any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord", into = "BoardRecord")]
pub struct Board {
    squares: [Option<Piece>; TOTAL_SQUARES + 1],
    pending: u64,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [None; TOTAL_SQUARES + 1],
            pending: 0,
        }
    }

    /// Creates the initial position:
    /// black men on 1-20, white men on 31-50.
    pub fn starting_position() -> Self {
        let mut board = Self::new();
        let rows = STARTING_ROWS * SQUARES_PER_ROW;
        for index in 1..=rows {
            board.add_piece(index, Player::Black, PieceClass::Man);
        }
        for index in TOTAL_SQUARES - rows + 1..=TOTAL_SQUARES {
            board.add_piece(index, Player::White, PieceClass::Man);
        }
        board
    }

    /// Returns the piece on `index`. Out-of-range squares are always empty.
    pub fn piece(&self, index: usize) -> Option<Piece> {
        self.squares.get(index).copied().flatten()
    }

    pub fn owner(&self, index: usize) -> Option<Player> {
        self.piece(index).map(|piece| piece.player)
    }

    pub fn piece_class(&self, index: usize) -> Option<PieceClass> {
        self.piece(index).map(|piece| piece.class)
    }

    /// True when nothing stands on `index`, neither a piece nor a pending capture.
    pub fn is_empty(&self, index: usize) -> bool {
        self.piece(index).is_none() && !self.is_pending(index)
    }

    pub fn is_pending(&self, index: usize) -> bool {
        (self.pending & bit(index)) != 0
    }

    /// All squares owned by `player`, ascending.
    pub fn player_squares(&self, player: Player) -> Vec<usize> {
        (1..=TOTAL_SQUARES)
            .filter(|&index| self.owner(index) == Some(player))
            .collect()
    }

    /// Empty squares the piece on `index` may slide to without capturing.
    pub fn free_movement_destinations(&self, index: usize) -> Vec<usize> {
        let Some(piece) = self.piece(index) else {
            return Vec::new();
        };

        let range = if piece.is_king() { KING_RANGE } else { MAN_MOVE_RANGE };
        let mut result = Vec::new();
        for line in movement_lines(index, piece, range) {
            for &square in line {
                if !self.is_empty(square) {
                    break;
                }
                result.push(square);
            }
        }
        result
    }

    /// Opponent squares the piece on `index` can capture right now.
    ///
    /// A piece immediately backed by another occupied square is protected and blocks the ray, as
    /// does an own piece or a pending capture. Each ray yields at most one target.
    pub fn capturable_pieces(&self, index: usize) -> Vec<usize> {
        let Some(piece) = self.piece(index) else {
            return Vec::new();
        };

        let range = if piece.is_king() { KING_RANGE } else { MAN_CAPTURE_RANGE };
        let mut result = Vec::new();
        for line in lines_of_sight(index, range) {
            for pair in line.windows(2) {
                let (square, beyond) = (pair[0], pair[1]);
                if self.is_empty(square) {
                    continue;
                }
                if self.owner(square) == Some(piece.player.opponent()) && self.is_empty(beyond) {
                    result.push(square);
                }
                break;
            }
        }
        result
    }

    /// Squares the attacker may land on after jumping `captured`.
    ///
    /// A man lands right behind the captured piece; a king may stop on any empty square behind
    /// it up to the next occupied square or the edge.
    pub fn capture_landing_positions(&self, attacker: usize, captured: usize) -> Vec<usize> {
        let (attacker_row, attacker_col) = index_to_coords(attacker);
        let (captured_row, captured_col) = index_to_coords(captured);
        let (dr, dc) = (captured_row - attacker_row, captured_col - attacker_col);
        if dr == 0 || dr.abs() != dc.abs() {
            return Vec::new();
        }

        let (dr, dc) = (dr.signum(), dc.signum());
        let (mut row, mut col) = (captured_row + dr, captured_col + dc);

        if self.piece_class(attacker) == Some(PieceClass::Man) {
            return if in_bounds(row, col) {
                vec![coords_to_index(row, col)]
            } else {
                Vec::new()
            };
        }

        let mut result = Vec::new();
        while in_bounds(row, col) {
            let square = coords_to_index(row, col);
            if !self.is_empty(square) {
                break;
            }
            result.push(square);
            row += dr;
            col += dc;
        }
        result
    }

    /// Relocates a piece, crowning it when it lands on the opponent's home row.
    pub fn move_piece(&mut self, start: usize, end: usize) {
        if !is_valid_square(start) || !is_valid_square(end) {
            return;
        }
        let Some(mut piece) = self.squares[start].take() else {
            return;
        };

        let promotes = match piece.player {
            Player::White => is_black_home_row(end),
            Player::Black => is_white_home_row(end),
        };
        if promotes {
            piece.class = PieceClass::King;
        }
        self.squares[end] = Some(piece);
    }

    /// Places a piece. Out-of-range squares are ignored.
    pub fn add_piece(&mut self, index: usize, player: Player, class: PieceClass) {
        if is_valid_square(index) {
            self.squares[index] = Some(Piece::new(player, class));
        }
    }

    pub fn remove_piece(&mut self, index: usize) {
        if is_valid_square(index) {
            self.squares[index] = None;
        }
    }

    /// Jumps `start` to `end` over `captured`, keeping `captured` as a pending capture.
    pub(crate) fn capture(&mut self, start: usize, end: usize, captured: usize) {
        self.move_piece(start, end);
        self.remove_piece(captured);
        self.pending |= bit(captured);
    }

    /// Overrides the class of the piece on `index`, used to undo a crowning mid-chain.
    pub(crate) fn set_piece_class(&mut self, index: usize, class: PieceClass) {
        if let Some(Some(piece)) = self.squares.get_mut(index) {
            piece.class = class;
        }
    }

    /// Lifts every pending capture off the board.
    pub(crate) fn flush_captured(&mut self) {
        self.pending = 0;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |player| {
            self.player_squares(player)
                .iter()
                .map(|index| index.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(
            f,
            "White: {} | Black: {}",
            join(Player::White),
            join(Player::Black)
        )
    }
}

/// Rays a piece may slide along: men only look forward.
fn movement_lines(index: usize, piece: Piece, range: usize) -> Vec<&'static [usize]> {
    let lines = lines_of_sight(index, range);
    match (piece.class, piece.player) {
        (PieceClass::King, _) => lines.to_vec(),
        (PieceClass::Man, Player::White) => lines[..2].to_vec(),
        (PieceClass::Man, Player::Black) => lines[2..].to_vec(),
    }
}

fn bit(index: usize) -> u64 {
    if is_valid_square(index) { 1u64 << index } else { 0 }
}
