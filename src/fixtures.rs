//! Board positions shared by the unit tests.

use crate::board::Board;
use crate::types::{PieceClass, Player};

fn board_with(pieces: &[(usize, Player, PieceClass)]) -> Board {
    let mut board = Board::new();
    for &(index, player, class) in pieces {
        board.add_piece(index, player, class);
    }
    board
}

pub fn starting_board() -> Board {
    let mut board = Board::new();
    for index in 31..=50 {
        board.add_piece(index, Player::White, PieceClass::Man);
    }
    for index in 1..=20 {
        board.add_piece(index, Player::Black, PieceClass::Man);
    }
    board
}

pub fn completely_filled_board() -> Board {
    let mut board = Board::new();
    for index in 26..=50 {
        board.add_piece(index, Player::White, PieceClass::Man);
    }
    for index in 1..=25 {
        board.add_piece(index, Player::Black, PieceClass::Man);
    }
    board
}

pub fn one_vs_one_men_capture_board() -> Board {
    board_with(&[
        (28, Player::White, PieceClass::Man),
        (23, Player::Black, PieceClass::Man),
    ])
}

pub fn one_vs_one_kings_capture_board() -> Board {
    board_with(&[
        (28, Player::White, PieceClass::King),
        (23, Player::Black, PieceClass::King),
    ])
}

pub fn one_vs_one_men_backwards_capture_board() -> Board {
    board_with(&[
        (23, Player::White, PieceClass::Man),
        (28, Player::Black, PieceClass::Man),
    ])
}

pub fn one_vs_one_men_surrender_board() -> Board {
    board_with(&[
        (28, Player::White, PieceClass::Man),
        (18, Player::Black, PieceClass::Man),
    ])
}

pub fn one_vs_one_men_cornered_board() -> Board {
    board_with(&[
        (50, Player::White, PieceClass::Man),
        (45, Player::Black, PieceClass::Man),
    ])
}

pub fn two_vs_one_kings_board() -> Board {
    board_with(&[
        (31, Player::White, PieceClass::King),
        (34, Player::White, PieceClass::King),
        (18, Player::Black, PieceClass::King),
    ])
}

pub fn two_vs_two_protected_kings_board() -> Board {
    board_with(&[
        (29, Player::White, PieceClass::King),
        (33, Player::White, PieceClass::King),
        (24, Player::Black, PieceClass::King),
        (20, Player::Black, PieceClass::King),
    ])
}

pub fn one_vs_one_kings_cornered_board() -> Board {
    board_with(&[
        (46, Player::White, PieceClass::King),
        (5, Player::Black, PieceClass::King),
    ])
}

pub fn multiple_capture_options_men_board() -> Board {
    board_with(&[
        (23, Player::Black, PieceClass::Man),
        (28, Player::White, PieceClass::Man),
        (37, Player::White, PieceClass::Man),
        (29, Player::White, PieceClass::Man),
        (40, Player::White, PieceClass::Man),
        (19, Player::White, PieceClass::Man),
    ])
}

pub fn multiple_capture_options_complex_board() -> Board {
    board_with(&[
        (23, Player::Black, PieceClass::King),
        (28, Player::Black, PieceClass::Man),
        (18, Player::White, PieceClass::Man),
        (7, Player::White, PieceClass::Man),
        (19, Player::White, PieceClass::Man),
        (14, Player::White, PieceClass::Man),
        (37, Player::White, PieceClass::Man),
        (29, Player::White, PieceClass::Man),
    ])
}

/// King sweep from the international draughts article: six captures in one move.
pub fn king_combo_board() -> Board {
    board_with(&[
        (1, Player::White, PieceClass::King),
        (40, Player::White, PieceClass::Man),
        (48, Player::White, PieceClass::Man),
        (7, Player::Black, PieceClass::Man),
        (13, Player::Black, PieceClass::Man),
        (20, Player::Black, PieceClass::Man),
        (35, Player::Black, PieceClass::Man),
        (39, Player::Black, PieceClass::Man),
        (41, Player::Black, PieceClass::Man),
        (42, Player::Black, PieceClass::Man),
    ])
}
