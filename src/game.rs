use crate::board::Board;
use crate::capture::capture_sequences;
use crate::error::{Error, Result};
use crate::moves::{Move, SimpleMove};
use crate::types::{GameOverReason, GameState, PieceClass, Player};

impl Board {
    /// Legal moves for `player` under the mandatory maximum capture rule.
    ///
    /// When any capture exists only the longest chains are legal and no simple move is;
    /// otherwise every free slide of every piece is returned.
    pub fn available_moves(&self, player: Player) -> Vec<Move> {
        let sequences = capture_sequences(self, player);

        let Some(max_len) = sequences.iter().map(Vec::len).max() else {
            return self
                .player_squares(player)
                .into_iter()
                .flat_map(|start| {
                    self.free_movement_destinations(start)
                        .into_iter()
                        .map(move |end| Move::Simple(SimpleMove::new(start, end)))
                })
                .collect();
        };

        sequences
            .into_iter()
            .filter(|chain| chain.len() == max_len)
            .map(Move::from_chain)
            .collect()
    }

    /// Terminal state for the position with `turn` to move, or `None` while play goes on.
    ///
    /// A player without moves loses. Two lone kings that cannot take each other are a draw.
    pub fn check_game_over(&self, turn: Player) -> Option<GameOverReason> {
        if self.available_moves(turn).is_empty() {
            return Some(GameOverReason::loss_for(turn));
        }

        let white = self.player_squares(Player::White);
        let black = self.player_squares(Player::Black);
        if let ([white], [black]) = (&white[..], &black[..])
            && self.piece_class(*white) == Some(PieceClass::King)
            && self.piece_class(*black) == Some(PieceClass::King)
            && self.capturable_pieces(*white).is_empty()
            && self.capturable_pieces(*black).is_empty()
        {
            return Some(GameOverReason::Draw);
        }

        None
    }
}

/// A game in progress: position, side to move, outcome and the moves played so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Player,
    outcome: Option<GameOverReason>,
    history: Vec<Move>,
}

impl Game {
    /// Starts from the initial position with white to move.
    pub fn new() -> Self {
        Self::from_board(Board::starting_position(), Player::White)
    }

    pub fn from_board(board: Board, turn: Player) -> Self {
        Self {
            outcome: board.check_game_over(turn),
            board,
            turn,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> Option<GameOverReason> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.available_moves(self.turn)
    }

    /// Plays `mv` for the side to move and hands the turn over.
    pub fn play(&mut self, mv: &Move) -> Result<()> {
        if self.is_over() {
            return Err(Error::invalid_move("game is already over"));
        }
        if !self.legal_moves().contains(mv) {
            return Err(Error::InvalidMove(format!(
                "{mv} is not a legal move for {}",
                self.turn
            )));
        }

        self.board = mv.apply(&self.board)?;
        self.turn = self.turn.opponent();
        self.outcome = self.board.check_game_over(self.turn);
        self.history.push(mv.clone());
        Ok(())
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.into(),
            turn: self.turn,
            game_over: self.outcome,
            last_move: self.history.last().cloned().map(Into::into),
            move_count: self.history.len(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
