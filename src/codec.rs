//! Record shapes exchanged with hosts and storage.
//!
//! - Board: `{"<square>": {"player": "white"|"black", "class": "man"|"king"}, ...}` listing
//!   occupied squares only.
//! - Move: `{"type": "SimpleMove"|"CaptureMove", "startIndex", "endIndex"}` or
//!   `{"type": "ComboCaptureMove", "moves": [...]}` with capture steps inside.
//!
//! `Board` and `Move` serialize through these records directly; decoding validates squares and
//! chain shape.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::board::Board;
use crate::error::{Error, Result};
use crate::geometry::{TOTAL_SQUARES, is_valid_square};
use crate::moves::{CaptureMove, ComboCaptureMove, Move, SimpleMove};
use crate::types::{PieceClass, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareRecord {
    pub player: Player,
    pub class: PieceClass,
}

/// Occupied squares keyed by square number.
///
/// Keys decode from numbers or from numeric strings, so both a JS `Map` and a plain JSON
/// object are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoardRecord(pub BTreeMap<usize, SquareRecord>);

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(untagged)]
enum SquareKey {
    Number(usize),
    Text(String),
}

impl SquareKey {
    fn square(&self) -> Result<usize> {
        match self {
            Self::Number(index) => Ok(*index),
            Self::Text(text) => text.trim().parse().map_err(|_| {
                Error::InvalidRecord(format!("square key {text:?} is not a number"))
            }),
        }
    }
}

impl<'de> Deserialize<'de> for BoardRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        BTreeMap::<SquareKey, SquareRecord>::deserialize(deserializer)?
            .into_iter()
            .map(|(key, square)| key.square().map(|index| (index, square)))
            .collect::<Result<_>>()
            .map(Self)
            .map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MoveRecord {
    #[serde(alias = "ForwardMove")]
    SimpleMove {
        #[serde(rename = "startIndex")]
        start_index: usize,
        #[serde(rename = "endIndex")]
        end_index: usize,
    },
    CaptureMove {
        #[serde(rename = "startIndex")]
        start_index: usize,
        #[serde(rename = "endIndex")]
        end_index: usize,
    },
    ComboCaptureMove { moves: Vec<MoveRecord> },
}

impl From<Board> for BoardRecord {
    fn from(board: Board) -> Self {
        Self(
            (1..=TOTAL_SQUARES)
                .filter_map(|index| {
                    board.piece(index).map(|piece| {
                        let record = SquareRecord {
                            player: piece.player,
                            class: piece.class,
                        };
                        (index, record)
                    })
                })
                .collect(),
        )
    }
}

impl TryFrom<BoardRecord> for Board {
    type Error = Error;

    fn try_from(record: BoardRecord) -> Result<Self> {
        let mut board = Board::new();
        for (index, square) in record.0 {
            check_square(index)?;
            board.add_piece(index, square.player, square.class);
        }
        Ok(board)
    }
}

impl From<Move> for MoveRecord {
    fn from(mv: Move) -> Self {
        match mv {
            Move::Simple(mv) => Self::SimpleMove {
                start_index: mv.start,
                end_index: mv.end,
            },
            Move::Capture(mv) => capture_record(mv),
            Move::Combo(mv) => Self::ComboCaptureMove {
                moves: mv.moves().iter().copied().map(capture_record).collect(),
            },
        }
    }
}

impl TryFrom<MoveRecord> for Move {
    type Error = Error;

    fn try_from(record: MoveRecord) -> Result<Self> {
        match record {
            MoveRecord::SimpleMove {
                start_index,
                end_index,
            } => {
                check_square(start_index)?;
                check_square(end_index)?;
                Ok(SimpleMove::new(start_index, end_index).into())
            }
            MoveRecord::CaptureMove { .. } => capture_step(record).map(Move::from),
            MoveRecord::ComboCaptureMove { moves } => {
                let steps = moves
                    .into_iter()
                    .map(capture_step)
                    .collect::<Result<Vec<_>>>()?;
                ComboCaptureMove::new(steps)
                    .map(Move::from)
                    .map_err(|err| Error::InvalidRecord(err.to_string()))
            }
        }
    }
}

fn capture_record(mv: CaptureMove) -> MoveRecord {
    MoveRecord::CaptureMove {
        start_index: mv.start,
        end_index: mv.end,
    }
}

fn capture_step(record: MoveRecord) -> Result<CaptureMove> {
    match record {
        MoveRecord::CaptureMove {
            start_index,
            end_index,
        } => {
            check_square(start_index)?;
            check_square(end_index)?;
            Ok(CaptureMove::new(start_index, end_index))
        }
        _ => Err(Error::InvalidRecord(
            "combo capture steps must be CaptureMove records".to_string(),
        )),
    }
}

fn check_square(index: usize) -> Result<()> {
    if is_valid_square(index) {
        Ok(())
    } else {
        Err(Error::InvalidRecord(format!(
            "square {index} is outside 1..={TOTAL_SQUARES}"
        )))
    }
}
