use std::collections::VecDeque;

use crate::board::Board;
use crate::moves::CaptureMove;
use crate::types::Player;

/// Frontier entry: the board before the jump, the jump itself and the chain leading to it.
struct Node {
    board: Board,
    attacker: usize,
    target: usize,
    landing: usize,
    chain: Vec<CaptureMove>,
}

/// Finds every capture chain `player` can play that cannot be extended any further.
///
/// Chains of different lengths are all returned; picking the longest is left to the caller.
/// Discovery order is breadth-first but carries no meaning.
pub fn capture_sequences(board: &Board, player: Player) -> Vec<Vec<CaptureMove>> {
    let mut queue = VecDeque::new();
    for attacker in board.player_squares(player) {
        push_continuations(&mut queue, board, attacker, &[]);
    }

    let mut sequences = Vec::new();
    while let Some(node) = queue.pop_front() {
        let Node {
            board,
            attacker,
            target,
            landing,
            mut chain,
        } = node;

        let mut next = board;
        let class = board.piece_class(attacker);
        next.capture(attacker, landing, target);
        // Promotion only counts once the chain ends, and an ending chain's board is discarded.
        if let Some(class) = class {
            next.set_piece_class(landing, class);
        }
        chain.push(CaptureMove::new(attacker, landing));

        if !push_continuations(&mut queue, &next, landing, &chain) {
            sequences.push(chain);
        }
    }

    sequences
}

/// Queues one node per (target, landing) option of the piece on `attacker`.
/// Returns false when the piece has nothing left to capture.
fn push_continuations(
    queue: &mut VecDeque<Node>,
    board: &Board,
    attacker: usize,
    chain: &[CaptureMove],
) -> bool {
    let targets = board.capturable_pieces(attacker);
    for &target in &targets {
        for landing in board.capture_landing_positions(attacker, target) {
            queue.push_back(Node {
                board: *board,
                attacker,
                target,
                landing,
                chain: chain.to_vec(),
            });
        }
    }
    !targets.is_empty()
}
