//! Sliding movement for rooks and bishops (queens use both).

use crate::board::Board;
use crate::diagonal::DiagonalFamily;
use crate::square::Square;

/// Rooks move along a file or rank with nothing in between.
pub(super) fn rook_reaches(board: &Board, from: Square, to: Square) -> bool {
    let (file_delta, rank_delta) = from.delta(to);
    if file_delta != 0 && rank_delta != 0 {
        return false;
    }
    let (step_file, step_rank) = (file_delta.signum(), rank_delta.signum());

    let mut sq = from;
    loop {
        let Some(next) = sq.offset(step_file, step_rank) else {
            return false;
        };
        if next == to {
            return true;
        }
        if board.is_occupied(next) {
            return false;
        }
        sq = next;
    }
}

/// Bishops move along a shared diagonal with nothing in between.
pub(super) fn bishop_reaches(board: &Board, from: Square, to: Square) -> bool {
    DiagonalFamily::ALL.into_iter().any(|family| {
        board
            .diagonals()
            .between(family, from, to)
            .is_some_and(|path| path.iter().all(|&sq| !board.is_occupied(sq)))
    })
}
