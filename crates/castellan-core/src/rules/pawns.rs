//! Pawn movement: single and double steps, captures, en passant.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_state::EnPassantMarker;

pub(super) fn pawn_reaches(board: &Board, turn: u32, from: Square, to: Square, color: Color) -> bool {
    let (file_delta, rank_delta) = from.delta(to);
    let forward = color.forward();

    match file_delta {
        0 if rank_delta == forward => !board.is_occupied(to),
        0 if is_double_step(from, to, color) => {
            let passed = from.offset(0, forward);
            passed.is_some_and(|sq| !board.is_occupied(sq)) && !board.is_occupied(to)
        }
        -1 | 1 if rank_delta == forward => {
            if board.is_occupied(to) {
                // `is_legal` has already ruled out our own pieces.
                true
            } else {
                captures_en_passant(board, turn, from, to, color)
            }
        }
        _ => false,
    }
}

/// Return `true` if `from -> to` has the shape of a pawn's double step for `color`.
pub(crate) fn is_double_step(from: Square, to: Square, color: Color) -> bool {
    let (file_delta, rank_delta) = from.delta(to);
    file_delta == 0 && rank_delta == 2 * color.forward() && from.rank() == color.pawn_rank()
}

/// Return `true` if a pawn of `color` on `from` may capture en passant onto `to`.
///
/// The pawn must stand on its en-passant rank, carry a marker stamped for
/// this very turn naming the destination file, and have an enemy pawn beside
/// it on that file.
pub(crate) fn captures_en_passant(board: &Board, turn: u32, from: Square, to: Square, color: Color) -> bool {
    if from.rank() != color.en_passant_rank() || board.is_occupied(to) {
        return false;
    }
    let expected = EnPassantMarker {
        turn,
        file: to.file(),
    };
    if board.en_passant_marker(from) != Some(expected) {
        return false;
    }
    let victim = Square::new(to.file(), from.rank());
    board.colored_piece_on(victim) == Some(Piece::new(PieceKind::Pawn, !color))
}
