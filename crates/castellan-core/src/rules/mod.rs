//! Movement rules: can a piece reach a square under its movement pattern?
//!
//! These predicates ignore whether the move exposes the mover's own king;
//! that is layered on top by the threat probe in [`crate::threat`]. Castling
//! is handled separately in [`crate::castling`].

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub(crate) use self::pawns::{captures_en_passant, is_double_step};

/// Return `true` if the piece of `color` on `from` can reach `to` on `turn`.
///
/// Total over all inputs: an empty or enemy-owned origin, `from == to`, and a
/// destination held by `color` are all simply illegal.
pub(crate) fn is_legal(board: &Board, turn: u32, from: Square, to: Square, color: Color) -> bool {
    if from == to {
        return false;
    }
    let Some(piece) = board.colored_piece_on(from) else {
        return false;
    };
    if piece.color() != color || board.color_on(to) == Some(color) {
        return false;
    }

    match piece.kind() {
        PieceKind::Pawn => pawns::pawn_reaches(board, turn, from, to, color),
        PieceKind::Knight => knights::knight_reaches(from, to),
        PieceKind::Bishop => sliders::bishop_reaches(board, from, to),
        PieceKind::Rook => sliders::rook_reaches(board, from, to),
        PieceKind::Queen => {
            sliders::rook_reaches(board, from, to) || sliders::bishop_reaches(board, from, to)
        }
        PieceKind::King => king::king_reaches(from, to),
    }
}

#[cfg(test)]
mod tests {
    use super::is_legal;
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_position_has_twenty_pattern_moves() {
        let board = Board::starting_position();
        let count = Square::all()
            .flat_map(|from| Square::all().map(move |to| (from, to)))
            .filter(|&(from, to)| is_legal(&board, 1, from, to, Color::White))
            .count();
        assert_eq!(count, 20);
    }

    #[test]
    fn empty_origin_is_illegal() {
        let board = Board::starting_position();
        assert!(!is_legal(&board, 1, Square::E4, Square::E5, Color::White));
    }

    #[test]
    fn enemy_origin_is_illegal() {
        let board = Board::starting_position();
        assert!(!is_legal(&board, 1, Square::E7, Square::E5, Color::White));
        assert!(is_legal(&board, 1, Square::E7, Square::E5, Color::Black));
    }

    #[test]
    fn same_square_is_illegal() {
        let board = Board::starting_position();
        assert!(!is_legal(&board, 1, Square::D1, Square::D1, Color::White));
    }

    #[test]
    fn cannot_capture_own_piece() {
        let board = Board::starting_position();
        assert!(!is_legal(&board, 1, Square::D1, Square::D2, Color::White));
        assert!(!is_legal(&board, 1, Square::B1, Square::D2, Color::White));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let mut board = Board::empty();
        board.put(Square::D4, Piece::WHITE_QUEEN);
        assert!(is_legal(&board, 1, Square::D4, Square::D8, Color::White));
        assert!(is_legal(&board, 1, Square::D4, Square::A4, Color::White));
        assert!(is_legal(&board, 1, Square::D4, Square::H8, Color::White));
        assert!(is_legal(&board, 1, Square::D4, Square::A7, Color::White));
        assert!(!is_legal(&board, 1, Square::D4, Square::E6, Color::White));
    }

    #[test]
    fn queen_blocked_on_both_lines() {
        let mut board = Board::empty();
        board.put(Square::D4, Piece::WHITE_QUEEN);
        board.put(Square::D6, Piece::BLACK_PAWN);
        board.put(Square::F6, Piece::BLACK_PAWN);
        assert!(is_legal(&board, 1, Square::D4, Square::D6, Color::White));
        assert!(!is_legal(&board, 1, Square::D4, Square::D7, Color::White));
        assert!(is_legal(&board, 1, Square::D4, Square::F6, Color::White));
        assert!(!is_legal(&board, 1, Square::D4, Square::G7, Color::White));
    }
}
