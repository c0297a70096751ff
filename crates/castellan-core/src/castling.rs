//! Castling legality.

use tracing::trace;

use crate::color::Color;
use crate::file::File;
use crate::game::Game;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// The side whose king destination is `to`, if `to` is a castling target for `color`.
    pub fn from_destination(color: Color, to: Square) -> Option<CastleSide> {
        if to.rank() != color.back_rank() {
            return None;
        }
        match to.file() {
            File::FileG => Some(CastleSide::KingSide),
            File::FileC => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Where the king starts.
    #[inline]
    pub fn king_origin(color: Color) -> Square {
        Square::new(File::FileE, color.back_rank())
    }

    /// Where the king ends up.
    #[inline]
    pub fn king_destination(self, color: Color) -> Square {
        let file = match self {
            CastleSide::KingSide => File::FileG,
            CastleSide::QueenSide => File::FileC,
        };
        Square::new(file, color.back_rank())
    }

    /// The corner the rook starts on.
    #[inline]
    pub fn rook_origin(self, color: Color) -> Square {
        let file = match self {
            CastleSide::KingSide => File::FileH,
            CastleSide::QueenSide => File::FileA,
        };
        Square::new(file, color.back_rank())
    }

    /// The square the rook lands on, next to the king.
    #[inline]
    pub fn rook_destination(self, color: Color) -> Square {
        let file = match self {
            CastleSide::KingSide => File::FileF,
            CastleSide::QueenSide => File::FileD,
        };
        Square::new(file, color.back_rank())
    }

    /// Files strictly between the king and the rook.
    fn gap(self) -> &'static [File] {
        match self {
            CastleSide::KingSide => &[File::FileF, File::FileG],
            CastleSide::QueenSide => &[File::FileB, File::FileC, File::FileD],
        }
    }

    /// Files the king stands on or crosses, origin and destination included.
    fn transit(self) -> [File; 3] {
        match self {
            CastleSide::KingSide => [File::FileE, File::FileF, File::FileG],
            CastleSide::QueenSide => [File::FileE, File::FileD, File::FileC],
        }
    }
}

impl Game {
    /// Return `true` if `color` may castle by moving its king `from -> to`.
    pub fn can_castle(&self, from: Square, to: Square, color: Color) -> bool {
        self.castle_side(from, to, color).is_some()
    }

    /// Check every castling condition and return the side castled toward.
    pub(crate) fn castle_side(&self, from: Square, to: Square, color: Color) -> Option<CastleSide> {
        if from != CastleSide::king_origin(color) {
            return None;
        }
        let side = CastleSide::from_destination(color, to)?;
        let rank = color.back_rank();

        let king_ready = self.board.colored_piece_on(from) == Some(Piece::new(PieceKind::King, color))
            && self.board.castle_flag(from);
        if !king_ready || self.in_check(color) {
            trace!(%color, ?side, "castle refused: king moved or in check");
            return None;
        }

        let rook_sq = side.rook_origin(color);
        let rook_ready = self.board.colored_piece_on(rook_sq) == Some(Piece::new(PieceKind::Rook, color))
            && self.board.castle_flag(rook_sq);
        if !rook_ready {
            trace!(%color, ?side, "castle refused: rook moved");
            return None;
        }

        if side.gap().iter().any(|&file| self.board.is_occupied(Square::new(file, rank))) {
            trace!(%color, ?side, "castle refused: path occupied");
            return None;
        }

        let attacked = side
            .transit()
            .into_iter()
            .any(|file| self.is_threatened(from, Square::new(file, rank), color));
        if attacked {
            trace!(%color, ?side, "castle refused: king passes an attacked square");
            return None;
        }

        Some(side)
    }
}

#[cfg(test)]
mod tests {
    use super::CastleSide;
    use crate::board::Board;
    use crate::color::Color;
    use crate::game::Game;
    use crate::piece::Piece;
    use crate::square::Square;

    /// Kings and all four rooks on their home squares, every flag set.
    fn castle_ready() -> Board {
        let mut board = Board::empty();
        for (sq, piece) in [
            (Square::E1, Piece::WHITE_KING),
            (Square::A1, Piece::WHITE_ROOK),
            (Square::H1, Piece::WHITE_ROOK),
            (Square::E8, Piece::BLACK_KING),
            (Square::A8, Piece::BLACK_ROOK),
            (Square::H8, Piece::BLACK_ROOK),
        ] {
            board.put(sq, piece);
            board.set_castle_flag(sq, true);
        }
        board
    }

    #[test]
    fn side_geometry() {
        assert_eq!(CastleSide::from_destination(Color::White, Square::G1), Some(CastleSide::KingSide));
        assert_eq!(CastleSide::from_destination(Color::Black, Square::C8), Some(CastleSide::QueenSide));
        assert_eq!(CastleSide::from_destination(Color::White, Square::G8), None);
        assert_eq!(CastleSide::from_destination(Color::White, Square::F1), None);
        assert_eq!(CastleSide::QueenSide.rook_origin(Color::Black), Square::A8);
        assert_eq!(CastleSide::KingSide.rook_destination(Color::White), Square::F1);
        assert_eq!(CastleSide::QueenSide.king_destination(Color::White), Square::C1);
    }

    #[test]
    fn all_four_castles_available() {
        let game = Game::from_board(castle_ready());
        assert!(game.can_castle(Square::E1, Square::G1, Color::White));
        assert!(game.can_castle(Square::E1, Square::C1, Color::White));
        assert!(game.can_castle(Square::E8, Square::G8, Color::Black));
        assert!(game.can_castle(Square::E8, Square::C8, Color::Black));
    }

    #[test]
    fn wrong_squares_rejected() {
        let game = Game::from_board(castle_ready());
        assert!(!game.can_castle(Square::E1, Square::G8, Color::White));
        assert!(!game.can_castle(Square::E8, Square::G8, Color::White));
        assert!(!game.can_castle(Square::E1, Square::F1, Color::White));
        assert!(!game.can_castle(Square::D1, Square::B1, Color::White));
    }

    #[test]
    fn starting_position_is_blocked() {
        let game = Game::new();
        assert!(!game.can_castle(Square::E1, Square::G1, Color::White));
        assert!(!game.can_castle(Square::E8, Square::C8, Color::Black));
    }

    #[test]
    fn moved_king_cannot_castle() {
        let mut board = castle_ready();
        board.set_castle_flag(Square::E1, false);
        let game = Game::from_board(board);
        assert!(!game.can_castle(Square::E1, Square::G1, Color::White));
        assert!(!game.can_castle(Square::E1, Square::C1, Color::White));
    }

    #[test]
    fn moved_rook_blocks_only_its_side() {
        let mut board = castle_ready();
        board.set_castle_flag(Square::H1, false);
        let game = Game::from_board(board);
        assert!(!game.can_castle(Square::E1, Square::G1, Color::White));
        assert!(game.can_castle(Square::E1, Square::C1, Color::White));
    }

    #[test]
    fn missing_rook_blocks_castle() {
        let mut board = castle_ready();
        board.take(Square::A8);
        let game = Game::from_board(board);
        assert!(!game.can_castle(Square::E8, Square::C8, Color::Black));
    }

    #[test]
    fn occupied_gap_blocks_castle() {
        let mut board = castle_ready();
        board.put(Square::B1, Piece::WHITE_KNIGHT);
        let game = Game::from_board(board);
        // b1 is not crossed by the king, but it lies between king and rook.
        assert!(!game.can_castle(Square::E1, Square::C1, Color::White));
        assert!(game.can_castle(Square::E1, Square::G1, Color::White));
    }

    #[test]
    fn no_castling_out_of_check() {
        let mut board = castle_ready();
        board.put(Square::E5, Piece::BLACK_ROOK);
        let game = Game::from_board(board);
        assert!(!game.can_castle(Square::E1, Square::G1, Color::White));
        assert!(!game.can_castle(Square::E1, Square::C1, Color::White));
    }

    #[test]
    fn no_castling_through_attack() {
        let mut board = castle_ready();
        // Bishop on a6 covers f1.
        board.put(Square::A6, Piece::BLACK_BISHOP);
        let game = Game::from_board(board);
        assert!(!game.can_castle(Square::E1, Square::G1, Color::White));
        assert!(game.can_castle(Square::E1, Square::C1, Color::White));
    }

    #[test]
    fn no_castling_into_attack() {
        let mut board = castle_ready();
        board.put(Square::C5, Piece::BLACK_ROOK);
        let game = Game::from_board(board);
        assert!(!game.can_castle(Square::E1, Square::C1, Color::White));
        assert!(game.can_castle(Square::E1, Square::G1, Color::White));
    }

    #[test]
    fn attacked_b_file_does_not_matter() {
        let mut board = castle_ready();
        board.put(Square::B5, Piece::BLACK_ROOK);
        let game = Game::from_board(board);
        assert!(game.can_castle(Square::E1, Square::C1, Color::White));
    }

    #[test]
    fn black_checks_its_own_path() {
        let mut board = castle_ready();
        board.put(Square::F3, Piece::WHITE_ROOK);
        let game = Game::from_board(board);
        assert!(!game.can_castle(Square::E8, Square::G8, Color::Black));
        assert!(game.can_castle(Square::E8, Square::C8, Color::Black));
    }
}
