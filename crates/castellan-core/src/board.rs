//! The 8x8 board: per-square state plus the king-position cache.

use crate::color::Color;
use crate::diagonal::{DIAGONALS, DiagonalIndex};
use crate::error::BoardError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;
use crate::square_state::{EnPassantMarker, SquareState};

/// Squares whose castling flag is set in the starting position.
pub const CASTLE_SQUARES: [Square; 6] = [
    Square::A1,
    Square::E1,
    Square::H1,
    Square::A8,
    Square::E8,
    Square::H8,
];

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement and per-square flags for all 64 squares.
///
/// All piece placement goes through [`Board::put`], [`Board::take`] and
/// [`Board::relocate`]. Those three are the only writers of the king-position
/// cache, which therefore always agrees with the board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [SquareState; Square::COUNT],
    /// King square per side, indexed by [`Color::index()`].
    kings: [Option<Square>; Color::COUNT],
}

impl Board {
    /// A board with no pieces, no castling flags and no en-passant markers.
    pub fn empty() -> Board {
        let mut squares = [SquareState::empty(Square::A1); Square::COUNT];
        for sq in Square::all() {
            squares[sq.index()] = SquareState::empty(sq);
        }
        Board {
            squares,
            kings: [None; Color::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            board.put(Square::new(file, Rank::Rank1), Piece::new(kind, Color::White));
            board.put(Square::new(file, Rank::Rank2), Piece::WHITE_PAWN);
            board.put(Square::new(file, Rank::Rank7), Piece::BLACK_PAWN);
            board.put(Square::new(file, Rank::Rank8), Piece::new(kind, Color::Black));
        }
        for sq in CASTLE_SQUARES {
            board.set_castle_flag(sq, true);
        }
        board
    }

    /// Return the full state of a square.
    #[inline]
    pub fn state(&self, sq: Square) -> &SquareState {
        &self.squares[sq.index()]
    }

    /// Return the colored piece on the given square, if any.
    #[inline]
    pub fn colored_piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].piece()
    }

    /// Return the piece kind on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<PieceKind> {
        self.colored_piece_on(sq).map(Piece::kind)
    }

    /// Return the owner of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.colored_piece_on(sq).map(Piece::color)
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        !self.squares[sq.index()].is_empty()
    }

    /// Return the king square for the given side, if that side has a king.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// The shared diagonal index.
    #[inline]
    pub fn diagonals(&self) -> &'static DiagonalIndex {
        &DIAGONALS
    }

    /// Iterate over the pieces of `color` in rank-major, file-minor order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.colored_piece_on(sq)
                .filter(|piece| piece.color() == color)
                .map(|piece| (sq, piece))
        })
    }

    /// Return `true` if a king, or a corner rook, may still castle from `sq`.
    #[inline]
    pub fn castle_flag(&self, sq: Square) -> bool {
        self.squares[sq.index()].castle().unwrap_or(false)
    }

    /// Set the castling flag of a square. Used when setting up positions.
    pub fn set_castle_flag(&mut self, sq: Square, flag: bool) {
        self.squares[sq.index()].set_castle(Some(flag));
    }

    /// Clear a castling flag, if the square carries one.
    pub(crate) fn revoke_castle_flag(&mut self, sq: Square) {
        let state = &mut self.squares[sq.index()];
        if state.castle().is_some() {
            state.set_castle(Some(false));
        }
    }

    /// Return the en-passant marker on `sq`, if any.
    #[inline]
    pub fn en_passant_marker(&self, sq: Square) -> Option<EnPassantMarker> {
        self.squares[sq.index()].en_passant()
    }

    /// Stamp an en-passant marker. Markers only exist on ranks 4 and 5;
    /// requests for any other rank are ignored.
    pub fn set_en_passant_marker(&mut self, sq: Square, marker: EnPassantMarker) {
        if matches!(sq.rank(), Rank::Rank4 | Rank::Rank5) {
            self.squares[sq.index()].set_en_passant(Some(marker));
        }
    }

    /// Place `piece` on `sq`, replacing whatever stood there.
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        let previous = self.take(sq);
        self.squares[sq.index()].set_piece(Some(piece));
        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = Some(sq);
        }
        previous
    }

    /// Remove and return the piece on `sq`.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        let previous = self.squares[sq.index()].piece();
        self.squares[sq.index()].set_piece(None);
        if let Some(piece) = previous
            && piece.kind() == PieceKind::King
            && self.kings[piece.color().index()] == Some(sq)
        {
            self.kings[piece.color().index()] = self.find_king(piece.color());
        }
        previous
    }

    /// Move the piece on `from` to `to`, returning any piece captured on `to`.
    /// Does nothing if `from` is empty or equals `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        if from == to {
            return None;
        }
        let piece = self.take(from)?;
        self.put(to, piece)
    }

    fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
            if self.kings[color.index()] != self.find_king(color) {
                return Err(BoardError::StaleKingCache { color });
            }
        }

        let pawn_on_back_rank = Square::all().any(|sq| {
            matches!(sq.rank(), Rank::Rank1 | Rank::Rank8)
                && self.piece_on(sq) == Some(PieceKind::Pawn)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::file::File;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;
    use crate::square_state::EnPassantMarker;

    #[test]
    fn starting_position_validates() {
        Board::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_piece_on() {
        let board = Board::starting_position();
        assert_eq!(board.piece_on(Square::E1), Some(PieceKind::King));
        assert_eq!(board.piece_on(Square::D1), Some(PieceKind::Queen));
        assert_eq!(board.piece_on(Square::A1), Some(PieceKind::Rook));
        assert_eq!(board.piece_on(Square::B8), Some(PieceKind::Knight));
        assert_eq!(board.piece_on(Square::F8), Some(PieceKind::Bishop));
        assert_eq!(board.piece_on(Square::E7), Some(PieceKind::Pawn));
        assert_eq!(board.piece_on(Square::E4), None);
        assert_eq!(board.color_on(Square::E1), Some(Color::White));
        assert_eq!(board.color_on(Square::E8), Some(Color::Black));
        assert_eq!(board.color_on(Square::E4), None);
    }

    #[test]
    fn starting_position_counts() {
        let board = Board::starting_position();
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
        assert_eq!(Square::all().filter(|&sq| board.is_occupied(sq)).count(), 32);
    }

    #[test]
    fn starting_castle_flags() {
        let board = Board::starting_position();
        for sq in super::CASTLE_SQUARES {
            assert!(board.castle_flag(sq), "{sq} should carry a castle flag");
        }
        assert!(!board.castle_flag(Square::D1));
        assert_eq!(board.state(Square::D1).castle(), None);
    }

    #[test]
    fn king_cache_follows_mutations() {
        let mut board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Some(Square::E1));
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));

        board.take(Square::E2);
        board.relocate(Square::E1, Square::E2);
        assert_eq!(board.king_square(Color::White), Some(Square::E2));

        board.take(Square::E2);
        assert_eq!(board.king_square(Color::White), None);
    }

    #[test]
    fn relocate_returns_capture() {
        let mut board = Board::empty();
        board.put(Square::D4, Piece::WHITE_ROOK);
        board.put(Square::D7, Piece::BLACK_KNIGHT);
        assert_eq!(board.relocate(Square::D4, Square::D7), Some(Piece::BLACK_KNIGHT));
        assert_eq!(board.colored_piece_on(Square::D7), Some(Piece::WHITE_ROOK));
        assert!(!board.is_occupied(Square::D4));
    }

    #[test]
    fn capturing_a_king_clears_its_cache() {
        let mut board = Board::empty();
        board.put(Square::E1, Piece::WHITE_KING);
        board.put(Square::E2, Piece::BLACK_QUEEN);
        board.relocate(Square::E2, Square::E1);
        assert_eq!(board.king_square(Color::White), None);
    }

    #[test]
    fn en_passant_markers_only_on_middle_ranks() {
        let mut board = Board::empty();
        let marker = EnPassantMarker { turn: 3, file: File::FileD };
        board.set_en_passant_marker(Square::E4, marker);
        board.set_en_passant_marker(Square::E3, marker);
        assert_eq!(board.en_passant_marker(Square::E4), Some(marker));
        assert_eq!(board.en_passant_marker(Square::E3), None);
    }

    #[test]
    fn validate_rejects_missing_king() {
        let mut board = Board::empty();
        board.put(Square::E1, Piece::WHITE_KING);
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount { color: Color::Black, count: 0 })
        );
    }

    #[test]
    fn validate_rejects_back_rank_pawns() {
        let mut board = Board::empty();
        board.put(Square::E1, Piece::WHITE_KING);
        board.put(Square::E8, Piece::BLACK_KING);
        board.put(Square::A8, Piece::WHITE_PAWN);
        assert_eq!(board.validate(), Err(BoardError::PawnsOnBackRank));
    }
}
