//! Per-square board state.

use crate::diagonal::DiagonalFamily;
use crate::file::File;
use crate::piece::Piece;
use crate::square::Square;

/// Marks a pawn that may capture en passant on one specific turn.
///
/// Stored on the square of the pawn that may capture. `file` is the file of
/// the enemy pawn that just made a double step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnPassantMarker {
    /// The only turn on which the marker can be used.
    pub turn: u32,
    /// File of the pawn that may be captured.
    pub file: File,
}

/// Everything the board records about a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareState {
    piece: Option<Piece>,
    diagonals: (u8, u8),
    castle: Option<bool>,
    en_passant: Option<EnPassantMarker>,
}

impl SquareState {
    /// An empty square at `sq` with its diagonal ids filled in.
    pub(crate) const fn empty(sq: Square) -> SquareState {
        SquareState {
            piece: None,
            diagonals: (
                DiagonalFamily::TopLeftBottomRight.id_of(sq),
                DiagonalFamily::BottomLeftTopRight.id_of(sq),
            ),
            castle: None,
            en_passant: None,
        }
    }

    /// The piece standing here, if any.
    #[inline]
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Diagonal ids as (top-left→bottom-right, bottom-left→top-right).
    #[inline]
    pub fn diagonals(&self) -> (u8, u8) {
        self.diagonals
    }

    /// The castling flag. `None` on squares no castling piece starts from.
    #[inline]
    pub fn castle(&self) -> Option<bool> {
        self.castle
    }

    /// The en-passant marker, if one was ever stamped here.
    #[inline]
    pub fn en_passant(&self) -> Option<EnPassantMarker> {
        self.en_passant
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, piece: Option<Piece>) {
        self.piece = piece;
    }

    #[inline]
    pub(crate) fn set_castle(&mut self, flag: Option<bool>) {
        self.castle = flag;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, marker: Option<EnPassantMarker>) {
        self.en_passant = marker;
    }
}
