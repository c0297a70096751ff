//! Committed moves as recorded in the game history.

use std::fmt;

use crate::error::MoveError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The category of a committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Any move not covered below, captures included.
    Normal,
    /// A pawn advancing two squares from its starting rank.
    DoubleStep,
    /// A pawn capturing a pawn that has just passed it.
    EnPassant,
    /// King and rook moving together.
    Castle,
    /// A pawn reaching the last rank, with the chosen piece.
    Promotion(PromotionPiece),
}

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Queen = 0,
    Rook = 1,
    Knight = 2,
    Bishop = 3,
}

impl PromotionPiece {
    /// All promotion pieces.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
        }
    }
}

impl TryFrom<PieceKind> for PromotionPiece {
    type Error = MoveError;

    fn try_from(kind: PieceKind) -> Result<Self, MoveError> {
        match kind {
            PieceKind::Queen => Ok(PromotionPiece::Queen),
            PieceKind::Rook => Ok(PromotionPiece::Rook),
            PieceKind::Knight => Ok(PromotionPiece::Knight),
            PieceKind::Bishop => Ok(PromotionPiece::Bishop),
            PieceKind::Pawn | PieceKind::King => Err(MoveError::InvalidPromotion { kind }),
        }
    }
}

impl fmt::Display for PromotionPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_piece_kind())
    }
}

/// One entry of the move history.
///
/// `kind` is the piece that moved, before any promotion. A castle is
/// recorded as the king's move to the c- or g-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    /// Piece kind that moved.
    pub piece: PieceKind,
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Move category.
    pub kind: MoveKind,
    /// Whether a piece was captured, en passant included.
    pub capture: bool,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.piece, self.from, self.to)?;
        if let MoveKind::Promotion(promo) = self.kind {
            write!(f, " ({promo})")?;
        }
        Ok(())
    }
}
