//! Error types for move execution and board validation.

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Reasons a move attempt is refused. The game is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// There is no piece on the origin square.
    #[error("no piece on {square}")]
    EmptyOrigin {
        /// The empty origin square.
        square: Square,
    },
    /// The piece on the origin square belongs to the other side.
    #[error("the piece on {square} does not belong to {color}")]
    NotOwnPiece {
        /// The origin square.
        square: Square,
        /// The side that attempted the move.
        color: Color,
    },
    /// The piece cannot reach the destination, and the move is not a castle.
    #[error("{kind} cannot move from {from} to {to}")]
    Illegal {
        /// Kind of the piece on the origin square.
        kind: PieceKind,
        /// Origin square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// The move would leave the mover's own king attacked.
    #[error("move would leave the {color} king in check from {attacker}")]
    LeavesKingInCheck {
        /// The side that attempted the move.
        color: Color,
        /// The first enemy piece found attacking the king.
        attacker: Square,
    },
    /// A pawn reached the last rank and no promotion piece was chosen.
    #[error("pawn reaching {square} must be promoted")]
    PromotionRequired {
        /// The promotion square.
        square: Square,
    },
    /// The requested promotion piece is not a queen, rook, knight or bishop.
    #[error("cannot promote to {kind}")]
    InvalidPromotion {
        /// The rejected piece kind.
        kind: PieceKind,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// The cached king square disagrees with the board contents.
    #[error("cached {color} king square does not match the board")]
    StaleKingCache {
        /// Which side's cache is stale.
        color: Color,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}
