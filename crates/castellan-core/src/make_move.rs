//! Move validation and execution.

use tracing::debug;

use crate::castling::CastleSide;
use crate::chess_move::{HistoryEntry, MoveKind, PromotionPiece};
use crate::color::Color;
use crate::error::MoveError;
use crate::game::Game;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rules::{captures_en_passant, is_double_step};
use crate::square::Square;
use crate::square_state::EnPassantMarker;

impl Game {
    /// Validate and commit a move for `color`.
    ///
    /// A king move from its home square to the c- or g-file is treated as a
    /// castle when [`Game::can_castle`] allows it. Any other move must pass
    /// [`Game::is_legal`] and leave the mover's king safe. A pawn reaching the
    /// last rank needs `promotion` to be a queen, rook, knight or bishop;
    /// `promotion` is ignored for every other move.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] describing the first failed check. The game is
    /// left unchanged on error.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        color: Color,
        promotion: Option<PieceKind>,
    ) -> Result<HistoryEntry, MoveError> {
        let piece = self
            .board
            .colored_piece_on(from)
            .ok_or(MoveError::EmptyOrigin { square: from })?;
        if piece.color() != color {
            return Err(MoveError::NotOwnPiece { square: from, color });
        }

        if piece.kind() == PieceKind::King
            && let Some(side) = self.castle_side(from, to, color)
        {
            return Ok(self.commit_castle(side, color));
        }

        if !self.is_legal(from, to, color) {
            return Err(MoveError::Illegal {
                kind: piece.kind(),
                from,
                to,
            });
        }
        if let Some(attacker) = self.threat(from, to, color).attacker() {
            return Err(MoveError::LeavesKingInCheck { color, attacker });
        }

        let promotion = if piece.kind() == PieceKind::Pawn && to.rank() == color.promotion_rank() {
            let kind = promotion.ok_or(MoveError::PromotionRequired { square: to })?;
            Some(PromotionPiece::try_from(kind)?)
        } else {
            None
        };

        Ok(self.commit(piece, from, to, promotion))
    }

    /// Commit a move that has already been validated.
    fn commit(
        &mut self,
        piece: Piece,
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
    ) -> HistoryEntry {
        let color = piece.color();
        let is_pawn = piece.kind() == PieceKind::Pawn;
        let en_passant = is_pawn && captures_en_passant(&self.board, self.turn, from, to, color);
        let double_step = is_pawn && is_double_step(from, to, color);

        let mut captured = self.board.relocate(from, to).is_some();
        if en_passant {
            captured |= self.board.take(Square::new(to.file(), from.rank())).is_some();
        }

        if captured || is_pawn {
            self.fifty = self.turn;
        }

        if double_step {
            let marker = EnPassantMarker {
                turn: self.turn + 1,
                file: from.file(),
            };
            for side in [-1, 1] {
                if let Some(sq) = to.offset(side, 0) {
                    self.board.set_en_passant_marker(sq, marker);
                }
            }
        }

        // A king or rook leaving its home square, or a rook captured on it,
        // ends castling from that square.
        self.board.revoke_castle_flag(from);
        self.board.revoke_castle_flag(to);

        if let Some(promo) = promotion {
            self.board.put(to, piece.with_kind(promo.to_piece_kind()));
        }

        let kind = match promotion {
            Some(promo) => MoveKind::Promotion(promo),
            None if en_passant => MoveKind::EnPassant,
            None if double_step => MoveKind::DoubleStep,
            None => MoveKind::Normal,
        };
        self.record(HistoryEntry {
            piece: piece.kind(),
            from,
            to,
            kind,
            capture: captured,
        })
    }

    /// Move king and rook for a castle that has already been validated.
    fn commit_castle(&mut self, side: CastleSide, color: Color) -> HistoryEntry {
        let king_from = CastleSide::king_origin(color);
        let king_to = side.king_destination(color);
        let rook_from = side.rook_origin(color);

        self.board.relocate(king_from, king_to);
        self.board.relocate(rook_from, side.rook_destination(color));
        self.board.revoke_castle_flag(king_from);
        self.board.revoke_castle_flag(rook_from);

        self.record(HistoryEntry {
            piece: PieceKind::King,
            from: king_from,
            to: king_to,
            kind: MoveKind::Castle,
            capture: false,
        })
    }

    fn record(&mut self, entry: HistoryEntry) -> HistoryEntry {
        debug!(
            turn = self.turn,
            piece = %entry.piece,
            from = %entry.from,
            to = %entry.to,
            kind = ?entry.kind,
            capture = entry.capture,
            "move committed"
        );
        self.history.insert(self.turn, entry);
        self.turn += 1;
        entry
    }
}
