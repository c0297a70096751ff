//! King-safety probing by copy-make.
//!
//! A probe applies a hypothetical move to a copy of the board and scans the
//! enemy pieces for one that could then capture the mover's king. The game's
//! own board is never modified, so nested probes (castling checks one per
//! transit square, the terminal search one per candidate move) cannot observe
//! each other's state.

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::game::Game;
use crate::piece_kind::PieceKind;
use crate::rules;
use crate::square::Square;

/// Result of probing a move for king safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Threat {
    attacker: Option<Square>,
}

impl Threat {
    /// Return `true` if the king would be attacked.
    #[inline]
    pub fn is_threatened(self) -> bool {
        self.attacker.is_some()
    }

    /// The first attacking square found, scanning rank 1 to 8 and file a to h.
    #[inline]
    pub fn attacker(self) -> Option<Square> {
        self.attacker
    }
}

impl Board {
    /// Return a copy of the board with the piece on `from` moved to `to`.
    ///
    /// A pawn moving diagonally onto an empty square also removes the pawn it
    /// passes, as an en-passant capture would. `from == to` yields an
    /// unchanged copy.
    pub(crate) fn probe(&self, from: Square, to: Square) -> Board {
        let mut board = *self;
        if from == to {
            return board;
        }
        let (file_delta, _) = from.delta(to);
        if board.piece_on(from) == Some(PieceKind::Pawn) && file_delta != 0 && !board.is_occupied(to) {
            board.take(Square::new(to.file(), from.rank()));
        }
        board.relocate(from, to);
        board
    }
}

/// Return the first piece of `by` (in rank-major, file-minor order) able to
/// move onto `target`.
pub(crate) fn first_attacker(board: &Board, turn: u32, target: Square, by: Color) -> Option<Square> {
    board
        .pieces(by)
        .map(|(sq, _)| sq)
        .find(|&sq| rules::is_legal(board, turn, sq, target, by))
}

impl Game {
    /// Probe whether moving the piece on `from` to `to` would leave the king
    /// of `color` attacked.
    ///
    /// `from == to` probes the current position as it stands. A side without
    /// a king is never threatened.
    pub fn threat(&self, from: Square, to: Square, color: Color) -> Threat {
        let probe = self.board.probe(from, to);
        let attacker = probe
            .king_square(color)
            .and_then(|king| first_attacker(&probe, self.turn, king, !color));
        trace!(%from, %to, %color, ?attacker, "threat probe");
        Threat { attacker }
    }

    /// Return `true` if moving `from -> to` would leave `color`'s king attacked.
    pub fn is_threatened(&self, from: Square, to: Square, color: Color) -> bool {
        self.threat(from, to, color).is_threatened()
    }

    /// The square of the first enemy piece attacking `color`'s king right now.
    pub fn check_from(&self, color: Color) -> Option<Square> {
        let king = self.board.king_square(color)?;
        first_attacker(&self.board, self.turn, king, !color)
    }

    /// Return `true` if `color`'s king is attacked right now.
    pub fn in_check(&self, color: Color) -> bool {
        self.check_from(color).is_some()
    }
}
