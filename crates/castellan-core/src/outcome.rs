//! Terminal state detection: checkmate, stalemate and the fifty-move draw.

use std::fmt;

use tracing::debug;

use crate::color::Color;
use crate::game::Game;
use crate::square::Square;

/// State of the game from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The side still has a move that keeps its king safe.
    Ongoing,
    /// The side is in check and has no safe move.
    Checkmate,
    /// The side is not in check and has no safe move, or the fifty-move
    /// limit was reached. Both are draws.
    Stalemate,
}

impl Outcome {
    /// Return `true` for checkmate and stalemate.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Ongoing => "ongoing",
            Outcome::Checkmate => "checkmate",
            Outcome::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

impl Game {
    /// Judge the position for `color`, taken as the side to move.
    ///
    /// The fifty-move limit wins over everything else. Otherwise the game is
    /// ongoing as soon as one move of `color` (castling included) is found
    /// that leaves its king safe; without one it is checkmate when `color` is
    /// in check and stalemate when not.
    pub fn evaluate(&self, color: Color) -> Outcome {
        if self.plies_since_irreversible() >= self.config.fifty_move_plies {
            debug!(turn = self.turn, fifty = self.fifty, "fifty-move limit reached");
            return Outcome::Stalemate;
        }

        if self.safe_moves(color).next().is_some() {
            return Outcome::Ongoing;
        }

        let outcome = if self.in_check(color) {
            Outcome::Checkmate
        } else {
            Outcome::Stalemate
        };
        debug!(turn = self.turn, %color, %outcome, "game over");
        outcome
    }

    /// Judge whether the move `mover` just played ended the game, by
    /// evaluating the position for the opponent.
    #[inline]
    pub fn evaluate_after_move(&self, mover: Color) -> Outcome {
        self.evaluate(!mover)
    }

    /// Every move of `color` that leaves its king safe, as `(from, to)` pairs.
    ///
    /// Pieces are visited rank by rank from rank 1, file a first, and each
    /// piece's destinations in the same order.
    pub fn legal_moves(&self, color: Color) -> Vec<(Square, Square)> {
        self.safe_moves(color).collect()
    }

    fn safe_moves(&self, color: Color) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.board.pieces(color).flat_map(move |(from, _)| {
            Square::all()
                .filter(move |&to| self.is_safe_move(from, to, color))
                .map(move |to| (from, to))
        })
    }

    fn is_safe_move(&self, from: Square, to: Square, color: Color) -> bool {
        (self.is_legal(from, to, color) && !self.is_threatened(from, to, color))
            || self.can_castle(from, to, color)
    }
}
