//! Game state: the board plus turn counters and move history.

use std::collections::BTreeMap;

use crate::board::Board;
use crate::chess_move::HistoryEntry;
use crate::color::Color;
use crate::config::RulesConfig;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rules;
use crate::square::Square;

/// A game in progress.
///
/// Owns the board exclusively. The board only changes through
/// [`Game::apply_move`], which keeps the king cache, castling flags and
/// en-passant markers consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    /// Current turn, starting at 1 and incremented after every committed move.
    pub(crate) turn: u32,
    /// Turn of the last capture or pawn move (0 before any).
    pub(crate) fifty: u32,
    pub(crate) history: BTreeMap<u32, HistoryEntry>,
    pub(crate) config: RulesConfig,
}

/// Start a game from the standard initial position.
pub fn new_game() -> Game {
    Game::new()
}

impl Game {
    /// Start a game from the standard initial position.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position())
    }

    /// Start a game from an arbitrary position, White to move on turn 1.
    pub fn from_board(board: Board) -> Game {
        Game::with_config(board, RulesConfig::default())
    }

    /// Start a game from an arbitrary position under custom rules.
    pub fn with_config(board: Board, config: RulesConfig) -> Game {
        Game {
            board,
            turn: 1,
            fifty: 0,
            history: BTreeMap::new(),
            config,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Return the piece kind on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<PieceKind> {
        self.board.piece_on(sq)
    }

    /// Return the owner of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.board.color_on(sq)
    }

    /// Return the colored piece on the given square, if any.
    #[inline]
    pub fn colored_piece_on(&self, sq: Square) -> Option<Piece> {
        self.board.colored_piece_on(sq)
    }

    /// Return the king square for the given side.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.board.king_square(color)
    }

    /// The current turn number, starting at 1.
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Turn of the last capture or pawn move, 0 if there was none.
    #[inline]
    pub fn fifty_move_counter(&self) -> u32 {
        self.fifty
    }

    /// Plies played since the last capture or pawn move, plus one.
    #[inline]
    pub fn plies_since_irreversible(&self) -> u32 {
        self.turn - self.fifty
    }

    /// White moves on odd turns, Black on even turns.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.turn % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Committed moves keyed by the turn they were played on.
    #[inline]
    pub fn history(&self) -> &BTreeMap<u32, HistoryEntry> {
        &self.history
    }

    /// Return `true` if the piece of `color` on `from` may move to `to`
    /// under its movement pattern, ignoring king safety and castling.
    ///
    /// Returns `false` when `from` is empty or holds an enemy piece, when
    /// `from == to`, and when `to` holds a piece of `color`.
    pub fn is_legal(&self, from: Square, to: Square, color: Color) -> bool {
        rules::is_legal(&self.board, self.turn, from, to, color)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
