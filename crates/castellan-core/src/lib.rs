//! Core chess rules: board model, movement rules, king safety, castling,
//! move execution and terminal state detection.

mod board;
mod castling;
mod chess_move;
mod color;
mod config;
mod diagonal;
mod error;
mod file;
mod game;
mod make_move;
mod outcome;
mod piece;
mod piece_kind;
mod rank;
mod rules;
mod square;
mod square_state;
mod threat;

pub use board::{Board, CASTLE_SQUARES};
pub use castling::CastleSide;
pub use chess_move::{HistoryEntry, MoveKind, PromotionPiece};
pub use color::Color;
pub use config::RulesConfig;
pub use diagonal::{DIAGONAL_COUNT, DIAGONALS, DiagonalFamily, DiagonalIndex};
pub use error::{BoardError, MoveError};
pub use file::File;
pub use game::{Game, new_game};
pub use outcome::Outcome;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
pub use square_state::{EnPassantMarker, SquareState};
pub use threat::Threat;
