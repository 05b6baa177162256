//! Core immutable board state representation.
//!
//! `GameState` is the central model for the engine: the mailbox board, turn
//! and rights flags, clocks, and the position-history list maintained by the
//! committing `play_move` path. Every transition yields a new owned value;
//! no in-place mutation is observable across a transition boundary.

use crate::errors::ChessError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Board, CastlingRights, Color, Piece, Square};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    /// Half moves since the last pawn move or capture (fifty-move rule).
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    /// FENs of positions reached through `play_move`, oldest first.
    pub position_history: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::default(),
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            position_history: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }
}
