//! Closed error taxonomy for the public engine surface.
//!
//! Only the state-advancing `play_move` path and the FEN codec can fail;
//! move generation, status queries, and search are total over well-formed
//! game states.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The provided FEN string is not a well-formed 6-field position.
    MalformedFen(String),
    /// The requested move is not among the legal moves from its origin square.
    IllegalMove,
    /// A move was attempted on a position that is already checkmate or drawn.
    GameAlreadyOver,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::MalformedFen(msg) => write!(f, "malformed FEN: {msg}"),
            ChessError::IllegalMove => write!(f, "illegal move"),
            ChessError::GameAlreadyOver => write!(f, "game is already over"),
        }
    }
}

impl Error for ChessError {}
