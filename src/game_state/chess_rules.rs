//! Canonical chess-rule constants.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-move-clock threshold for the fifty-move rule (100 half moves).
pub const FIFTY_MOVE_RULE_HALFMOVES: u16 = 100;
