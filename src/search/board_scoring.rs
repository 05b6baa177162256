//! Static position evaluation.
//!
//! Search delegates static scoring to the `BoardScorer` trait so alternate
//! heuristics can be swapped without touching search code. The production
//! scorer sums material, piece-square bonuses, pawn structure, rook file
//! control, and the bishop pair, in centipawns.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

const DOUBLED_PAWN_PENALTY: i32 = -20;
const ISOLATED_PAWN_PENALTY: i32 = -15;
const CONNECTED_PAWN_BONUS: i32 = 10;
const OPEN_FILE_ROOK_BONUS: i32 = 25;
const SEMI_OPEN_FILE_ROOK_BONUS: i32 = 10;
const BISHOP_PAIR_BONUS: i32 = 50;

// Piece-square tables are white-oriented with row 0 = rank 8; black mirrors
// vertically by indexing row `7 - r`.
#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  0,   0,   0,   5,   5,   0,   0,   0],
];

#[rustfmt::skip]
const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING_MIDGAME_TABLE: [[i32; 8]; 8] = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

#[rustfmt::skip]
const KING_ENDGAME_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-30, -20, -10,   0,   0, -10, -20, -30],
    [-30, -10,  20,  30,  30,  20, -10, -30],
    [-30, -10,  30,  40,  40,  30, -10, -30],
    [-30, -10,  30,  40,  40,  30, -10, -30],
    [-30, -10,  20,  30,  30,  20, -10, -30],
    [-30, -30,   0,   0,   0,   0, -30, -30],
    [-50, -30, -30, -30, -30, -30, -30, -50],
];

/// Centipawn score of `game_state` from `color`'s perspective.
pub fn evaluate(game_state: &GameState, color: Color) -> i32 {
    let endgame = is_endgame(game_state);
    let mut score = 0i32;

    for (square, piece) in game_state.board.occupied() {
        let sign = if piece.color == color { 1 } else { -1 };
        score += sign * (piece_value(piece.kind) + square_bonus(piece.kind, piece.color, square, endgame));
    }

    let opponent = color.opposite();
    score += pawn_structure(game_state, color) - pawn_structure(game_state, opponent);
    score += rook_files(game_state, color) - rook_files(game_state, opponent);
    score += bishop_pair(game_state, color) - bishop_pair(game_state, opponent);

    score
}

/// Endgame once the queens are gone or few rooks and minors remain.
fn is_endgame(game_state: &GameState) -> bool {
    let mut queens = 0u32;
    let mut rooks_and_minors = 0u32;

    for (_, piece) in game_state.board.occupied() {
        match piece.kind {
            PieceKind::Queen => queens += 1,
            PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop => rooks_and_minors += 1,
            _ => {}
        }
    }

    queens == 0 || rooks_and_minors <= 4
}

fn square_bonus(kind: PieceKind, color: Color, square: Square, endgame: bool) -> i32 {
    let row = match color {
        Color::White => square.row,
        Color::Black => 7 - square.row,
    } as usize;
    let col = square.col as usize;

    match kind {
        PieceKind::Pawn => PAWN_TABLE[row][col],
        PieceKind::Knight => KNIGHT_TABLE[row][col],
        PieceKind::Bishop => BISHOP_TABLE[row][col],
        PieceKind::Rook => ROOK_TABLE[row][col],
        PieceKind::Queen => QUEEN_TABLE[row][col],
        PieceKind::King => {
            if endgame {
                KING_ENDGAME_TABLE[row][col]
            } else {
                KING_MIDGAME_TABLE[row][col]
            }
        }
    }
}

fn pawn_files(game_state: &GameState, color: Color) -> [u32; 8] {
    let mut files = [0u32; 8];
    for (square, piece) in game_state.board.occupied() {
        if piece.kind == PieceKind::Pawn && piece.color == color {
            files[square.col as usize] += 1;
        }
    }
    files
}

fn pawn_structure(game_state: &GameState, color: Color) -> i32 {
    let files = pawn_files(game_state, color);
    let mut score = 0i32;

    for (file, &count) in files.iter().enumerate() {
        if count == 0 {
            continue;
        }

        let neighbors = neighbor_pawn_count(&files, file);
        for _ in 0..count {
            if count > 1 {
                score += DOUBLED_PAWN_PENALTY;
            }
            if neighbors == 0 {
                score += ISOLATED_PAWN_PENALTY;
            } else {
                score += CONNECTED_PAWN_BONUS;
            }
        }
    }

    score
}

fn neighbor_pawn_count(files: &[u32; 8], file: usize) -> u32 {
    let left = if file > 0 { files[file - 1] } else { 0 };
    let right = if file < 7 { files[file + 1] } else { 0 };
    left + right
}

fn rook_files(game_state: &GameState, color: Color) -> i32 {
    let own_pawns = pawn_files(game_state, color);
    let enemy_pawns = pawn_files(game_state, color.opposite());
    let mut score = 0i32;

    for (square, piece) in game_state.board.occupied() {
        if piece.kind != PieceKind::Rook || piece.color != color {
            continue;
        }
        let file = square.col as usize;
        if own_pawns[file] == 0 && enemy_pawns[file] == 0 {
            score += OPEN_FILE_ROOK_BONUS;
        } else if own_pawns[file] == 0 {
            score += SEMI_OPEN_FILE_ROOK_BONUS;
        }
    }

    score
}

fn bishop_pair(game_state: &GameState, color: Color) -> i32 {
    let bishops = game_state
        .board
        .occupied()
        .filter(|(_, piece)| piece.kind == PieceKind::Bishop && piece.color == color)
        .count();
    if bishops >= 2 {
        BISHOP_PAIR_BONUS
    } else {
        0
    }
}

/// The production scorer: `evaluate` relative to the side to move.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl BoardScorer for PositionalScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        evaluate(game_state, game_state.side_to_move)
    }
}
