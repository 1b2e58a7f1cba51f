//! Static evaluation: material, piece-square tables and mobility.
//!
//! Scores are White-positive. Search converts them to the side to move with
//! [`relative_eval`].

use chess_core::{file_of, rank_of, Color, Game, PieceKind};

/// Score of a checkmated position (negated for the mated side).
pub const MATE_SCORE: i32 = 100_000;

/// Centipawns per legal move of the side to move.
pub const MOBILITY_WEIGHT: i32 = 5;

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

// Tables are laid out as seen from White: index 0 is a8, index 63 is h1.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

/// Positional bonus for a piece of `color` on `sq`. Black reads the tables
/// rank-mirrored.
pub fn square_bonus(kind: PieceKind, color: Color, sq: u8) -> i32 {
    let row = match color {
        Color::White => 7 - rank_of(sq),
        Color::Black => rank_of(sq),
    };
    let idx = (row * 8 + file_of(sq)) as usize;
    let table = match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    table[idx]
}

/// Evaluates the position from White's perspective.
///
/// Returns a score in centipawns:
/// - `-MATE_SCORE` / `MATE_SCORE` when White / Black is checkmated
/// - 0 for any drawn position
/// - otherwise material + piece-square bonuses, plus a mobility term that
///   always favours the side to move
pub fn evaluate(game: &Game) -> i32 {
    if game.is_checkmate() {
        return match game.side_to_move() {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        };
    }
    if game.is_draw() {
        return 0;
    }

    let mut score = 0i32;
    for (sq, pc) in game.pieces() {
        let v = piece_value(pc.kind) + square_bonus(pc.kind, pc.color, sq);
        score += pc.color.sign() * v;
    }

    // Mobility is counted for the mover only.
    score += game.legal_move_count() as i32 * MOBILITY_WEIGHT * game.side_to_move().sign();

    score
}

/// [`evaluate`] converted to the side-to-move's perspective.
#[inline]
pub fn relative_eval(game: &Game) -> i32 {
    evaluate(game) * game.side_to_move().sign()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
