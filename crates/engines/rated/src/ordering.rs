//! Move ordering for alpha-beta pruning
//!
//! Orders moves to maximize alpha-beta pruning efficiency by trying
//! the most promising moves first. Stronger profiles add positional
//! bonuses on top of the tactical ones.

use chess_core::{file_of, rank_of, sq, Game, Move, PieceKind};

use crate::eval::piece_value;
use crate::profile::StrengthProfile;

const CENTER_BONUS: i32 = 30;
const DEVELOPMENT_BONUS: i32 = 25;
const CASTLING_BONUS: i32 = 40;
const PAWN_ADVANCE_BONUS: i32 = 15;
const PAWN_CHAIN_BONUS: i32 = 20;

/// Heuristic score of a single move; higher is tried first.
pub fn move_score(game: &Game, mv: &Move, profile: &StrengthProfile) -> i32 {
    let mut score = 0;

    if let Some(victim) = mv.captured {
        score += piece_value(victim) - piece_value(mv.piece) / 10;
    }
    if let Some(promo) = mv.promotion {
        score += piece_value(promo);
    }

    if profile.advanced_ordering {
        let mover = game.side_to_move();
        let to_file = file_of(mv.to);
        let to_rank = rank_of(mv.to);

        if (3..=4).contains(&to_file) && (3..=4).contains(&to_rank) {
            score += CENTER_BONUS;
        }
        if matches!(mv.piece, PieceKind::Knight | PieceKind::Bishop)
            && rank_of(mv.from) == mover.back_rank()
        {
            score += DEVELOPMENT_BONUS;
        }
        if mv.is_castle() {
            score += CASTLING_BONUS;
        }
        if mv.piece == PieceKind::Pawn {
            if to_rank == 3 || to_rank == 4 {
                score += PAWN_ADVANCE_BONUS;
            }
            if supported_by_pawn(game, mv) {
                score += PAWN_CHAIN_BONUS;
            }
        }
    }

    score
}

/// A friendly pawn stands diagonally behind the destination square.
fn supported_by_pawn(game: &Game, mv: &Move) -> bool {
    let mover = game.side_to_move();
    let behind = rank_of(mv.to) - mover.forward();
    [-1, 1].iter().any(|df| {
        sq(file_of(mv.to) + df, behind)
            .filter(|&s| s != mv.from)
            .and_then(|s| game.piece_at(s))
            .is_some_and(|p| p.kind == PieceKind::Pawn && p.color == mover)
    })
}

/// Sorts moves by descending heuristic score. The sort is stable, so equal
/// scores keep generation order.
pub fn order_moves(game: &Game, moves: Vec<Move>, profile: &StrengthProfile) -> Vec<Move> {
    let mut scored: Vec<(i32, Move)> = moves
        .into_iter()
        .map(|mv| (move_score(game, &mv, profile), mv))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, mv)| mv).collect()
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
