//! One-ply safety filter applied to the search's choice.

use chess_core::{Game, Move, TimeBudget};

use crate::cache::EvalCache;
use crate::profile::StrengthProfile;
use crate::search::{SearchContext, INFINITY, QUIESCENCE_DEPTH};

/// Score of playing `mv`, from the mover's perspective, once the captures
/// and checks that follow it have been played out.
///
/// Settled positions are memoised in `cache` by FEN. `None` if the move
/// could not be applied.
pub fn one_ply_score(
    game: &mut Game,
    mv: &Move,
    profile: &StrengthProfile,
    cache: &mut EvalCache,
) -> Option<i32> {
    game.with_move(mv, |g| {
        let key = g.fen();
        let settled = match cache.get(&key) {
            Some(score) => score,
            None => {
                let clock = TimeBudget::unlimited();
                let mut ctx = SearchContext::new(profile, &clock);
                let score = ctx.quiescence(g, -INFINITY, INFINITY, QUIESCENCE_DEPTH);
                cache.insert(key, score);
                score
            }
        };
        -settled
    })
    .ok()
}

/// Replaces `candidate` with the first of `root_moves` that clears the
/// profile's blunder threshold, if `candidate` itself does not.
///
/// Moves are tried in `root_moves` order. When nothing clears the threshold
/// the candidate is kept. Profiles without a threshold return it untouched.
pub fn review(
    game: &mut Game,
    candidate: Move,
    root_moves: &[Move],
    profile: &StrengthProfile,
    cache: &mut EvalCache,
) -> Move {
    let Some(threshold) = profile.blunder_threshold else {
        return candidate;
    };

    match one_ply_score(game, &candidate, profile, cache) {
        Some(score) if score < threshold => {
            tracing::debug!(candidate = %candidate.san, score, threshold, "candidate looks like a blunder");
        }
        _ => return candidate,
    }

    for mv in root_moves.iter().filter(|m| **m != candidate) {
        let Some(score) = one_ply_score(game, mv, profile, cache) else {
            continue;
        };
        if score >= threshold {
            tracing::debug!(replaced = %candidate.san, with = %mv.san, score, "blunder guard substituted move");
            return mv.clone();
        }
    }

    tracing::debug!(candidate = %candidate.san, "no safe alternative; keeping candidate");
    candidate
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod guard_tests;
