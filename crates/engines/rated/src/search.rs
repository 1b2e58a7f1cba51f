//! Negamax search with alpha-beta pruning and a quiescence extension
//!
//! The tree is walked in place on the caller's [`Game`]: every simulated
//! move goes through [`Game::with_move`], which undoes it on the way out.

use chess_core::{Game, Move, TimeBudget};

use crate::eval::relative_eval;
use crate::ordering::order_moves;
use crate::profile::StrengthProfile;

/// Bound larger than any reachable score, mate included.
pub const INFINITY: i32 = 1_000_000_000;

/// Plies of tactical moves examined below the main search horizon.
pub const QUIESCENCE_DEPTH: u8 = 4;

/// Result of a root search.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Best move found; `None` only when there are no legal moves
    pub best_move: Option<Move>,
    /// Score of `best_move` from the side to move's perspective
    pub score: i32,
    pub nodes: u64,
    /// True if the clock ran out somewhere in the tree
    pub stopped: bool,
}

/// Per-call search state.
pub struct SearchContext<'a> {
    profile: &'a StrengthProfile,
    clock: &'a TimeBudget,
    pub nodes: u64,
    pub stopped: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(profile: &'a StrengthProfile, clock: &'a TimeBudget) -> Self {
        Self {
            profile,
            clock,
            nodes: 0,
            stopped: false,
        }
    }

    /// Recursive negamax with alpha-beta pruning. Scores are from the side
    /// to move's perspective.
    ///
    /// When the clock has expired the node is scored statically instead of
    /// searched, so a late answer is shallow rather than missing.
    pub fn negamax(&mut self, game: &mut Game, depth: u8, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if self.clock.expired() {
            self.stopped = true;
            return relative_eval(game);
        }

        if depth == 0 || game.is_game_over() {
            return self.quiescence(game, alpha, beta, QUIESCENCE_DEPTH);
        }

        let moves = order_moves(game, game.legal_moves(), self.profile);
        let mut best = -INFINITY;

        for mv in &moves {
            let Ok(score) = game.with_move(mv, |g| -self.negamax(g, depth - 1, -beta, -alpha))
            else {
                continue;
            };

            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break; // Beta cutoff
            }
        }

        best
    }

    /// Fail-hard quiescence over captures, promotions and checks.
    ///
    /// With `depth > 0` the result always lies inside `[alpha, beta]`.
    pub fn quiescence(&mut self, game: &mut Game, mut alpha: i32, beta: i32, depth: u8) -> i32 {
        self.nodes += 1;

        let stand_pat = relative_eval(game);
        if depth == 0 {
            return stand_pat;
        }
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let tactical: Vec<Move> = game
            .legal_moves()
            .into_iter()
            .filter(Move::is_tactical)
            .collect();

        for mv in &tactical {
            let Ok(score) =
                game.with_move(mv, |g| -self.quiescence(g, -beta, -alpha, depth - 1))
            else {
                continue;
            };

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}

/// Searches every root move to `profile.max_depth` plies and returns the
/// best one. Ties go to the move generated first.
///
/// The game is left exactly as it was passed in.
pub fn pick_best_move(
    game: &mut Game,
    profile: &StrengthProfile,
    clock: &TimeBudget,
) -> SearchOutcome {
    let moves = game.legal_moves();
    if moves.is_empty() {
        return SearchOutcome::default();
    }

    let mut ctx = SearchContext::new(profile, clock);
    let depth = profile.max_depth.saturating_sub(1);
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let Ok(score) = game.with_move(&mv, |g| -ctx.negamax(g, depth, -INFINITY, INFINITY))
        else {
            continue;
        };

        if best.as_ref().map_or(true, |(_, b)| score > *b) {
            best = Some((mv, score));
        }
    }

    let (best_move, score) = match best {
        Some((mv, score)) => (Some(mv), score),
        None => (None, 0),
    };

    tracing::debug!(
        best = best_move.as_ref().map(|m| m.san.as_str()).unwrap_or("-"),
        score,
        nodes = ctx.nodes,
        stopped = ctx.stopped,
        elapsed_ms = clock.elapsed().as_millis() as u64,
        "search finished"
    );

    SearchOutcome {
        best_move,
        score,
        nodes: ctx.nodes,
        stopped: ctx.stopped,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
