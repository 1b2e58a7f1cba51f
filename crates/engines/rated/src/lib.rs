//! Rating-calibrated chess engine
//!
//! Picks a move for the side to move at a strength derived from an
//! opponent rating:
//! - weighted opening book while the game is young
//! - negamax with alpha-beta pruning and quiescence, depth and time from
//!   the rating
//! - a one-ply blunder guard for stronger profiles

pub mod book;
pub mod cache;
pub mod eval;
pub mod guard;
pub mod ordering;
pub mod profile;
pub mod search;

use chess_core::{Engine, Game, Move, SearchResult, TimeBudget};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use book::{BookError, OpeningBook, OpeningEntry};
pub use cache::EvalCache;
pub use eval::{evaluate, MATE_SCORE};
pub use profile::{preset, BotPreset, StrengthProfile, BOT_PRESETS};

/// Rating used when none is configured (the "Club Player" preset).
pub const DEFAULT_RATING: u32 = 1200;

/// Engine that keeps its evaluation cache and random source across moves.
#[derive(Debug)]
pub struct RatedEngine {
    rating: u32,
    cache: EvalCache,
    rng: StdRng,
    book: &'static OpeningBook,
}

impl Default for RatedEngine {
    fn default() -> Self {
        Self::new(DEFAULT_RATING)
    }
}

impl RatedEngine {
    pub fn new(rating: u32) -> Self {
        Self::with_rng(rating, StdRng::from_entropy())
    }

    /// Same as [`RatedEngine::new`] but with reproducible book choices.
    pub fn with_seed(rating: u32, seed: u64) -> Self {
        Self::with_rng(rating, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rating: u32, rng: StdRng) -> Self {
        Self {
            rating,
            cache: EvalCache::new(),
            rng,
            book: OpeningBook::builtin(),
        }
    }

    pub fn rating(&self) -> u32 {
        self.rating
    }

    pub fn set_rating(&mut self, rating: u32) {
        self.rating = rating;
    }

    pub fn cache(&self) -> &EvalCache {
        &self.cache
    }

    /// Book move for the current position, if the game is still inside the
    /// profile's opening window.
    fn book_move(&mut self, game: &Game, profile: &StrengthProfile, legal: &[Move]) -> Option<Move> {
        if game.fullmove_number() > profile.opening_move_limit {
            return None;
        }
        self.book.lookup(&game.history(), legal, &mut self.rng)
    }
}

impl Engine for RatedEngine {
    fn search(&mut self, game: &mut Game) -> SearchResult {
        let legal = game.legal_moves();
        if legal.is_empty() {
            return SearchResult::default();
        }

        let profile = StrengthProfile::for_game(self.rating, game);

        if let Some(mv) = self.book_move(game, &profile, &legal) {
            return SearchResult {
                best_move: Some(mv),
                from_book: true,
                ..SearchResult::default()
            };
        }

        let clock = TimeBudget::start(profile.time_budget);
        let outcome = search::pick_best_move(game, &profile, &clock);
        let best_move = outcome
            .best_move
            .map(|mv| guard::review(game, mv, &legal, &profile, &mut self.cache));

        SearchResult {
            best_move,
            score: outcome.score,
            depth: profile.max_depth,
            nodes: outcome.nodes,
            stopped: outcome.stopped,
            from_book: false,
        }
    }

    fn name(&self) -> &str {
        "Rated v0.1"
    }

    fn new_game(&mut self) {
        self.cache.clear();
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        let value = value.trim();
        if name.eq_ignore_ascii_case("UCI_Elo") || name.eq_ignore_ascii_case("Elo") {
            match value.parse::<u32>() {
                Ok(rating) => {
                    self.rating = rating;
                    true
                }
                Err(_) => false,
            }
        } else if name.eq_ignore_ascii_case("Bot") {
            match preset(value) {
                Some(bot) => {
                    self.rating = bot.rating;
                    true
                }
                None => false,
            }
        } else {
            false
        }
    }
}

/// Chooses a move for the side to move at `rating` strength.
///
/// Returns `None` when the side to move has no legal moves. The game is
/// handed back unchanged.
pub fn choose_move(game: &mut Game, rating: u32) -> Option<Move> {
    RatedEngine::new(rating).search(game).best_move
}

/// Book move the engine could play here at `rating`, if any.
pub fn lookup_opening_move(game: &Game, rating: u32) -> Option<Move> {
    let profile = StrengthProfile::for_game(rating, game);
    if game.fullmove_number() > profile.opening_move_limit {
        return None;
    }
    OpeningBook::builtin().lookup(&game.history(), &game.legal_moves(), &mut rand::thread_rng())
}

/// Name of the opening a SAN move list belongs to, or `""`.
pub fn describe_opening(history: &[String]) -> String {
    OpeningBook::builtin().opening_name(history)
}
