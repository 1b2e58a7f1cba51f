pub mod error;
pub mod game;
pub mod notation;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use error::*;
pub use game::Game;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by move-selection engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Root score in centipawns from the mover's perspective
    pub score: i32,
    /// Search depth used (0 for book moves)
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether the time budget ran out during search
    pub stopped: bool,
    /// Whether the move came from the opening book
    pub from_book: bool,
}

/// Trait that move-selection engines implement.
///
/// The engine gets exclusive access to the game for the duration of the
/// call and must hand it back in the same state it received it.
pub trait Engine: Send {
    /// Choose a move for the side to move.
    fn search(&mut self, game: &mut Game) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "rated-chess"
    }

    /// Reset internal state for a new game (clear caches, history, etc.)
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
