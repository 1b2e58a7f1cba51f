//! Rating → search configuration.

use std::time::Duration;

use chess_core::{Game, PieceKind};

/// Blunder guard threshold for profiles that enable it, in centipawns.
pub const BLUNDER_THRESHOLD: i32 = -200;

/// Search parameters derived from an opponent rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthProfile {
    pub max_depth: u8,
    pub time_budget: Duration,
    /// Book is consulted while the full-move number is at most this
    pub opening_move_limit: u32,
    pub advanced_ordering: bool,
    pub blunder_threshold: Option<i32>,
}

impl StrengthProfile {
    /// Resolves a profile from a rating. Any rating resolves; there is no
    /// upper or lower bound, only the threshold ladder.
    pub fn resolve(rating: u32, endgame: bool) -> Self {
        let bonus = |extra: u8| if endgame { extra } else { 0 };
        if rating >= 2000 {
            Self {
                max_depth: 6 + bonus(2),
                time_budget: Duration::from_millis(5000),
                opening_move_limit: 20,
                advanced_ordering: true,
                blunder_threshold: Some(BLUNDER_THRESHOLD),
            }
        } else if rating >= 1800 {
            Self {
                max_depth: 5 + bonus(1),
                time_budget: Duration::from_millis(3000),
                opening_move_limit: 15,
                advanced_ordering: true,
                blunder_threshold: Some(BLUNDER_THRESHOLD),
            }
        } else {
            Self {
                max_depth: 4 + bonus(1),
                time_budget: Duration::from_millis(2000),
                opening_move_limit: 10,
                advanced_ordering: false,
                blunder_threshold: None,
            }
        }
    }

    pub fn for_game(rating: u32, game: &Game) -> Self {
        Self::resolve(rating, is_endgame(game))
    }
}

/// Structural endgame test over every piece on the board, kings included:
/// at most 12 pieces, or at most 14 once the queens are gone.
pub fn is_endgame(game: &Game) -> bool {
    let mut total = 0;
    let mut queens = 0;
    for (_, piece) in game.pieces() {
        total += 1;
        if piece.kind == PieceKind::Queen {
            queens += 1;
        }
    }
    total <= 12 || (queens == 0 && total <= 14)
}

/// Named opponents offered to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotPreset {
    pub name: &'static str,
    pub rating: u32,
    pub description: &'static str,
}

pub const BOT_PRESETS: [BotPreset; 4] = [
    BotPreset {
        name: "Rookie Bot",
        rating: 800,
        description: "Makes basic moves, suitable for beginners",
    },
    BotPreset {
        name: "Club Player",
        rating: 1200,
        description: "Plays like an average club player",
    },
    BotPreset {
        name: "Expert Bot",
        rating: 1800,
        description: "Strong tactical player with solid strategy",
    },
    BotPreset {
        name: "Master Bot",
        rating: 2200,
        description: "Plays at master level with deep calculations",
    },
];

/// Looks a preset up by name, ignoring case.
pub fn preset(name: &str) -> Option<&'static BotPreset> {
    BOT_PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod profile_tests;
