//! UCI command handling.

use std::io::{self, Write};

use chess_core::{Engine, Game};
use rated_engine::{describe_opening, BOT_PRESETS, DEFAULT_RATING};

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One UCI conversation: the engine plus the position the GUI last set.
pub struct Session<E: Engine> {
    engine: E,
    game: Game,
}

impl<E: Engine> Session<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            game: Game::startpos(),
        }
    }

    /// Handles one input line, writing any replies to `out`.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };

        match command {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name UCI_Elo type spin default {DEFAULT_RATING} min 100 max 3200"
                )?;
                let bots: String = BOT_PRESETS
                    .iter()
                    .map(|b| format!(" var {}", b.name))
                    .collect();
                writeln!(out, "option name Bot type combo default Club Player{bots}")?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(args),
            "ucinewgame" => {
                self.game = Game::startpos();
                self.engine.new_game();
            }
            "position" => self.set_position(args),
            // Time arguments are ignored: the rating decides the budget.
            "go" => self.go(out)?,
            "quit" => return Ok(Flow::Quit),
            other => tracing::debug!(command = other, "ignoring unknown command"),
        }

        out.flush()?;
        Ok(Flow::Continue)
    }

    /// `setoption name <name...> [value <value...>]`
    fn set_option(&mut self, args: &[&str]) {
        let Some(name_at) = args.iter().position(|t| *t == "name") else {
            tracing::warn!("setoption without a name");
            return;
        };
        let value_at = args.iter().position(|t| *t == "value");
        let Some(name) = args.get(name_at + 1..value_at.unwrap_or(args.len())) else {
            tracing::warn!("malformed setoption");
            return;
        };
        let name = name.join(" ");
        let value = value_at
            .map(|i| args[i + 1..].join(" "))
            .unwrap_or_default();

        if self.engine.set_option(&name, &value) {
            tracing::info!(%name, %value, "option set");
        } else {
            tracing::warn!(%name, %value, "unsupported option or value");
        }
    }

    /// `position (startpos | fen <fields...>) [moves <uci...>]`
    ///
    /// A bad FEN leaves the previous position in place. Moves are applied
    /// up to the first one that is not legal.
    ///
    /// Only the listed moves become game history, so a bare `fen` inside the
    /// opening window is looked up in the book as the starting position.
    fn set_position(&mut self, args: &[&str]) {
        let (mut game, rest) = match args.split_first() {
            Some((&"startpos", rest)) => (Game::startpos(), rest),
            Some((&"fen", rest)) => {
                let fields = rest.iter().take_while(|t| **t != "moves").count();
                match Game::from_fen(&rest[..fields].join(" ")) {
                    Ok(game) => (game, &rest[fields..]),
                    Err(err) => {
                        tracing::warn!(%err, "ignoring position command");
                        return;
                    }
                }
            }
            _ => {
                tracing::warn!("position needs `startpos` or `fen`");
                return;
            }
        };

        if let Some((&"moves", moves)) = rest.split_first() {
            for text in moves {
                if let Err(err) = game.play_uci(text) {
                    tracing::warn!(%err, "stopping at unplayable move");
                    break;
                }
            }
        }
        self.game = game;
    }

    fn go<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let opening = describe_opening(&self.game.history());
        if !opening.is_empty() {
            writeln!(out, "info string opening {opening}")?;
        }

        let result = self.engine.search(&mut self.game);
        if !result.from_book && result.best_move.is_some() {
            writeln!(
                out,
                "info depth {} score cp {} nodes {}",
                result.depth, result.score, result.nodes
            )?;
        }

        match result.best_move {
            Some(mv) => writeln!(out, "bestmove {}", mv.lan),
            None => writeln!(out, "bestmove 0000"),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
