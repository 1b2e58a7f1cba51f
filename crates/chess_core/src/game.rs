//! Game state with an undo stack.
//!
//! [`Game`] wraps a `cozy-chess` board and records every applied move so
//! that search can walk the tree in place (apply, recurse, undo) and so that
//! game-level rules that depend on history (threefold repetition, SAN move
//! list) can be answered.

use cozy_chess::Board;

use crate::error::{GameError, GameResult};
use crate::notation::{describe, has_legal_move, legal_move_count, raw_legal_moves, san_stem};
use crate::types::{from_cozy, to_cozy, Color, Move, Piece, PieceKind};

#[derive(Clone, Debug)]
struct Frame {
    /// Board before `mv` was played
    board: Board,
    mv: Move,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    stack: Vec<Frame>,
}

impl Default for Game {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Game {
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
            stack: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> GameResult<Self> {
        let board = Board::from_fen(fen.trim(), false).map_err(|e| GameError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e:?}"),
        })?;
        Ok(Self {
            board,
            stack: Vec::new(),
        })
    }

    /// Canonical FEN of the current position.
    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    pub fn fullmove_number(&self) -> u32 {
        self.board.fullmove_number() as u32
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.board.halfmove_clock() as u32
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        let cs = to_cozy(sq);
        let kind = self.board.piece_on(cs)?;
        let color = self.board.color_on(cs)?;
        Some(Piece {
            color: color.into(),
            kind: kind.into(),
        })
    }

    /// Every occupied square with its piece, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.board
            .occupied()
            .into_iter()
            .filter_map(move |s| self.piece_at(from_cozy(s)).map(|p| (from_cozy(s), p)))
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let raw = raw_legal_moves(&self.board);
        raw.iter()
            .map(|&(piece, mv)| describe(&self.board, piece, mv, &raw))
            .collect()
    }

    /// Legal moves of the piece standing on `sq`.
    pub fn legal_moves_from(&self, sq: u8) -> Vec<Move> {
        let raw = raw_legal_moves(&self.board);
        raw.iter()
            .filter(|(_, mv)| from_cozy(mv.from) == sq)
            .map(|&(piece, mv)| describe(&self.board, piece, mv, &raw))
            .collect()
    }

    /// Number of legal moves, without building notation.
    pub fn legal_move_count(&self) -> usize {
        legal_move_count(&self.board)
    }

    /// Applies `mv`, which must come from this position's legal moves.
    ///
    /// An illegal or stale move is rejected and the game is left untouched.
    pub fn make_move(&mut self, mv: &Move) -> GameResult<()> {
        let stale = self
            .board
            .piece_on(mv.raw.from)
            .map(PieceKind::from)
            != Some(mv.piece);
        if stale || !self.board.is_legal(mv.raw) {
            tracing::debug!(notation = %mv.san, fen = %self.fen(), "rejected move");
            return Err(GameError::IllegalMove {
                notation: mv.san.clone(),
                fen: self.fen(),
            });
        }
        let before = self.board.clone();
        self.board.play_unchecked(mv.raw);
        self.stack.push(Frame {
            board: before,
            mv: mv.clone(),
        });
        Ok(())
    }

    /// Takes back the last move and returns it.
    pub fn undo(&mut self) -> GameResult<Move> {
        let frame = self.stack.pop().ok_or(GameError::NothingToUndo)?;
        self.board = frame.board;
        Ok(frame.mv)
    }

    /// Plays `mv`, runs `f` on the resulting position, then takes the move
    /// back. The undo happens on every path out of `f`.
    pub fn with_move<R>(&mut self, mv: &Move, f: impl FnOnce(&mut Game) -> R) -> GameResult<R> {
        self.make_move(mv)?;
        let depth = self.stack.len();
        let out = f(self);
        debug_assert_eq!(depth, self.stack.len(), "closure left moves on the stack");
        self.undo()?;
        Ok(out)
    }

    /// Finds the legal move written as `san` and plays it.
    pub fn play_san(&mut self, san: &str) -> GameResult<Move> {
        let wanted = san_stem(san.trim());
        let mv = self
            .legal_moves()
            .into_iter()
            .find(|m| san_stem(&m.san) == wanted)
            .ok_or_else(|| GameError::UnknownMove {
                notation: san.to_string(),
            })?;
        self.make_move(&mv)?;
        Ok(mv)
    }

    /// Finds the legal move written in coordinate notation and plays it.
    ///
    /// Accepts `e1g1` as well as the king-takes-rook form `e1h1` for castling.
    pub fn play_uci(&mut self, text: &str) -> GameResult<Move> {
        let wanted = text.trim().to_ascii_lowercase();
        let mv = self
            .legal_moves()
            .into_iter()
            .find(|m| m.lan == wanted || m.raw.to_string() == wanted)
            .ok_or_else(|| GameError::UnknownMove {
                notation: text.to_string(),
            })?;
        self.make_move(&mv)?;
        Ok(mv)
    }

    /// SAN of every move played since the game was created.
    pub fn history(&self) -> Vec<String> {
        self.stack.iter().map(|f| f.mv.san.clone()).collect()
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !has_legal_move(&self.board)
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !has_legal_move(&self.board)
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100 && !self.is_checkmate()
    }

    /// Bare kings, a single minor piece, or bishops all on one square color.
    pub fn is_insufficient_material(&self) -> bool {
        let extras: Vec<(u8, Piece)> = self
            .pieces()
            .filter(|(_, p)| p.kind != PieceKind::King)
            .collect();

        match extras.as_slice() {
            [] => true,
            [(_, p)] => matches!(p.kind, PieceKind::Knight | PieceKind::Bishop),
            _ => {
                let all_bishops = extras.iter().all(|(_, p)| p.kind == PieceKind::Bishop);
                let shade = |sq: u8| (sq / 8 + sq % 8) % 2;
                all_bishops && extras.iter().all(|(s, _)| shade(*s) == shade(extras[0].0))
            }
        }
    }

    /// The current position has occurred at least three times in this game.
    pub fn is_threefold_repetition(&self) -> bool {
        let key = self.board.hash();
        let earlier = self
            .stack
            .iter()
            .filter(|f| f.board.hash() == key)
            .count();
        earlier + 1 >= 3
    }

    pub fn is_draw(&self) -> bool {
        self.is_fifty_move_draw()
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
