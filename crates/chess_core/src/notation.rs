//! SAN / LAN rendering for moves generated by `cozy-chess`.
//!
//! `cozy-chess` encodes castling as "king takes own rook"; everything
//! exposed from here uses the conventional king destination instead
//! (`e1g1`, `O-O`).

use cozy_chess::{Board, File, Piece, Square};

use crate::types::{from_cozy, sq_to_coord, Move, PieceKind};

/// All legal moves of `board`, paired with the moving piece.
pub(crate) fn raw_legal_moves(board: &Board) -> Vec<(Piece, cozy_chess::Move)> {
    let mut out = Vec::with_capacity(64);
    board.generate_moves(|moves| {
        let piece = moves.piece;
        for mv in moves {
            out.push((piece, mv));
        }
        false
    });
    out
}

/// True if the side to move has at least one legal move.
pub(crate) fn has_legal_move(board: &Board) -> bool {
    board.generate_moves(|_| true)
}

pub(crate) fn legal_move_count(board: &Board) -> usize {
    let mut count = 0;
    board.generate_moves(|moves| {
        count += moves.len();
        false
    });
    count
}

fn is_castle(board: &Board, piece: Piece, mv: cozy_chess::Move) -> bool {
    piece == Piece::King && board.color_on(mv.to) == Some(board.side_to_move())
}

fn king_destination(mv: cozy_chess::Move) -> Square {
    let file = if (mv.to.file() as u8) > (mv.from.file() as u8) {
        File::G
    } else {
        File::C
    };
    Square::new(file, mv.from.rank())
}

fn file_char(sq: Square) -> char {
    (b'a' + sq.file() as u8) as char
}

fn rank_char(sq: Square) -> char {
    (b'1' + sq.rank() as u8) as char
}

fn disambiguation(
    piece: Piece,
    mv: cozy_chess::Move,
    legal: &[(Piece, cozy_chess::Move)],
) -> String {
    let rivals: Vec<Square> = legal
        .iter()
        .filter(|(p, m)| *p == piece && m.to == mv.to && m.from != mv.from)
        .map(|(_, m)| m.from)
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|s| s.file() != mv.from.file()) {
        file_char(mv.from).to_string()
    } else if rivals.iter().all(|s| s.rank() != mv.from.rank()) {
        rank_char(mv.from).to_string()
    } else {
        format!("{}{}", file_char(mv.from), rank_char(mv.from))
    }
}

/// Builds the public [`Move`] for a legal `mv` in `board`.
///
/// `legal` must be the full legal move list of `board`; it is used for
/// SAN disambiguation.
pub(crate) fn describe(
    board: &Board,
    piece: Piece,
    mv: cozy_chess::Move,
    legal: &[(Piece, cozy_chess::Move)],
) -> Move {
    let castle = is_castle(board, piece, mv);
    let to = if castle { king_destination(mv) } else { mv.to };

    let captured = if castle {
        None
    } else if let Some(victim) = board.piece_on(mv.to) {
        Some(PieceKind::from(victim))
    } else if piece == Piece::Pawn && mv.from.file() != mv.to.file() {
        // en passant
        Some(PieceKind::Pawn)
    } else {
        None
    };

    let mut after = board.clone();
    after.play_unchecked(mv);
    let gives_check = !after.checkers().is_empty();
    let mate = gives_check && !has_legal_move(&after);

    let kind = PieceKind::from(piece);
    let promotion = mv.promotion.map(PieceKind::from);

    let mut san = String::with_capacity(8);
    if castle {
        san.push_str(if to.file() == File::G { "O-O" } else { "O-O-O" });
    } else {
        match kind.san_letter() {
            None => {
                if captured.is_some() {
                    san.push(file_char(mv.from));
                }
            }
            Some(letter) => {
                san.push(letter);
                san.push_str(&disambiguation(piece, mv, legal));
            }
        }
        if captured.is_some() {
            san.push('x');
        }
        san.push_str(&sq_to_coord(from_cozy(to)));
        if let Some(letter) = promotion.and_then(PieceKind::san_letter) {
            san.push('=');
            san.push(letter);
        }
    }
    if mate {
        san.push('#');
    } else if gives_check {
        san.push('+');
    }

    let mut lan = format!(
        "{}{}",
        sq_to_coord(from_cozy(mv.from)),
        sq_to_coord(from_cozy(to))
    );
    if let Some(letter) = promotion.and_then(PieceKind::san_letter) {
        lan.push(letter.to_ascii_lowercase());
    }

    Move {
        from: from_cozy(mv.from),
        to: from_cozy(to),
        piece: kind,
        promotion,
        captured,
        san,
        lan,
        gives_check,
        raw: mv,
    }
}

/// SAN with check/mate markers and annotation glyphs removed.
pub(crate) fn san_stem(san: &str) -> &str {
    san.trim_end_matches(['+', '#', '!', '?'])
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
