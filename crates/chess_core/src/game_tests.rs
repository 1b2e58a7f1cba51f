use super::*;
use crate::coord_to_sq;

#[test]
fn make_and_undo_restore_position() {
    let mut game = Game::startpos();
    let before = game.fen();

    let mv = game.play_san("e4").unwrap();
    assert_ne!(game.fen(), before);
    assert_eq!(game.history(), vec!["e4".to_string()]);

    let undone = game.undo().unwrap();
    assert_eq!(undone, mv);
    assert_eq!(game.fen(), before);
    assert!(game.history().is_empty());
}

#[test]
fn undo_on_fresh_game_fails() {
    let mut game = Game::startpos();
    assert_eq!(game.undo(), Err(GameError::NothingToUndo));
}

#[test]
fn stale_move_is_rejected_without_side_effects() {
    let mut other = Game::startpos();
    other.play_san("e4").unwrap();
    let black_reply = other
        .legal_moves()
        .into_iter()
        .find(|m| m.san == "e5")
        .unwrap();

    let mut game = Game::startpos();
    let before = game.fen();
    let err = game.make_move(&black_reply).unwrap_err();
    assert!(matches!(err, GameError::IllegalMove { .. }));
    assert_eq!(game.fen(), before);
    assert!(game.history().is_empty());
}

#[test]
fn unknown_san_is_rejected() {
    let mut game = Game::startpos();
    let before = game.fen();
    assert!(matches!(
        game.play_san("Qh5"),
        Err(GameError::UnknownMove { .. })
    ));
    assert_eq!(game.fen(), before);
}

#[test]
fn invalid_fen_is_an_error() {
    assert!(matches!(
        Game::from_fen("not a fen"),
        Err(GameError::InvalidFen { .. })
    ));
}

#[test]
fn with_move_always_undoes() {
    let mut game = Game::startpos();
    let before = game.fen();
    let mv = game.legal_moves().into_iter().next().unwrap();

    let inner_fen = game.with_move(&mv, |g| g.fen()).unwrap();
    assert_ne!(inner_fen, before);
    assert_eq!(game.fen(), before);
}

#[test]
fn play_uci_accepts_both_castling_forms() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

    let mut game = Game::from_fen(fen).unwrap();
    assert_eq!(game.play_uci("e1g1").unwrap().san, "O-O");

    let mut game = Game::from_fen(fen).unwrap();
    assert_eq!(game.play_uci("e1h1").unwrap().san, "O-O");
}

#[test]
fn legal_moves_from_single_square() {
    let game = Game::startpos();
    let e2 = coord_to_sq("e2").unwrap();
    let moves = game.legal_moves_from(e2);
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| m.from == e2));
}

#[test]
fn threefold_repetition_by_knight_shuffle() {
    let mut game = Game::startpos();
    for _ in 0..2 {
        for san in ["Nf3", "Nf6", "Ng1", "Ng8"] {
            game.play_san(san).unwrap();
        }
    }
    assert!(game.is_threefold_repetition());
    assert!(game.is_draw());
    assert!(game.is_game_over());

    game.undo().unwrap();
    assert!(!game.is_threefold_repetition());
}

#[test]
fn checkmate_and_stalemate_queries() {
    let mate = Game::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
        .unwrap();
    assert!(mate.is_checkmate());
    assert!(!mate.is_stalemate());
    assert!(mate.is_game_over());
    assert!(mate.legal_moves().is_empty());

    let stale = Game::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(stale.is_stalemate());
    assert!(stale.is_draw());
    assert!(!stale.is_checkmate());
}

#[test]
fn piece_accessor_and_side_to_move() {
    let game = Game::startpos();
    let e1 = game.piece_at(coord_to_sq("e1").unwrap()).unwrap();
    assert_eq!(e1.kind, PieceKind::King);
    assert_eq!(e1.color, Color::White);
    assert!(game.piece_at(coord_to_sq("e4").unwrap()).is_none());
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.pieces().count(), 32);
    assert_eq!(game.fullmove_number(), 1);
}
