use super::*;

fn basic() -> StrengthProfile {
    StrengthProfile::resolve(1200, false)
}

fn advanced() -> StrengthProfile {
    StrengthProfile::resolve(2200, false)
}

fn find<'a>(moves: &'a [Move], san: &str) -> &'a Move {
    moves
        .iter()
        .find(|m| m.san == san)
        .unwrap_or_else(|| panic!("{san} not generated"))
}

#[test]
fn test_captures_come_first() {
    let game = Game::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let ordered = order_moves(&game, game.legal_moves(), &basic());
    assert_eq!(ordered[0].san, "exd5");
    assert_eq!(move_score(&game, &ordered[0], &basic()), 900 - 10);
}

#[test]
fn test_cheap_attacker_preferred() {
    let game = Game::from_fen("4k3/8/8/3q4/3pP3/4Q3/8/4K3 w - - 0 1").unwrap();
    let moves = game.legal_moves();
    let pawn_takes_queen = move_score(&game, find(&moves, "exd5"), &basic());
    let queen_takes_pawn = move_score(&game, find(&moves, "Qxd4"), &basic());
    assert!(pawn_takes_queen > queen_takes_pawn);
    assert_eq!(queen_takes_pawn, 100 - 90);
}

#[test]
fn test_promotion_bonus() {
    let game = Game::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let ordered = order_moves(&game, game.legal_moves(), &basic());
    assert_eq!(ordered[0].san, "a8=Q");
}

#[test]
fn test_quiet_moves_keep_generation_order() {
    let game = Game::startpos();
    let generated = game.legal_moves();
    let ordered = order_moves(&game, generated.clone(), &basic());
    assert_eq!(ordered, generated);
}

#[test]
fn test_advanced_ordering_prefers_center_pawns() {
    let game = Game::startpos();
    let ordered = order_moves(&game, game.legal_moves(), &advanced());
    let mut top: Vec<&str> = ordered[..2].iter().map(|m| m.san.as_str()).collect();
    top.sort();
    assert_eq!(top, vec!["d4", "e4"]);
    assert_eq!(move_score(&game, &ordered[0], &advanced()), 30 + 15);
}

#[test]
fn test_development_bonus_for_black() {
    let game =
        Game::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();
    let moves = game.legal_moves();
    assert_eq!(move_score(&game, find(&moves, "Nf6"), &advanced()), 25);
    assert_eq!(move_score(&game, find(&moves, "Nf6"), &basic()), 0);
}

#[test]
fn test_castling_bonus() {
    let game = Game::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let ordered = order_moves(&game, game.legal_moves(), &advanced());
    assert!(ordered[0].is_castle());
    assert!(ordered[1].is_castle());
    assert_eq!(move_score(&game, &ordered[0], &advanced()), 40);
}

#[test]
fn test_pawn_chain_bonus_white() {
    let game = Game::from_fen("4k3/8/8/8/8/3P4/4P3/4K3 w - - 0 1").unwrap();
    let moves = game.legal_moves();
    assert_eq!(move_score(&game, find(&moves, "e4"), &advanced()), 30 + 15 + 20);
    assert_eq!(move_score(&game, find(&moves, "e3"), &advanced()), 0);
}

#[test]
fn test_pawn_chain_bonus_black() {
    let game = Game::from_fen("4k3/4p3/3p4/8/8/8/8/4K3 b - - 0 1").unwrap();
    let moves = game.legal_moves();
    assert_eq!(move_score(&game, find(&moves, "e5"), &advanced()), 30 + 15 + 20);
}

#[test]
fn test_capturing_pawn_does_not_support_itself() {
    // exd5: e4 is diagonally behind d5, but it is the square being vacated
    let alone = Game::from_fen("4k3/8/8/3n4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let moves = alone.legal_moves();
    let unsupported = 320 - 10 + 30 + 15;
    assert_eq!(move_score(&alone, find(&moves, "exd5"), &advanced()), unsupported);

    let chained = Game::from_fen("4k3/8/8/3n4/2P1P3/8/8/4K3 w - - 0 1").unwrap();
    let moves = chained.legal_moves();
    assert_eq!(
        move_score(&chained, find(&moves, "exd5"), &advanced()),
        unsupported + 20
    );
    assert_eq!(
        move_score(&chained, find(&moves, "cxd5"), &advanced()),
        unsupported + 20
    );
}
