use super::*;
use rated_engine::RatedEngine;

fn session() -> Session<RatedEngine> {
    Session::new(RatedEngine::with_seed(1200, 11))
}

fn run(session: &mut Session<RatedEngine>, line: &str) -> (Flow, String) {
    let mut out = Vec::new();
    let flow = session.handle(line, &mut out).unwrap();
    (flow, String::from_utf8(out).unwrap())
}

#[test]
fn handshake() {
    let mut s = session();
    let (flow, out) = run(&mut s, "uci");
    assert_eq!(flow, Flow::Continue);
    assert!(out.starts_with("id name Rated v0.1\n"));
    assert!(out.contains("option name UCI_Elo type spin"));
    assert!(out.contains("var Master Bot"));
    assert!(out.ends_with("uciok\n"));

    assert_eq!(run(&mut s, "isready").1, "readyok\n");
}

#[test]
fn position_with_moves() {
    let mut s = session();
    run(&mut s, "position startpos moves e2e4 c7c5");
    assert_eq!(s.game.history(), vec!["e4".to_string(), "c5".to_string()]);
}

#[test]
fn position_from_fen_with_castling() {
    let mut s = session();
    run(
        &mut s,
        "position fen r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1 moves e1g1 e8c8",
    );
    assert_eq!(s.game.history(), vec!["O-O".to_string(), "O-O-O".to_string()]);
}

#[test]
fn bad_fen_keeps_previous_position() {
    let mut s = session();
    run(&mut s, "position startpos moves d2d4");
    run(&mut s, "position fen not/a/fen w - - 0 1");
    assert_eq!(s.game.history(), vec!["d4".to_string()]);
}

#[test]
fn illegal_move_stops_the_move_list() {
    let mut s = session();
    run(&mut s, "position startpos moves e2e4 e2e4 d7d5");
    assert_eq!(s.game.history(), vec!["e4".to_string()]);
}

#[test]
fn go_plays_book_move_and_names_opening() {
    let mut s = session();
    run(&mut s, "position startpos moves e2e4 c7c5");
    let (_, out) = run(&mut s, "go wtime 60000 btime 60000");
    assert!(out.contains("info string opening Sicilian Defense\n"));
    assert!(out.ends_with("bestmove g1f3\n"));
    assert_eq!(s.game.history().len(), 2);
}

#[test]
fn bare_fen_is_booked_as_start_of_history() {
    let mut s = session();
    run(
        &mut s,
        "position fen r1bqkbnr/pppp1ppp/2n5/4p3/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 5",
    );
    assert!(s.game.history().is_empty());
    let (_, out) = run(&mut s, "go");
    let reply = out.trim_end().rsplit(' ').next().unwrap();
    assert!(["e2e4", "d2d4", "g1f3", "c2c4"].contains(&reply), "{out}");
    assert!(!out.contains("info depth"));
}

#[test]
fn go_without_moves_reports_null_move() {
    let mut s = session();
    run(
        &mut s,
        "position fen rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
    );
    let (_, out) = run(&mut s, "go");
    assert_eq!(out, "bestmove 0000\n");
}

#[test]
fn setoption_changes_rating() {
    let mut s = session();
    run(&mut s, "setoption name UCI_Elo value 2000");
    assert_eq!(s.engine.rating(), 2000);
    run(&mut s, "setoption name Bot value Rookie Bot");
    assert_eq!(s.engine.rating(), 800);
    run(&mut s, "setoption name Bot value Grandmaster");
    assert_eq!(s.engine.rating(), 800);
}

#[test]
fn ucinewgame_resets_position() {
    let mut s = session();
    run(&mut s, "position startpos moves e2e4");
    run(&mut s, "ucinewgame");
    assert!(s.game.history().is_empty());
}

#[test]
fn quit_and_unknown_commands() {
    let mut s = session();
    assert_eq!(run(&mut s, "debug on"), (Flow::Continue, String::new()));
    assert_eq!(run(&mut s, "   "), (Flow::Continue, String::new()));
    assert_eq!(run(&mut s, "quit").0, Flow::Quit);
}
