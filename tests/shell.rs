use chesscoach::board::{Color, Piece, PieceKind, Position};
use chesscoach::game::MatchConfig;
use chesscoach::shell::Shell;

fn run(script: &str) -> String {
    let mut shell = Shell::new(Position::demo(), MatchConfig::default(), 1, 42);
    let mut out = Vec::new();
    shell.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn hints_and_a_move_exchange() {
    let out = run("best\nadvise\nmove a1a8\nscore\nquit\n");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec![
        "best a1a8 (score 51): Capture rook for 5 points!",
        "advise a1a8: Capture rook for 5 points!",
        "ok, captured black rook",
        "opponent plays h8h1",
        "score user 5 opponent 5 ply 2/12 skips 0/0",
    ]);
}

#[test]
fn bad_input_is_reported_not_fatal() {
    let out = run("moves b1\nmoves z9\nmoves c4\nmove a1b2\nfoo\n");
    assert!(out.contains("white knight on b1: c3 a3\n"));
    assert!(out.contains("error: malformed square \"z9\""));
    assert!(out.contains("error: no piece on c4\n"));
    assert!(out.contains("error: rook cannot move from a1 to b2\n"));
    assert!(out.contains("unknown command: foo\n"));
}

#[test]
fn skipping_to_the_end_reports_a_draw() {
    // the black pawn on the first rank has no moves, so the opponent skips too
    let start = Position::from_pieces(vec![
        Piece::new("wk", PieceKind::King, Color::White, "a1").unwrap(),
        Piece::new("bp", PieceKind::Pawn, Color::Black, "h1").unwrap(),
    ], Color::White).unwrap();
    let mut shell = Shell::new(start, MatchConfig::default(), 3, 1);
    let mut out = Vec::new();
    let script = "skip\n".repeat(7) + "score\n";
    shell.run(script.as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches("opponent skips").count(), 6);
    assert!(out.contains("result: draw (0-0)\n"));
    assert!(out.contains("error: the match is over\n"));
    assert!(out.contains("score user 0 opponent 0 ply 12/12 skips 6/6\n"));
}
