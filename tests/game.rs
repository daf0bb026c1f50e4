use chesscoach::board::{Color, PieceKind, Position, Square};
use chesscoach::error::EngineError;
use chesscoach::game::{Game, MatchConfig, Outcome, Phase, SkipTally};
use chesscoach::search::eval::PieceValues;
use chesscoach::search::noise::Opponent;
use pretty_assertions::assert_eq;

fn sq(s: &str) -> Square { s.parse().unwrap() }
fn demo_game() -> Game { Game::new(Position::demo(), MatchConfig::default()) }

#[test]
fn user_capture_scores_for_user() {
    let mut g = demo_game();
    let captured = g.play("w-rook-0", sq("a8")).unwrap().unwrap();
    assert_eq!(captured.id, "b-rook-12");
    assert_eq!(captured.kind, PieceKind::Rook);
    assert_eq!(g.user_score(), 5);
    assert_eq!(g.opponent_score(), 0);
    assert_eq!(g.move_count(), 1);
    assert_eq!(g.position().side_to_move(), Color::Black);
    assert_eq!(g.captured().len(), 1);
    assert_eq!(g.history()[0].mv, "a1a8");
    assert_eq!(g.history()[0].player, Color::White);
    assert!(g.position().piece("b-rook-12").unwrap().captured);
}

#[test]
fn illegal_move_leaves_state_alone() {
    let mut g = demo_game();
    let before = g.position().clone();
    let err = g.play("w-rook-0", sq("b2")).unwrap_err();
    assert_eq!(err, EngineError::IllegalMove { kind: PieceKind::Rook, from: sq("a1"), to: sq("b2") });
    assert_eq!(g.position(), &before);
    assert_eq!(g.move_count(), 0);
}

#[test]
fn moving_out_of_turn_is_rejected() {
    let mut g = demo_game();
    assert_eq!(g.play("b-pawn-20", sq("b5")).unwrap_err(), EngineError::NotYourTurn(Color::White));
    assert_eq!(g.play("nobody", sq("b5")).unwrap_err(), EngineError::UnknownPiece("nobody".into()));
}

#[test]
fn uci_input_is_checked() {
    let mut g = demo_game();
    assert_eq!(g.play_uci("c3c4").unwrap_err(), EngineError::EmptySquare(sq("c3")));
    assert!(matches!(g.play_uci("a1"), Err(EngineError::MalformedSquare(_))));
    assert!(matches!(g.play_uci("z9a1"), Err(EngineError::MalformedSquare(_))));
    assert_eq!(g.play_uci("e2e4").unwrap(), None);
    assert_eq!(g.position().occupant(sq("e4")).unwrap().id, "w-pawn-10");
}

#[test]
fn twelve_skips_end_in_a_draw() {
    let mut g = demo_game();
    for _ in 0..12 {
        assert_eq!(g.outcome(), None);
        g.skip().unwrap();
    }
    assert_eq!(g.phase(), Phase::Finished);
    assert_eq!(g.skipped(), SkipTally { user: 6, opponent: 6 });
    assert_eq!(g.outcome(), Some(Outcome::Draw));
    assert_eq!(g.skip().unwrap_err(), EngineError::GameOver);
    assert_eq!(g.play("w-rook-0", sq("a8")).unwrap_err(), EngineError::GameOver);
    assert!(!g.is_users_turn());
}

#[test]
fn opponent_capture_scores_for_opponent() {
    let mut g = demo_game();
    let mut opp = Opponent::new(PieceValues::default(), 1, 3);
    assert_eq!(g.play_opponent(&mut opp).unwrap_err(), EngineError::NotYourTurn(Color::White));

    g.play_uci("b2b3").unwrap();
    let reply = g.play_opponent(&mut opp).unwrap().unwrap();
    assert_eq!(reply.mv.uci(), "a8a1");
    assert_eq!(g.opponent_score(), 5);
    assert_eq!(g.user_score(), 0);
    assert!(g.is_users_turn());
}

#[test]
fn opponent_without_moves_skips() {
    let pos = Position::from_pieces(vec![
        chesscoach::board::Piece::new("wk", PieceKind::King, Color::White, "a1").unwrap(),
        chesscoach::board::Piece::new("bp", PieceKind::Pawn, Color::Black, "h1").unwrap(),
    ], Color::White).unwrap();
    let cfg = MatchConfig { first_player: Some(Color::Black), ..MatchConfig::default() };
    let mut g = Game::new(pos, cfg);
    let mut opp = Opponent::new(PieceValues::default(), 3, 0);
    assert_eq!(g.play_opponent(&mut opp).unwrap(), None);
    assert_eq!(g.skipped(), SkipTally { user: 0, opponent: 1 });
    assert_eq!(g.history()[0].mv, "skip");
}

#[test]
fn hints_only_on_users_turn() {
    let mut g = demo_game();
    let best = g.suggestion().unwrap();
    assert_eq!((best.mv.uci().as_str(), best.score), ("a1a8", 51));
    assert_eq!(g.advice().unwrap().mv.uci(), "a1a8");
    g.skip().unwrap();
    assert!(g.suggestion().is_none());
    assert!(g.advice().is_none());
}

#[test]
fn first_player_and_length_come_from_config() {
    let g = Game::new(Position::demo(), MatchConfig { first_player: Some(Color::Black), ..MatchConfig::default() });
    assert_eq!(g.position().side_to_move(), Color::Black);
    assert!(!g.is_users_turn());

    let g = Game::new(Position::demo(), MatchConfig { max_plies: 0, ..MatchConfig::default() });
    assert_eq!(g.outcome(), Some(Outcome::Draw));

    let mut g = Game::new(Position::demo(), MatchConfig { max_plies: 1, ..MatchConfig::default() });
    g.play_uci("a1a8").unwrap();
    assert_eq!(g.outcome(), Some(Outcome::UserWins));
}

#[test]
fn detected_side_to_move_is_kept_without_override() {
    let json = r#"{"pieces": [
        {"id": "wk", "type": "king", "color": "white", "position": "e1"},
        {"id": "bk", "type": "king", "color": "black", "position": "e8"}
    ], "currentPlayer": "black"}"#;
    let g = Game::new(Position::from_json(json).unwrap(), MatchConfig::default());
    assert_eq!(g.position().side_to_move(), Color::Black);
    assert!(!g.is_users_turn());

    let g = Game::new(Position::from_json(json).unwrap(), MatchConfig { first_player: Some(Color::White), ..MatchConfig::default() });
    assert_eq!(g.position().side_to_move(), Color::White);
}

#[test]
fn black_user_scores_black_captures() {
    let cfg = MatchConfig { user_color: Color::Black, first_player: Some(Color::Black), ..MatchConfig::default() };
    let mut g = Game::new(Position::demo(), cfg);
    assert!(g.is_users_turn());
    g.play_uci("h8h1").unwrap();
    assert_eq!(g.user_score(), 5);
    assert_eq!(g.opponent_score(), 0);
}
