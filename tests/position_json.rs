use chesscoach::board::{Color, PieceKind, Position, Square};
use chesscoach::error::EngineError;
use pretty_assertions::assert_eq;

const DETECTED: &str = r#"{
  "pieces": [
    {"id": "wk", "type": "king", "color": "white", "position": "e1"},
    {"id": "bq", "type": "queen", "color": "black", "position": "d8", "hasMoved": true},
    {"id": "bp", "type": "pawn", "color": "black", "position": "e4", "captured": true}
  ],
  "currentPlayer": "black"
}"#;

#[test]
fn parses_detected_position() {
    let p = Position::from_json(DETECTED).unwrap();
    assert_eq!(p.side_to_move(), Color::Black);
    assert_eq!(p.pieces().len(), 3);
    let q = p.piece("bq").unwrap();
    assert_eq!((q.kind, q.color, q.has_moved), (PieceKind::Queen, Color::Black, true));
    // captured pieces are kept but do not occupy their square
    assert!(p.piece("bp").unwrap().captured);
    assert!(!p.is_occupied("e4".parse::<Square>().unwrap()));
}

#[test]
fn round_trips_through_json() {
    let demo = Position::demo();
    let json = demo.to_json().unwrap();
    assert!(json.contains("\"currentPlayer\": \"white\""));
    assert!(json.contains("\"hasMoved\": false"));
    assert_eq!(Position::from_json(&json).unwrap(), demo);
}

#[test]
fn side_defaults_to_white() {
    let p = Position::from_json(r#"{"pieces": []}"#).unwrap();
    assert_eq!(p.side_to_move(), Color::White);
}

#[test]
fn rejects_bad_input() {
    let bad_square = r#"{"pieces": [{"id": "x", "type": "rook", "color": "white", "position": "i9"}]}"#;
    assert_eq!(Position::from_json(bad_square).unwrap_err(), EngineError::MalformedSquare("i9".into()));

    let bad_kind = r#"{"pieces": [{"id": "x", "type": "wizard", "color": "white", "position": "a1"}]}"#;
    assert_eq!(Position::from_json(bad_kind).unwrap_err(), EngineError::UnknownPieceType("wizard".into()));

    let bad_color = r#"{"pieces": [{"id": "x", "type": "rook", "color": "green", "position": "a1"}]}"#;
    assert_eq!(Position::from_json(bad_color).unwrap_err(), EngineError::UnknownColor("green".into()));

    let stacked = r#"{"pieces": [
        {"id": "x", "type": "rook", "color": "white", "position": "a1"},
        {"id": "y", "type": "rook", "color": "black", "position": "a1"}]}"#;
    assert_eq!(Position::from_json(stacked).unwrap_err(), EngineError::SquareOccupied("a1".parse().unwrap()));

    let twins = r#"{"pieces": [
        {"id": "x", "type": "rook", "color": "white", "position": "a1"},
        {"id": "x", "type": "rook", "color": "white", "position": "a2"}]}"#;
    assert_eq!(Position::from_json(twins).unwrap_err(), EngineError::DuplicatePiece("x".into()));

    assert!(matches!(Position::from_json("not json"), Err(EngineError::Json(_))));
}

#[test]
fn demo_layout() {
    let p = Position::demo();
    assert_eq!(p.pieces().len(), 24);
    assert_eq!(p.active_pieces(Color::White).count(), 12);
    assert_eq!(p.piece("w-king-7").unwrap().square.to_string(), "e1");
    assert_eq!(p.piece("b-pawn-23").unwrap().square.to_string(), "g7");
    assert!(p.occupant("a2".parse().unwrap()).is_none());
    let board = p.to_string();
    assert!(board.starts_with("8  r n b q k b n r"));
    assert!(board.ends_with("white to move"));
}
