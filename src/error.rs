use crate::board::{Color, PieceKind, Square};

/// Everything the engine can reject. Bounds and occupancy exclusions inside
/// move generation are not errors and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("malformed square {0:?}: expected [a-h][1-8]")]
    MalformedSquare(String),
    #[error("coordinates ({file}, {rank}) are off the board")]
    OutOfRange { file: i32, rank: i32 },
    #[error("unknown piece type {0:?}")]
    UnknownPieceType(String),
    #[error("unknown color {0:?}")]
    UnknownColor(String),
    #[error("square {0} already holds a piece")]
    SquareOccupied(Square),
    #[error("duplicate piece id {0:?}")]
    DuplicatePiece(String),
    #[error("no piece with id {0:?}")]
    UnknownPiece(String),
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("{kind} cannot move from {from} to {to}")]
    IllegalMove { kind: PieceKind, from: Square, to: Square },
    #[error("it is {0}'s turn")]
    NotYourTurn(Color),
    #[error("the match is over")]
    GameOver,
    #[error("invalid position json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self { EngineError::Json(e.to_string()) }
}
