use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::board::Square;
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color advances by.
    pub fn forward(self) -> i8 {
        match self { Color::White => 1, Color::Black => -1 }
    }

    /// Zero-based rank the pieces of this color start on.
    pub fn home_rank(self) -> u8 {
        match self { Color::White => 0, Color::Black => 7 }
    }

    /// Zero-based rank a pawn may double-step from.
    pub fn pawn_origin_rank(self) -> u8 {
        match self { Color::White => 1, Color::Black => 6 }
    }
}

impl FromStr for Color {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(EngineError::UnknownColor(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Color::White => "white", Color::Black => "black" })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King, PieceKind::Queen, PieceKind::Rook,
        PieceKind::Bishop, PieceKind::Knight, PieceKind::Pawn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }

    /// Letter used on the text board: upper case for white, lower for black.
    pub fn symbol(self, color: Color) -> char {
        let c = match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        };
        if color == Color::White { c } else { c.to_ascii_lowercase() }
    }

    pub fn is_slider(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }
}

impl FromStr for PieceKind {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::UnknownPieceType(s.to_string()))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// A piece on (or formerly on) the board. Identity is the `id`; captured
/// pieces keep their last square but no longer occupy it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub color: Color,
    #[serde(rename = "position")]
    pub square: Square,
    pub captured: bool,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(id: impl Into<String>, kind: PieceKind, color: Color, square: &str) -> Result<Self, EngineError> {
        Ok(Self::at(id, kind, color, square.parse()?))
    }

    pub fn at(id: impl Into<String>, kind: PieceKind, color: Color, square: Square) -> Self {
        Self { id: id.into(), kind, color, square, captured: false, has_moved: false }
    }

    pub fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }
}
