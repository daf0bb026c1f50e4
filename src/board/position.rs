use std::fmt;
use serde::{Deserialize, Serialize};
use crate::board::{Color, Piece, PieceKind, Square};
use crate::error::EngineError;

/// Pieces in insertion order plus the side to move.
///
/// At most one non-captured piece sits on any square; ids are unique.
/// Captured pieces stay in the list and are skipped by every query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pieces: Vec<Piece>,
    #[serde(rename = "currentPlayer")]
    side_to_move: Color,
}

// Wire shape of a detected position; every field arrives as text and is
// converted with a typed error.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PieceRecord {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    color: String,
    position: String,
    #[serde(default)]
    captured: bool,
    #[serde(default)]
    has_moved: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PositionRecord {
    pieces: Vec<PieceRecord>,
    current_player: Option<String>,
}

impl TryFrom<PieceRecord> for Piece {
    type Error = EngineError;
    fn try_from(r: PieceRecord) -> Result<Self, Self::Error> {
        let mut p = Piece::new(r.id, r.kind.parse()?, r.color.parse()?, &r.position)?;
        p.captured = r.captured;
        p.has_moved = r.has_moved;
        Ok(p)
    }
}

impl Position {
    pub fn empty(side_to_move: Color) -> Self {
        Self { pieces: Vec::new(), side_to_move }
    }

    pub fn from_pieces(pieces: Vec<Piece>, side_to_move: Color) -> Result<Self, EngineError> {
        let mut pos = Self::empty(side_to_move);
        for p in pieces { pos.add(p)?; }
        Ok(pos)
    }

    /// The 24-piece layout used when no photo is available: full back ranks
    /// and pawns on the b, d, e and g files. White moves first.
    pub fn demo() -> Self {
        const GROUPS: [(PieceKind, &[u8]); 6] = [
            (PieceKind::Rook, &[0, 7]),
            (PieceKind::Knight, &[1, 6]),
            (PieceKind::Bishop, &[2, 5]),
            (PieceKind::Queen, &[3]),
            (PieceKind::King, &[4]),
            (PieceKind::Pawn, &[1, 3, 4, 6]),
        ];
        let mut pieces = Vec::with_capacity(24);
        for color in [Color::White, Color::Black] {
            let prefix = if color == Color::White { 'w' } else { 'b' };
            for (kind, files) in GROUPS {
                let rank = if kind == PieceKind::Pawn { color.pawn_origin_rank() } else { color.home_rank() };
                for &file in files {
                    let id = format!("{}-{}-{}", prefix, kind, pieces.len());
                    // file and rank are in range by construction
                    if let Ok(sq) = Square::new(file, rank) {
                        pieces.push(Piece::at(id, kind, color, sq));
                    }
                }
            }
        }
        Self { pieces, side_to_move: Color::White }
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let rec: PositionRecord = serde_json::from_str(json)?;
        let side = match rec.current_player.as_deref() {
            Some(s) => s.parse()?,
            None => Color::White,
        };
        let pieces = rec.pieces.into_iter().map(Piece::try_from).collect::<Result<Vec<_>, _>>()?;
        Self::from_pieces(pieces, side)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn add(&mut self, piece: Piece) -> Result<(), EngineError> {
        if self.pieces.iter().any(|p| p.id == piece.id) {
            return Err(EngineError::DuplicatePiece(piece.id));
        }
        if !piece.captured && self.is_occupied(piece.square) {
            return Err(EngineError::SquareOccupied(piece.square));
        }
        self.pieces.push(piece);
        Ok(())
    }

    pub fn side_to_move(&self) -> Color { self.side_to_move }
    pub fn set_side_to_move(&mut self, color: Color) { self.side_to_move = color; }

    /// Every piece in insertion order, captured ones included.
    pub fn pieces(&self) -> &[Piece] { &self.pieces }

    pub fn active_pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| !p.captured && p.color == color)
    }

    pub fn piece(&self, id: &str) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn occupant(&self, sq: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| !p.captured && p.square == sq)
    }

    pub fn is_occupied(&self, sq: Square) -> bool { self.occupant(sq).is_some() }

    pub fn occupant_color(&self, sq: Square) -> Option<Color> { self.occupant(sq).map(|p| p.color) }

    pub fn is_occupied_by_color(&self, sq: Square, color: Color) -> bool {
        self.occupant_color(sq) == Some(color)
    }

    /// Moves `piece_id` to `to`, capturing whatever stands there, and hands
    /// the turn over. Legality is the caller's business.
    pub fn apply(&mut self, piece_id: &str, to: Square) -> Result<Option<Piece>, EngineError> {
        let idx = self.pieces.iter().position(|p| p.id == piece_id && !p.captured)
            .ok_or_else(|| EngineError::UnknownPiece(piece_id.to_string()))?;
        let mut captured = None;
        if let Some(t) = self.pieces.iter().position(|p| !p.captured && p.square == to) {
            if t != idx {
                self.pieces[t].captured = true;
                captured = Some(self.pieces[t].clone());
            }
        }
        let mover = &mut self.pieces[idx];
        mover.square = to;
        mover.has_moved = true;
        self.side_to_move = self.side_to_move.opposite();
        Ok(captured)
    }

    pub fn pass(&mut self) { self.side_to_move = self.side_to_move.opposite(); }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = Square::new(file, rank).ok()
                    .and_then(|sq| self.occupant(sq))
                    .map(|p| p.kind.symbol(p.color))
                    .unwrap_or('.');
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
