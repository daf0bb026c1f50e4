use serde::Serialize;
use crate::board::{Color, Piece, Position, Square};
use crate::rules::{movement_rules, MoveRule};

/// A move under consideration, not yet applied to any position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl CandidateMove {
    pub fn new(piece: &Piece, to: Square, position: &Position) -> Self {
        let captured = position.occupant(to).filter(|t| t.color != piece.color).cloned();
        Self { from: piece.square, to, piece: piece.clone(), captured }
    }

    pub fn is_capture(&self) -> bool { self.captured.is_some() }

    /// `"e2e4"` form.
    pub fn uci(&self) -> String { format!("{}{}", self.from, self.to) }
}

/// Destinations reachable by `piece` under the simplified rules: no check,
/// castling, en passant or promotion. Order follows the piece's rule table.
pub fn generate_moves(piece: &Piece, position: &Position) -> Vec<Square> {
    let mut out = Vec::with_capacity(27);
    let origin = piece.square;
    for rule in movement_rules(piece.kind, piece.color, origin) {
        match rule {
            MoveRule::Ray(df, dr) => {
                let mut cur = origin;
                while let Ok(next) = cur.offset(df, dr) {
                    match position.occupant_color(next) {
                        Some(c) if c == piece.color => break,
                        Some(_) => { out.push(next); break; }
                        None => out.push(next),
                    }
                    cur = next;
                }
            }
            MoveRule::Offset(df, dr) => {
                if let Ok(to) = origin.offset(df, dr) {
                    if !position.is_occupied_by_color(to, piece.color) { out.push(to); }
                }
            }
            MoveRule::PawnPush { dr, double } => {
                let Ok(one) = origin.offset(0, dr) else { continue };
                if position.is_occupied(one) { continue; }
                out.push(one);
                if double {
                    if let Ok(two) = origin.offset(0, 2 * dr) {
                        if !position.is_occupied(two) { out.push(two); }
                    }
                }
            }
            MoveRule::PawnCapture(df, dr) => {
                if let Ok(to) = origin.offset(df, dr) {
                    if position.is_occupied_by_color(to, piece.color.opposite()) { out.push(to); }
                }
            }
        }
    }
    out
}

/// Membership test against `generate_moves`; the two never disagree.
pub fn is_legal(piece: &Piece, dest: Square, position: &Position) -> bool {
    generate_moves(piece, position).contains(&dest)
}

/// Every move of every non-captured `color` piece, piece order first, then
/// generation order.
pub fn candidate_moves(position: &Position, color: Color) -> Vec<CandidateMove> {
    let mut out = Vec::new();
    for piece in position.active_pieces(color) {
        for to in generate_moves(piece, position) {
            out.push(CandidateMove::new(piece, to, position));
        }
    }
    out
}
