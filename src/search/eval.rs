use std::fmt;
use serde::{Deserialize, Serialize};
use crate::board::{PieceKind, Position};
use crate::movegen::{candidate_moves, CandidateMove};

pub const CAPTURE_WEIGHT: i32 = 10;
pub const CENTER_BONUS: i32 = 2;
pub const DEVELOPMENT_BONUS: i32 = 1;

/// Material value per piece type. The king is ordinary material here:
/// taking it scores, it does not end the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceValues {
    pub king: i32,
    pub queen: i32,
    pub rook: i32,
    pub bishop: i32,
    pub knight: i32,
    pub pawn: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self { king: 50, queen: 9, rook: 5, bishop: 3, knight: 3, pawn: 1 }
    }
}

impl PieceValues {
    pub fn value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::King => self.king,
            PieceKind::Queen => self.queen,
            PieceKind::Rook => self.rook,
            PieceKind::Bishop => self.bishop,
            PieceKind::Knight => self.knight,
            PieceKind::Pawn => self.pawn,
        }
    }

    /// Largest value a piece may carry; a capture of it still scores
    /// without overflowing `i32`.
    pub const MAX: i32 = i32::MAX / (CAPTURE_WEIGHT + 1);

    /// First piece type whose value is negative or above [`Self::MAX`].
    pub fn out_of_range(&self) -> Option<(PieceKind, i32)> {
        PieceKind::ALL
            .into_iter()
            .map(|k| (k, self.value(k)))
            .find(|&(_, v)| !(0..=Self::MAX).contains(&v))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Capture,
    Threat,
    Strategic,
    None,
}

impl Tier {
    pub fn of(rec: Option<&ScoredMove>) -> Tier {
        rec.map(|m| m.reason.tier()).unwrap_or(Tier::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    CenterControl,
    Development,
    PawnAdvance,
    /// Quiet move picked by the numeric evaluator.
    Positional(PieceKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "tier", rename_all = "lowercase")]
pub enum Reason {
    Capture { target: PieceKind, value: i32 },
    Threat { target: PieceKind, value: i32 },
    Strategic { motive: Strategy },
}

impl Reason {
    pub fn tier(&self) -> Tier {
        match self {
            Reason::Capture { .. } => Tier::Capture,
            Reason::Threat { .. } => Tier::Threat,
            Reason::Strategic { .. } => Tier::Strategic,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Capture { target, value } => write!(f, "Capture {} for {} points!", target, value),
            Reason::Threat { target, .. } => write!(f, "Threaten opponent's {}!", target),
            Reason::Strategic { motive } => match motive {
                Strategy::CenterControl => f.write_str("Control the center of the board"),
                Strategy::Development => f.write_str("Develop your pieces"),
                Strategy::PawnAdvance => f.write_str("Advance pawn for better position"),
                Strategy::Positional(kind) => write!(f, "Strategic move with {}", kind),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    #[serde(flatten)]
    pub mv: CandidateMove,
    pub score: i32,
    pub reason: Reason,
}

/// Single-number move scoring: capture value, center control and a
/// first-move development bonus.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    values: PieceValues,
}

impl Evaluator {
    pub fn new(values: PieceValues) -> Self { Self { values } }

    pub fn values(&self) -> &PieceValues { &self.values }

    pub fn score(&self, mv: &CandidateMove, position: &Position) -> i32 {
        let mut score = 0;
        if let Some(target) = position.occupant(mv.to).filter(|t| t.color != mv.piece.color) {
            score = CAPTURE_WEIGHT.saturating_mul(self.values.value(target.kind));
        }
        if mv.to.is_center() { score = score.saturating_add(CENTER_BONUS); }
        if !mv.piece.has_moved && mv.piece.kind != PieceKind::Pawn { score = score.saturating_add(DEVELOPMENT_BONUS); }
        score
    }

    fn scored(&self, mv: CandidateMove, position: &Position) -> ScoredMove {
        let score = self.score(&mv, position);
        let reason = match &mv.captured {
            Some(t) => Reason::Capture { target: t.kind, value: self.values.value(t.kind) },
            None => Reason::Strategic { motive: Strategy::Positional(mv.piece.kind) },
        };
        ScoredMove { mv, score, reason }
    }

    /// Every candidate of the side to move, scored, in generation order.
    pub fn scored_moves(&self, position: &Position) -> Vec<ScoredMove> {
        candidate_moves(position, position.side_to_move())
            .into_iter()
            .map(|mv| self.scored(mv, position))
            .collect()
    }

    /// Highest score wins; on ties the first one generated stays.
    pub fn best_move(&self, position: &Position) -> Option<ScoredMove> {
        let mut best: Option<ScoredMove> = None;
        for sm in self.scored_moves(position) {
            if best.as_ref().map_or(true, |b| sm.score > b.score) { best = Some(sm); }
        }
        best
    }
}
