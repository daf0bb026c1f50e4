use log::debug;
use crate::board::{Piece, PieceKind, Position};
use crate::movegen::{candidate_moves, generate_moves, CandidateMove};
use crate::search::eval::{PieceValues, Reason, ScoredMove, Strategy};

/// Tiered move advice: the best capture, else the move creating the most
/// valuable threat, else the first strategically useful move, else nothing.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    values: PieceValues,
}

impl Advisor {
    pub fn new(values: PieceValues) -> Self { Self { values } }

    pub fn recommend(&self, position: &Position) -> Option<ScoredMove> {
        let moves = candidate_moves(position, position.side_to_move());
        if let Some(sm) = self.best_capture(&moves) {
            debug!("advisor: capture tier {} ({})", sm.mv.uci(), sm.reason);
            return Some(sm);
        }
        if let Some(sm) = self.best_threat(position, &moves) {
            debug!("advisor: threat tier {} ({})", sm.mv.uci(), sm.reason);
            return Some(sm);
        }
        if let Some(sm) = first_strategic(&moves) {
            debug!("advisor: strategic tier {} ({})", sm.mv.uci(), sm.reason);
            return Some(sm);
        }
        debug!("advisor: no recommendation for {}", position.side_to_move());
        None
    }

    fn best_capture(&self, moves: &[CandidateMove]) -> Option<ScoredMove> {
        let mut best: Option<ScoredMove> = None;
        for mv in moves {
            let Some(target) = &mv.captured else { continue };
            let value = self.values.value(target.kind);
            if best.as_ref().map_or(true, |b| value > b.score) {
                let reason = Reason::Capture { target: target.kind, value };
                best = Some(ScoredMove { mv: mv.clone(), score: value, reason });
            }
        }
        best
    }

    fn best_threat(&self, position: &Position, moves: &[CandidateMove]) -> Option<ScoredMove> {
        let mut best: Option<ScoredMove> = None;
        for mv in moves {
            let Some(target) = self.most_valuable(&threatened_pieces(position, mv)) else { continue };
            let value = self.values.value(target);
            if best.as_ref().map_or(true, |b| value > b.score) {
                best = Some(ScoredMove { mv: mv.clone(), score: value, reason: Reason::Threat { target, value } });
            }
        }
        best
    }

    fn most_valuable(&self, pieces: &[Piece]) -> Option<PieceKind> {
        let mut best: Option<PieceKind> = None;
        for p in pieces {
            if best.map_or(true, |b| self.values.value(p.kind) > self.values.value(b)) { best = Some(p.kind); }
        }
        best
    }
}

/// Opponent pieces the mover could capture next turn if `mv` were played.
pub fn threatened_pieces(position: &Position, mv: &CandidateMove) -> Vec<Piece> {
    let mut child = position.clone();
    if child.apply(&mv.piece.id, mv.to).is_err() { return Vec::new(); }
    let Some(moved) = child.piece(&mv.piece.id) else { return Vec::new() };
    generate_moves(moved, &child)
        .into_iter()
        .filter_map(|sq| child.occupant(sq))
        .filter(|p| p.color != mv.piece.color)
        .cloned()
        .collect()
}

pub fn strategic_motive(mv: &CandidateMove) -> Option<Strategy> {
    let piece = &mv.piece;
    if mv.to.is_center() { return Some(Strategy::CenterControl); }
    let home = piece.color.home_rank();
    if piece.kind != PieceKind::Pawn && !piece.has_moved && mv.from.rank() == home && mv.to.rank() != home {
        return Some(Strategy::Development);
    }
    let advance = (mv.to.rank() as i8 - mv.from.rank() as i8) * piece.color.forward();
    if piece.kind == PieceKind::Pawn && advance > 0 { return Some(Strategy::PawnAdvance); }
    None
}

fn first_strategic(moves: &[CandidateMove]) -> Option<ScoredMove> {
    moves.iter().find_map(|mv| {
        strategic_motive(mv).map(|motive| ScoredMove { mv: mv.clone(), score: 0, reason: Reason::Strategic { motive } })
    })
}
