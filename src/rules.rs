use crate::board::{Color, PieceKind, Square};

/// One step of move generation for a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRule {
    /// Walk `(df, dr)` repeatedly until the edge or the first occupied square.
    Ray(i8, i8),
    /// A single jump of `(df, dr)`.
    Offset(i8, i8),
    /// Straight ahead onto empty squares; `double` when the pawn stands on
    /// its origin rank.
    PawnPush { dr: i8, double: bool },
    /// Diagonal forward step, onto an opponent piece only.
    PawnCapture(i8, i8),
}

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT: [(i8, i8); 8] = [(2, 1), (2, -1), (-2, 1), (-2, -1), (1, 2), (1, -2), (-1, 2), (-1, -2)];

/// Generation rules for a piece of `kind` and `color` standing on `origin`,
/// in the order their destinations are produced.
pub fn movement_rules(kind: PieceKind, color: Color, origin: Square) -> Vec<MoveRule> {
    let rays = |dirs: &[(i8, i8)]| dirs.iter().map(|&(df, dr)| MoveRule::Ray(df, dr)).collect::<Vec<_>>();
    match kind {
        PieceKind::Rook => rays(&ORTHOGONAL),
        PieceKind::Bishop => rays(&DIAGONAL),
        PieceKind::Queen => ORTHOGONAL.iter().chain(DIAGONAL.iter()).map(|&(df, dr)| MoveRule::Ray(df, dr)).collect(),
        PieceKind::King => ORTHOGONAL.iter().chain(DIAGONAL.iter()).map(|&(df, dr)| MoveRule::Offset(df, dr)).collect(),
        PieceKind::Knight => KNIGHT.iter().map(|&(df, dr)| MoveRule::Offset(df, dr)).collect(),
        PieceKind::Pawn => {
            let dr = color.forward();
            vec![
                MoveRule::PawnPush { dr, double: origin.rank() == color.pawn_origin_rank() },
                MoveRule::PawnCapture(-1, dr),
                MoveRule::PawnCapture(1, dr),
            ]
        }
    }
}
