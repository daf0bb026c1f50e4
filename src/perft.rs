use crate::board::Position;
use crate::movegen::candidate_moves;

// Clone-and-apply perft over the simplified move set
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for mv in candidate_moves(position, position.side_to_move()) {
        let mut child = position.clone();
        if child.apply(&mv.piece.id, mv.to).is_err() { continue; }
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Per-root-move node counts, in generation order.
pub fn divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    if depth == 0 { return Vec::new(); }
    candidate_moves(position, position.side_to_move())
        .into_iter()
        .filter_map(|mv| {
            let mut child = position.clone();
            child.apply(&mv.piece.id, mv.to).ok()?;
            Some((mv.uci(), perft(&child, depth - 1)))
        })
        .collect()
}
