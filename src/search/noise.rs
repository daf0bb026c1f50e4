use std::cmp::Reverse;
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use crate::board::Position;
use crate::search::eval::{Evaluator, PieceValues, ScoredMove};

/// Choose a move uniformly from the first `topk` entries of an already
/// ordered list. `topk` of 0 is treated as 1.
pub fn choose_noisy_from_order(order: &[ScoredMove], topk: usize, rng: &mut SmallRng) -> Option<ScoredMove> {
    if order.is_empty() { return None; }
    let k = topk.max(1).min(order.len());
    let idx = rng.gen_range(0..k);
    Some(order[idx].clone())
}

/// The simulated opponent: numeric evaluator plus a seeded top-K pick.
pub struct Opponent {
    evaluator: Evaluator,
    topk: usize,
    rng: SmallRng,
}

impl Opponent {
    pub fn new(values: PieceValues, topk: usize, seed: u64) -> Self {
        Self { evaluator: Evaluator::new(values), topk, rng: SmallRng::seed_from_u64(seed) }
    }

    pub fn pick(&mut self, position: &Position) -> Option<ScoredMove> {
        let mut order = self.evaluator.scored_moves(position);
        // stable, so equal scores keep generation order
        order.sort_by_key(|m| Reverse(m.score));
        let choice = choose_noisy_from_order(&order, self.topk, &mut self.rng);
        if let Some(m) = &choice {
            debug!("opponent: {} of {} candidates -> {} (score {})", self.topk.min(order.len()), order.len(), m.mv.uci(), m.score);
        }
        choice
    }
}
