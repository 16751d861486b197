use cozy_chess::Move;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::cozy::Position;

/// Picks a reply for the side to move. `None` means the position has no legal moves.
pub trait MoveSelector {
    fn select_move(&mut self, pos: &Position) -> Option<Move>;
}

/// Uniform choice over the legal moves of `pos`.
pub fn random_move<R: Rng + ?Sized>(pos: &Position, rng: &mut R) -> Option<Move> {
    pos.legal_moves().choose(rng).copied()
}

pub struct RandomMover {
    rng: SmallRng,
}

impl RandomMover {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_entropy(),
        };
        Self { rng }
    }
}

impl MoveSelector for RandomMover {
    fn select_move(&mut self, pos: &Position) -> Option<Move> {
        random_move(pos, &mut self.rng)
    }
}
