use crate::error::MoveError;
use crate::game::{Board, Player, COLS};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::mover::Mover;

/// Easy tier: drops into a uniformly random column, retrying full ones.
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    pub fn new() -> Self {
        RandomMover {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic mover for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        RandomMover {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

impl Mover for RandomMover {
    fn choose_move(&mut self, board: &mut Board, player: Player) -> Result<usize, MoveError> {
        if board.is_full() {
            return Err(MoveError::NoOpenColumn);
        }

        loop {
            let column = self.rng.random_range(1..=COLS);
            if board.drop_piece(column - 1, player).is_ok() {
                return Ok(column);
            }
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
