use log::debug;

use crate::error::MoveError;
use crate::game::{evaluate, Board, GameResult, Player, COLS};

use super::mover::Mover;
use super::random::RandomMover;

/// Lowest zero-based column where dropping for `dropper` wins on the spot.
pub fn winning_column(board: &Board, dropper: Player) -> Option<usize> {
    (0..COLS).find(|&col| {
        board
            .simulate_drop(col, dropper)
            .is_some_and(|next| evaluate(&next) == GameResult::Win(dropper))
    })
}

/// Medium tier: take a win, else block the opponent's win, else play random.
pub struct TacticalMover {
    fallback: RandomMover,
}

impl TacticalMover {
    pub fn new() -> Self {
        TacticalMover {
            fallback: RandomMover::new(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        TacticalMover {
            fallback: RandomMover::seeded(seed),
        }
    }

    pub fn with_fallback(fallback: RandomMover) -> Self {
        TacticalMover { fallback }
    }
}

impl Default for TacticalMover {
    fn default() -> Self {
        Self::new()
    }
}

impl Mover for TacticalMover {
    fn choose_move(&mut self, board: &mut Board, player: Player) -> Result<usize, MoveError> {
        if board.is_full() {
            return Err(MoveError::NoOpenColumn);
        }

        if let Some(col) = winning_column(board, player) {
            debug!("{}: winning in column {}", player.name(), col + 1);
            board.drop_piece(col, player)?;
            return Ok(col + 1);
        }

        if let Some(col) = winning_column(board, player.other()) {
            debug!("{}: blocking column {}", player.name(), col + 1);
            board.drop_piece(col, player)?;
            return Ok(col + 1);
        }

        self.fallback.choose_move(board, player)
    }

    fn name(&self) -> &str {
        "Tactical"
    }
}
