use crate::error::MoveError;
use crate::game::{Board, Player};

/// Common interface for the CPU tiers.
///
/// A mover commits its own move: on success the piece is already on `board`
/// and the returned value is the one-based column it went into.
pub trait Mover {
    /// Pick a column for `player` and drop the piece there.
    ///
    /// Fails with [`MoveError::NoOpenColumn`] when the board is full.
    fn choose_move(&mut self, board: &mut Board, player: Player) -> Result<usize, MoveError>;

    /// Return the mover's display name.
    fn name(&self) -> &str;
}
