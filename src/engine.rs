//! The four operations front ends need, with one-based columns.

use crate::ai::{Difficulty, HeuristicWeights, Mover};
use crate::error::MoveError;
use crate::game::{self, Board, GameResult, Player, COLS};

pub fn create_board() -> Board {
    Board::new()
}

/// Drop `player`'s piece into one-based `column`. `false` means the column
/// is full or out of range and nothing changed.
pub fn drop_piece(board: &mut Board, player: Player, column: usize) -> bool {
    if !(1..=COLS).contains(&column) {
        return false;
    }
    board.drop_piece(column - 1, player).is_ok()
}

pub fn evaluate(board: &Board) -> GameResult {
    game::evaluate(board)
}

/// Let `mover` play for `player`. The move is already on `board` when this
/// returns the one-based column.
pub fn choose_move(
    board: &mut Board,
    player: Player,
    mover: &mut dyn Mover,
) -> Result<usize, MoveError> {
    mover.choose_move(board, player)
}

/// One-shot form of [`choose_move`] for a difficulty tier.
pub fn choose_move_with(
    board: &mut Board,
    player: Player,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> Result<usize, MoveError> {
    let mut mover = difficulty.mover(seed, &HeuristicWeights::default());
    mover.choose_move(board, player)
}
