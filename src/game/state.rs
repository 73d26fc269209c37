use super::{evaluate, Board, GameResult, Player, COLS};
use crate::ai::Mover;
use crate::error::MoveError;

/// One applied move; `column` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub player: Player,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    result: GameResult,
    history: Vec<PlayedMove>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One, // Player 1 starts
            result: GameResult::InProgress,
            history: Vec::new(),
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.result.is_terminal()
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn last_move(&self) -> Option<PlayedMove> {
        self.history.last().copied()
    }

    /// Number of pieces on the board
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.drop_piece(column, self.current_player)?;
        self.finish_turn(column);
        Ok(())
    }

    /// Let `mover` pick and commit the current player's move.
    /// Returns the one-based column it played.
    pub fn play_with(&mut self, mover: &mut dyn Mover) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let column = mover.choose_move(&mut self.board, self.current_player)?;
        self.finish_turn(column - 1);
        Ok(column)
    }

    fn finish_turn(&mut self, column: usize) {
        self.history.push(PlayedMove {
            player: self.current_player,
            column,
        });
        self.result = evaluate(&self.board);
        self.current_player = self.current_player.other();
    }
}
