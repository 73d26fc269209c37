//! Core Connect Four game logic: board representation, players, terminal
//! detection and a turn-tracking game state.

mod board;
mod outcome;
mod player;
mod state;

pub use board::{Board, Cell, Window, CENTER_COL, COLS, DIRECTIONS, ROWS, WINDOW_LEN};
pub use outcome::{evaluate, GameResult};
pub use player::Player;
pub use state::{GameState, PlayedMove};
