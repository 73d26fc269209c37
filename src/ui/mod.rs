//! Terminal UI: a single game screen for local two-player games and games
//! against the CPU.

mod app;
mod game_view;

pub use app::{result_message, App, GameMode};
