//! CPU opponents: the shared [`Mover`] trait and the easy, medium and hard
//! tiers behind it.

mod difficulty;
pub mod heuristic;
mod mover;
mod random;
mod tactical;

pub use difficulty::Difficulty;
pub use heuristic::{HeuristicMover, HeuristicWeights};
pub use mover::Mover;
pub use random::RandomMover;
pub use tactical::{winning_column, TacticalMover};
