//! # Connect Four CPU
//!
//! A Connect Four engine with three CPU tiers, a terminal UI built with
//! Ratatui, and a headless arena for pitting tiers against each other.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, terminal detection, game state
//! - [`ai`]: Mover trait and the easy, medium and hard tiers
//! - [`engine`]: One-based facade: create, drop, evaluate, choose move
//! - [`arena`]: CPU-vs-CPU games and series tallies
//! - [`ui`]: Terminal UI: game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod ui;
