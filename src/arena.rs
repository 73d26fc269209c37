//! CPU-vs-CPU play: single games and tallied series between two tiers.

use log::{debug, info};

use crate::ai::{Difficulty, HeuristicWeights, Mover};
use crate::config::ArenaConfig;
use crate::error::MoveError;
use crate::game::{GameResult, GameState, Player};

/// Result of a single finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    /// Number of pieces played
    pub length: usize,
}

/// Play one game to the end. `one` moves first.
pub fn play_game<'a>(
    one: &'a mut dyn Mover,
    two: &'a mut dyn Mover,
) -> Result<GameRecord, MoveError> {
    let mut state = GameState::initial();

    while !state.is_terminal() {
        let mover = match state.current_player() {
            Player::One => &mut *one,
            Player::Two => &mut *two,
        };
        state.play_with(mover)?;
    }

    Ok(GameRecord {
        result: state.result(),
        length: state.ply(),
    })
}

/// Tally of a series between two tiers.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SeriesSummary {
    pub first: Difficulty,
    pub second: Difficulty,
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub avg_game_length: f32,
}

impl SeriesSummary {
    fn new(first: Difficulty, second: Difficulty) -> Self {
        SeriesSummary {
            first,
            second,
            games: 0,
            first_wins: 0,
            second_wins: 0,
            draws: 0,
            avg_game_length: 0.0,
        }
    }

    /// Record a game in which `first` played `first_side`.
    fn record(&mut self, record: &GameRecord, first_side: Player) {
        let total_length = self.avg_game_length * self.games as f32 + record.length as f32;
        self.games += 1;
        self.avg_game_length = total_length / self.games as f32;

        match record.result.winner() {
            Some(winner) if winner == first_side => self.first_wins += 1,
            Some(_) => self.second_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn first_win_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.first_wins as f32 / self.games as f32
    }
}

/// Play `config.games` games between `config.first` and `config.second`.
pub fn run_series(
    config: &ArenaConfig,
    weights: &HeuristicWeights,
    seed: Option<u64>,
) -> Result<SeriesSummary, MoveError> {
    let mut first = config.first.mover(seed, weights);
    let mut second = config.second.mover(seed.map(|s| s.wrapping_add(1)), weights);
    let mut summary = SeriesSummary::new(config.first, config.second);

    info!(
        "Starting series: {} vs {} over {} games",
        config.first, config.second, config.games
    );

    for game in 0..config.games {
        let first_side = if config.swap_sides && game % 2 == 1 {
            Player::Two
        } else {
            Player::One
        };

        let record = match first_side {
            Player::One => play_game(first.as_mut(), second.as_mut())?,
            Player::Two => play_game(second.as_mut(), first.as_mut())?,
        };
        debug!(
            "game {}: {} as {} -> {:?} in {} plies",
            game + 1,
            config.first,
            first_side.name(),
            record.result,
            record.length
        );
        summary.record(&record, first_side);
    }

    info!(
        "Series done: {} {} - {} {} ({} draws, avg length {:.1})",
        config.first,
        summary.first_wins,
        summary.second_wins,
        config.second,
        summary.draws,
        summary.avg_game_length
    );

    Ok(summary)
}
