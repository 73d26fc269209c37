use std::path::Path;

use log::warn;

use crate::ai::{Difficulty, HeuristicWeights};
use crate::error::ConfigError;
use crate::game::Player;

/// CPU opponent settings for interactive play.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    pub difficulty: Difficulty,
    /// Side the CPU plays in vs-CPU games
    pub cpu_player: Player,
    /// Seed for the CPU's random choices; fresh entropy when absent
    pub seed: Option<u64>,
}

impl Default for CpuConfig {
    fn default() -> Self {
        CpuConfig {
            difficulty: Difficulty::Hard,
            cpu_player: Player::Two,
            seed: None,
        }
    }
}

/// Settings for CPU-vs-CPU series.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    pub first: Difficulty,
    pub second: Difficulty,
    /// Alternate which tier moves first
    pub swap_sides: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 100,
            first: Difficulty::Hard,
            second: Difficulty::Easy,
            swap_sides: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub cpu: CpuConfig,
    pub heuristic: HeuristicWeights,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be > 0".into()));
        }

        let h = &self.heuristic;
        if h.own_three <= h.own_two {
            return Err(ConfigError::Validation(
                "heuristic.own_three must be > heuristic.own_two".into(),
            ));
        }
        if h.opponent_three >= h.opponent_two {
            return Err(ConfigError::Validation(
                "heuristic.opponent_three must be < heuristic.opponent_two".into(),
            ));
        }
        if h.center_piece < 0 {
            return Err(ConfigError::Validation(
                "heuristic.center_piece must be >= 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
