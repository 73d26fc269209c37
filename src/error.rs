use std::path::PathBuf;

/// Errors raised when a move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (expected 1-7)")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("no open column left on the board")]
    NoOpenColumn,

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised when building a board from a raw grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("unknown cell value {value} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("piece at row {row}, column {col} has an empty cell below it")]
    FloatingPiece { row: usize, col: usize },
}

/// Errors raised when parsing a difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected 'easy', 'medium' or 'hard')")]
pub struct ParseDifficultyError(pub String);

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(4).to_string(), "column 4 is full");
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is out of range (expected 1-7)"
        );
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::FloatingPiece { row: 2, col: 5 };
        assert_eq!(
            err.to_string(),
            "piece at row 2, column 5 has an empty cell below it"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("arena.games must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: arena.games must be > 0"
        );
    }
}
