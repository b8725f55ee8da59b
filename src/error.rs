use std::path::PathBuf;

/// Errors from placing a piece on the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is already occupied")]
    InvalidMove { row: usize, col: usize },

    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange { row: usize, col: usize, size: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors from reading a board or a move number from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("invalid cell value {0} (expected -1, 0 or 1)")]
    InvalidCellValue(i64),

    #[error("row has {got} values, expected {expected}")]
    WrongRowLength { expected: usize, got: usize },

    #[error("board has {got} rows, expected {expected}")]
    WrongRowCount { expected: usize, got: usize },

    #[error("move {number} is outside 1..={max}")]
    MoveOutOfRange { number: usize, max: usize },
}

/// Errors from setting up a game from external input.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("invalid board: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid move: {0}")]
    Move(#[from] MoveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

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
        let err = MoveError::InvalidMove { row: 2, col: 7 };
        assert_eq!(err.to_string(), "cell (2, 7) is already occupied");

        let err = MoveError::OutOfRange {
            row: 10,
            col: 0,
            size: 10,
        };
        assert_eq!(err.to_string(), "cell (10, 0) is outside the 10x10 board");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::WrongRowLength {
            expected: 10,
            got: 9,
        };
        assert_eq!(err.to_string(), "row has 9 values, expected 10");
    }

    #[test]
    fn test_game_error_wraps_move_error() {
        let err: GameError = MoveError::GameOver.into();
        assert_eq!(err.to_string(), "invalid move: the game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.size must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.size must be >= 1"
        );
    }
}
