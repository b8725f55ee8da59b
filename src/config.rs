use std::path::Path;

use tracing::info;

use crate::error::ConfigError;
use crate::game::{SIZE, WIN_CONDITION};

/// Board geometry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: usize,
    pub win_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: SIZE,
            win_length: WIN_CONDITION,
        }
    }
}

/// Machine player settings.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Ply cap for the search. Unset means search to the end of the game.
    pub max_depth: Option<usize>,
    /// Seed for the random opening move. Unset draws from the OS.
    pub seed: Option<u64>,
}

/// Console presentation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pause after the machine moves, in milliseconds.
    pub move_delay_ms: u64,
    pub clear_screen: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            move_delay_ms: 1000,
            clear_screen: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub search: SearchConfig,
    pub ui: UiConfig,
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
            info!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.size == 0 {
            return Err(ConfigError::Validation("game.size must be >= 1".into()));
        }
        if self.game.win_length == 0 {
            return Err(ConfigError::Validation(
                "game.win_length must be >= 1".into(),
            ));
        }
        if self.game.win_length > self.game.size {
            return Err(ConfigError::Validation(
                "game.win_length must be <= game.size".into(),
            ));
        }
        if self.search.max_depth == Some(0) {
            return Err(ConfigError::Validation(
                "search.max_depth must be >= 1 when set".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.size, 10);
        assert_eq!(config.game.win_length, 5);
        assert_eq!(config.search.max_depth, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
max_depth = 3
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.max_depth, Some(3));
        // Other fields should be defaults
        assert_eq!(config.game.size, 10);
        assert_eq!(config.ui.move_delay_ms, 1000);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.win_length, WIN_CONDITION);
        assert!(config.ui.clear_screen);
        assert_eq!(config.search.seed, None);
    }

    #[test]
    fn test_validation_rejects_zero_size() {
        let mut config = AppConfig::default();
        config.game.size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_long_win_length() {
        let mut config = AppConfig::default();
        config.game.size = 3;
        config.game.win_length = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_depth_cap() {
        let mut config = AppConfig::default();
        config.search.max_depth = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.size, 10);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
size = 3
win_length = 3

[ui]
move_delay_ms = 0
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.size, 3);
        assert_eq!(config.ui.move_delay_ms, 0);
        // Others are defaults
        assert!(config.ui.clear_screen);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\nsize = 4\nwin_length = 5\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
