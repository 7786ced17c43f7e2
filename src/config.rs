//! Engine configuration.

use crate::games::tictactoe::{Difficulty, Side, Symbols};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "MINIMAX_TICTACTOE_CONFIG";

/// Settings for a game against the computer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Difficulty of the computer opponent.
    #[serde(default)]
    difficulty: Difficulty,

    /// Side that opens every game.
    #[serde(default = "default_first_player")]
    first_player: Side,

    /// Glyph drawn for the user's cells.
    #[serde(default = "default_user_symbol")]
    user_symbol: char,

    /// Glyph drawn for the computer's cells.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: char,

    /// Fixed seed for the difficulty policy; random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_first_player() -> Side {
    Side::User
}

fn default_user_symbol() -> char {
    'X'
}

fn default_computer_symbol() -> char {
    'O'
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            first_player: default_first_player(),
            user_symbol: default_user_symbol(),
            computer_symbol: default_computer_symbol(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            difficulty = %config.difficulty,
            first = %config.first_player,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from `path` if given, else from the file named by
    /// [`CONFIG_ENV_VAR`], else returns defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_file(path),
            Err(_) => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.user_symbol == self.computer_symbol {
            return Err(ConfigError::new(format!(
                "User and computer symbols must differ (both '{}')",
                self.user_symbol
            )));
        }
        if self.user_symbol.is_whitespace() || self.computer_symbol.is_whitespace() {
            return Err(ConfigError::new("Symbols must be visible characters".to_string()));
        }
        Ok(())
    }

    /// Glyph map built from the two symbol settings.
    pub fn symbols(&self) -> Symbols {
        Symbols::new(self.user_symbol, self.computer_symbol)
    }

    /// Returns a copy with a different difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Returns a copy with a different first mover.
    pub fn with_first_player(mut self, first_player: Side) -> Self {
        self.first_player = first_player;
        self
    }

    /// Returns a copy with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(*config.difficulty(), Difficulty::Easy);
        assert_eq!(*config.first_player(), Side::User);
        assert_eq!(config.symbols(), Symbols::new('X', 'O'));
    }

    #[test]
    fn test_partial_toml() {
        let config = EngineConfig::from_toml(
            r#"
            difficulty = "hard"
            first_player = "computer"
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(*config.first_player(), Side::Computer);
        assert_eq!(*config.seed(), Some(42));
    }

    #[test]
    fn test_identical_symbols_rejected() {
        let err = EngineConfig::from_toml("user_symbol = \"O\"").unwrap_err();
        assert!(err.message.contains("must differ"));
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(EngineConfig::from_toml("difficulty = \"brutal\"").is_err());
    }
}
