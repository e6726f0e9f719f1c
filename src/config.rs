//! Configuration for the `piezas` command-line front end.

use crate::games::piezas::{BoardGame, ROWS};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How a board is printed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RenderStyle {
    /// Multi-line grid with column numbers, top row first.
    #[default]
    Grid,
    /// Single line of rows separated by `/`, top row first.
    Compact,
}

impl RenderStyle {
    /// Renders the game's board in this style.
    #[instrument(skip(game))]
    pub fn render(self, game: &BoardGame) -> String {
        match self {
            RenderStyle::Grid => game.render(),
            RenderStyle::Compact => (0..ROWS)
                .rev()
                .map(|row| game.board().row_string(row))
                .collect::<Vec<_>>()
                .join("/"),
        }
    }
}

/// Settings read from a `piezas.toml` file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PiezasConfig {
    /// Columns to drop, in order.
    #[serde(default)]
    moves: Vec<i32>,

    /// Board output style.
    #[serde(default)]
    render: RenderStyle,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl PiezasConfig {
    /// Creates a configuration that replays `moves`.
    #[instrument]
    pub fn new(moves: Vec<i32>, render: RenderStyle) -> Self {
        Self {
            moves,
            render,
            log_filter: default_log_filter(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(moves = config.moves.len(), render = %config.render, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

impl Default for PiezasConfig {
    fn default() -> Self {
        Self::new(Vec::new(), RenderStyle::default())
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
    #[instrument(skip(message))]
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
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = PiezasConfig::from_toml("").unwrap();
        assert_eq!(config, PiezasConfig::default());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_render_style_names() {
        for style in RenderStyle::iter() {
            assert_eq!(RenderStyle::from_str(&style.to_string()).unwrap(), style);
        }
        assert!(RenderStyle::from_str("fancy").is_err());
    }

    #[test]
    fn test_compact_render() {
        let mut game = BoardGame::new();
        game.drop_piece(0);
        game.drop_piece(3);
        assert_eq!(RenderStyle::Compact.render(&game), "..../..../X..O");
    }

    #[test]
    fn test_bad_toml_is_error() {
        let err = PiezasConfig::from_toml("moves = \"oops\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
