use serde::{Deserialize, Serialize};

use jungle_jumper::error::ConfigError;

/// Key codes for each game control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub jump_primary: String,
    pub jump_secondary: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
            jump_primary: "Space".to_string(),
            jump_secondary: "ArrowUp".to_string(),
        }
    }
}

/// Shell settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub keys: KeyBindings,
    /// Whether music plays when the shell starts.
    pub sound_on: bool,
    pub music_track: String,
    /// Send the shell to the game over screen when an enemy catches the
    /// player, instead of only restarting the level.
    pub contact_ends_game: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            keys: KeyBindings::default(),
            sound_on: true,
            music_track: "music_background".to_string(),
            contact_ends_game: false,
        }
    }
}

impl ShellConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("JUNGLE_SHELL_CONFIG")
            .unwrap_or_else(|_| "config/shell.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    Self::default()
                },
            },
            Err(_) => Self::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
