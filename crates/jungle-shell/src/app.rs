use serde::{Deserialize, Serialize};

/// Top-level screen the shell is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    MainMenu,
    Playing,
    GameOver,
}
