use serde::{Deserialize, Serialize};

use jungle_core::geometry::Rect;

use crate::error::ConfigError;

/// Screen width in world units.
pub const WIDTH: f32 = 800.0;
/// Screen height in world units.
pub const HEIGHT: f32 = 600.0;
/// Downward acceleration per frame.
pub const GRAVITY: f32 = 0.8;
/// Terminal fall speed per frame.
pub const MAX_FALL_SPEED: f32 = 10.0;
/// Vertical velocity set by a jump (negative is up).
pub const JUMP_VELOCITY: f32 = -15.0;
/// Horizontal player speed per frame.
pub const PLAYER_SPEED: f32 = 5.0;
/// Horizontal enemy speed per frame.
pub const ENEMY_SPEED: f32 = 2.0;
pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 60.0;
pub const ENEMY_SIZE: f32 = 32.0;
/// Seconds per player animation frame.
pub const PLAYER_ANIMATION_SPEED: f32 = 0.1;
/// Seconds per enemy animation frame.
pub const ENEMY_ANIMATION_SPEED: f32 = 0.25;

/// Per-frame physics constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub jump_velocity: f32,
    pub player_speed: f32,
    pub enemy_speed: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            jump_velocity: JUMP_VELOCITY,
            player_speed: PLAYER_SPEED,
            enemy_speed: ENEMY_SPEED,
        }
    }
}

/// Screen size. The shell lays out its menu from this. A `[layout]` section
/// loaded alongside it is taken as-is; only the built-in default layout is
/// derived from the world size (see [`LayoutConfig::for_world`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

/// Where an enemy starts and the horizontal range it patrols.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub rect: Rect,
    pub patrol_start_x: f32,
    pub patrol_end_x: f32,
}

impl EnemySpawn {
    /// Enemy standing on `platform`'s left end, patrolling its full width.
    pub fn on_platform(platform: &Rect) -> Self {
        Self {
            rect: Rect::new(
                platform.left(),
                platform.top() - ENEMY_SIZE,
                ENEMY_SIZE,
                ENEMY_SIZE,
            ),
            patrol_start_x: platform.left(),
            patrol_end_x: platform.right(),
        }
    }
}

/// Fixed initial layout of the level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub player_spawn: Rect,
    pub platforms: Vec<Rect>,
    pub enemies: Vec<EnemySpawn>,
}

impl LayoutConfig {
    /// The standard level for a screen of the given size: ground across the
    /// full width, two raised platforms measured up from the bottom edge, one
    /// enemy on each raised platform.
    pub fn for_world(world: &WorldConfig) -> Self {
        let bottom = world.height;
        let ground = Rect::new(0.0, bottom - 40.0, world.width, 40.0);
        let low = Rect::new(200.0, bottom - 150.0, 150.0, 20.0);
        let high = Rect::new(450.0, bottom - 250.0, 150.0, 20.0);
        Self {
            player_spawn: Rect::new(100.0, bottom - 200.0, PLAYER_WIDTH, PLAYER_HEIGHT),
            enemies: vec![EnemySpawn::on_platform(&low), EnemySpawn::on_platform(&high)],
            platforms: vec![ground, low, high],
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::for_world(&WorldConfig::default())
    }
}

/// Frame identifiers for each player animation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerFrames {
    pub idle: Vec<String>,
    pub run: Vec<String>,
    pub jump: Vec<String>,
}

impl Default for PlayerFrames {
    fn default() -> Self {
        Self {
            idle: frames(&["player_idle_1", "player_idle_2"]),
            run: frames(&["player_run_1", "player_run_2"]),
            jump: frames(&["player_jump"]),
        }
    }
}

/// Frame identifiers for each enemy walking direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyFrames {
    pub right: Vec<String>,
    pub left: Vec<String>,
}

impl Default for EnemyFrames {
    fn default() -> Self {
        Self {
            right: frames(&["enemy_walk_right_1", "enemy_walk_right_2"]),
            left: frames(&["enemy_walk_left_1", "enemy_walk_left_2"]),
        }
    }
}

fn frames(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Seconds a player frame stays up before advancing.
    pub player_speed: f32,
    /// Seconds an enemy frame stays up before advancing.
    pub enemy_speed: f32,
    pub player: PlayerFrames,
    pub enemy: EnemyFrames,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_ANIMATION_SPEED,
            enemy_speed: ENEMY_ANIMATION_SPEED,
            player: PlayerFrames::default(),
            enemy: EnemyFrames::default(),
        }
    }
}

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumperConfig {
    pub physics: PhysicsConfig,
    pub world: WorldConfig,
    pub layout: LayoutConfig,
    pub animation: AnimationConfig,
}

impl JumperConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("JUNGLE_JUMPER_CONFIG")
            .unwrap_or_else(|_| "config/jungle.toml".to_string());
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
