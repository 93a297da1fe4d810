use serde::{Deserialize, Serialize};

use jungle_core::geometry::Rect;

use crate::config::{EnemySpawn, LayoutConfig};
use crate::enemy::EnemyState;
use crate::error::ConfigError;
use crate::player::PlayerState;

/// Everything that moves or collides in one level instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelState {
    pub player: PlayerState,
    pub platforms: Vec<Rect>,
    pub enemies: Vec<EnemyState>,
}

/// A validated level layout. Building state from it cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    player_spawn: Rect,
    platforms: Vec<Rect>,
    enemies: Vec<EnemySpawn>,
}

impl LevelLayout {
    pub fn from_config(config: &LayoutConfig) -> Result<Self, ConfigError> {
        check_rect("player", &config.player_spawn)?;
        for (i, plat) in config.platforms.iter().enumerate() {
            check_rect(&format!("platform {i}"), plat)?;
        }
        for (i, spawn) in config.enemies.iter().enumerate() {
            check_rect(&format!("enemy {i}"), &spawn.rect)?;
            if spawn.patrol_start_x > spawn.patrol_end_x {
                return Err(ConfigError::InvalidPatrol {
                    start_x: spawn.patrol_start_x,
                    end_x: spawn.patrol_end_x,
                });
            }
        }

        Ok(Self {
            player_spawn: config.player_spawn,
            platforms: config.platforms.clone(),
            enemies: config.enemies.clone(),
        })
    }

    /// Fresh state for the start of the level.
    pub fn build_state(&self) -> LevelState {
        LevelState {
            player: PlayerState::new(self.player_spawn),
            platforms: self.platforms.clone(),
            enemies: self.enemies.iter().map(EnemyState::new).collect(),
        }
    }
}

fn check_rect(what: &str, rect: &Rect) -> Result<(), ConfigError> {
    if rect.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::InvalidRect {
            what: what.to_string(),
            width: rect.w,
            height: rect.h,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::Facing;
    use crate::player::PlayerAnim;

    #[test]
    fn default_layout_builds() {
        let layout = LevelLayout::from_config(&LayoutConfig::default()).unwrap();
        let state = layout.build_state();

        assert_eq!(state.player.rect(), &Rect::new(100.0, 400.0, 40.0, 60.0));
        assert_eq!(state.player.body.velocity_y, 0.0);
        assert!(!state.player.body.on_ground);
        assert!(state.player.facing_right);
        assert_eq!(state.player.anim, PlayerAnim::Idle);
        assert_eq!(state.platforms.len(), 3);
        assert_eq!(state.enemies.len(), 2);
        assert!(state.enemies.iter().all(|e| e.direction == Facing::Right));
    }

    #[test]
    fn build_is_deterministic() {
        let layout = LevelLayout::from_config(&LayoutConfig::default()).unwrap();
        assert_eq!(layout.build_state(), layout.build_state());
    }

    #[test]
    fn spawn_does_not_touch_enemies_or_platforms() {
        let state = LevelLayout::from_config(&LayoutConfig::default())
            .unwrap()
            .build_state();
        let player = state.player.rect();
        assert!(state.platforms.iter().all(|p| !p.overlaps(player)));
        assert!(state.enemies.iter().all(|e| !e.rect.overlaps(player)));
    }

    #[test]
    fn zero_sized_platform_is_rejected() {
        let mut config = LayoutConfig::default();
        config.platforms.push(Rect::new(10.0, 10.0, 0.0, 20.0));
        let err = LevelLayout::from_config(&config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidRect {
                what: "platform 3".to_string(),
                width: 0.0,
                height: 20.0,
            }
        );
    }

    #[test]
    fn negative_player_size_is_rejected() {
        let mut config = LayoutConfig::default();
        config.player_spawn.h = -60.0;
        assert!(matches!(
            LevelLayout::from_config(&config),
            Err(ConfigError::InvalidRect { .. })
        ));
    }

    #[test]
    fn reversed_patrol_is_rejected() {
        let mut config = LayoutConfig::default();
        config.enemies[0].patrol_start_x = 400.0;
        assert!(matches!(
            LevelLayout::from_config(&config),
            Err(ConfigError::InvalidPatrol { .. })
        ));
    }
}
