use serde::{Deserialize, Serialize};

use jungle_core::geometry::Rect;

use crate::animation::{AnimationKey, AnimationTable, Animator};
use crate::config::{AnimationConfig, EnemySpawn};
use crate::error::ConfigError;

/// Patrol direction. Also keys the enemy's walk animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Right,
    Left,
}

impl AnimationKey for Facing {
    const ALL: &'static [Self] = &[Facing::Right, Facing::Left];

    fn index(self) -> usize {
        self as usize
    }
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Build the enemy walk animation table from config.
pub fn enemy_animations(config: &AnimationConfig) -> Result<AnimationTable<Facing>, ConfigError> {
    AnimationTable::new("enemy", config.enemy_speed, |key| match key {
        Facing::Right => config.enemy.right.clone(),
        Facing::Left => config.enemy.left.clone(),
    })
}

/// A patrolling enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyState {
    pub rect: Rect,
    pub patrol_start_x: f32,
    pub patrol_end_x: f32,
    pub direction: Facing,
    pub animator: Animator,
}

impl EnemyState {
    pub fn new(spawn: &EnemySpawn) -> Self {
        Self {
            rect: spawn.rect,
            patrol_start_x: spawn.patrol_start_x,
            patrol_end_x: spawn.patrol_end_x,
            direction: Facing::Right,
            animator: Animator::default(),
        }
    }

    /// Move one step and turn around once past either patrol bound.
    ///
    /// Position is never clamped: the enemy may overshoot a bound by up to
    /// one step before the flip brings it back. Returns whether it turned.
    pub fn patrol_step(&mut self, speed: f32) -> bool {
        self.rect.x += speed * self.direction.sign();
        if self.rect.right() > self.patrol_end_x || self.rect.left() < self.patrol_start_x {
            self.direction = self.direction.flipped();
            return true;
        }
        false
    }

    /// Patrol and animate for one frame.
    pub fn update(&mut self, speed: f32, animations: &AnimationTable<Facing>) {
        if self.patrol_step(speed) {
            self.animator.restart();
        }
        self.animator.advance_in(animations, self.direction);
    }

    pub fn frame<'a>(&self, animations: &'a AnimationTable<Facing>) -> &'a str {
        animations.frame(self.direction, self.animator.frame_index)
    }
}
