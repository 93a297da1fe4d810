use serde::{Deserialize, Serialize};

use jungle_core::geometry::Rect;
use jungle_core::input::InputSnapshot;

use crate::animation::{AnimationKey, AnimationTable, Animator};
use crate::config::{AnimationConfig, PhysicsConfig};
use crate::error::ConfigError;
use crate::physics::KinematicBody;

/// Player animation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAnim {
    Idle,
    Run,
    Jump,
}

impl AnimationKey for PlayerAnim {
    const ALL: &'static [Self] = &[PlayerAnim::Idle, PlayerAnim::Run, PlayerAnim::Jump];

    fn index(self) -> usize {
        self as usize
    }
}

impl PlayerAnim {
    /// Airborne always shows the jump animation; on the ground, any
    /// horizontal input means running.
    pub fn select(on_ground: bool, moving: bool) -> Self {
        if !on_ground {
            PlayerAnim::Jump
        } else if moving {
            PlayerAnim::Run
        } else {
            PlayerAnim::Idle
        }
    }
}

/// Build the player's animation table from config.
pub fn player_animations(
    config: &AnimationConfig,
) -> Result<AnimationTable<PlayerAnim>, ConfigError> {
    AnimationTable::new("player", config.player_speed, |key| match key {
        PlayerAnim::Idle => config.player.idle.clone(),
        PlayerAnim::Run => config.player.run.clone(),
        PlayerAnim::Jump => config.player.jump.clone(),
    })
}

/// State of the player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub body: KinematicBody,
    pub facing_right: bool,
    pub anim: PlayerAnim,
    pub animator: Animator,
}

impl PlayerState {
    pub fn new(spawn: Rect) -> Self {
        Self {
            body: KinematicBody::new(spawn),
            facing_right: true,
            anim: PlayerAnim::Idle,
            animator: Animator::default(),
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    /// Run one frame of player control.
    ///
    /// The animation state is chosen from the previous frame's ground
    /// contact, then the body moves, then the animation clock ticks. The jump
    /// control is applied last, so a successful jump shows up as the jump
    /// velocity right after this call. Returns whether a jump happened.
    pub fn update(
        &mut self,
        input: &InputSnapshot,
        platforms: &[Rect],
        physics: &PhysicsConfig,
        animations: &AnimationTable<PlayerAnim>,
    ) -> bool {
        let direction = input.horizontal();
        let dx = f32::from(direction) * physics.player_speed;
        match direction {
            1 => self.facing_right = true,
            -1 => self.facing_right = false,
            _ => {},
        }

        let anim = PlayerAnim::select(self.body.on_ground, direction != 0);
        if anim != self.anim {
            self.anim = anim;
            self.animator.restart();
        }

        self.body.step(dx, platforms, physics);
        self.animator.advance_in(animations, self.anim);

        input.jump_pressed() && self.jump(physics)
    }

    /// Launch upward if standing on a platform. No-op in the air.
    pub fn jump(&mut self, physics: &PhysicsConfig) -> bool {
        if !self.body.on_ground {
            return false;
        }
        self.body.velocity_y = physics.jump_velocity;
        true
    }

    /// Current frame identifier for drawing.
    pub fn frame<'a>(&self, animations: &'a AnimationTable<PlayerAnim>) -> &'a str {
        animations.frame(self.anim, self.animator.frame_index)
    }
}
