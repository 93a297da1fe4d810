pub mod animation;
pub mod config;
pub mod enemy;
pub mod error;
pub mod level;
pub mod physics;
pub mod player;

use jungle_core::geometry::Rect;
use jungle_core::input::InputSnapshot;
use jungle_core::render::{Color, RenderCommand};
use jungle_core::sim_trait::{SimEvent, Simulation};
use jungle_core::simulation_boilerplate;

use animation::AnimationTable;
use config::{JumperConfig, PhysicsConfig};
use enemy::{EnemyState, Facing, enemy_animations};
use error::ConfigError;
use level::{LevelLayout, LevelState};
use player::{PlayerAnim, PlayerState, player_animations};

/// One level of Jungle Jumper: the platforms, the player and the enemies.
///
/// Owns all simulation state. Each update runs the player first, then every
/// enemy in list order, then checks the player against each enemy. The first
/// contact rebuilds the whole level from its initial layout.
pub struct JungleLevel {
    layout: LevelLayout,
    state: LevelState,
    physics: PhysicsConfig,
    player_animations: AnimationTable<PlayerAnim>,
    enemy_animations: AnimationTable<Facing>,
    paused: bool,
    /// Resets since construction, including ones requested by the shell.
    resets: u64,
}

impl JungleLevel {
    /// Validate `config` and build the level at its initial layout.
    pub fn new(config: &JumperConfig) -> Result<Self, ConfigError> {
        let layout = LevelLayout::from_config(&config.layout)?;
        let player_animations = player_animations(&config.animation)?;
        let enemy_animations = enemy_animations(&config.animation)?;
        Ok(Self {
            state: layout.build_state(),
            layout,
            physics: config.physics.clone(),
            player_animations,
            enemy_animations,
            paused: false,
            resets: 0,
        })
    }

    pub fn state(&self) -> &LevelState {
        &self.state
    }

    pub fn player(&self) -> &PlayerState {
        &self.state.player
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.state.platforms
    }

    pub fn enemies(&self) -> &[EnemyState] {
        &self.state.enemies
    }

    /// Frame identifier the player should be drawn with.
    pub fn player_frame(&self) -> &str {
        self.state.player.frame(&self.player_animations)
    }

    pub fn enemy_frame(&self, index: usize) -> Option<&str> {
        self.state
            .enemies
            .get(index)
            .map(|e| e.frame(&self.enemy_animations))
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Index of the first enemy touching the player.
    fn enemy_touching_player(&self) -> Option<usize> {
        let player = self.state.player.rect();
        self.state
            .enemies
            .iter()
            .position(|enemy| enemy.rect.overlaps(player))
    }
}

impl Simulation for JungleLevel {
    fn reset(&mut self) {
        self.state = self.layout.build_state();
        self.resets += 1;
        tracing::debug!(resets = self.resets, "Level reset");
    }

    fn update(&mut self, input: &InputSnapshot) -> Vec<SimEvent> {
        if self.paused {
            return Vec::new();
        }

        let mut events = Vec::new();
        let LevelState {
            player,
            platforms,
            enemies,
        } = &mut self.state;

        if player.update(input, platforms, &self.physics, &self.player_animations) {
            tracing::debug!(x = player.rect().x, "Jump");
            events.push(SimEvent::Jumped);
        }

        for enemy in enemies.iter_mut() {
            enemy.update(self.physics.enemy_speed, &self.enemy_animations);
        }

        if let Some(enemy) = self.enemy_touching_player() {
            tracing::debug!(enemy, "Player caught");
            events.push(SimEvent::PlayerCaught { enemy });
            self.reset();
            events.push(SimEvent::LevelReset);
        }

        events
    }

    fn draw(&self) -> Vec<RenderCommand> {
        let mut commands =
            Vec::with_capacity(2 + self.state.platforms.len() + self.state.enemies.len());
        commands.push(RenderCommand::Clear {
            color: Color::SKY_BLUE,
        });

        for plat in &self.state.platforms {
            commands.push(RenderCommand::FilledRect {
                rect: *plat,
                color: Color::SADDLE_BROWN,
            });
        }

        let player = &self.state.player;
        commands.push(RenderCommand::Sprite {
            image: self.player_frame().to_string(),
            top_left: player.rect().top_left(),
            flip_x: !player.facing_right,
        });

        for enemy in &self.state.enemies {
            commands.push(RenderCommand::Sprite {
                image: enemy.frame(&self.enemy_animations).to_string(),
                top_left: enemy.rect.top_left(),
                flip_x: false,
            });
        }

        commands
    }

    simulation_boilerplate!(state_type: LevelState);
}
