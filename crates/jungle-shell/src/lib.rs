pub mod app;
pub mod audio;
pub mod config;
pub mod input;
pub mod menu;
pub mod replay;

use glam::Vec2;

use jungle_core::render::RenderCommand;
use jungle_core::sim_trait::{SimEvent, Simulation};
use jungle_jumper::JungleLevel;
use jungle_jumper::config::JumperConfig;
use jungle_jumper::error::ConfigError;

use app::GameState;
use audio::MusicPlayer;
use config::ShellConfig;
use input::InputState;
use menu::{MainMenu, MenuAction};

/// Owns the level, the menu and the music, and routes each frame's input
/// and draw calls according to the current [`GameState`].
pub struct Shell<M: MusicPlayer> {
    level: JungleLevel,
    menu: MainMenu,
    music: M,
    config: ShellConfig,
    state: GameState,
    sound_on: bool,
    quit_requested: bool,
    screen: Vec2,
}

impl<M: MusicPlayer> Shell<M> {
    /// Build the level and start the background track. A shell configured
    /// with sound off starts with the track paused.
    pub fn new(
        jumper: &JumperConfig,
        config: ShellConfig,
        mut music: M,
    ) -> Result<Self, ConfigError> {
        let level = JungleLevel::new(jumper)?;
        let screen = Vec2::new(jumper.world.width, jumper.world.height);

        music.play(&config.music_track);
        if !config.sound_on {
            music.pause();
        }

        Ok(Self {
            level,
            menu: MainMenu::new(screen.x, screen.y),
            music,
            sound_on: config.sound_on,
            config,
            state: GameState::MainMenu,
            quit_requested: false,
            screen,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn level(&self) -> &JungleLevel {
        &self.level
    }

    pub fn menu(&self) -> &MainMenu {
        &self.menu
    }

    pub fn music(&self) -> &M {
        &self.music
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Updates per second the level's animation clock assumes.
    pub fn tick_rate(&self) -> f32 {
        self.level.tick_rate()
    }

    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    /// Set once Exit has been clicked. The host loop should stop.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Handle a mouse click at `pos` in screen coordinates.
    pub fn on_mouse_down(&mut self, pos: Vec2) {
        match self.state {
            GameState::MainMenu => match self.menu.hit(pos) {
                Some(MenuAction::StartGame) => self.start_game(),
                Some(MenuAction::ToggleSound) => self.toggle_sound(),
                Some(MenuAction::Exit) => {
                    tracing::info!("Exit requested");
                    self.quit_requested = true;
                },
                None => {},
            },
            GameState::GameOver => {
                tracing::info!("Returning to main menu");
                self.state = GameState::MainMenu;
            },
            GameState::Playing => {},
        }
    }

    /// Run one frame. Only the playing state advances the level.
    pub fn update(&mut self, input: &InputState) -> Vec<SimEvent> {
        if self.state != GameState::Playing {
            return Vec::new();
        }

        let events = self.level.update(&input.snapshot(&self.config.keys));
        if self.config.contact_ends_game
            && events
                .iter()
                .any(|e| matches!(e, SimEvent::PlayerCaught { .. }))
        {
            tracing::info!("Player caught, game over");
            self.state = GameState::GameOver;
        }
        events
    }

    pub fn draw(&self) -> Vec<RenderCommand> {
        match self.state {
            GameState::MainMenu => self.menu.draw(self.sound_on),
            GameState::Playing => self.level.draw(),
            GameState::GameOver => menu::draw_game_over(self.screen.x, self.screen.y),
        }
    }

    fn start_game(&mut self) {
        self.level.reset();
        self.state = GameState::Playing;
        tracing::info!("Game started");
    }

    fn toggle_sound(&mut self) {
        self.sound_on = !self.sound_on;
        if self.sound_on {
            self.music.unpause();
        } else {
            self.music.pause();
        }
        tracing::info!(sound_on = self.sound_on, "Sound toggled");
    }
}
