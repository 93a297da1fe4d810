use glam::Vec2;

use jungle_core::geometry::Rect;
use jungle_core::render::{Color, Outline, RenderCommand};

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 50.0;
const TITLE_FONT_SIZE: f32 = 70.0;
const BUTTON_FONT_SIZE: f32 = 35.0;
const GAME_OVER_FONT_SIZE: f32 = 60.0;

/// What a click on the main menu asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    ToggleSound,
    Exit,
}

/// Main menu button layout for a given screen size.
#[derive(Debug, Clone, PartialEq)]
pub struct MainMenu {
    title_center: Vec2,
    start: Rect,
    sound: Rect,
    exit: Rect,
}

impl MainMenu {
    /// Three stacked buttons centred horizontally around the middle of the
    /// screen, 60 units apart.
    pub fn new(width: f32, height: f32) -> Self {
        let x = width / 2.0 - BUTTON_WIDTH / 2.0;
        let button = |offset: f32| {
            Rect::new(
                x,
                height / 2.0 - BUTTON_HEIGHT / 2.0 + offset,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            )
        };
        Self {
            title_center: Vec2::new(width / 2.0, height / 4.0),
            start: button(0.0),
            sound: button(60.0),
            exit: button(120.0),
        }
    }

    pub fn start_button(&self) -> &Rect {
        &self.start
    }

    pub fn sound_button(&self) -> &Rect {
        &self.sound
    }

    pub fn exit_button(&self) -> &Rect {
        &self.exit
    }

    /// Button under `pos`, checked top to bottom.
    pub fn hit(&self, pos: Vec2) -> Option<MenuAction> {
        if self.start.contains_point(pos) {
            Some(MenuAction::StartGame)
        } else if self.sound.contains_point(pos) {
            Some(MenuAction::ToggleSound)
        } else if self.exit.contains_point(pos) {
            Some(MenuAction::Exit)
        } else {
            None
        }
    }

    pub fn draw(&self, sound_on: bool) -> Vec<RenderCommand> {
        let sound_label = if sound_on { "Sound: ON" } else { "Sound: OFF" };
        let mut commands = vec![
            RenderCommand::Clear {
                color: Color::DARK_GREEN,
            },
            RenderCommand::Text {
                text: "Jungle Jumper".to_string(),
                center: self.title_center,
                font_size: TITLE_FONT_SIZE,
                color: Color::WHITE,
                outline: Some(Outline {
                    width: 1.0,
                    color: Color::BLACK,
                }),
            },
        ];
        for (rect, color, label) in [
            (&self.start, Color::GREEN, "Start Game"),
            (&self.sound, Color::ORANGE, sound_label),
            (&self.exit, Color::RED, "Exit"),
        ] {
            commands.push(RenderCommand::FilledRect { rect: *rect, color });
            commands.push(RenderCommand::text(
                label,
                rect.center(),
                BUTTON_FONT_SIZE,
                Color::WHITE,
            ));
        }
        commands
    }
}

/// Game over screen: black fill with a red caption in the middle.
pub fn draw_game_over(width: f32, height: f32) -> Vec<RenderCommand> {
    vec![
        RenderCommand::Clear {
            color: Color::BLACK,
        },
        RenderCommand::text(
            "GAME OVER",
            Vec2::new(width / 2.0, height / 2.0),
            GAME_OVER_FONT_SIZE,
            Color::RED,
        ),
    ]
}
