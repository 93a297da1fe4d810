use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const SKY_BLUE: Color = Color::rgb(135, 206, 235);
    pub const SADDLE_BROWN: Color = Color::rgb(139, 69, 19);
    pub const DARK_GREEN: Color = Color::rgb(0, 100, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
}

/// Text outline (stroke) drawn behind a label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub width: f32,
    pub color: Color,
}

/// A single draw instruction. The shell's backend executes these in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Fill the whole screen.
    Clear { color: Color },
    FilledRect { rect: Rect, color: Color },
    /// Draw the named image with its top-left corner at `top_left`,
    /// mirrored horizontally when `flip_x` is set.
    Sprite {
        image: String,
        top_left: Vec2,
        flip_x: bool,
    },
    Text {
        text: String,
        center: Vec2,
        font_size: f32,
        color: Color,
        outline: Option<Outline>,
    },
}

impl RenderCommand {
    pub fn text(text: impl Into<String>, center: Vec2, font_size: f32, color: Color) -> Self {
        Self::Text {
            text: text.into(),
            center,
            font_size,
            color,
            outline: None,
        }
    }

    /// Image name if this is a sprite command.
    pub fn sprite_image(&self) -> Option<&str> {
        match self {
            Self::Sprite { image, .. } => Some(image),
            _ => None,
        }
    }
}
