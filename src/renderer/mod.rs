//! Frame descriptions
//!
//! The game never touches a screen directly. Each loop iteration it builds a
//! `Frame` (a flat list of draw commands in playfield pixels) and hands it to
//! a `Presenter`, which blits it and flips once.

pub mod scene;

pub use scene::build_frame;

use glam::Vec2;

use crate::sim::Sprite;
use crate::ui::Rgb;

/// Font sizes used by the menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Buttons, HUD, ranking rows
    Normal,
    /// The game-over banner
    Large,
}

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle
    FillRect { pos: Vec2, size: Vec2, color: Rgb },
    /// Named image with its top-left corner at `pos`
    Image { sprite: Sprite, pos: Vec2 },
    /// Rendered text with its top-left corner at `pos`
    Text {
        text: String,
        pos: Vec2,
        color: Rgb,
        size: TextSize,
    },
}

/// Everything to draw for one tick, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub size: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn fill(&mut self, pos: Vec2, size: Vec2, color: Rgb) {
        self.commands.push(DrawCommand::FillRect { pos, size, color });
    }

    pub fn image(&mut self, sprite: Sprite, pos: Vec2) {
        self.commands.push(DrawCommand::Image { sprite, pos });
    }

    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, color: Rgb, size: TextSize) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            pos,
            color,
            size,
        });
    }

    /// All text in draw order
    #[cfg(test)]
    pub(crate) fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Presentation adapter: draws a frame and presents it
pub trait Presenter {
    fn present(&mut self, frame: &Frame) -> std::io::Result<()>;
}

/// Presenter that keeps every frame, for tests
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub frames: Vec<Frame>,
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, frame: &Frame) -> std::io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
