//! Recorded draw commands
//!
//! A `Surface` that stores every call instead of drawing. Used by the native
//! headless runner and for inspecting frames in tests.

use super::{Color, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    },
    Circle {
        x: f64,
        y: f64,
        r: f64,
        color: Color,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font: String,
        color: Color,
    },
}

/// Draw command recorder. Every `clear` starts a new frame, so the buffer
/// only ever holds the most recent one.
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the current frame
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames started so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Surface for CommandBuffer {
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: Color) {
        self.commands.push(DrawCommand::Circle { x, y, r, color });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color,
        });
    }
}
