//! 2D rendering
//!
//! The game draws through the `Surface` trait, an immediate-mode canvas with
//! four operations. On the web it is backed by a `CanvasRenderingContext2d`;
//! natively and in tests a `CommandBuffer` records the calls instead.
//!
//! World x coordinates are shifted by the camera before reaching the
//! surface. Y is passed through unchanged (no vertical scrolling).

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod command;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use command::{CommandBuffer, DrawCommand};

use crate::consts::*;
use crate::sim::World;

/// Fill colors used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Actor,
    Platform,
    Coin,
    Text,
}

impl Color {
    /// CSS color name
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Actor => "red",
            Color::Platform => "brown",
            Color::Coin => "gold",
            Color::Text => "black",
        }
    }
}

/// Immediate-mode 2D drawing target
pub trait Surface {
    /// Clear a rectangular region
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);
    /// Fill a circle centered on (x, y)
    fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: Color);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: Color);
}

/// Draw one frame of the world: clear, actor, platforms, uncollected coins,
/// then the score.
pub fn draw_world<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    surface.clear(0.0, 0.0, VIEWPORT_WIDTH, VIEWPORT_HEIGHT);

    let actor = &world.actor;
    surface.fill_rect(
        world.to_screen_x(actor.pos.x),
        actor.pos.y,
        actor.size.x,
        actor.size.y,
        Color::Actor,
    );

    for platform in &world.platforms {
        surface.fill_rect(
            world.to_screen_x(platform.x),
            platform.y,
            platform.width,
            platform.height,
            Color::Platform,
        );
    }

    for coin in world.uncollected_coins() {
        surface.fill_circle(
            world.to_screen_x(coin.pos.x),
            coin.pos.y,
            coin.radius,
            Color::Coin,
        );
    }

    surface.fill_text(
        &format!("Score: {}", world.score),
        SCORE_X,
        SCORE_Y,
        SCORE_FONT,
        Color::Text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_order() {
        let world = World::new();
        let mut buffer = CommandBuffer::new();
        draw_world(&world, &mut buffer);

        let commands = buffer.commands();
        // clear + actor + 3 platforms + 3 coins + score
        assert_eq!(commands.len(), 9);
        assert!(matches!(commands[0], DrawCommand::Clear { w, h, .. } if w == 800.0 && h == 400.0));
        assert!(matches!(commands[1], DrawCommand::Rect { color: Color::Actor, .. }));
        assert!(commands[2..5]
            .iter()
            .all(|c| matches!(c, DrawCommand::Rect { color: Color::Platform, .. })));
        assert!(commands[5..8]
            .iter()
            .all(|c| matches!(c, DrawCommand::Circle { color: Color::Coin, .. })));
        assert_eq!(
            commands[8],
            DrawCommand::Text {
                text: "Score: 0".to_string(),
                x: 650.0,
                y: 30.0,
                font: "20px Arial".to_string(),
                color: Color::Text,
            }
        );
    }

    #[test]
    fn test_camera_offset_applies_to_x_only() {
        let mut world = World::new();
        world.camera_x = 100.0;
        world.actor.pos.y = 123.0;
        let mut buffer = CommandBuffer::new();
        draw_world(&world, &mut buffer);

        assert_eq!(
            buffer.commands()[1],
            DrawCommand::Rect {
                x: -50.0,
                y: 123.0,
                w: 40.0,
                h: 50.0,
                color: Color::Actor,
            }
        );
        assert_eq!(
            buffer.commands()[2],
            DrawCommand::Rect {
                x: 0.0,
                y: 300.0,
                w: 200.0,
                h: 20.0,
                color: Color::Platform,
            }
        );
    }

    #[test]
    fn test_collected_coins_skipped() {
        let mut world = World::new();
        world.coins[1].collected = true;
        world.score = 100;
        let mut buffer = CommandBuffer::new();
        draw_world(&world, &mut buffer);

        let circles: Vec<_> = buffer
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(circles, vec![150.0, 750.0]);
        assert!(matches!(buffer.commands().last(), Some(DrawCommand::Text { text, .. }) if text == "Score: 100"));
    }
}
