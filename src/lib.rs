//! Coin Dash - A side-scrolling coin-collecting platformer
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, camera, world generation)
//! - `game`: Frame orchestration (draw, update, reschedule)
//! - `renderer`: 2D surface abstraction and draw-command recording
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Player preferences and key bindings

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, Phase};
pub use settings::{KeyBindings, Settings};

/// Game configuration constants
pub mod consts {
    /// Viewport dimensions (logical units)
    pub const VIEWPORT_WIDTH: f64 = 800.0;
    pub const VIEWPORT_HEIGHT: f64 = 400.0;
    /// The floor line sits on the bottom edge of the viewport
    pub const FLOOR_Y: f64 = VIEWPORT_HEIGHT;

    /// Actor spawn point (top-left corner, standing on the floor)
    pub const ACTOR_START_X: f64 = 50.0;
    pub const ACTOR_START_Y: f64 = 350.0;
    pub const ACTOR_WIDTH: f64 = 40.0;
    pub const ACTOR_HEIGHT: f64 = 50.0;
    /// Horizontal displacement per tick while a direction is held
    pub const ACTOR_SPEED: f64 = 5.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f64 = 0.6;
    /// Upward velocity applied on jump
    pub const JUMP_POWER: f64 = 12.0;

    /// Size of every generated platform
    pub const PLATFORM_WIDTH: f64 = 150.0;
    pub const PLATFORM_HEIGHT: f64 = 20.0;

    pub const COIN_RADIUS: f64 = 10.0;
    /// Score awarded per collected coin
    pub const COIN_VALUE: u64 = 100;

    /// Generate once the actor is within this distance of the cursor
    pub const GENERATION_LOOKAHEAD: f64 = 400.0;
    /// Horizontal gap to the next platform, sampled from [MIN, MAX)
    pub const PLATFORM_GAP_MIN: f64 = 200.0;
    pub const PLATFORM_GAP_MAX: f64 = 400.0;
    /// Platform height band, sampled from [MIN, MAX)
    pub const PLATFORM_Y_MIN: f64 = 150.0;
    pub const PLATFORM_Y_MAX: f64 = 300.0;
    /// Coin placement relative to its platform
    pub const COIN_SPREAD: f64 = 100.0;
    pub const COIN_LIFT: f64 = 30.0;

    /// Score text placement
    pub const SCORE_X: f64 = VIEWPORT_WIDTH - 150.0;
    pub const SCORE_Y: f64 = 30.0;
    pub const SCORE_FONT: &str = "20px Arial";
}
