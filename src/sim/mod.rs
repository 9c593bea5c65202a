//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module draws or touches
//! the host platform:
//! - One tick per displayed frame, no variable timestep
//! - Randomness only through an injected `rand::Rng`
//! - Stable iteration order (creation order)

pub mod camera;
pub mod collision;
pub mod generator;
pub mod input;
pub mod physics;
pub mod state;
pub mod tick;

pub use camera::update_camera;
pub use collision::{coin_overlaps, landing_on};
pub use generator::extend_world;
pub use input::{InputState, Key};
pub use physics::{collect_coins, integrate_gravity, resolve_platforms, step_actor};
pub use state::{Actor, Coin, Platform, World};
pub use tick::{TickEvents, tick};
