//! Per-frame simulation tick
//!
//! Physics, then camera, then world generation. One call per displayed frame.

use rand::Rng;

use super::camera::update_camera;
use super::generator::extend_world;
use super::input::InputState;
use super::physics::{coin_score, collect_coins, resolve_platforms, step_actor};
use super::state::World;

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Coins collected this tick
    pub coins_collected: u32,
    /// Index of the platform the actor was snapped onto, if any
    pub landed_on: Option<usize>,
    /// Index of the platform the generator appended, if any
    pub generated: Option<usize>,
}

/// Advance the world by one tick
pub fn tick<R: Rng + ?Sized>(world: &mut World, input: &InputState, rng: &mut R) -> TickEvents {
    world.camera_speed = step_actor(&mut world.actor, input);

    let landed_on = resolve_platforms(&mut world.actor, &world.platforms);
    if let Some(index) = landed_on {
        log::trace!("Actor resting on platform {}", index);
    }

    let coins_collected = collect_coins(&world.actor, &mut world.coins);
    world.score += coin_score(coins_collected);

    update_camera(world);

    let generated = extend_world(world, rng);

    TickEvents {
        coins_collected,
        landed_on,
        generated,
    }
}
