//! Horizontal camera tracking
//!
//! The camera stays put until the actor's center passes the middle of the
//! viewport, then follows the actor's scroll velocity 1:1 in either
//! direction. No clamp and no hysteresis: the offset can go negative.

use super::state::World;
use crate::consts::VIEWPORT_WIDTH;

/// Advance the camera offset by the current scroll velocity if the actor is
/// right of the viewport center. Returns true when the camera moved.
pub fn update_camera(world: &mut World) -> bool {
    let viewport_center = VIEWPORT_WIDTH / 2.0;
    if world.actor.center_x() > viewport_center {
        world.camera_x += world.camera_speed;
        world.camera_speed != 0.0
    } else {
        false
    }
}
