//! Actor physics and collision response
//!
//! Explicit Euler with one step per tick. There is no sub-stepping, so a
//! fast enough fall can pass through a thin platform; that limitation is kept.

use super::collision::{coin_overlaps, landing_on};
use super::input::{InputState, Key};
use super::state::{Actor, Coin, Platform};
use crate::consts::{COIN_VALUE, FLOOR_Y};

/// Apply one tick of gravity: velocity first, then position
#[inline]
pub fn integrate_gravity(actor: &mut Actor) {
    actor.vel_y += actor.gravity;
    actor.pos.y += actor.vel_y;
}

/// Move, jump, fall and clamp to the floor.
///
/// Returns the signed scroll velocity for the camera (`+speed`, `-speed` or
/// `0`). Right is checked first, so holding both directions moves right.
pub fn step_actor(actor: &mut Actor, input: &InputState) -> f64 {
    let scroll = if input.is_held(Key::MoveRight) {
        actor.pos.x += actor.speed;
        actor.speed
    } else if input.is_held(Key::MoveLeft) {
        actor.pos.x -= actor.speed;
        -actor.speed
    } else {
        0.0
    };

    // Holding jump while airborne does nothing
    if input.is_held(Key::Jump) && !actor.airborne {
        actor.airborne = true;
        actor.vel_y = -actor.jump_power;
    }

    integrate_gravity(actor);

    if actor.bottom() >= FLOOR_Y {
        actor.land_on(FLOOR_Y);
    }

    scroll
}

/// Snap the actor onto any platform it is landing on.
///
/// Platforms are tested in creation order and every match snaps, so the last
/// matching platform decides the final position. Returns its index.
pub fn resolve_platforms(actor: &mut Actor, platforms: &[Platform]) -> Option<usize> {
    let mut landed = None;
    for (i, platform) in platforms.iter().enumerate() {
        if landing_on(actor, platform) {
            actor.land_on(platform.y);
            landed = Some(i);
        }
    }
    landed
}

/// Collect every uncollected coin the actor overlaps.
///
/// Returns the number of coins collected this call; the caller adds
/// `count * COIN_VALUE` to the score.
pub fn collect_coins(actor: &Actor, coins: &mut [Coin]) -> u32 {
    let mut count = 0;
    for coin in coins.iter_mut().filter(|c| !c.collected) {
        if coin_overlaps(actor, coin) {
            coin.collected = true;
            count += 1;
            log::debug!("Coin collected at ({}, {})", coin.pos.x, coin.pos.y);
        }
    }
    count
}

/// Score for a number of coins
#[inline]
pub fn coin_score(count: u32) -> u64 {
    count as u64 * COIN_VALUE
}
