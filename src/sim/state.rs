//! World model and core simulation types
//!
//! Everything the simulation mutates lives in a single `World` value owned
//! by the session. Screen y grows downward.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The player-controlled actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner in world coordinates
    pub pos: DVec2,
    /// Width and height
    pub size: DVec2,
    /// Horizontal displacement per tick
    pub speed: f64,
    /// Vertical velocity (negative = upward)
    pub vel_y: f64,
    /// Per-tick downward acceleration
    pub gravity: f64,
    /// Jump impulse magnitude
    pub jump_power: f64,
    /// False only while resting on the floor or a platform
    pub airborne: bool,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            pos: DVec2::new(ACTOR_START_X, ACTOR_START_Y),
            size: DVec2::new(ACTOR_WIDTH, ACTOR_HEIGHT),
            speed: ACTOR_SPEED,
            vel_y: 0.0,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            airborne: false,
        }
    }
}

impl Actor {
    #[inline]
    pub fn left(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    /// Horizontal center, used by the camera trigger
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.pos.x + self.size.x / 2.0
    }

    /// Place the actor so its lower edge rests on `surface_y` and stop falling
    pub fn land_on(&mut self, surface_y: f64) {
        self.pos.y = surface_y - self.size.y;
        self.airborne = false;
        self.vel_y = 0.0;
    }
}

/// A static axis-aligned platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Platform {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// A collectible coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Center point
    pub pos: DVec2,
    pub radius: f64,
    /// Only ever goes false -> true
    pub collected: bool,
}

impl Coin {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            radius: COIN_RADIUS,
            collected: false,
        }
    }
}

/// Complete world state for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub actor: Actor,
    /// Platforms in creation order
    pub platforms: Vec<Platform>,
    /// Coins in creation order
    pub coins: Vec<Coin>,
    pub score: u64,
    /// Horizontal translation subtracted from world x before drawing
    pub camera_x: f64,
    /// Signed scroll velocity, rewritten by physics every tick
    pub camera_speed: f64,
    /// Generation cursor: x of the most recently generated platform
    pub last_platform_x: f64,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create the starting world: actor on the floor, three seeded platforms
    /// each carrying a coin
    pub fn new() -> Self {
        let platforms = vec![
            Platform::new(100.0, 300.0, 200.0, PLATFORM_HEIGHT),
            Platform::new(400.0, 250.0, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            Platform::new(700.0, 200.0, PLATFORM_WIDTH, PLATFORM_HEIGHT),
        ];
        let coins = vec![
            Coin::new(150.0, 270.0),
            Coin::new(450.0, 220.0),
            Coin::new(750.0, 170.0),
        ];

        Self {
            actor: Actor::default(),
            platforms,
            coins,
            score: 0,
            camera_x: 0.0,
            camera_speed: 0.0,
            last_platform_x: 700.0,
        }
    }

    /// Convert a world x coordinate to screen space
    #[inline]
    pub fn to_screen_x(&self, world_x: f64) -> f64 {
        world_x - self.camera_x
    }

    /// Drop platforms and coins lying entirely more than `distance` units
    /// left of the camera. Opt-in; the generation cursor is left alone.
    pub fn prune_behind(&mut self, distance: f64) -> usize {
        let cutoff = self.camera_x - distance;
        let before = self.platforms.len() + self.coins.len();
        self.platforms.retain(|p| p.right() >= cutoff);
        self.coins.retain(|c| c.pos.x + c.radius >= cutoff);
        before - (self.platforms.len() + self.coins.len())
    }

    pub fn uncollected_coins(&self) -> impl Iterator<Item = &Coin> {
        self.coins.iter().filter(|c| !c.collected)
    }
}
