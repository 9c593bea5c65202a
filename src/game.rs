//! Frame orchestration
//!
//! One `Game::frame` call per display refresh: draw the current world, then
//! advance it, then report the next phase so the host knows whether to
//! schedule another frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::renderer::{Surface, draw_world};
use crate::settings::Settings;
use crate::sim::{InputState, TickEvents, World, tick};

/// Session lifecycle. The game runs until the host tears it down, so the
/// only transition is `Running -> Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
}

/// A play session: the world, the held keys and the generator's RNG
pub struct Game {
    pub world: World,
    pub input: InputState,
    rng: Pcg32,
    seed: u64,
    phase: Phase,
    prune_distance: Option<f64>,
    frames: u64,
}

impl Game {
    pub fn new(seed: u64, settings: &Settings) -> Self {
        Self {
            world: World::new(),
            input: InputState::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            phase: Phase::Running,
            prune_distance: settings.prune_window(),
            frames: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame: draw, tick, then hand back the phase for rescheduling
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> (Phase, TickEvents) {
        match self.phase {
            Phase::Running => {
                draw_world(&self.world, surface);
                let events = self.update();
                (self.phase, events)
            }
        }
    }

    /// Advance the simulation without drawing
    pub fn update(&mut self) -> TickEvents {
        let events = tick(&mut self.world, &self.input, &mut self.rng);

        if let Some(distance) = self.prune_distance {
            let removed = self.world.prune_behind(distance);
            if removed > 0 {
                log::debug!("Pruned {} entities behind the camera", removed);
            }
        }

        self.frames += 1;
        events
    }

    /// Reset for a new run with a different seed
    pub fn restart(&mut self, seed: u64) {
        self.world = World::new();
        self.input.clear();
        self.rng = Pcg32::seed_from_u64(seed);
        self.seed = seed;
        self.phase = Phase::Running;
        self.frames = 0;
        log::info!("Game restarted with seed: {}", seed);
    }
}
