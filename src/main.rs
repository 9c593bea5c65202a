//! Coin Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use coin_dash::consts::*;
    use coin_dash::platform;
    use coin_dash::renderer::CanvasSurface;
    use coin_dash::{Game, KeyBindings, Phase, Settings};

    /// Session plus the surface it draws on
    struct App {
        game: Game,
        surface: CanvasSurface,
        bindings: KeyBindings,
    }

    pub fn run() {
        platform::init_logging();
        log::info!("Coin Dash starting...");

        let settings = Settings::load();

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(VIEWPORT_WIDTH as u32);
        canvas.set_height(VIEWPORT_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = platform::resolve_seed(settings.seed);
        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed, &settings),
            surface: CanvasSurface::new(ctx),
            bindings: settings.bindings.clone(),
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(app.clone());

        request_animation_frame(app);
        log::info!("Coin Dash running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key down / key up write held state
        for (event_name, held) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                if let Some(key) = a.bindings.key_for_code(&event.code()) {
                    event.prevent_default();
                    log::trace!("{} {}", key.as_str(), if held { "down" } else { "up" });
                    a.game.input.set(key, held);
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup events are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().game.input.clear();
                log::info!("Input released (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let phase = {
            let mut a = app.borrow_mut();
            let App { game, surface, .. } = &mut *a;
            let (phase, events) = game.frame(surface);
            if events.coins_collected > 0 {
                log::info!("Score: {}", game.world.score);
            }
            phase
        };

        match phase {
            Phase::Running => request_animation_frame(app),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    coin_dash::platform::init_logging();
    log::info!("Coin Dash (native) starting...");
    log::info!("Native mode runs a headless scripted session - use `trunk serve` for the web version");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted run against a recording surface
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use coin_dash::renderer::CommandBuffer;
    use coin_dash::sim::{Key, World};
    use coin_dash::{Game, Phase, Settings, platform};

    const DEFAULT_TICKS: u64 = 600;
    /// Tap jump for a few frames out of every this many
    const JUMP_PERIOD: u64 = 45;

    #[derive(Debug, Serialize)]
    struct Summary<'a> {
        seed: u64,
        ticks: u64,
        score: u64,
        coins_collected: usize,
        actor_x: f64,
        camera_x: f64,
        last_platform_x: f64,
        platforms: usize,
        coins: usize,
        draw_commands: usize,
        /// Full end-of-run world state
        world: &'a World,
    }

    fn env_u64(name: &str) -> Option<u64> {
        let value = std::env::var(name).ok()?;
        match value.parse() {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("Ignoring {}={:?}: {}", name, value, e);
                None
            }
        }
    }

    pub fn run() {
        let mut settings = Settings::load();
        if let Some(seed) = env_u64("COIN_DASH_SEED") {
            settings.seed = Some(seed);
        }
        let ticks = env_u64("COIN_DASH_TICKS").unwrap_or(DEFAULT_TICKS);

        let seed = platform::resolve_seed(settings.seed);
        let mut game = Game::new(seed, &settings);
        let mut surface = CommandBuffer::new();
        log::info!("Game initialized with seed: {}", seed);

        game.input.press(Key::MoveRight);
        for frame in 0..ticks {
            game.input.set(Key::Jump, frame % JUMP_PERIOD < 3);

            let (phase, events) = game.frame(&mut surface);
            if events.coins_collected > 0 {
                log::info!("Frame {}: score {}", frame, game.world.score);
            }
            if phase != Phase::Running {
                break;
            }
        }

        let world = &game.world;
        let summary = Summary {
            seed,
            ticks: game.frames(),
            score: world.score,
            coins_collected: world.coins.iter().filter(|c| c.collected).count(),
            actor_x: world.actor.pos.x,
            camera_x: world.camera_x,
            last_platform_x: world.last_platform_x,
            platforms: world.platforms.len(),
            coins: world.coins.len(),
            draw_commands: surface.commands().len(),
            world,
        };
        log::info!(
            "Finished {} ticks: score {}, {} platforms in world",
            summary.ticks,
            summary.score,
            summary.platforms
        );

        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize summary: {}", e),
        }
    }
}
