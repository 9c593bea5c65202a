//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger setup
//! - Run seed selection

/// Install the logger for this target.
///
/// Web: `console_log` plus a panic hook that reports to the browser console.
/// Native: `env_logger`, configured through `RUST_LOG`.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("Logger already initialized");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    if env_logger::try_init().is_err() {
        log::warn!("Logger already initialized");
    }
}

/// A fresh seed for world generation
#[cfg(target_arch = "wasm32")]
pub fn entropy_seed() -> u64 {
    // Mix the clock with Math.random so two tabs opened together differ
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    now ^ (noise << 32)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_seed() -> u64 {
    rand::random()
}

/// The configured seed, or a fresh one
pub fn resolve_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(entropy_seed)
}
