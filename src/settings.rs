//! Game settings and preferences
//!
//! Read as JSON from LocalStorage on the web. Native builds use defaults.

use serde::{Deserialize, Serialize};

use crate::sim::Key;

/// Keyboard bindings: `KeyboardEvent.code` values per logical key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub move_left: Vec<String>,
    pub move_right: Vec<String>,
    pub jump: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec!["ArrowLeft".to_string()],
            move_right: vec!["ArrowRight".to_string()],
            jump: vec!["ArrowUp".to_string()],
        }
    }
}

impl KeyBindings {
    /// Map a physical key code to a logical key. Codes bound to several keys
    /// resolve in the order move-left, move-right, jump.
    pub fn key_for_code(&self, code: &str) -> Option<Key> {
        fn bound(codes: &[String], code: &str) -> bool {
            codes.iter().any(|c| c == code)
        }

        if bound(&self.move_left, code) {
            Some(Key::MoveLeft)
        } else if bound(&self.move_right, code) {
            Some(Key::MoveRight)
        } else if bound(&self.jump, code) {
            Some(Key::Jump)
        } else {
            None
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Fixed world-generation seed. `None` seeds from the platform's entropy
    /// source, so every run lays out a different world.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Keyboard bindings
    #[serde(default)]
    pub bindings: KeyBindings,

    /// Drop platforms and coins this far behind the camera. `None` keeps the
    /// whole world for the session.
    #[serde(default)]
    pub prune_distance: Option<f64>,
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "coin_dash_settings";

    /// Parse settings from JSON, logging and returning `None` on failure.
    /// A prune distance that is not a positive finite number is dropped.
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(json) {
            Ok(mut settings) => {
                if settings.prune_distance.is_some() && settings.prune_window().is_none() {
                    log::warn!(
                        "Ignoring prune_distance {:?}: must be positive",
                        settings.prune_distance
                    );
                    settings.prune_distance = None;
                }
                Some(settings)
            }
            Err(e) => {
                log::warn!("Ignoring invalid settings: {}", e);
                None
            }
        }
    }

    /// Effective prune distance: only positive finite values enable pruning
    pub fn prune_window(&self) -> Option<f64> {
        self.prune_distance.filter(|d| d.is_finite() && *d > 0.0)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
