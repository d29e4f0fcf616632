//! Game settings and preferences
//!
//! Persisted separately from the high score, as JSON through the same
//! key-value store.

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;

/// Player preferences. The simulation only consults camera-shake gating;
/// the rest rides along for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Camera shake on game over
    pub camera_shake: bool,
    /// Vibration on mobile moves
    pub haptics: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Reduced motion (minimize shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            camera_shake: true,
            haptics: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Store key for settings
    const STORAGE_KEY: &'static str = "cipher-road-settings";

    /// Effective camera shake (respects reduced_motion)
    pub fn effective_camera_shake(&self) -> bool {
        self.camera_shake && !self.reduced_motion
    }

    /// Load settings, falling back to defaults on absence or corruption
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            if let Ok(settings) = serde_json::from_str(&json) {
                log::info!("loaded settings");
                return settings;
            }
            log::warn!("stored settings unreadable, using defaults");
        }
        Self::default()
    }

    /// Save settings
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if !store.set(Self::STORAGE_KEY, &json) {
                    log::warn!("settings storage unavailable");
                }
            }
            Err(err) => log::warn!("settings serialization failed: {err}"),
        }
    }
}
