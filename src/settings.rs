//! Field tuning
//!
//! Defaults match the hero banner as designed; a stored override in
//! LocalStorage wins when it parses.

use serde::{Deserialize, Serialize};

use crate::consts::{COMET_COUNT, MAGNET_RADIUS, MAX_COMETS, MAX_FORCE};

/// Repulsion field settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Influence radius (pixels); distances at or beyond it are not pushed
    pub radius: f32,
    /// Displacement at the pointer itself (pixels)
    pub max_force: f32,
    /// Comets mounted in the banner
    pub comet_count: usize,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            radius: MAGNET_RADIUS,
            max_force: MAX_FORCE,
            comet_count: COMET_COUNT,
        }
    }
}

impl FieldSettings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "hero_comets_settings";

    /// Parse settings from JSON, replacing unusable values with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Replace values the field cannot work with
    pub fn sanitized(mut self) -> Self {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            log::warn!("Ignoring invalid radius {}", self.radius);
            self.radius = MAGNET_RADIUS;
        }
        if !self.max_force.is_finite() || self.max_force < 0.0 {
            log::warn!("Ignoring invalid max force {}", self.max_force);
            self.max_force = MAX_FORCE;
        }
        self.comet_count = self.comet_count.min(MAX_COMETS);
        self
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded field settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Stored field settings unreadable: {}", e),
                }
            }
        }

        log::info!("Using default field settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Field settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
