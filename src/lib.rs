//! Hero Comets - cursor-repelled shooting stars for a portfolio hero banner
//!
//! Core modules:
//! - `field`: Pure repulsion math and the comet flight schedule
//! - `view`: Hosting view state (pointer, offsets, CSS output)
//! - `settings`: Tunable field constants, persisted in LocalStorage

pub mod field;
pub mod settings;
pub mod view;

pub use field::{CometTrack, compute_offsets, repulsion_offset};
pub use settings::FieldSettings;
pub use view::{AnchorProvider, RepulsionField};

use glam::Vec2;

/// Field configuration constants
pub mod consts {
    /// Influence radius of the cursor (pixels)
    pub const MAGNET_RADIUS: f32 = 600.0;
    /// Displacement magnitude in the limit as distance goes to zero (pixels)
    pub const MAX_FORCE: f32 = 30.0;
    /// Comets mounted in the hero banner
    pub const COMET_COUNT: usize = 8;
    /// Upper bound accepted from stored settings
    pub const MAX_COMETS: usize = 64;

    /// Keyframe tracks shared round-robin between comets
    pub const TRACK_COUNT: usize = 5;
    /// Flight duration of comet 0 (seconds)
    pub const BASE_DURATION: f32 = 6.0;
    /// Extra duration per comet index (seconds)
    pub const DURATION_STEP: f32 = 1.5;
    /// Launch delay per comet index (seconds)
    pub const DELAY_STEP: f32 = 2.5;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
