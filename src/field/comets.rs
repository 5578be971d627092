//! Comet flight schedule
//!
//! Each comet flies one of a handful of shared keyframe tracks. Later comets
//! fly slower and launch later, so the banner never shows them in lockstep.

use serde::{Deserialize, Serialize};

use crate::consts::{BASE_DURATION, DELAY_STEP, DURATION_STEP, TRACK_COUNT};

/// Offset of the animated wrapper from the container's top-left corner (px)
pub const LAUNCH_INSET: f32 = -50.0;

/// Declarative flight parameters of a single comet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CometTrack {
    /// Position in the comet collection
    pub index: usize,
    /// Keyframe track, 1-based (`shootingStar1` ..)
    pub track: usize,
    /// Seconds per flight
    pub duration: f32,
    /// Seconds before the first flight
    pub delay: f32,
}

impl CometTrack {
    pub fn for_index(index: usize) -> Self {
        Self {
            index,
            track: (index % TRACK_COUNT) + 1,
            duration: BASE_DURATION + index as f32 * DURATION_STEP,
            delay: index as f32 * DELAY_STEP,
        }
    }

    /// CSS keyframes name
    pub fn animation_name(&self) -> String {
        format!("shootingStar{}", self.track)
    }

    /// Value for the CSS `animation` shorthand
    pub fn animation_css(&self) -> String {
        format!(
            "{} {}s ease-in-out infinite",
            self.animation_name(),
            self.duration
        )
    }

    /// Inline style for the animated wrapper element
    pub fn wrapper_style(&self) -> String {
        format!(
            "position: absolute; animation: {}; animation-delay: {}s; top: {}px; left: {}px;",
            self.animation_css(),
            self.delay,
            LAUNCH_INSET,
            LAUNCH_INSET
        )
    }
}

/// Tracks for `count` comets, in index order
pub fn schedule(count: usize) -> Vec<CometTrack> {
    (0..count).map(CometTrack::for_index).collect()
}
