//! Comet field module
//!
//! Everything here is pure:
//! - No DOM or platform dependencies
//! - No stored state; callers own pointer and offsets
//! - Output order always matches input order

pub mod comets;
pub mod repulsion;

pub use comets::{CometTrack, schedule};
pub use repulsion::{compute_offsets, falloff, repulsion_offset};
