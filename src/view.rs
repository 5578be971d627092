//! Hosting view state for the comet field
//!
//! The pointer position is the only upstream value. Offsets are derived from
//! it and recomputed in full whenever it changes. Anchor positions come from
//! an [`AnchorProvider`]; the view never owns or mutates layout.

use glam::Vec2;

use crate::field::compute_offsets;
use crate::settings::FieldSettings;

/// Source of current comet centers, relative to the hero container
pub trait AnchorProvider {
    /// Center of comet `index`, or `None` if it is not laid out yet
    fn anchor(&self, index: usize) -> Option<Vec2>;

    /// One entry per comet, in index order
    fn anchors(&self, count: usize) -> Vec<Option<Vec2>> {
        (0..count).map(|i| self.anchor(i)).collect()
    }
}

impl AnchorProvider for [Option<Vec2>] {
    fn anchor(&self, index: usize) -> Option<Vec2> {
        self.get(index).copied().flatten()
    }
}

impl AnchorProvider for Vec<Option<Vec2>> {
    fn anchor(&self, index: usize) -> Option<Vec2> {
        self.as_slice().anchor(index)
    }
}

/// Pointer and per-comet displacement state of the hero banner
#[derive(Debug, Clone)]
pub struct RepulsionField {
    settings: FieldSettings,
    pointer: Vec2,
    offsets: Vec<Vec2>,
}

impl RepulsionField {
    pub fn new(settings: FieldSettings) -> Self {
        let offsets = vec![Vec2::ZERO; settings.comet_count];
        Self {
            settings,
            pointer: Vec2::ZERO,
            offsets,
        }
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    pub fn comet_count(&self) -> usize {
        self.settings.comet_count
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn offsets(&self) -> &[Vec2] {
        &self.offsets
    }

    /// Offset of comet `index` (zero for unknown comets)
    pub fn offset(&self, index: usize) -> Vec2 {
        self.offsets.get(index).copied().unwrap_or(Vec2::ZERO)
    }

    /// Record a pointer move and recompute every offset
    pub fn pointer_moved<P>(&mut self, pointer: Vec2, provider: &P)
    where
        P: AnchorProvider + ?Sized,
    {
        self.pointer = pointer;
        self.recompute(provider);
    }

    /// Recompute all offsets at the current pointer
    pub fn recompute<P>(&mut self, provider: &P)
    where
        P: AnchorProvider + ?Sized,
    {
        let anchors = provider.anchors(self.settings.comet_count);
        self.offsets = compute_offsets(
            self.pointer,
            &anchors,
            self.settings.radius,
            self.settings.max_force,
        );
    }
}

/// CSS `transform` value for a comet offset
pub fn translate_css(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

/// Inline style for a comet body displaced by `offset`
pub fn comet_body_style(offset: Vec2) -> String {
    format!(
        "position: relative; transition: transform 300ms ease-out; transform: {};",
        translate_css(offset)
    )
}

/// CSS `background` value for the glow that follows the cursor
pub fn spotlight_css(pointer: Vec2) -> String {
    format!(
        "radial-gradient(600px circle at {}px {}px, rgba(251, 191, 36, 0.15), transparent 40%)",
        pointer.x, pointer.y
    )
}
