//! Cursor repulsion for decorative particles
//!
//! Each anchor inside the influence radius is pushed directly away from the
//! pointer. The push follows a cubic ease-out of the normalized distance, so
//! it is `max_force` in the limit at the pointer and fades to exactly zero at
//! the radius with no visible edge.

use glam::Vec2;

use crate::{cartesian_to_polar, polar_to_cartesian};

/// Softness factor `(1 - d/radius)³` for a distance inside the radius
///
/// Returns 0.0 at or beyond the radius.
#[inline]
pub fn falloff(distance: f32, radius: f32) -> f32 {
    if distance >= radius {
        return 0.0;
    }
    let t = distance / radius;
    (1.0 - t).powi(3)
}

/// Displacement of a single anchor away from the pointer
///
/// Zero when the anchor coincides with the pointer (no direction) or lies at
/// or beyond `radius`.
pub fn repulsion_offset(pointer: Vec2, anchor: Vec2, radius: f32, max_force: f32) -> Vec2 {
    let (distance, angle) = cartesian_to_polar(anchor - pointer);

    if distance == 0.0 || distance >= radius {
        return Vec2::ZERO;
    }

    let force = falloff(distance, radius) * max_force;
    polar_to_cartesian(force, angle)
}

/// Displacements for every anchor, in anchor order
///
/// Unmeasured anchors (`None`) yield `Vec2::ZERO`.
pub fn compute_offsets(
    pointer: Vec2,
    anchors: &[Option<Vec2>],
    radius: f32,
    max_force: f32,
) -> Vec<Vec2> {
    anchors
        .iter()
        .map(|anchor| match anchor {
            Some(anchor) => repulsion_offset(pointer, *anchor, radius, max_force),
            None => Vec2::ZERO,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAGNET_RADIUS, MAX_FORCE};
    use proptest::prelude::*;

    fn offset_at(anchor: Vec2) -> Vec2 {
        repulsion_offset(Vec2::ZERO, anchor, MAGNET_RADIUS, MAX_FORCE)
    }

    #[test]
    fn test_halfway_push() {
        // t = 0.5, s = 0.125, f = 3.75
        let offset = offset_at(Vec2::new(300.0, 0.0));
        assert!((offset.x - 3.75).abs() < 1e-4);
        assert!(offset.y.abs() < 1e-4);
    }

    #[test]
    fn test_exactly_at_radius_is_zero() {
        assert_eq!(offset_at(Vec2::new(600.0, 0.0)), Vec2::ZERO);
    }

    #[test]
    fn test_beyond_radius_is_zero() {
        assert_eq!(offset_at(Vec2::new(500.0, 500.0)), Vec2::ZERO);
    }

    #[test]
    fn test_coincident_with_pointer_is_zero() {
        assert_eq!(offset_at(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_pushes_away_from_pointer() {
        let pointer = Vec2::new(100.0, 100.0);
        let offset = repulsion_offset(pointer, Vec2::new(100.0, 40.0), MAGNET_RADIUS, MAX_FORCE);
        // Anchor is above the pointer in screen space, so the push is upward
        assert!(offset.x.abs() < 1e-4);
        assert!(offset.y < 0.0);
    }

    #[test]
    fn test_unmeasured_anchors_are_zero() {
        let anchors = [None, Some(Vec2::new(300.0, 0.0)), None];
        let offsets = compute_offsets(Vec2::ZERO, &anchors, MAGNET_RADIUS, MAX_FORCE);
        assert_eq!(offsets.len(), 3);
        assert_eq!(offsets[0], Vec2::ZERO);
        assert!((offsets[1].x - 3.75).abs() < 1e-4);
        assert_eq!(offsets[2], Vec2::ZERO);
    }

    #[test]
    fn test_empty_anchor_set() {
        assert!(compute_offsets(Vec2::ZERO, &[], MAGNET_RADIUS, MAX_FORCE).is_empty());
    }

    #[test]
    fn test_falloff_endpoints() {
        assert_eq!(falloff(0.0, 600.0), 1.0);
        assert_eq!(falloff(600.0, 600.0), 0.0);
        assert_eq!(falloff(900.0, 600.0), 0.0);
        // Just inside the boundary the force has already faded out
        assert!(falloff(599.0, 600.0) < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_outside_radius_is_zero(
            px in -2000.0f32..2000.0,
            py in -2000.0f32..2000.0,
            angle in -3.14f32..3.14,
            extra in 0.0f32..1000.0,
        ) {
            let pointer = Vec2::new(px, py);
            let anchor = pointer + polar_to_cartesian(MAGNET_RADIUS + 1.0 + extra, angle);
            prop_assert_eq!(repulsion_offset(pointer, anchor, MAGNET_RADIUS, MAX_FORCE), Vec2::ZERO);
        }

        #[test]
        fn prop_magnitude_bounded_and_decreasing(
            angle in -3.14f32..3.14,
            near in 1.0f32..590.0,
            gap in 1.0f32..10.0,
        ) {
            let far = near + gap;
            let m_near = offset_at(polar_to_cartesian(near, angle)).length();
            let m_far = offset_at(polar_to_cartesian(far, angle)).length();
            prop_assert!(m_near <= MAX_FORCE + 1e-3);
            prop_assert!(m_near >= m_far);
        }

        #[test]
        fn prop_direction_points_away(
            px in -500.0f32..500.0,
            py in -500.0f32..500.0,
            angle in -3.14f32..3.14,
            distance in 1.0f32..500.0,
        ) {
            let pointer = Vec2::new(px, py);
            let anchor = pointer + polar_to_cartesian(distance, angle);
            let offset = repulsion_offset(pointer, anchor, MAGNET_RADIUS, MAX_FORCE);
            let expected = (anchor - pointer).normalize();
            prop_assert!(offset.normalize().dot(expected) > 0.9999);
        }

        #[test]
        fn prop_missing_anchor_ignores_pointer(
            px in -2000.0f32..2000.0,
            py in -2000.0f32..2000.0,
        ) {
            let offsets = compute_offsets(Vec2::new(px, py), &[None, None], MAGNET_RADIUS, MAX_FORCE);
            prop_assert_eq!(offsets, vec![Vec2::ZERO, Vec2::ZERO]);
        }
    }
}
