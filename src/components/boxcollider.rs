//! Axis-aligned rectangular collider.
//!
//! The collider is placed relative to the entity's [`MapPosition`] through
//! `offset`. Boundaries use a zero offset (their position is the top-left
//! corner); the player uses a negative offset so the box sits around its
//! centred pivot.
//!
//! [`MapPosition`]: crate::components::mapposition::MapPosition

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Modify BoxCollider with given size and offset
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// (x, y, width, height) of the AABB, for drawing.
    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Like [`overlaps`](Self::overlaps) but also counts boxes whose edges are
    /// within `tolerance` of each other. A body resting against a wall after
    /// separation is touching it without overlapping.
    pub fn touches(
        &self,
        position: Vector2,
        other: &Self,
        other_position: Vector2,
        tolerance: f32,
    ) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x <= max_b.x + tolerance
            && max_a.x + tolerance >= min_b.x
            && min_a.y <= max_b.y + tolerance
            && max_a.y + tolerance >= min_b.y
    }

    /// Minimal translation that moves `self` out of `other` along a single axis.
    ///
    /// Returns `None` when the boxes do not overlap. Ties between axes resolve
    /// on the x axis.
    pub fn separation(
        &self,
        position: Vector2,
        other: &Self,
        other_position: Vector2,
    ) -> Option<Vector2> {
        if !self.overlaps(position, other, other_position) {
            return None;
        }
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);

        let push_left = max_a.x - min_b.x;
        let push_right = max_b.x - min_a.x;
        let push_up = max_a.y - min_b.y;
        let push_down = max_b.y - min_a.y;

        let dx = if push_left < push_right {
            -push_left
        } else {
            push_right
        };
        let dy = if push_up < push_down { -push_up } else { push_down };

        if dx.abs() <= dy.abs() {
            Some(Vector2::new(dx, 0.0))
        } else {
            Some(Vector2::new(0.0, dy))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_aabb_with_offset() {
        let c = BoxCollider::new(10.0, 20.0).with_offset(Vector2::new(-5.0, -10.0));
        let (min, max) = c.aabb(Vector2::new(100.0, 100.0));
        assert!(approx_eq(min.x, 95.0));
        assert!(approx_eq(min.y, 90.0));
        assert!(approx_eq(max.x, 105.0));
        assert!(approx_eq(max.y, 110.0));
    }

    #[test]
    fn test_aabb_normalizes_negative_size() {
        let c = BoxCollider::new(-10.0, -10.0);
        let (min, max) = c.aabb(Vector2::new(0.0, 0.0));
        assert!(approx_eq(min.x, -10.0));
        assert!(approx_eq(max.x, 0.0));
        assert!(approx_eq(min.y, -10.0));
        assert!(approx_eq(max.y, 0.0));
    }

    #[test]
    fn test_edge_contact_is_not_overlap_but_touches() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        let pa = Vector2::new(0.0, 0.0);
        let pb = Vector2::new(10.0, 0.0);
        assert!(!a.overlaps(pa, &b, pb));
        assert!(a.touches(pa, &b, pb, 0.5));
        assert!(!a.touches(pa, &b, Vector2::new(11.0, 0.0), 0.5));
    }

    #[test]
    fn test_separation_picks_shallowest_axis() {
        let player = BoxCollider::new(10.0, 10.0);
        let wall = BoxCollider::new(100.0, 100.0);
        // Player pokes 2 units into the wall's left edge.
        let push = player
            .separation(Vector2::new(-8.0, 40.0), &wall, Vector2::new(0.0, 0.0))
            .unwrap();
        assert!(approx_eq(push.x, -2.0));
        assert!(approx_eq(push.y, 0.0));

        // Player pokes 3 units into the wall's bottom edge.
        let push = player
            .separation(Vector2::new(40.0, 97.0), &wall, Vector2::new(0.0, 0.0))
            .unwrap();
        assert!(approx_eq(push.x, 0.0));
        assert!(approx_eq(push.y, 3.0));
    }

    #[test]
    fn test_separation_none_when_apart() {
        let a = BoxCollider::new(10.0, 10.0);
        assert!(
            a.separation(Vector2::new(0.0, 0.0), &a, Vector2::new(50.0, 50.0))
                .is_none()
        );
    }
}
