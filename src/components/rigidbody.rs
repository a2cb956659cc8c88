//! Kinematic body component.
//!
//! The [`RigidBody`] stores the velocity an entity moves with this frame.
//! Controllers overwrite it every frame and the movement system integrates
//! it into [`MapPosition`](super::mapposition::MapPosition). Bodies without
//! a `RigidBody` (boundaries, the map) are static.
//!
//! The `frozen` flag stops integration without touching the velocity.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing velocity in world units per second.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
    /// When true, movement system skips this entity.
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            frozen: false,
        }
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    pub fn stop(&mut self) {
        self.velocity = Vector2 { x: 0.0, y: 0.0 };
    }

    pub fn is_moving(&self) -> bool {
        self.velocity.x != 0.0 || self.velocity.y != 0.0
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigidbody_new_is_still() {
        let rb = RigidBody::new();
        assert!(!rb.is_moving());
        assert!(!rb.frozen);
    }

    #[test]
    fn test_stop_clears_velocity() {
        let mut rb = RigidBody::new();
        rb.set_velocity(Vector2 { x: 250.0, y: 0.0 });
        assert!(rb.is_moving());
        rb.stop();
        assert!(!rb.is_moving());
    }

    #[test]
    fn test_freeze_unfreeze() {
        let mut rb = RigidBody::new();
        rb.freeze();
        assert!(rb.frozen);
        rb.unfreeze();
        assert!(!rb.frozen);
    }
}
