//! Integrates [`RigidBody`] velocity into [`MapPosition`].
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        if rigidbody.frozen || !rigidbody.is_moving() {
            continue;
        }
        position.pos.x += rigidbody.velocity.x * time.delta;
        position.pos.y += rigidbody.velocity.y * time.delta;
    }
}
