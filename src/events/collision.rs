//! Contact events between the player and map boundaries.
//!
//! The collision detector emits [`CollisionEvent`] once when the player
//! starts touching a boundary; staying in contact does not repeat it. The
//! observer in [`crate::systems::collision`] dispatches it to the matching
//! [`CollisionRule`](crate::components::collision::CollisionRule)s.
use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub player: Entity,
    pub boundary: Entity,
}
