//! Collision rules and per-body contact tracking.
//!
//! A [`CollisionRule`] maps a [`CollisionCategory`] to a handler function.
//! Rules live on their own entities, spawned once at scene setup; the
//! collision observer runs every rule whose category matches the boundary
//! the player just started touching.

use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::boundary::{BoundaryKind, CollisionCategory};

/// Data handed to a collision handler.
#[derive(Debug, Clone, Copy)]
pub struct CollisionContext<'a> {
    pub player: Entity,
    pub boundary: Entity,
    pub kind: &'a BoundaryKind,
}

/// Callback signature for collision rules.
pub type CollisionCallback = fn(ctx: &CollisionContext, commands: &mut Commands);

#[derive(Component)]
pub struct CollisionRule {
    pub category: CollisionCategory,
    pub callback: CollisionCallback,
}

impl CollisionRule {
    pub fn new(category: CollisionCategory, callback: CollisionCallback) -> Self {
        Self { category, callback }
    }

    pub fn matches(&self, kind: &BoundaryKind) -> bool {
        self.category == kind.category()
    }
}

/// Boundaries a moving body is currently touching.
///
/// Used to fire contact events only when a contact begins.
#[derive(Component, Debug, Clone, Default)]
pub struct Contacts {
    pub touching: SmallVec<[Entity; 4]>,
}

impl Contacts {
    pub fn contains(&self, entity: Entity) -> bool {
        self.touching.contains(&entity)
    }
}
