//! Static map boundaries.
//!
//! Every object in the map's "boundaries" layer becomes an entity with a
//! [`Boundary`], a [`MapPosition`](super::mapposition::MapPosition) at its
//! top-left corner and a [`BoxCollider`](super::boxcollider::BoxCollider)
//! of its size. Named objects also trigger the dialogue stored under their
//! name.

use bevy_ecs::prelude::Component;

/// What touching a boundary does beyond blocking movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryKind {
    Solid,
    DialogueTrigger(String),
}

/// Closed set of collidable categories used to dispatch collision rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionCategory {
    Solid,
    DialogueTrigger,
}

impl BoundaryKind {
    pub fn category(&self) -> CollisionCategory {
        match self {
            BoundaryKind::Solid => CollisionCategory::Solid,
            BoundaryKind::DialogueTrigger(_) => CollisionCategory::DialogueTrigger,
        }
    }

    pub fn dialogue_key(&self) -> Option<&str> {
        match self {
            BoundaryKind::DialogueTrigger(key) => Some(key),
            BoundaryKind::Solid => None,
        }
    }
}

/// A solid, immovable region of the map.
#[derive(Component, Debug, Clone)]
pub struct Boundary {
    pub kind: BoundaryKind,
}

impl Boundary {
    pub fn solid() -> Self {
        Self {
            kind: BoundaryKind::Solid,
        }
    }

    pub fn dialogue(key: impl Into<String>) -> Self {
        Self {
            kind: BoundaryKind::DialogueTrigger(key.into()),
        }
    }
}
