//! Z-index component for render ordering.
//!
//! Entities with higher z-index values are drawn on top of those with lower
//! values. The map image sits at 0 and the player at 1.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
