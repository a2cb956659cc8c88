//! World-space position component.
//!
//! For sprites the position is the pivot (see [`Sprite::origin`]); for
//! boundaries it is the top-left corner of the collider.
//!
//! [`Sprite::origin`]: crate::components::sprite::Sprite::origin

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }
}
