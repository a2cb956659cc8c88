//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that systems can agree on
//! a single world/screen transform. The camera follower in
//! [`crate::systems::camera`] is the only writer.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera looking at the world origin, centred on a window of the given size.
    pub fn centered(window_w: i32, window_h: i32) -> Self {
        Camera2DRes(Camera2D {
            target: Vector2 { x: 0.0, y: 0.0 },
            offset: Vector2 {
                x: window_w as f32 * 0.5,
                y: window_h as f32 * 0.5,
            },
            rotation: 0.0,
            zoom: 1.0,
        })
    }
}

