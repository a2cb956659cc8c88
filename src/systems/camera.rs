//! Camera systems.
//!
//! The camera follows the player with a fixed vertical bias so the player
//! sits above the screen centre, leaving room for the dialogue box. Zoom is
//! recomputed whenever the window size changes.
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::windowsize::WindowSize;

/// Camera target for a player at `player` with vertical `bias`.
pub fn follow_target(player: Vector2, bias: f32) -> Vector2 {
    Vector2 {
        x: player.x,
        y: player.y + bias,
    }
}

/// Zoom that fits `visible_tiles` tiles of `tile_world` units along the
/// shorter window side.
pub fn camera_zoom(window_w: i32, window_h: i32, visible_tiles: f32, tile_world: f32) -> f32 {
    let span = visible_tiles * tile_world;
    let short_side = window_w.min(window_h) as f32;
    if span <= 0.0 || short_side <= 0.0 {
        return 1.0;
    }
    short_side / span
}

pub fn camera_follow(
    players: Query<&MapPosition, With<Player>>,
    config: Res<GameConfig>,
    mut camera: ResMut<Camera2DRes>,
) {
    let Some(position) = players.iter().next() else {
        return;
    };
    camera.0.target = follow_target(position.pos, config.camera_bias);
}

/// Recenter and rezoom the camera when the window changes size.
pub fn camera_fit_window(
    window: Res<WindowSize>,
    config: Res<GameConfig>,
    mut camera: ResMut<Camera2DRes>,
) {
    if !window.is_changed() {
        return;
    }
    camera.0.offset = Vector2 {
        x: window.w as f32 * 0.5,
        y: window.h as f32 * 0.5,
    };
    camera.0.zoom = camera_zoom(
        window.w,
        window.h,
        config.visible_tiles,
        config.tile_world_size(),
    );
    debug!(
        "Window {}x{}, camera zoom {:.3}",
        window.w, window.h, camera.0.zoom
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_target_adds_bias_below_player() {
        let t = follow_target(Vector2 { x: 10.0, y: 20.0 }, 100.0);
        assert_eq!(t, Vector2 { x: 10.0, y: 120.0 });
    }

    #[test]
    fn test_zoom_uses_shorter_side() {
        // 8 tiles * 64 units = 512
        assert_eq!(camera_zoom(1280, 512, 8.0, 64.0), 1.0);
        assert_eq!(camera_zoom(1024, 2048, 8.0, 64.0), 2.0);
    }

    #[test]
    fn test_zoom_degenerate_inputs() {
        assert_eq!(camera_zoom(0, 600, 8.0, 64.0), 1.0);
        assert_eq!(camera_zoom(800, 600, 0.0, 64.0), 1.0);
    }
}
