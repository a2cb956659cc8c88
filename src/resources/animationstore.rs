//! Animation resource registry.
//!
//! Clips are spans of frame indices over a spritesheet sliced into a fixed
//! grid. Frame `n` sits at column `n % columns`, row `n / columns`.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

/// Columns of the character spritesheet.
pub const SHEET_COLUMNS: u32 = 39;
/// Rows of the character spritesheet.
pub const SHEET_ROWS: u32 = 31;
/// Playback speed of the walk cycles.
pub const WALK_FPS: f32 = 8.0;

/// How a texture is sliced into equally sized cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteGrid {
    pub columns: u32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl SpriteGrid {
    /// Slice a texture of the given pixel size into `columns` x `rows`.
    pub fn from_texture(tex_width: i32, tex_height: i32, columns: u32, rows: u32) -> Self {
        Self {
            columns,
            cell_width: tex_width as f32 / columns.max(1) as f32,
            cell_height: tex_height as f32 / rows.max(1) as f32,
        }
    }

    /// Top-left pixel of frame `index` in the texture.
    pub fn frame_offset(&self, index: u32) -> Vector2 {
        let columns = self.columns.max(1);
        Vector2 {
            x: (index % columns) as f32 * self.cell_width,
            y: (index / columns) as f32 * self.cell_height,
        }
    }
}

/// Immutable data describing a clip.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    pub grid: SpriteGrid,
    /// Index of the first frame in the grid.
    pub first_frame: u32,
    /// Number of consecutive frames in the clip.
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the clip restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    /// Single-frame clip.
    pub fn still(grid: SpriteGrid, frame: u32) -> Self {
        Self {
            grid,
            first_frame: frame,
            frame_count: 1,
            fps: 0.0,
            looped: false,
        }
    }

    /// Clip over the inclusive frame range `from..=to`.
    pub fn range(grid: SpriteGrid, from: u32, to: u32, fps: f32) -> Self {
        Self {
            grid,
            first_frame: from,
            frame_count: (to.saturating_sub(from) + 1) as usize,
            fps,
            looped: true,
        }
    }

    pub fn frame_offset(&self, frame_index: usize) -> Vector2 {
        self.grid.frame_offset(self.first_frame + frame_index as u32)
    }
}

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }

    /// The player's directional clips over the character sheet.
    pub fn player_clips(grid: SpriteGrid) -> Self {
        let mut store = AnimationStore::default();
        store.insert("idle-down", AnimationResource::still(grid, 936));
        store.insert("walk-down", AnimationResource::range(grid, 936, 939, WALK_FPS));
        store.insert("idle-side", AnimationResource::still(grid, 975));
        store.insert("walk-side", AnimationResource::range(grid, 975, 978, WALK_FPS));
        store.insert("idle-up", AnimationResource::still(grid, 1014));
        store.insert("walk-up", AnimationResource::range(grid, 1014, 1017, WALK_FPS));
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> SpriteGrid {
        SpriteGrid::from_texture(39 * 16, 31 * 16, SHEET_COLUMNS, SHEET_ROWS)
    }

    #[test]
    fn test_grid_cell_size() {
        let grid = sheet();
        assert_eq!(grid.cell_width, 16.0);
        assert_eq!(grid.cell_height, 16.0);
    }

    #[test]
    fn test_frame_offset_wraps_rows() {
        let grid = sheet();
        // 936 = 24 * 39
        assert_eq!(grid.frame_offset(936), Vector2 { x: 0.0, y: 384.0 });
        assert_eq!(grid.frame_offset(939), Vector2 { x: 48.0, y: 384.0 });
        assert_eq!(grid.frame_offset(1014), Vector2 { x: 0.0, y: 416.0 });
    }

    #[test]
    fn test_player_clips() {
        let store = AnimationStore::player_clips(sheet());
        for key in [
            "idle-down",
            "walk-down",
            "idle-side",
            "walk-side",
            "idle-up",
            "walk-up",
        ] {
            assert!(store.get(key).is_some(), "missing clip {key}");
        }
        let walk = store.get("walk-side").unwrap();
        assert_eq!(walk.first_frame, 975);
        assert_eq!(walk.frame_count, 4);
        assert!(walk.looped);
        assert_eq!(walk.fps, 8.0);

        let idle = store.get("idle-up").unwrap();
        assert_eq!(idle.frame_count, 1);
        assert!(!idle.looped);
    }
}
