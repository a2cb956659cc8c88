//! Map document model and spawn/boundary resolution.
//!
//! The map is a Tiled-style JSON export. Only object layers matter here:
//!
//! ```json
//! { "layers": [
//!     { "name": "boundaries", "objects": [ { "x": 0, "y": 0, "width": 16, "height": 32, "name": "pc" } ] },
//!     { "name": "spawnpoint", "objects": [ { "x": 120, "y": 88, "name": "player" } ] }
//! ] }
//! ```
//!
//! Tile layers carry no `objects` and are skipped. Extra fields are ignored.

use std::path::Path;

use raylib::prelude::Vector2;
use serde::Deserialize;

use crate::error::SceneError;

pub const SPAWN_LAYER: &str = "spawnpoint";
pub const BOUNDARY_LAYER: &str = "boundaries";
pub const SPAWN_OBJECT: &str = "player";

/// A placed object in map pixels.
#[derive(Debug, Clone, Deserialize)]
pub struct MapObject {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapLayer {
    pub name: String,
    #[serde(default)]
    pub objects: Option<Vec<MapObject>>,
}

/// Parsed map document.
#[derive(Debug, Clone, Deserialize)]
pub struct MapData {
    pub layers: Vec<MapLayer>,
    /// Map size in tiles, when the exporter provides it.
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// A boundary rectangle in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryRect {
    /// Top-left corner.
    pub pos: Vector2,
    pub size: Vector2,
    /// Dialogue trigger key; `None` for plain walls.
    pub name: Option<String>,
}

/// Everything the scene needs from the map, already scaled to world units.
#[derive(Debug, Clone, Default)]
pub struct SceneLayout {
    pub spawn: Option<Vector2>,
    pub boundaries: Vec<BoundaryRect>,
}

impl MapData {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        serde_json::from_str(json).map_err(|e| SceneError::MalformedMapData(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path).map_err(|e| SceneError::asset(path, e))?;
        Self::from_json(&json)
    }

    /// Resolve spawn point and boundaries, scaling map pixels by `scale`.
    ///
    /// Boundary objects with a zero (or missing) width or height take
    /// `tile_size` for that axis. A spawn/boundaries layer without an
    /// `objects` array, or an object with a negative size, is malformed.
    pub fn resolve(&self, scale: f32, tile_size: f32) -> Result<SceneLayout, SceneError> {
        let mut layout = SceneLayout::default();

        for layer in &self.layers {
            match layer.name.as_str() {
                SPAWN_LAYER => {
                    for obj in required_objects(layer)? {
                        if obj.name == SPAWN_OBJECT {
                            layout.spawn = Some(Vector2 {
                                x: obj.x * scale,
                                y: obj.y * scale,
                            });
                        }
                    }
                }
                BOUNDARY_LAYER => {
                    for obj in required_objects(layer)? {
                        if obj.width < 0.0 || obj.height < 0.0 {
                            return Err(SceneError::MalformedMapData(format!(
                                "boundary at ({}, {}) has negative size {}x{}",
                                obj.x, obj.y, obj.width, obj.height
                            )));
                        }
                        let w = if obj.width > 0.0 { obj.width } else { tile_size };
                        let h = if obj.height > 0.0 { obj.height } else { tile_size };
                        layout.boundaries.push(BoundaryRect {
                            pos: Vector2 {
                                x: obj.x * scale,
                                y: obj.y * scale,
                            },
                            size: Vector2 {
                                x: w * scale,
                                y: h * scale,
                            },
                            name: (!obj.name.is_empty()).then(|| obj.name.clone()),
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(layout)
    }
}

fn required_objects(layer: &MapLayer) -> Result<&[MapObject], SceneError> {
    layer.objects.as_deref().ok_or_else(|| {
        SceneError::MalformedMapData(format!("layer '{}' has no objects array", layer.name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = r#"{
        "width": 30, "height": 20,
        "layers": [
            { "name": "ground", "data": [1, 2, 3] },
            { "name": "boundaries", "objects": [
                { "x": 10, "y": 20, "width": 30, "height": 40, "name": "" },
                { "x": 0, "y": 0, "width": 16, "height": 8, "name": "pc" },
                { "x": 5, "y": 5, "name": "sign" }
            ] },
            { "name": "spawnpoint", "objects": [
                { "x": 3, "y": 4, "width": 0, "height": 0, "name": "npc" },
                { "x": 120, "y": 88, "width": 0, "height": 0, "name": "player" }
            ] }
        ]
    }"#;

    #[test]
    fn test_spawn_is_scaled() {
        let map = MapData::from_json(MAP).unwrap();
        let layout = map.resolve(4.0, 16.0).unwrap();
        let spawn = layout.spawn.unwrap();
        assert_eq!(spawn.x, 480.0);
        assert_eq!(spawn.y, 352.0);
    }

    #[test]
    fn test_boundaries_scaled_and_named() {
        let map = MapData::from_json(MAP).unwrap();
        let layout = map.resolve(4.0, 16.0).unwrap();
        assert_eq!(layout.boundaries.len(), 3);

        let wall = &layout.boundaries[0];
        assert_eq!(wall.pos, Vector2 { x: 40.0, y: 80.0 });
        assert_eq!(wall.size, Vector2 { x: 120.0, y: 160.0 });
        assert_eq!(wall.name, None);

        assert_eq!(layout.boundaries[1].name.as_deref(), Some("pc"));
    }

    #[test]
    fn test_sizeless_boundary_defaults_to_one_tile() {
        let map = MapData::from_json(MAP).unwrap();
        let layout = map.resolve(4.0, 16.0).unwrap();
        let sign = &layout.boundaries[2];
        assert_eq!(sign.size, Vector2 { x: 64.0, y: 64.0 });
        assert_eq!(sign.name.as_deref(), Some("sign"));
    }

    #[test]
    fn test_missing_spawn_is_not_an_error() {
        let map = MapData::from_json(r#"{ "layers": [ { "name": "ground" } ] }"#).unwrap();
        let layout = map.resolve(4.0, 16.0).unwrap();
        assert!(layout.spawn.is_none());
        assert!(layout.boundaries.is_empty());
    }

    #[test]
    fn test_later_spawn_overrides_earlier() {
        let map = MapData::from_json(
            r#"{ "layers": [
                { "name": "spawnpoint", "objects": [ { "x": 1, "y": 1, "name": "player" } ] },
                { "name": "spawnpoint", "objects": [ { "x": 2, "y": 3, "name": "player" } ] }
            ] }"#,
        )
        .unwrap();
        let spawn = map.resolve(2.0, 16.0).unwrap().spawn.unwrap();
        assert_eq!(spawn, Vector2 { x: 4.0, y: 6.0 });
    }

    #[test]
    fn test_boundaries_layer_without_objects_is_malformed() {
        let map = MapData::from_json(r#"{ "layers": [ { "name": "boundaries" } ] }"#).unwrap();
        let err = map.resolve(4.0, 16.0).unwrap_err();
        assert!(matches!(err, SceneError::MalformedMapData(_)));
    }

    #[test]
    fn test_negative_size_is_malformed() {
        let map = MapData::from_json(
            r#"{ "layers": [ { "name": "boundaries", "objects": [ { "x": 0, "y": 0, "width": -4, "height": 4 } ] } ] }"#,
        )
        .unwrap();
        assert!(matches!(
            map.resolve(1.0, 16.0),
            Err(SceneError::MalformedMapData(_))
        ));
    }

    #[test]
    fn test_missing_layers_field_is_malformed() {
        assert!(matches!(
            MapData::from_json(r#"{ "tilewidth": 16 }"#),
            Err(SceneError::MalformedMapData(_))
        ));
        assert!(matches!(
            MapData::from_json("not json"),
            Err(SceneError::MalformedMapData(_))
        ));
    }

    #[test]
    fn test_object_without_position_is_malformed() {
        assert!(matches!(
            MapData::from_json(r#"{ "layers": [ { "name": "boundaries", "objects": [ { "width": 4 } ] } ] }"#),
            Err(SceneError::MalformedMapData(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_asset_failure() {
        let err = MapData::load(Path::new("./definitely/not/here/map.json")).unwrap_err();
        assert!(matches!(err, SceneError::AssetLoadFailure { .. }));
    }
}
