//! Scene setup.
//!
//! Loading is split in two so the data half can run without a window:
//!
//! 1. [`load_scene_data`] reads the map and dialogue documents and resolves
//!    the spawn point and boundaries into world units.
//! 2. [`load_textures`] uploads the spritesheet and map image to the GPU.
//!
//! [`setup_scene`] then inserts the scene resources and spawns the map, the
//! player, one entity per boundary and the collision rules.
//! [`register_observers`] wires the event observers; call it before the
//! first schedule run.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::boundary::Boundary;
use crate::components::boxcollider::BoxCollider;
use crate::components::collision::Contacts;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::error::SceneError;
use crate::events::dialogue::{dialogue_closed_observer, dialogue_triggered_observer};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::animationstore::{AnimationStore, SHEET_COLUMNS, SHEET_ROWS, SpriteGrid};
use crate::resources::dialogue::{DialogueBox, DialogueTable};
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemap::{BoundaryRect, MapData, SceneLayout};
use crate::systems::collision::{collision_observer, default_collision_rules};

pub const SPRITESHEET_KEY: &str = "spritesheet";
pub const MAP_KEY: &str = "map";

/// Player hitbox edge in sheet pixels.
const PLAYER_COLLIDER_SIZE: f32 = 15.0;
/// Downward shift of the hitbox from the sprite centre, in sheet pixels.
const PLAYER_COLLIDER_DROP: f32 = 3.0;

/// Map-derived data, resolved to world units.
#[derive(Debug, Clone)]
pub struct SceneData {
    pub layout: SceneLayout,
    pub dialogue: DialogueTable,
}

/// Pixel geometry of the loaded textures.
#[derive(Debug, Clone, Copy)]
pub struct SceneTextures {
    pub sheet: SpriteGrid,
    pub map_width: f32,
    pub map_height: f32,
}

pub fn load_scene_data(config: &GameConfig) -> Result<SceneData, SceneError> {
    let map = MapData::load(&config.assets.map_data)?;
    let layout = map.resolve(config.scale_factor, config.tile_size)?;
    let dialogue = DialogueTable::load(&config.assets.dialogue)?;
    info!(
        "Loaded map {}: {} boundaries, spawn {:?}; {} dialogue entries",
        config.assets.map_data.display(),
        layout.boundaries.len(),
        layout.spawn,
        dialogue.len()
    );
    if dialogue.is_empty() {
        warn!(
            "{} has no dialogue entries; every named boundary is a wall",
            config.assets.dialogue.display()
        );
    }
    Ok(SceneData { layout, dialogue })
}

pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    config: &GameConfig,
) -> Result<(TextureStore, SceneTextures), SceneError> {
    let load = |rl: &mut RaylibHandle, path: &std::path::Path| {
        rl.load_texture(thread, &path.to_string_lossy())
            .map_err(|e| SceneError::asset(path, e))
    };

    let sheet_tex = load(rl, &config.assets.spritesheet)?;
    let map_tex = load(rl, &config.assets.map_image)?;

    let geometry = SceneTextures {
        sheet: SpriteGrid::from_texture(sheet_tex.width, sheet_tex.height, SHEET_COLUMNS, SHEET_ROWS),
        map_width: map_tex.width as f32,
        map_height: map_tex.height as f32,
    };

    let mut store = TextureStore::new();
    store.insert(SPRITESHEET_KEY, sheet_tex);
    store.insert(MAP_KEY, map_tex);
    Ok((store, geometry))
}

/// Insert the scene resources and spawn every scene entity.
///
/// Returns the player entity.
pub fn setup_scene(
    world: &mut World,
    data: SceneData,
    textures: SceneTextures,
    config: &GameConfig,
) -> Entity {
    world.insert_resource(AnimationStore::player_clips(textures.sheet));
    world.insert_resource(DialogueBox::new(config.chars_per_second));

    spawn_map(world, &textures, config.scale_factor);
    let triggers = register_boundaries(world, &data.layout.boundaries, &data.dialogue);
    register_collision_rules(world);

    let spawn = data.layout.spawn.unwrap_or_else(|| {
        info!("Map has no player spawn point, spawning at the origin");
        Vector2::zero()
    });
    let player = spawn_player(world, spawn, textures.sheet, config);

    info!(
        "Scene ready: {} boundaries ({} dialogue triggers), player at ({:.1}, {:.1})",
        data.layout.boundaries.len(),
        triggers,
        spawn.x,
        spawn.y
    );
    world.insert_resource(data.dialogue);
    player
}

fn spawn_map(world: &mut World, textures: &SceneTextures, scale: f32) -> Entity {
    world
        .spawn((
            MapPosition::new(0.0, 0.0),
            ZIndex(0),
            Sprite {
                tex_key: MAP_KEY.into(),
                width: textures.map_width,
                height: textures.map_height,
                offset: Vector2::zero(),
                origin: Vector2::zero(),
                scale,
                flip_h: false,
            },
        ))
        .id()
}

/// Spawn the player with its pivot at `spawn`, facing down.
pub fn spawn_player(
    world: &mut World,
    spawn: Vector2,
    sheet: SpriteGrid,
    config: &GameConfig,
) -> Entity {
    let scale = config.scale_factor;
    let store = world.get_resource::<AnimationStore>();
    let idle_offset = store
        .and_then(|s| s.get("idle-down"))
        .map(|clip| clip.frame_offset(0))
        .unwrap_or_else(Vector2::zero);

    let collider_half = PLAYER_COLLIDER_SIZE * 0.5;
    let collider = BoxCollider::new(PLAYER_COLLIDER_SIZE * scale, PLAYER_COLLIDER_SIZE * scale)
        .with_offset(Vector2 {
            x: -collider_half * scale,
            y: (PLAYER_COLLIDER_DROP - collider_half) * scale,
        });

    world
        .spawn((
            Player::new(config.player_speed),
            MapPosition::from_vec(spawn),
            RigidBody::new(),
            collider,
            Contacts::default(),
            Animation::new("idle-down"),
            ZIndex(1),
            Sprite {
                tex_key: SPRITESHEET_KEY.into(),
                width: sheet.cell_width,
                height: sheet.cell_height,
                offset: idle_offset,
                origin: Vector2 {
                    x: sheet.cell_width * 0.5,
                    y: sheet.cell_height * 0.5,
                },
                scale,
                flip_h: false,
            },
        ))
        .id()
}

/// Spawn one static boundary per rectangle. Named rectangles with a dialogue
/// entry become dialogue triggers; the rest are plain walls.
///
/// Returns how many dialogue triggers were registered.
pub fn register_boundaries(
    world: &mut World,
    boundaries: &[BoundaryRect],
    dialogue: &DialogueTable,
) -> usize {
    let mut triggers = 0;
    for rect in boundaries {
        let boundary = match rect.name.as_deref() {
            Some(name) if dialogue.get(name).is_some() => {
                triggers += 1;
                Boundary::dialogue(name)
            }
            Some(name) => {
                warn!("Boundary '{}' has no dialogue entry, treating it as a wall", name);
                Boundary::solid()
            }
            None => Boundary::solid(),
        };
        world.spawn((
            MapPosition::from_vec(rect.pos),
            BoxCollider::new(rect.size.x, rect.size.y),
            boundary,
        ));
    }
    triggers
}

pub fn register_collision_rules(world: &mut World) {
    for rule in default_collision_rules() {
        world.spawn(rule);
    }
}

pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(collision_observer));
    world.spawn(Observer::new(dialogue_triggered_observer));
    world.spawn(Observer::new(dialogue_closed_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure observers are registered before any system triggers events.
    world.flush();
}
