//! Tilewalker main entry point.
//!
//! A 2D tile map walker written in Rust using:
//! - **raylib** for windowing, graphics, and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load configuration, then the map and dialogue documents
//! 2. Initialize the raylib window and upload textures
//! 3. Spawn the scene and register observers and systems
//! 4. Run the main loop:
//!    - Update input, player controller, movement, collision, dialogue,
//!      animation, camera
//!    - Render the world, the dialogue box and the debug overlay
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use tilewalker::error::SceneError;
use tilewalker::resources::camera2d::Camera2DRes;
use tilewalker::resources::debugmode::DebugMode;
use tilewalker::resources::gameconfig::GameConfig;
use tilewalker::resources::input::InputState;
use tilewalker::resources::texturestore::TextureStore;
use tilewalker::resources::windowsize::WindowSize;
use tilewalker::resources::worldtime::WorldTime;
use tilewalker::scene::{load_scene_data, load_textures, register_observers, setup_scene};
use tilewalker::systems::animation::animation;
use tilewalker::systems::camera::{camera_fit_window, camera_follow};
use tilewalker::systems::collision::collision_detector;
use tilewalker::systems::dialogue::dialogue_box_system;
use tilewalker::systems::input::update_input_state;
use tilewalker::systems::movement::movement;
use tilewalker::systems::playercontroller::player_controller;
use tilewalker::systems::render::render_system;
use tilewalker::systems::time::update_world_time;

/// Tilewalker 2D
#[derive(Parser)]
#[command(
    version,
    about = "Walk a tile map with the keyboard or the mouse and read what the room has to say."
)]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start with debug overlays enabled (toggle in game with F11).
    #[arg(long)]
    debug: bool,

    /// Validate the map and dialogue documents and exit.
    /// Optionally provide a map path (default: the configured map).
    #[arg(long, value_name = "PATH")]
    check_map: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using defaults");
    }

    // Early-exit: validate map data and quit (no window needed)
    if let Some(maybe_path) = cli.check_map {
        if let Some(path) = maybe_path {
            config.assets.map_data = path;
        }
        match load_scene_data(&config) {
            Ok(data) => {
                let named = data
                    .layout
                    .boundaries
                    .iter()
                    .filter(|b| b.name.is_some())
                    .count();
                println!(
                    "{}: {} boundaries ({} named), spawn {}, {} dialogue entries",
                    config.assets.map_data.display(),
                    data.layout.boundaries.len(),
                    named,
                    match data.layout.spawn {
                        Some(s) => format!("({:.1}, {:.1})", s.x, s.y),
                        None => "missing".to_string(),
                    },
                    data.dialogue.len()
                );
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = run(config, cli.debug) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: GameConfig, debug: bool) -> Result<(), SceneError> {
    // Data errors should surface before a window opens.
    let data = load_scene_data(&config)?;

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Tilewalker")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape closes dialogues, not the window
    rl.set_exit_key(None);
    if config.fullscreen {
        rl.toggle_fullscreen();
    }

    let (textures, geometry) = load_textures(&mut rl, &thread, &config)?;

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    let window = WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    world.insert_resource(window);
    world.insert_resource(Camera2DRes::centered(window.w, window.h));
    world.insert_resource(InputState::default());
    world.insert_resource(textures);
    if debug {
        world.insert_resource(DebugMode {});
    }

    register_observers(&mut world);
    setup_scene(&mut world, data, geometry, &config);
    world.insert_resource(config);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(player_controller.after(update_input_state));
    update.add_systems(movement.after(player_controller));
    update.add_systems(collision_detector.after(movement));
    update.add_systems(dialogue_box_system.after(collision_detector));
    update.add_systems(animation.after(dialogue_box_system));
    update.add_systems(camera_fit_window);
    update.add_systems(
        camera_follow
            .after(collision_detector)
            .after(camera_fit_window),
    );
    update.add_systems(
        render_system
            .after(animation)
            .after(camera_follow),
    );

    info!("Entering main loop");
    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        world
            .resource_mut::<WindowSize>()
            .set_if_neq(WindowSize { w: new_w, h: new_h });
    }

    // Textures must be unloaded while the window is still open.
    drop(world.remove_resource::<TextureStore>());
    Ok(())
}
