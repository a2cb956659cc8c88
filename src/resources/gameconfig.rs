//! Game configuration resource.
//!
//! Manages scene settings loaded from an INI configuration file. Provides
//! defaults for safe startup; a missing file or missing keys keep them.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! fullscreen = false
//!
//! [scene]
//! scale_factor = 4
//! tile_size = 16
//! visible_tiles = 8
//! camera_bias = 100
//! show_boundaries = false
//!
//! [player]
//! speed = 250
//!
//! [dialogue]
//! chars_per_second = 60
//!
//! [assets]
//! spritesheet = ./assets/spritesheet.png
//! map_image = ./assets/map.png
//! map_data = ./assets/map.json
//! dialogue = ./assets/dialogue.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_SCALE_FACTOR: f32 = 4.0;
const DEFAULT_TILE_SIZE: f32 = 16.0;
const DEFAULT_VISIBLE_TILES: f32 = 8.0;
const DEFAULT_CAMERA_BIAS: f32 = 100.0;
const DEFAULT_SHOW_BOUNDARIES: bool = false;
const DEFAULT_PLAYER_SPEED: f32 = 250.0;
const DEFAULT_CHARS_PER_SECOND: f32 = 60.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Asset file locations.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPaths {
    pub spritesheet: PathBuf,
    pub map_image: PathBuf,
    pub map_data: PathBuf,
    pub dialogue: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            spritesheet: PathBuf::from("./assets/spritesheet.png"),
            map_image: PathBuf::from("./assets/map.png"),
            map_data: PathBuf::from("./assets/map.json"),
            dialogue: PathBuf::from("./assets/dialogue.json"),
        }
    }
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Map pixels to world units.
    pub scale_factor: f32,
    /// Tile edge in map pixels.
    pub tile_size: f32,
    /// Tiles visible along the shorter window side.
    pub visible_tiles: f32,
    /// Vertical offset added to the player position for the camera target.
    pub camera_bias: f32,
    /// Draw boundary rectangles even outside debug mode.
    pub show_boundaries: bool,
    /// Player speed in world units per second.
    pub player_speed: f32,
    /// Dialogue typewriter speed.
    pub chars_per_second: f32,
    pub assets: AssetPaths,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            fullscreen: DEFAULT_FULLSCREEN,
            scale_factor: DEFAULT_SCALE_FACTOR,
            tile_size: DEFAULT_TILE_SIZE,
            visible_tiles: DEFAULT_VISIBLE_TILES,
            camera_bias: DEFAULT_CAMERA_BIAS,
            show_boundaries: DEFAULT_SHOW_BOUNDARIES,
            player_speed: DEFAULT_PLAYER_SPEED,
            chars_per_second: DEFAULT_CHARS_PER_SECOND,
            assets: AssetPaths::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Size of one tile in world units.
    pub fn tile_world_size(&self) -> f32 {
        self.tile_size * self.scale_factor
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [scene] section
        read_positive(config, "scene", "scale_factor", &mut self.scale_factor);
        read_positive(config, "scene", "tile_size", &mut self.tile_size);
        read_positive(config, "scene", "visible_tiles", &mut self.visible_tiles);
        if let Some(bias) = config.getfloat("scene", "camera_bias").ok().flatten() {
            self.camera_bias = bias as f32;
        }
        if let Some(show) = config.getbool("scene", "show_boundaries").ok().flatten() {
            self.show_boundaries = show;
        }

        // [player] section
        read_positive(config, "player", "speed", &mut self.player_speed);

        // [dialogue] section
        if let Some(cps) = config.getfloat("dialogue", "chars_per_second").ok().flatten() {
            self.chars_per_second = cps as f32;
        }

        // [assets] section
        let paths = [
            ("spritesheet", &mut self.assets.spritesheet),
            ("map_image", &mut self.assets.map_image),
            ("map_data", &mut self.assets.map_data),
            ("dialogue", &mut self.assets.dialogue),
        ];
        for (key, slot) in paths {
            if let Some(path) = config.get("assets", key) {
                *slot = PathBuf::from(path);
            }
        }

        info!(
            "Loaded config: {}x{} window, fps={}, scale={}, speed={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.scale_factor,
            self.player_speed
        );
    }
}

fn read_positive(config: &Ini, section: &str, key: &str, slot: &mut f32) {
    match config.getfloat(section, key) {
        Ok(Some(value)) if value > 0.0 => *slot = value as f32,
        Ok(Some(value)) => warn!("[{section}] {key} = {value} must be positive, keeping {slot}"),
        Ok(None) => {}
        Err(e) => warn!("[{section}] {key}: {e}, keeping {slot}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.scale_factor, 4.0);
        assert_eq!(config.player_speed, 250.0);
        assert_eq!(config.camera_bias, 100.0);
        assert_eq!(config.tile_world_size(), 64.0);
        assert_eq!(config.config_path, PathBuf::from("./config.ini"));
    }

    #[test]
    fn test_load_from_str_overrides_present_keys() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 800\n\n[scene]\nscale_factor = 2\n\n[player]\nspeed = 120\n\n[assets]\nmap_data = ./maps/room.json\n",
            )
            .unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.scale_factor, 2.0);
        assert_eq!(config.player_speed, 120.0);
        assert_eq!(config.assets.map_data, PathBuf::from("./maps/room.json"));
        assert_eq!(
            config.assets.spritesheet,
            PathBuf::from("./assets/spritesheet.png")
        );
    }

    #[test]
    fn test_non_positive_values_are_ignored() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[scene]\nscale_factor = 0\n[player]\nspeed = -3\n")
            .unwrap();
        assert_eq!(config.scale_factor, 4.0);
        assert_eq!(config.player_speed, 250.0);
    }

    #[test]
    fn test_missing_file_is_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path("./no/such/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, 1280);
    }
}
