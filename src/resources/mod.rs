//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – clip definitions over the character spritesheet grid
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `debugmode` – presence toggles optional debug overlays
//! - `dialogue` – dialogue text table and the on-screen dialogue box
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – per-frame keyboard and mouse state relevant to the scene
//! - `texturestore` – loaded textures keyed by string IDs
//! - `tilemap` – map document model and spawn/boundary resolution
//! - `windowsize` – current window dimensions in pixels
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod camera2d;
pub mod debugmode;
pub mod dialogue;
pub mod gameconfig;
pub mod input;
pub mod texturestore;
pub mod tilemap;
pub mod windowsize;
pub mod worldtime;
