//! Tilewalker library.
//!
//! A top-down tile map scene: a player walks a room with the keyboard or
//! the mouse, bumps into the map's boundaries and reads the dialogue attached
//! to named ones. The ECS components, resources, systems and events are
//! exposed here for the binary and for integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod scene;
pub mod systems;
