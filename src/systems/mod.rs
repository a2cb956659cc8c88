//! Scene systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations and update the visible frame
//! - [`camera`] – follow the player and fit the zoom to the window
//! - [`collision`] – separate the player from boundaries and emit contact events
//! - [`dialogue`] – reveal and dismiss the dialogue box
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`playercontroller`] – translate input state into player velocity and clips
//! - [`render`] – draw world, dialogue box and debug overlays using Raylib
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod camera;
pub mod collision;
pub mod dialogue;
pub mod input;
pub mod movement;
pub mod playercontroller;
pub mod render;
pub mod time;
