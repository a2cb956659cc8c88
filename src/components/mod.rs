//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – playback state of the clip shown on a sprite
//! - [`boundary`] – static map regions and their collision category
//! - [`boxcollider`] – axis-aligned rectangular collider for collision detection
//! - [`collision`] – collision rules and per-body contact tracking
//! - [`mapposition`] – world-space position for an entity
//! - [`player`] – the controllable character, its dialogue gate and input rules
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boundary;
pub mod boxcollider;
pub mod collision;
pub mod mapposition;
pub mod player;
pub mod rigidbody;
pub mod sprite;
pub mod zindex;
