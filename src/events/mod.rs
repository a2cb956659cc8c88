//! Event types and observers used by the scene.
//!
//! Submodules:
//! - [`collision`] – contact-begin notifications between the player and boundaries
//! - [`dialogue`] – dialogue open/close requests and the gate observers
//! - [`switchdebug`] – toggle debug rendering on/off
pub mod collision;
pub mod dialogue;
pub mod switchdebug;
