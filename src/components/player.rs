//! Player state and the rules that turn raw input into movement.
//!
//! The [`Player`] component owns the facing [`Direction`], the walking speed
//! and the [`DialogueGate`]. The free functions in this module are the pure
//! part of input resolution; [`crate::systems::playercontroller`] applies
//! them to the ECS each frame.
//!
//! Clip names match the spritesheet definitions in
//! [`crate::resources::animationstore`]: the side clips are drawn facing
//! right and mirrored for left.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::error::GateError;

/// Lower bound, in degrees from horizontal, of the up/down click sectors.
pub const CLICK_LOWER_BOUND: f32 = 50.0;
/// Upper bound, in degrees from horizontal, of the up/down click sectors.
pub const CLICK_UPPER_BOUND: f32 = 125.0;

/// One of the four facing/movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in screen space (y grows downwards).
    pub fn unit(self) -> Vector2 {
        match self {
            Direction::Up => Vector2 { x: 0.0, y: -1.0 },
            Direction::Down => Vector2 { x: 0.0, y: 1.0 },
            Direction::Left => Vector2 { x: -1.0, y: 0.0 },
            Direction::Right => Vector2 { x: 1.0, y: 0.0 },
        }
    }

    pub fn velocity(self, speed: f32) -> Vector2 {
        let u = self.unit();
        Vector2 {
            x: u.x * speed,
            y: u.y * speed,
        }
    }

    pub fn walk_clip(self) -> &'static str {
        match self {
            Direction::Up => "walk-up",
            Direction::Down => "walk-down",
            Direction::Left | Direction::Right => "walk-side",
        }
    }

    pub fn idle_clip(self) -> &'static str {
        match self {
            Direction::Up => "idle-up",
            Direction::Down => "idle-down",
            Direction::Left | Direction::Right => "idle-side",
        }
    }

    /// Horizontal mirroring for the shared side clip. Up/down leave the
    /// current flip untouched.
    pub fn flip_h(self) -> Option<bool> {
        match self {
            Direction::Left => Some(true),
            Direction::Right => Some(false),
            Direction::Up | Direction::Down => None,
        }
    }
}

/// Outcome of reading the held directional keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResolution {
    /// No directional key held.
    Idle,
    /// Exactly one direction held.
    Move(Direction),
    /// More than one direction held; rejected rather than guessed.
    Ambiguous,
}

/// Resolve the set of held directions. Duplicates are expected to be removed
/// by the caller (two bindings of the same direction count once).
pub fn resolve_keys(held: &[Direction]) -> KeyResolution {
    match held {
        [] => KeyResolution::Idle,
        [only] => KeyResolution::Move(*only),
        _ => KeyResolution::Ambiguous,
    }
}

/// Angle in degrees from `from` to `to`, counter-clockwise from +x with
/// screen-up positive. Range is (-180, 180].
pub fn click_angle(from: Vector2, to: Vector2) -> f32 {
    (from.y - to.y).atan2(to.x - from.x).to_degrees()
}

/// Bucket a click angle into a direction.
///
/// Up and down own the open sectors (50°, 125°) and (-125°, -50°); the exact
/// threshold values belong to the side sectors.
pub fn bucket_click_angle(angle: f32) -> Direction {
    if angle > CLICK_LOWER_BOUND && angle < CLICK_UPPER_BOUND {
        return Direction::Up;
    }
    if angle < -CLICK_LOWER_BOUND && angle > -CLICK_UPPER_BOUND {
        return Direction::Down;
    }
    if angle.abs() >= CLICK_UPPER_BOUND {
        return Direction::Left;
    }
    Direction::Right
}

/// Whether a dialogue currently holds the player.
///
/// Only one dialogue can be open at a time; the gate must be closed exactly
/// once per opening.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogueGate {
    #[default]
    Closed,
    Open {
        key: String,
    },
}

impl DialogueGate {
    pub fn is_open(&self) -> bool {
        matches!(self, DialogueGate::Open { .. })
    }

    pub fn active_key(&self) -> Option<&str> {
        match self {
            DialogueGate::Open { key } => Some(key),
            DialogueGate::Closed => None,
        }
    }

    pub fn open(&mut self, key: impl Into<String>) -> Result<(), GateError> {
        if let DialogueGate::Open { key: active } = self {
            return Err(GateError::AlreadyOpen {
                active: active.clone(),
            });
        }
        *self = DialogueGate::Open { key: key.into() };
        Ok(())
    }

    /// Close the gate, returning the key of the dialogue that was open.
    pub fn close(&mut self) -> Result<String, GateError> {
        match std::mem::take(self) {
            DialogueGate::Open { key } => Ok(key),
            DialogueGate::Closed => Err(GateError::NotOpen),
        }
    }
}

/// The controllable character.
#[derive(Component, Debug, Clone)]
pub struct Player {
    /// World units per second.
    pub speed: f32,
    /// Last direction moved in; selects the idle clip.
    pub direction: Direction,
    pub gate: DialogueGate,
}

impl Player {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            direction: Direction::Down,
            gate: DialogueGate::Closed,
        }
    }

    pub fn in_dialogue(&self) -> bool {
        self.gate.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_single_key_velocity_sign_and_magnitude() {
        let speed = 250.0;
        let cases = [
            (Direction::Right, 250.0, 0.0),
            (Direction::Left, -250.0, 0.0),
            (Direction::Up, 0.0, -250.0),
            (Direction::Down, 0.0, 250.0),
        ];
        for (dir, vx, vy) in cases {
            let v = dir.velocity(speed);
            assert!(approx_eq(v.x, vx), "{dir:?} x");
            assert!(approx_eq(v.y, vy), "{dir:?} y");
        }
    }

    #[test]
    fn test_clips_per_direction() {
        assert_eq!(Direction::Up.walk_clip(), "walk-up");
        assert_eq!(Direction::Down.walk_clip(), "walk-down");
        assert_eq!(Direction::Left.walk_clip(), "walk-side");
        assert_eq!(Direction::Right.walk_clip(), "walk-side");
        assert_eq!(Direction::Up.idle_clip(), "idle-up");
        assert_eq!(Direction::Down.idle_clip(), "idle-down");
        assert_eq!(Direction::Left.idle_clip(), "idle-side");
        assert_eq!(Direction::Right.idle_clip(), "idle-side");
    }

    #[test]
    fn test_flip_only_for_sides() {
        assert_eq!(Direction::Left.flip_h(), Some(true));
        assert_eq!(Direction::Right.flip_h(), Some(false));
        assert_eq!(Direction::Up.flip_h(), None);
        assert_eq!(Direction::Down.flip_h(), None);
    }

    #[test]
    fn test_resolve_keys() {
        assert_eq!(resolve_keys(&[]), KeyResolution::Idle);
        assert_eq!(
            resolve_keys(&[Direction::Up]),
            KeyResolution::Move(Direction::Up)
        );
        assert_eq!(
            resolve_keys(&[Direction::Up, Direction::Left]),
            KeyResolution::Ambiguous
        );
        assert_eq!(
            resolve_keys(&[Direction::Left, Direction::Right]),
            KeyResolution::Ambiguous
        );
    }

    #[test]
    fn test_bucket_cardinal_angles() {
        assert_eq!(bucket_click_angle(90.0), Direction::Up);
        assert_eq!(bucket_click_angle(-90.0), Direction::Down);
        assert_eq!(bucket_click_angle(0.0), Direction::Right);
        assert_eq!(bucket_click_angle(180.0), Direction::Left);
        assert_eq!(bucket_click_angle(-180.0), Direction::Left);
    }

    #[test]
    fn test_bucket_thresholds_favor_sides() {
        assert_eq!(bucket_click_angle(50.0), Direction::Right);
        assert_eq!(bucket_click_angle(-50.0), Direction::Right);
        assert_eq!(bucket_click_angle(125.0), Direction::Left);
        assert_eq!(bucket_click_angle(-125.0), Direction::Left);
        assert_eq!(bucket_click_angle(50.5), Direction::Up);
        assert_eq!(bucket_click_angle(124.5), Direction::Up);
        assert_eq!(bucket_click_angle(-50.5), Direction::Down);
        assert_eq!(bucket_click_angle(-124.5), Direction::Down);
    }

    #[test]
    fn test_click_angle_screen_orientation() {
        let p = Vector2 { x: 100.0, y: 100.0 };
        assert!(approx_eq(click_angle(p, Vector2 { x: 200.0, y: 100.0 }), 0.0));
        assert!(approx_eq(click_angle(p, Vector2 { x: 100.0, y: 0.0 }), 90.0));
        assert!(approx_eq(click_angle(p, Vector2 { x: 0.0, y: 100.0 }), 180.0));
        assert!(approx_eq(click_angle(p, Vector2 { x: 100.0, y: 200.0 }), -90.0));
    }

    #[test]
    fn test_gate_open_close_once() {
        let mut gate = DialogueGate::default();
        assert!(!gate.is_open());
        gate.open("pc").unwrap();
        assert_eq!(gate.active_key(), Some("pc"));
        assert_eq!(
            gate.open("bed"),
            Err(GateError::AlreadyOpen {
                active: "pc".to_string()
            })
        );
        assert_eq!(gate.active_key(), Some("pc"));
        assert_eq!(gate.close(), Ok("pc".to_string()));
        assert_eq!(gate.close(), Err(GateError::NotOpen));
    }

    #[test]
    fn test_player_defaults() {
        let p = Player::new(250.0);
        assert_eq!(p.direction, Direction::Down);
        assert!(!p.in_dialogue());
    }
}
