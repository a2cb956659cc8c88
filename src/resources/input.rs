//! Per-frame input resource.
//!
//! Captures the subset of keyboard and mouse state the scene cares about and
//! exposes it to systems via the [`InputState`] resource. Arrow keys are the
//! primary movement bindings, WASD the secondary ones; both pairs map onto the
//! same four directions.
use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::player::Direction;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }

    /// Update from this frame's raw state, deriving the edge flags.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

/// Left mouse button state plus the pointer in world and screen space.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    pub button: MouseButton,
    pub screen: Vector2,
    /// Pointer position converted through the current camera.
    pub world: Vector2,
}

impl PointerState {
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            button: MouseButton::MOUSE_BUTTON_LEFT,
            screen: Vector2::zero(),
            world: Vector2::zero(),
        }
    }
}

/// Resource capturing the per-frame input state relevant to the scene.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_right: BoolState,
    // WASD
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
    // Dialogue and debug keys
    pub action_confirm: BoolState,
    pub action_confirm_alt: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
    pub pointer: PointerState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound(KeyboardKey::KEY_UP),
            maindirection_down: BoolState::bound(KeyboardKey::KEY_DOWN),
            maindirection_left: BoolState::bound(KeyboardKey::KEY_LEFT),
            maindirection_right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            secondarydirection_up: BoolState::bound(KeyboardKey::KEY_W),
            secondarydirection_down: BoolState::bound(KeyboardKey::KEY_S),
            secondarydirection_left: BoolState::bound(KeyboardKey::KEY_A),
            secondarydirection_right: BoolState::bound(KeyboardKey::KEY_D),
            action_confirm: BoolState::bound(KeyboardKey::KEY_SPACE),
            action_confirm_alt: BoolState::bound(KeyboardKey::KEY_ENTER),
            action_back: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
            pointer: PointerState::default(),
        }
    }
}

impl InputState {
    /// The eight directional bindings paired with their direction.
    pub fn direction_bindings(&self) -> [(Direction, &BoolState); 8] {
        [
            (Direction::Right, &self.maindirection_right),
            (Direction::Left, &self.maindirection_left),
            (Direction::Up, &self.maindirection_up),
            (Direction::Down, &self.maindirection_down),
            (Direction::Right, &self.secondarydirection_right),
            (Direction::Left, &self.secondarydirection_left),
            (Direction::Up, &self.secondarydirection_up),
            (Direction::Down, &self.secondarydirection_down),
        ]
    }

    /// Distinct directions held this frame.
    pub fn held_directions(&self) -> ArrayVec<Direction, 4> {
        let mut held = ArrayVec::new();
        for (direction, state) in self.direction_bindings() {
            if state.active && !held.contains(&direction) {
                held.push(direction);
            }
        }
        held
    }

    pub fn any_direction_released(&self) -> bool {
        self.direction_bindings()
            .iter()
            .any(|(_, state)| state.just_released)
    }

    pub fn confirm_pressed(&self) -> bool {
        self.action_confirm.just_pressed || self.action_confirm_alt.just_pressed
    }

    /// Convenience for tests and replays: hold or release a direction's
    /// primary binding, updating the edge flags as a real frame would.
    pub fn set_direction(&mut self, direction: Direction, down: bool) {
        let state = match direction {
            Direction::Up => &mut self.maindirection_up,
            Direction::Down => &mut self.maindirection_down,
            Direction::Left => &mut self.maindirection_left,
            Direction::Right => &mut self.maindirection_right,
        };
        state.update(down);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_boolstate_edges() {
        let mut bs = BoolState::bound(KeyboardKey::KEY_UP);
        bs.update(true);
        assert!(bs.active && bs.just_pressed && !bs.just_released);
        bs.update(true);
        assert!(bs.active && !bs.just_pressed);
        bs.update(false);
        assert!(!bs.active && bs.just_released);
        bs.update(false);
        assert!(!bs.just_released);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.maindirection_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.maindirection_left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.maindirection_down.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.maindirection_right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.secondarydirection_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.secondarydirection_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.secondarydirection_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.secondarydirection_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.action_confirm.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.action_confirm_alt.key_binding, KeyboardKey::KEY_ENTER);
        assert_eq!(input.action_back.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_held_directions_dedupes_bindings() {
        let mut input = InputState::default();
        input.maindirection_right.active = true;
        input.secondarydirection_right.active = true;
        assert_eq!(input.held_directions().as_slice(), &[Direction::Right]);

        input.secondarydirection_up.active = true;
        assert_eq!(
            input.held_directions().as_slice(),
            &[Direction::Right, Direction::Up]
        );
    }

    #[test]
    fn test_any_direction_released() {
        let mut input = InputState::default();
        input.set_direction(Direction::Left, true);
        assert!(!input.any_direction_released());
        input.set_direction(Direction::Left, false);
        assert!(input.any_direction_released());
    }
}
