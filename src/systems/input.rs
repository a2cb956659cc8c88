//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - F11 toggles debug mode via
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    camera: Res<Camera2DRes>,
    mut commands: Commands,
) {
    let input = &mut *input;
    let keys = [
        &mut input.maindirection_up,
        &mut input.maindirection_down,
        &mut input.maindirection_left,
        &mut input.maindirection_right,
        &mut input.secondarydirection_up,
        &mut input.secondarydirection_down,
        &mut input.secondarydirection_left,
        &mut input.secondarydirection_right,
        &mut input.action_confirm,
        &mut input.action_confirm_alt,
        &mut input.action_back,
        &mut input.mode_debug,
    ];
    for state in keys {
        let down = rl.is_key_down(state.key_binding);
        state.update(down);
    }

    let pointer_down = rl.is_mouse_button_down(input.pointer.button);
    input.pointer.update(pointer_down);
    input.pointer.screen = rl.get_mouse_position();
    input.pointer.world = rl.get_screen_to_world2D(input.pointer.screen, camera.0);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
