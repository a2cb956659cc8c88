//! Dialogue box system.
//!
//! While a dialogue is shown its text is revealed over time. Confirm (Space
//! or Enter) first reveals the whole text, and a second confirm dismisses it.
//! Back (Escape) dismisses at once. Dismissal triggers the box's single
//! [`DialogueClosed`](crate::events::dialogue::DialogueClosed) event.
use bevy_ecs::prelude::*;

use crate::resources::dialogue::DialogueBox;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub fn dialogue_box_system(
    mut dialogue_box: ResMut<DialogueBox>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    if !dialogue_box.is_showing() {
        return;
    }

    let dismiss = if input.action_back.just_pressed {
        true
    } else if input.confirm_pressed() {
        if dialogue_box.is_fully_revealed() {
            true
        } else {
            dialogue_box.reveal_all();
            false
        }
    } else {
        false
    };

    if dismiss {
        if let Some(ticket) = dialogue_box.dismiss() {
            commands.trigger(ticket.complete());
        }
        return;
    }

    dialogue_box.advance(time.delta);
}
