//! Dialogue events and the observers that drive the dialogue gate.
//!
//! Flow:
//! 1. A dialogue-trigger boundary rule emits [`DialogueTriggered`].
//! 2. [`dialogue_triggered_observer`] opens the player's gate, freezes its
//!    body and shows the text in the [`DialogueBox`]. A trigger while a
//!    dialogue is already open is rejected and logged.
//! 3. Dismissing the box (see [`crate::systems::dialogue`]) emits exactly one
//!    [`DialogueClosed`], and [`dialogue_closed_observer`] closes the gate
//!    and releases the body.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::animation::Animation;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::dialogue::{DialogueBox, DialogueTable};

/// The player touched a boundary whose name has a dialogue.
#[derive(Event, Debug, Clone)]
pub struct DialogueTriggered {
    pub player: Entity,
    pub key: String,
}

/// The dialogue shown for `player` was dismissed.
#[derive(Event, Debug, Clone)]
pub struct DialogueClosed {
    pub player: Entity,
    pub key: String,
}

pub fn dialogue_triggered_observer(
    trigger: On<DialogueTriggered>,
    mut players: Query<(&mut Player, Option<&mut Animation>, Option<&mut RigidBody>)>,
    table: Res<DialogueTable>,
    mut dialogue_box: ResMut<DialogueBox>,
) {
    let event = trigger.event();
    let Ok((mut player, animation, rigidbody)) = players.get_mut(event.player) else {
        warn!("Dialogue '{}' triggered by a non-player entity", event.key);
        return;
    };
    let Some(text) = table.get(&event.key) else {
        warn!("No dialogue text for '{}'", event.key);
        return;
    };

    if let Err(e) = player.gate.open(event.key.as_str()) {
        warn!("Ignoring dialogue '{}': {}", event.key, e);
        return;
    }
    if let Err(e) = dialogue_box.show(event.player, event.key.as_str(), text) {
        warn!("Ignoring dialogue '{}': {}", event.key, e);
        // Box and gate must agree; undo the gate.
        if let Err(e) = player.gate.close() {
            warn!("Rolling back dialogue '{}': {}", event.key, e);
        }
        return;
    }

    let idle = player.direction.idle_clip();
    if let Some(mut animation) = animation {
        animation.play(idle);
    }
    if let Some(mut rigidbody) = rigidbody {
        rigidbody.stop();
        rigidbody.freeze();
    }
    info!("Dialogue '{}' opened", event.key);
}

pub fn dialogue_closed_observer(
    trigger: On<DialogueClosed>,
    mut players: Query<(&mut Player, Option<&mut RigidBody>)>,
) {
    let event = trigger.event();
    let Ok((mut player, rigidbody)) = players.get_mut(event.player) else {
        warn!("Dialogue '{}' closed for a missing player", event.key);
        return;
    };
    if let Some(mut rigidbody) = rigidbody {
        rigidbody.unfreeze();
    }
    match player.gate.close() {
        Ok(key) => info!("Dialogue '{}' closed", key),
        Err(e) => warn!("Closing dialogue '{}': {}", event.key, e),
    }
}
