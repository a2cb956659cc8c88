//! Player controller.
//!
//! Turns the per-frame [`InputState`] into player velocity, facing and clip
//! selection. Holding the left mouse button walks toward the pointer and takes
//! precedence over the keyboard. With keys, exactly one held direction walks;
//! none or several leave the player still.
//!
//! Releasing any direction key or the mouse button switches to the idle clip
//! of the current facing, even while a dialogue is open. Everything else is
//! suppressed while the player's dialogue gate is open.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::player::{
    Direction, KeyResolution, Player, bucket_click_angle, click_angle, resolve_keys,
};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Pointer targets closer than this are treated as reached.
const ARRIVE_DISTANCE: f32 = 0.5;

pub fn player_controller(
    mut query: Query<(
        &mut Player,
        &mut RigidBody,
        &mut Animation,
        &mut Sprite,
        &MapPosition,
    )>,
    input: Res<InputState>,
    time: Res<WorldTime>,
) {
    for (mut player, mut rigidbody, mut animation, mut sprite, position) in query.iter_mut() {
        rigidbody.stop();

        if input.any_direction_released() || input.pointer.just_released {
            animation.play(player.direction.idle_clip());
        }

        if player.in_dialogue() {
            continue;
        }

        if input.pointer.active {
            let target = input.pointer.world;
            let to_target = Vector2::new(target.x - position.pos.x, target.y - position.pos.y);
            let distance = to_target.length();
            if distance <= ARRIVE_DISTANCE {
                continue;
            }
            let direction = bucket_click_angle(click_angle(position.pos, target));
            face(&mut player, &mut animation, &mut sprite, direction);

            let step = player.speed * time.delta;
            let velocity = if step >= distance && time.delta > 0.0 {
                // Land on the target instead of overshooting it.
                Vector2::new(to_target.x / time.delta, to_target.y / time.delta)
            } else {
                Vector2::new(
                    to_target.x / distance * player.speed,
                    to_target.y / distance * player.speed,
                )
            };
            rigidbody.set_velocity(velocity);
            continue;
        }

        match resolve_keys(&input.held_directions()) {
            KeyResolution::Move(direction) => {
                face(&mut player, &mut animation, &mut sprite, direction);
                let speed = player.speed;
                rigidbody.set_velocity(direction.velocity(speed));
            }
            KeyResolution::Idle | KeyResolution::Ambiguous => {}
        }
    }
}

/// Turn toward `direction`, flipping the sprite for sideways facing and
/// starting the walk clip unless it is already playing.
fn face(player: &mut Player, animation: &mut Animation, sprite: &mut Sprite, direction: Direction) {
    player.direction = direction;
    if let Some(flip) = direction.flip_h() {
        sprite.flip_h = flip;
    }
    animation.play(direction.walk_clip());
}
