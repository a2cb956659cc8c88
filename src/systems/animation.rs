//! Animation system.
//!
//! [`animation`] advances each entity's [`Animation`] by the frame delta and
//! points its [`Sprite`] at the current frame of the sheet.
//!
//! # Animation Flow
//!
//! 1. Clip data is defined in [`AnimationStore`]
//! 2. Entities have an [`Animation`] component pointing to a clip key
//! 3. Controllers switch clips with [`Animation::play`]
//! 4. This system advances frames by `fps` and updates [`Sprite::offset`]

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// Looping clips wrap to their first frame; other clips hold their last one.
/// Single-frame clips never advance.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite), With<MapPosition>>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        let Some(clip) = animation_store.get(&anim_comp.animation_key) else {
            continue;
        };

        if clip.frame_count > 1 && clip.fps > 0.0 {
            anim_comp.elapsed_time += time.delta;
            let frame_duration = 1.0 / clip.fps;
            while anim_comp.elapsed_time >= frame_duration {
                anim_comp.elapsed_time -= frame_duration;
                anim_comp.frame_index += 1;
                if anim_comp.frame_index >= clip.frame_count {
                    if clip.looped {
                        anim_comp.frame_index = 0;
                    } else {
                        anim_comp.frame_index = clip.frame_count - 1;
                        anim_comp.elapsed_time = 0.0;
                        break;
                    }
                }
            }
        } else {
            anim_comp.frame_index = 0;
        }

        sprite.offset = clip.frame_offset(anim_comp.frame_index);
    }
}
