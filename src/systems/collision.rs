//! Player/boundary collision.
//!
//! [`collision_detector`] pushes the player out of any boundary it overlaps
//! and tracks which boundaries it is touching. A boundary that starts being
//! touched this frame produces one [`CollisionEvent`]; staying in contact
//! does not repeat it.
//!
//! [`collision_observer`] dispatches each event to every
//! [`CollisionRule`] whose category matches the boundary.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, trace};
use smallvec::SmallVec;

use crate::components::boundary::{Boundary, CollisionCategory};
use crate::components::boxcollider::BoxCollider;
use crate::components::collision::{CollisionContext, CollisionRule, Contacts};
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::collision::CollisionEvent;
use crate::events::dialogue::DialogueTriggered;

/// Edge distance, in world units, still counted as touching.
pub const CONTACT_TOLERANCE: f32 = 0.5;

pub fn collision_detector(
    mut players: Query<
        (Entity, &mut MapPosition, &BoxCollider, &mut Contacts),
        (With<Player>, Without<Boundary>),
    >,
    boundaries: Query<(Entity, &MapPosition, &BoxCollider), (With<Boundary>, Without<Player>)>,
    mut commands: Commands,
) {
    for (player, mut position, collider, mut contacts) in players.iter_mut() {
        for (_, boundary_pos, boundary_collider) in boundaries.iter() {
            if let Some(push) = collider.separation(position.pos, boundary_collider, boundary_pos.pos)
            {
                position.pos.x += push.x;
                position.pos.y += push.y;
            }
        }

        let touching: SmallVec<[Entity; 4]> = boundaries
            .iter()
            .filter(|(_, boundary_pos, boundary_collider)| {
                collider.touches(
                    position.pos,
                    boundary_collider,
                    boundary_pos.pos,
                    CONTACT_TOLERANCE,
                )
            })
            .map(|(entity, _, _)| entity)
            .collect();

        for boundary in touching.iter().copied() {
            if !contacts.contains(boundary) {
                commands.trigger(CollisionEvent { player, boundary });
            }
        }
        if !touching.is_empty() {
            trace!("Player {:?} touching {} boundaries", player, touching.len());
        }
        if touching != contacts.touching {
            contacts.touching = touching;
        }
    }
}

pub fn collision_observer(
    trigger: On<CollisionEvent>,
    rules: Query<&CollisionRule>,
    boundaries: Query<&Boundary>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok(boundary) = boundaries.get(event.boundary) else {
        return;
    };
    let ctx = CollisionContext {
        player: event.player,
        boundary: event.boundary,
        kind: &boundary.kind,
    };
    for rule in rules.iter() {
        if rule.matches(&boundary.kind) {
            (rule.callback)(&ctx, &mut commands);
        }
    }
}

/// Plain walls only stop the player.
pub fn on_solid_contact(ctx: &CollisionContext, _commands: &mut Commands) {
    debug!("Player {:?} hit boundary {:?}", ctx.player, ctx.boundary);
}

/// Named boundaries also start their dialogue.
pub fn on_dialogue_contact(ctx: &CollisionContext, commands: &mut Commands) {
    if let Some(key) = ctx.kind.dialogue_key() {
        debug!("Player {:?} reached '{}'", ctx.player, key);
        commands.trigger(DialogueTriggered {
            player: ctx.player,
            key: key.to_string(),
        });
    }
}

/// The rule set the scene registers.
pub fn default_collision_rules() -> [CollisionRule; 2] {
    [
        CollisionRule::new(CollisionCategory::Solid, on_solid_contact),
        CollisionRule::new(CollisionCategory::DialogueTrigger, on_dialogue_contact),
    ]
}
