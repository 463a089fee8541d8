//! Death resolution and fall simulation: Dying -> Falling -> Landed -> Removed.

use glam::{DQuat, DVec3};
use hecs::{Entity, World};

use orbitfall_core::components::{FallState, HostileProfile, Orientation};
use orbitfall_core::constants::*;
use orbitfall_core::enums::HostilePhase;
use orbitfall_core::events::PresentationEvent;
use orbitfall_core::types::{Position, Velocity};

use crate::ground::Ground;

/// Resolve deaths and advance every falling hostile by one tick.
pub fn run(world: &mut World, ground: &dyn Ground, events: &mut Vec<PresentationEvent>) {
    begin_falls(world, events);
    advance_falls(world, ground);
}

/// Hostiles that died this tick get their fall state attached: capture the
/// forward direction flattened to the horizontal plane, anchor the fire
/// effect just above the hull, and enter `Falling`. Attack and speed easing
/// both gate on `Orbiting`, so all periodic behavior stops this same tick.
fn begin_falls(world: &mut World, events: &mut Vec<PresentationEvent>) {
    let mut dying: Vec<(Entity, DVec3, Position)> = Vec::new();
    {
        let mut query = world.query::<(&HostileProfile, &Position, &Orientation)>();
        for (entity, (profile, pos, orient)) in query.iter() {
            if profile.phase != HostilePhase::Dying {
                continue;
            }
            let nose = orient.rotation * DVec3::X;
            let forward = DVec3::new(nose.x, nose.y, 0.0)
                .try_normalize()
                .unwrap_or(DVec3::X);
            dying.push((entity, forward, *pos));
        }
    }

    for (entity, forward, pos) in dying {
        events.push(PresentationEvent::HostileDowned {
            effect_anchor: Position::new(pos.x, pos.y, pos.z + EFFECT_SPAWN_OFFSET),
        });
        let _ = world.insert_one(
            entity,
            FallState {
                forward,
                despawn_remaining_secs: DESTROY_DELAY_SECS,
            },
        );
        if let Ok(mut profile) = world.get::<&mut HostileProfile>(entity) {
            profile.phase = HostilePhase::Falling;
        }
    }
}

/// Falling: constant forward + downward drift with a nose-over rotation,
/// until the ground probe or the altitude floor stops it. Landed: hold the
/// removal delay, then mark `Removed` for the cleanup pass.
fn advance_falls(world: &mut World, ground: &dyn Ground) {
    for (_entity, (profile, fall, pos, vel, orient)) in world.query_mut::<(
        &mut HostileProfile,
        &mut FallState,
        &Position,
        &mut Velocity,
        &mut Orientation,
    )>() {
        match profile.phase {
            HostilePhase::Falling => {
                // Early landing: short downward ray, then the altitude floor.
                if ground.probe_down(pos, GROUND_PROBE_LENGTH) || pos.z <= LANDING_ALTITUDE {
                    *vel = Velocity::default();
                    profile.phase = HostilePhase::Landed;
                    continue;
                }

                let drift =
                    fall.forward * FALL_FORWARD_SPEED + DVec3::NEG_Z * FALL_DOWN_SPEED;
                *vel = Velocity::from(drift);

                let pitch = FALL_PITCH_RATE_DEG.to_radians() * DT;
                orient.rotation = orient.rotation * DQuat::from_rotation_y(pitch);
            }
            HostilePhase::Landed => {
                fall.despawn_remaining_secs -= DT;
                if fall.despawn_remaining_secs <= 0.0 {
                    profile.phase = HostilePhase::Removed;
                }
            }
            _ => {}
        }
    }
}
