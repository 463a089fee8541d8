//! Orbital motion system — position on the orbit, facing along the
//! direction of travel, and the periodic speed-change easing.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use orbitfall_core::components::{
    Combatant, Hostile, HostileProfile, OrbitState, Orientation, SpeedEasing,
};
use orbitfall_core::constants::*;
use orbitfall_core::enums::HostilePhase;
use orbitfall_core::types::Position;

use super::facing;

/// Advance every orbiting hostile by one tick.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng) {
    let Some(center) = combatant_position(world) else {
        return;
    };

    for (_entity, (_hostile, profile, orbit, pos, orient)) in world.query_mut::<(
        &Hostile,
        &HostileProfile,
        &mut OrbitState,
        &mut Position,
        &mut Orientation,
    )>() {
        if profile.phase != HostilePhase::Orbiting {
            continue;
        }

        ease_speed(orbit, rng);

        orbit.angle_deg += orbit.angular_speed_deg * DT;
        if orbit.angle_deg >= 360.0 {
            orbit.angle_deg -= 360.0;
        }

        let angle = orbit.angle_deg.to_radians();
        pos.x = center.x + angle.cos() * orbit.radius;
        pos.y = center.y + angle.sin() * orbit.radius;
        pos.z = center.z + orbit.height;

        // Track the tangential direction of travel, not the velocity of the
        // position update.
        let tangent = (orbit.angle_deg + 90.0).to_radians();
        let desired = facing(DVec3::new(tangent.cos(), tangent.sin(), 0.0));
        let t = (ROTATION_LERP_RATE * DT).min(1.0);
        orient.rotation = orient.rotation.slerp(desired, t);
    }
}

/// Periodic speed change: when the hold expires, pick a new random target in
/// `[min, max]` and ease toward it linearly over the transition duration,
/// then hold for the same duration.
fn ease_speed(orbit: &mut OrbitState, rng: &mut ChaCha8Rng) {
    match orbit.easing {
        SpeedEasing::Holding { remaining_secs } => {
            let remaining = remaining_secs - DT;
            if remaining <= 0.0 {
                orbit.easing = SpeedEasing::Ramping {
                    start_deg: orbit.angular_speed_deg,
                    target_deg: rng.gen_range(ORBIT_MIN_SPEED_DEG..ORBIT_MAX_SPEED_DEG),
                    elapsed_secs: 0.0,
                };
            } else {
                orbit.easing = SpeedEasing::Holding {
                    remaining_secs: remaining,
                };
            }
        }
        SpeedEasing::Ramping {
            start_deg,
            target_deg,
            elapsed_secs,
        } => {
            let elapsed = elapsed_secs + DT;
            if elapsed >= SPEED_TRANSITION_SECS {
                orbit.angular_speed_deg = target_deg;
                orbit.easing = SpeedEasing::Holding {
                    remaining_secs: SPEED_TRANSITION_SECS,
                };
            } else {
                let t = elapsed / SPEED_TRANSITION_SECS;
                orbit.angular_speed_deg = start_deg + (target_deg - start_deg) * t;
                orbit.easing = SpeedEasing::Ramping {
                    start_deg,
                    target_deg,
                    elapsed_secs: elapsed,
                };
            }
        }
    }
}

/// Combatant position, or None when no combatant exists in the world.
pub(crate) fn combatant_position(world: &World) -> Option<Position> {
    world
        .query::<(&Combatant, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}
