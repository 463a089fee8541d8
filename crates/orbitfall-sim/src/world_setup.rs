//! Entity spawn factories for setting up the simulation world.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use orbitfall_core::components::*;
use orbitfall_core::constants::*;
use orbitfall_core::enums::HostilePhase;
use orbitfall_core::types::{Position, Velocity};

use crate::systems::orbit::combatant_position;

/// Spawn the combatant (the player's turret platform) at the origin.
pub fn spawn_combatant(world: &mut World) -> Entity {
    world.spawn((
        Combatant::default(),
        Health {
            current: COMBATANT_MAX_HEALTH,
            max: COMBATANT_MAX_HEALTH,
        },
        Position::new(0.0, 0.0, 0.0),
        Velocity::default(),
    ))
}

/// Spawn a hostile on a randomized orbit around the combatant.
/// Returns None when no combatant exists to orbit around.
pub fn spawn_hostile(world: &mut World, rng: &mut ChaCha8Rng) -> Option<Entity> {
    let center = combatant_position(world)?;

    let radius = rng.gen_range(SPAWN_MIN_RADIUS..SPAWN_MAX_RADIUS);
    let height = rng.gen_range(SPAWN_MIN_HEIGHT..SPAWN_MAX_HEIGHT);

    let orbit = OrbitState {
        angle_deg: 0.0,
        angular_speed_deg: ORBIT_MIN_SPEED_DEG,
        radius,
        height,
        // An expired hold makes the first orbit tick pick a speed target.
        easing: SpeedEasing::Holding {
            remaining_secs: 0.0,
        },
    };

    // Initial position on the orbit at angle zero.
    let position = Position::new(center.x + radius, center.y, center.z + height);

    Some(world.spawn((
        Hostile,
        HostileProfile {
            phase: HostilePhase::Orbiting,
            damage: HOSTILE_DAMAGE,
        },
        Health {
            current: HOSTILE_HEALTH,
            max: HOSTILE_HEALTH,
        },
        orbit,
        AttackCycle {
            remaining_secs: ATTACK_INTERVAL_SECS,
        },
        position,
        Velocity::default(),
        Orientation::default(),
    )))
}
