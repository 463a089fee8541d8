//! Hostile damage handling — the one-shot death transition.

use hecs::{Entity, World};

use orbitfall_core::components::{Health, HostileProfile};
use orbitfall_core::enums::HostilePhase;

use crate::combatant::sanitize;

/// Apply damage to a hostile. Health clamps at zero; reaching exactly zero
/// triggers the single `Orbiting -> Dying` transition. Damage against a
/// hostile that is already dead (or despawned) is a no-op.
pub fn take_damage(world: &mut World, entity: Entity, amount: f64) {
    let amount = sanitize(amount);

    {
        let Ok(profile) = world.get::<&HostileProfile>(entity) else {
            return;
        };
        if profile.phase != HostilePhase::Orbiting {
            return;
        }
    }

    let mut dead = false;
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        health.current = (health.current - amount).max(0.0);
        dead = health.current == 0.0;
    }

    if dead {
        if let Ok(mut profile) = world.get::<&mut HostileProfile>(entity) {
            profile.phase = HostilePhase::Dying;
        }
    }
}
