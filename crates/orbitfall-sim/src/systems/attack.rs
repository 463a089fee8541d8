//! Attack system — orbiting hostiles damage the combatant on a fixed interval.

use hecs::World;

use orbitfall_core::components::{AttackCycle, HostileProfile};
use orbitfall_core::constants::{ATTACK_INTERVAL_SECS, DT};
use orbitfall_core::enums::HostilePhase;
use orbitfall_core::events::PresentationEvent;

use crate::combatant;

/// Advance every orbiting hostile's attack countdown and apply the hits that
/// came due this tick. Dead hostiles never attack: the countdown only runs
/// in the `Orbiting` phase, so death cancels the cycle the same tick.
pub fn run(world: &mut World, events: &mut Vec<PresentationEvent>) {
    let mut hits: Vec<f64> = Vec::new();

    for (_entity, (profile, cycle)) in world.query_mut::<(&HostileProfile, &mut AttackCycle)>() {
        if profile.phase != HostilePhase::Orbiting {
            continue;
        }
        cycle.remaining_secs -= DT;
        if cycle.remaining_secs <= 0.0 {
            cycle.remaining_secs += ATTACK_INTERVAL_SECS;
            hits.push(profile.damage);
        }
    }

    for damage in hits {
        combatant::apply_damage(world, damage, events);
    }
}
