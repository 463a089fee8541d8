//! Combatant health state — damage application and administrative resets.

use hecs::World;

use orbitfall_core::components::{Combatant, Health};
use orbitfall_core::events::PresentationEvent;

/// Sanitize a damage or health value: negative or non-finite amounts count
/// as zero, so health can never go negative or NaN.
pub(crate) fn sanitize(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Apply damage to the combatant, clamping health into `[0, max]`.
/// Raises health-changed on every call and the death notification exactly
/// once, on the transition into zero health.
pub fn apply_damage(world: &mut World, amount: f64, events: &mut Vec<PresentationEvent>) {
    let amount = sanitize(amount);
    for (_entity, (combatant, health)) in world.query_mut::<(&mut Combatant, &mut Health)>() {
        health.current = (health.current - amount).clamp(0.0, health.max);
        events.push(PresentationEvent::HealthChanged {
            health: health.current,
            max: health.max,
        });
        if health.current == 0.0 && !combatant.down {
            combatant.down = true;
            events.push(PresentationEvent::CombatantDown);
        }
    }
}

/// Administrative health reset (level start). Clamps and raises
/// health-changed, but never raises the death notification, even when set
/// to zero. A reset above zero re-arms the death latch.
pub fn set_health(world: &mut World, value: f64, events: &mut Vec<PresentationEvent>) {
    let value = if value.is_finite() { value } else { 0.0 };
    for (_entity, (combatant, health)) in world.query_mut::<(&mut Combatant, &mut Health)>() {
        health.current = value.clamp(0.0, health.max);
        if health.current > 0.0 {
            combatant.down = false;
        }
        events.push(PresentationEvent::HealthChanged {
            health: health.current,
            max: health.max,
        });
    }
}

/// Whether the combatant has hit zero health.
pub fn is_down(world: &World) -> bool {
    world
        .query::<&Combatant>()
        .iter()
        .next()
        .map(|(_, combatant)| combatant.down)
        .unwrap_or(false)
}
