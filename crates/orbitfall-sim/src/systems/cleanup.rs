//! Cleanup system: despawns hostiles that reached the `Removed` phase.
//!
//! Uses a pre-allocated buffer to avoid per-tick allocation. Returns the
//! number of hostiles removed so the engine can re-check level completion —
//! the explicit callback path out of the hostile lifecycle.

use hecs::{Entity, World};

use orbitfall_core::components::{Hostile, HostileProfile};
use orbitfall_core::enums::HostilePhase;
use orbitfall_core::events::PresentationEvent;

/// Despawn removed hostiles and report how many went away this tick.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<PresentationEvent>,
) -> usize {
    despawn_buffer.clear();

    for (entity, (_hostile, profile)) in world.query_mut::<(&Hostile, &HostileProfile)>() {
        if profile.phase == HostilePhase::Removed {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
        events.push(PresentationEvent::HostileRemoved);
    }
    removed
}
