//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use orbitfall_core::components::*;
use orbitfall_core::enums::GamePhase;
use orbitfall_core::events::PresentationEvent;
use orbitfall_core::state::*;
use orbitfall_core::types::{Position, SimTime, Velocity};

use crate::wave::WaveController;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    level: u32,
    wave: &WaveController,
    events: Vec<PresentationEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        level,
        combatant: build_combatant(world),
        hostiles: build_hostiles(world),
        projectiles: build_projectiles(world),
        wave: build_wave(world, wave),
        events,
    }
}

/// Build the combatant view for the health bar.
fn build_combatant(world: &World) -> CombatantView {
    world
        .query::<(&Combatant, &Health)>()
        .iter()
        .next()
        .map(|(_, (_, health))| CombatantView {
            health: health.current,
            max_health: health.max,
            health_fraction: if health.max > 0.0 {
                health.current / health.max
            } else {
                0.0
            },
        })
        .unwrap_or_default()
}

/// Build HostileView list from all hostile entities.
fn build_hostiles(world: &World) -> Vec<HostileView> {
    world
        .query::<(&Hostile, &HostileProfile, &Health, &Position, &Orientation)>()
        .iter()
        .map(|(_, (_, profile, health, pos, orient))| HostileView {
            position: *pos,
            rotation: orient.rotation,
            phase: profile.phase,
            health: health.current,
        })
        .collect()
}

/// Build ProjectileView list from in-flight projectiles only.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .filter(|(_, (projectile, _, _))| projectile.active)
        .map(|(_, (_, pos, vel))| ProjectileView {
            position: *pos,
            velocity: *vel,
        })
        .collect()
}

/// Build the wave progress view; kill count is derived, never stored.
fn build_wave(world: &World, wave: &WaveController) -> WaveView {
    WaveView {
        target_count: wave.target_count(),
        spawned_count: wave.spawned_count(),
        live_count: wave.live_count(world),
        killed_count: wave.killed_count(world),
    }
}
