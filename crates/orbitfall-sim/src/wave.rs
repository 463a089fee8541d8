//! Wave controller — paced hostile spawning and level-completion bookkeeping.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use orbitfall_core::components::Hostile;
use orbitfall_core::constants::SPAWN_INTERVAL_SECS;

use crate::world_setup;

/// Spawns a bounded number of hostiles at timed intervals and tracks the
/// counters that decide level completion.
#[derive(Debug, Clone)]
pub struct WaveController {
    target_count: u32,
    spawned_count: u32,
    interval_secs: f64,
    next_spawn_in_secs: f64,
    spawning: bool,
    missing_combatant_logged: bool,
}

impl Default for WaveController {
    fn default() -> Self {
        Self::new(1, SPAWN_INTERVAL_SECS)
    }
}

impl WaveController {
    pub fn new(target_count: u32, interval_secs: f64) -> Self {
        Self {
            target_count,
            spawned_count: 0,
            interval_secs,
            next_spawn_in_secs: 0.0,
            spawning: target_count > 0,
            missing_combatant_logged: false,
        }
    }

    /// Begin a fresh spawn run; the first hostile spawns on the next tick.
    pub fn start(&mut self, target_count: u32, interval_secs: f64) {
        *self = Self::new(target_count, interval_secs);
    }

    /// Change how many hostiles the next run will spawn.
    pub fn set_target(&mut self, target_count: u32) {
        self.target_count = target_count;
    }

    /// Zero the spawn counter, destroy every live hostile, and restart the
    /// spawn run from scratch. The deadline-based spawner restarts with the
    /// counters, so a previous run can never interleave with the new one.
    pub fn reset(&mut self, world: &mut World, despawn_buffer: &mut Vec<Entity>) {
        despawn_buffer.clear();
        {
            let mut query = world.query::<&Hostile>();
            despawn_buffer.extend(query.iter().map(|(entity, _)| entity));
        }
        for entity in despawn_buffer.drain(..) {
            let _ = world.despawn(entity);
        }
        self.start(self.target_count, self.interval_secs);
    }

    /// Per-tick spawn step: one hostile per elapsed interval, until the
    /// target count is reached. `spawned_count` can never pass the target.
    pub fn run(&mut self, world: &mut World, rng: &mut ChaCha8Rng, dt: f64) {
        if !self.spawning || self.spawned_count >= self.target_count {
            return;
        }
        self.next_spawn_in_secs -= dt;
        if self.next_spawn_in_secs > 0.0 {
            return;
        }

        if world_setup::spawn_hostile(world, rng).is_none() {
            if !self.missing_combatant_logged {
                log::error!("wave controller found no combatant in the world; spawning disabled");
                self.missing_combatant_logged = true;
            }
            self.spawning = false;
            return;
        }

        self.spawned_count += 1;
        self.next_spawn_in_secs += self.interval_secs;
        if self.spawned_count == self.target_count {
            self.spawning = false;
        }
    }

    /// Hostiles still present in the world (orbiting or falling).
    pub fn live_count(&self, world: &World) -> u32 {
        let mut query = world.query::<&Hostile>();
        query.iter().count() as u32
    }

    /// Kills are always derived from the spawn counter and the live count,
    /// never stored, so the two can never drift apart.
    pub fn killed_count(&self, world: &World) -> u32 {
        self.spawned_count.saturating_sub(self.live_count(world))
    }

    /// Completion holds iff everything was spawned and nothing is left alive.
    pub fn is_complete(&self, world: &World) -> bool {
        self.spawned_count == self.target_count && self.live_count(world) == 0
    }

    pub fn target_count(&self) -> u32 {
        self.target_count
    }

    pub fn spawned_count(&self) -> u32 {
        self.spawned_count
    }
}
