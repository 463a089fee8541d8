//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use orbitfall_core::commands::PlayerCommand;
use orbitfall_core::constants::{COMBATANT_MAX_HEALTH, DT, POOL_WARM_COUNT, SPAWN_INTERVAL_SECS};
use orbitfall_core::enums::GamePhase;
use orbitfall_core::events::PresentationEvent;
use orbitfall_core::state::GameStateSnapshot;
use orbitfall_core::types::SimTime;

use crate::combatant;
use crate::ground::{FlatGround, Ground};
use crate::level::LevelManager;
use crate::pool::ProjectileSpawner;
use crate::systems;
use crate::wave::WaveController;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<PresentationEvent>,
    spawner: ProjectileSpawner,
    wave: WaveController,
    level: LevelManager,
    ground: Box<dyn Ground>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            spawner: ProjectileSpawner::default(),
            wave: WaveController::default(),
            level: LevelManager::default(),
            ground: Box::new(FlatGround::default()),
        }
    }

    /// Replace the default flat-plane ground query with the host's own.
    pub fn set_ground(&mut self, ground: Box<dyn Ground>) {
        self.ground = ground;
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.level.current_level(),
            &self.wave,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a read-only reference to the wave controller.
    #[cfg(test)]
    pub fn wave(&self) -> &WaveController {
        &self.wave
    }

    /// Get a read-only reference to the level manager.
    #[cfg(test)]
    pub fn level(&self) -> &LevelManager {
        &self.level
    }

    /// Get a read-only reference to the projectile spawner.
    #[cfg(test)]
    pub fn spawner(&self) -> &ProjectileSpawner {
        &self.spawner
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    self.start_session();
                }
            }
            PlayerCommand::FireProjectile { origin, direction } => {
                if self.phase == GamePhase::Active {
                    self.spawner
                        .fire(&mut self.world, self.time.tick, origin, direction);
                }
            }
            PlayerCommand::StartNewLevel => {
                if self.phase == GamePhase::Outcome {
                    self.start_new_level();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase == GamePhase::Outcome {
                    self.teardown_session();
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
        }
    }

    /// Set up a fresh session: combatant, warm projectile pool, level 1 wave.
    fn start_session(&mut self) {
        self.world.clear();
        self.spawner = ProjectileSpawner::default();
        self.level = LevelManager::default();
        self.time = SimTime::default();

        world_setup::spawn_combatant(&mut self.world);
        self.spawner.warm(&mut self.world, POOL_WARM_COUNT);
        self.wave
            .start(self.level.current_level(), SPAWN_INTERVAL_SECS);
        self.phase = GamePhase::Active;
    }

    /// Leave the outcome screen: advance or restart the level, restore the
    /// combatant to full health, and respawn the wave from scratch.
    fn start_new_level(&mut self) {
        self.level.advance();
        combatant::set_health(&mut self.world, COMBATANT_MAX_HEALTH, &mut self.events);
        self.wave.set_target(self.level.current_level());
        self.wave.reset(&mut self.world, &mut self.despawn_buffer);
        self.phase = GamePhase::Active;
    }

    /// Tear the session down and return to the main menu.
    fn teardown_session(&mut self) {
        self.world.clear();
        self.spawner = ProjectileSpawner::default();
        self.wave = WaveController::default();
        self.level = LevelManager::default();
        self.time = SimTime::default();
        self.events.clear();
        self.phase = GamePhase::MainMenu;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Wave spawning
        self.wave.run(&mut self.world, &mut self.rng, DT);
        // 2. Orbital motion + periodic speed easing
        systems::orbit::run(&mut self.world, &mut self.rng);
        // 3. Periodic attacks on the combatant
        systems::attack::run(&mut self.world, &mut self.events);
        // 4. Kinematic integration (projectiles, falling hostiles)
        systems::movement::run(&mut self.world);
        // 5. Projectile collision
        systems::projectile::collide(&mut self.world, self.spawner.pool());
        // 6. Projectile lifetime expiry
        systems::projectile::expire(&mut self.world, self.spawner.pool(), self.time.tick);
        // 7. Death resolution + fall simulation
        systems::fall::run(&mut self.world, self.ground.as_ref(), &mut self.events);
        // 8. Despawn removed hostiles
        let removed = systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);

        // Combatant death fails the level; the last hostile removal passes it.
        if combatant::is_down(&self.world) {
            self.finish_level(false);
        } else if removed > 0 && self.wave.is_complete(&self.world) {
            self.finish_level(true);
        }
    }

    /// One-shot outcome transition: record pass/fail, derive the display
    /// kill count (a fail was triggered by the combatant's own death, so one
    /// kill is subtracted), and request the outcome screen.
    fn finish_level(&mut self, passed: bool) {
        if self.phase != GamePhase::Active {
            return;
        }
        self.level.set_passed(passed);

        let kills = self.wave.killed_count(&self.world);
        let display_kills = if passed { kills } else { kills.saturating_sub(1) };

        self.events.push(PresentationEvent::OutcomeReady {
            level: self.level.current_level(),
            kills: display_kills,
            passed,
        });
        self.phase = GamePhase::Outcome;
    }
}
