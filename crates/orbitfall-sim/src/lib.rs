//! Simulation engine for ORBITFALL.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend. Completely headless
//! (no renderer dependency), enabling deterministic testing.

pub mod combatant;
pub mod engine;
pub mod ground;
pub mod hostile;
pub mod level;
pub mod pool;
pub mod systems;
pub mod wave;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use orbitfall_core as core;
