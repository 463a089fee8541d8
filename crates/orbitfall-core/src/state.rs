//! Game state snapshot — the complete visible state sent to the frontend each tick.

use glam::DQuat;
use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, HostilePhase};
use crate::events::PresentationEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub level: u32,
    pub combatant: CombatantView,
    pub hostiles: Vec<HostileView>,
    /// In-flight projectiles only; pooled ones are invisible to the frontend.
    pub projectiles: Vec<ProjectileView>,
    pub wave: WaveView,
    pub events: Vec<PresentationEvent>,
}

/// Combatant status for the health bar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatantView {
    pub health: f64,
    pub max_health: f64,
    /// Health as a fraction of max, in [0, 1].
    pub health_fraction: f64,
}

/// A hostile as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    pub position: Position,
    pub rotation: DQuat,
    pub phase: HostilePhase,
    pub health: f64,
}

/// An in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub velocity: Velocity,
}

/// Wave progress for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub target_count: u32,
    pub spawned_count: u32,
    /// Hostiles still present in the world (orbiting or falling).
    pub live_count: u32,
    /// Always derived as `spawned_count - live_count`, never stored.
    pub killed_count: u32,
}
