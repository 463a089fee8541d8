//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a fresh session at level 1.
    StartGame,
    /// Fire a pooled projectile from the turret muzzle along `direction`.
    FireProjectile { origin: Position, direction: DVec3 },
    /// Leave the outcome screen and begin the next level
    /// (advances on a pass, restarts at level 1 on a fail).
    StartNewLevel,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Tear the session down and return to the main menu.
    ReturnToMenu,
    /// Set time scale (1.0 = normal; a pacing hint for the host loop).
    SetTimeScale { scale: f64 },
}
