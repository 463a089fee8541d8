//! Events emitted by the simulation for the presentation layer.
//!
//! The core never reads presentation state back; these are fire-and-forget
//! notifications carried on each snapshot.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Presentation events for UI, audio, and effect playback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PresentationEvent {
    /// Combatant health changed (drives the health bar).
    HealthChanged { health: f64, max: f64 },
    /// Combatant health first reached zero.
    CombatantDown,
    /// A hostile died; `effect_anchor` is where the fire effect spawns.
    HostileDowned { effect_anchor: Position },
    /// A hostile finished its fall and was removed from the world.
    HostileRemoved,
    /// Level over: show the outcome screen.
    OutcomeReady { level: u32, kills: u32, passed: bool },
}
