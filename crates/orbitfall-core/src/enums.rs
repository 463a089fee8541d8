//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Level over (passed or failed), outcome screen requested.
    Outcome,
}

/// Hostile lifecycle phase.
///
/// `Orbiting` is the initial state, `Removed` is terminal. The transition
/// into `Dying` happens exactly once, when health first reaches zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostilePhase {
    /// Circling the combatant and attacking on an interval.
    #[default]
    Orbiting,
    /// Health hit zero this tick; fall setup pending.
    Dying,
    /// Drifting down toward the ground, nose pitching over.
    Falling,
    /// On the ground, waiting out the removal delay.
    Landed,
    /// Ready for despawn at the next cleanup pass.
    Removed,
}
