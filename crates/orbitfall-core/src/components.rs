//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::enums::HostilePhase;

/// Marks an entity as the player's turret platform and tracks its
/// one-shot death latch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Combatant {
    /// Set on the single transition into zero health; never cleared by damage.
    pub down: bool,
}

/// Marks an entity as a hostile attacker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Current and maximum health. Used by the combatant and by hostiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Hostile behavior profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileProfile {
    pub phase: HostilePhase,
    /// Damage dealt to the combatant per attack.
    pub damage: f64,
}

/// Sub-state of the periodic orbital speed change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum SpeedEasing {
    /// Linearly interpolating from `start_deg` toward `target_deg`.
    Ramping {
        start_deg: f64,
        target_deg: f64,
        elapsed_secs: f64,
    },
    /// Holding the current speed until the next transition is due.
    Holding { remaining_secs: f64 },
}

/// Orbital motion state for a hostile circling the combatant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitState {
    /// Current angle on the orbit (degrees, wraps at 360).
    pub angle_deg: f64,
    /// Current angular speed (degrees per second).
    pub angular_speed_deg: f64,
    /// Orbit radius around the combatant (meters).
    pub radius: f64,
    /// Flight height above the combatant (meters).
    pub height: f64,
    /// Periodic speed-change state machine.
    pub easing: SpeedEasing,
}

/// Countdown to the hostile's next attack on the combatant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackCycle {
    pub remaining_secs: f64,
}

/// Fall-simulation state, attached when a hostile dies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FallState {
    /// Forward direction captured at death, flattened to the horizontal plane.
    pub forward: DVec3,
    /// Seconds remaining until removal; counts down once landed.
    pub despawn_remaining_secs: f64,
}

/// Pooled projectile state.
///
/// A projectile is either active (in flight) or owned exclusively by the
/// pool; the `active` flag is the single source of truth for that split.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub active: bool,
    /// Damage applied to a hostile on hit.
    pub damage: f64,
    /// Tick at which the in-flight projectile auto-returns to the pool.
    /// Overwritten on every fire, which cancels any previous deadline.
    pub expires_at_tick: u64,
}

/// World-space orientation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Orientation {
    pub rotation: DQuat,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            rotation: DQuat::IDENTITY,
        }
    }
}

// Position and Velocity from types.rs are used as ECS components as well.
