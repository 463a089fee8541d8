//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state — all state lives in components.

pub mod attack;
pub mod cleanup;
pub mod fall;
pub mod movement;
pub mod orbit;
pub mod projectile;
pub mod snapshot;

use glam::{DQuat, DVec3};

/// Orientation that points the nose (+X axis) along `direction`, z-up.
/// `direction` must be non-zero.
pub(crate) fn facing(direction: DVec3) -> DQuat {
    let dir = direction.normalize();
    let yaw = dir.y.atan2(dir.x);
    let elevation = dir.z.clamp(-1.0, 1.0).asin();
    DQuat::from_rotation_z(yaw) * DQuat::from_rotation_y(-elevation)
}
