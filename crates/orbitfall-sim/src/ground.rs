//! Ground query seam — the physics host's downward raycast.

use orbitfall_core::constants::GROUND_HEIGHT;
use orbitfall_core::types::Position;

/// Downward ray query against whatever the host considers ground.
pub trait Ground {
    /// True when a ray of `length` meters cast straight down from `origin`
    /// hits ground.
    fn probe_down(&self, origin: &Position, length: f64) -> bool;
}

/// Infinite flat ground plane at a fixed altitude.
#[derive(Debug, Clone, Copy)]
pub struct FlatGround {
    pub height: f64,
}

impl Default for FlatGround {
    fn default() -> Self {
        Self {
            height: GROUND_HEIGHT,
        }
    }
}

impl Ground for FlatGround {
    fn probe_down(&self, origin: &Position, length: f64) -> bool {
        let altitude = origin.z - self.height;
        (0.0..=length).contains(&altitude)
    }
}
