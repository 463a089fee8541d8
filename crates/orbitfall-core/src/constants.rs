//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Ground ---

/// Altitude of the flat ground plane (meters).
pub const GROUND_HEIGHT: f64 = 0.0;

/// Length of the downward ground probe ray during a fall (meters).
pub const GROUND_PROBE_LENGTH: f64 = 0.1;

// --- Combatant ---

/// Maximum combatant (player turret) health.
pub const COMBATANT_MAX_HEALTH: f64 = 100.0;

// --- Projectiles ---

/// Projectile flight speed (m/s).
pub const PROJECTILE_SPEED: f64 = 100.0;

/// Seconds a projectile flies before it auto-returns to the pool.
pub const PROJECTILE_LIFETIME_SECS: f64 = 3.0;

/// Projectile lifetime expressed in ticks.
pub const PROJECTILE_LIFETIME_TICKS: u64 = (PROJECTILE_LIFETIME_SECS * TICK_RATE as f64) as u64;

/// Damage dealt by one projectile hit.
pub const PROJECTILE_DAMAGE: f64 = 5.0;

/// Proximity radius at which a projectile registers a hit on a hostile (meters).
pub const PROJECTILE_HIT_RADIUS: f64 = 2.0;

/// Number of projectiles pre-allocated when the pool is created.
pub const POOL_WARM_COUNT: usize = 1;

// --- Hostiles ---

/// Initial hostile health.
pub const HOSTILE_HEALTH: f64 = 100.0;

/// Damage a hostile deals to the combatant per attack.
pub const HOSTILE_DAMAGE: f64 = 10.0;

/// Seconds between hostile attacks.
pub const ATTACK_INTERVAL_SECS: f64 = 5.0;

// --- Orbital motion ---

/// Minimum orbital angular speed (degrees per second).
pub const ORBIT_MIN_SPEED_DEG: f64 = 10.0;

/// Maximum orbital angular speed (degrees per second).
pub const ORBIT_MAX_SPEED_DEG: f64 = 60.0;

/// Seconds over which a speed change eases in, and the hold time between changes.
pub const SPEED_TRANSITION_SECS: f64 = 3.0;

/// Orientation slerp rate toward the direction of travel (per second).
pub const ROTATION_LERP_RATE: f64 = 10.0;

// --- Fall simulation ---

/// Downward drift speed while falling (m/s).
pub const FALL_DOWN_SPEED: f64 = 4.0;

/// Forward drift speed while falling (m/s).
pub const FALL_FORWARD_SPEED: f64 = 15.0;

/// Nose-down pitch rate while falling (degrees per second).
pub const FALL_PITCH_RATE_DEG: f64 = 45.0;

/// Altitude at which a falling hostile is considered landed (meters).
pub const LANDING_ALTITUDE: f64 = 0.1;

/// Seconds a landed hostile persists before it is removed.
pub const DESTROY_DELAY_SECS: f64 = 3.0;

/// Vertical offset above a downed hostile where the fire effect anchors (meters).
pub const EFFECT_SPAWN_OFFSET: f64 = 0.3;

// --- Wave spawning ---

/// Seconds between hostile spawns within a wave.
pub const SPAWN_INTERVAL_SECS: f64 = 5.0;

/// Minimum orbit radius assigned to a spawned hostile (meters).
pub const SPAWN_MIN_RADIUS: f64 = 25.0;

/// Maximum orbit radius assigned to a spawned hostile (meters).
pub const SPAWN_MAX_RADIUS: f64 = 55.0;

/// Minimum flight height assigned to a spawned hostile (meters).
pub const SPAWN_MIN_HEIGHT: f64 = 5.0;

/// Maximum flight height assigned to a spawned hostile (meters).
pub const SPAWN_MAX_HEIGHT: f64 = 15.0;
