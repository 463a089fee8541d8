//! Projectile pool — recycles projectile entities instead of spawning and
//! despawning one per shot.
//!
//! A projectile is either active (in flight) or owned exclusively by the
//! pool; the `Projectile::active` flag is the single source of truth.

use glam::DVec3;
use hecs::{Entity, World};

use orbitfall_core::components::{Orientation, Projectile};
use orbitfall_core::constants::*;
use orbitfall_core::types::{Position, Velocity};

use crate::systems::facing;

/// Recycles projectile entities. Grows by exactly one when every existing
/// projectile is in flight; never shrinks.
#[derive(Debug, Default)]
pub struct ProjectilePool {
    /// Every projectile entity the pool ever created, in creation order.
    entities: Vec<Entity>,
}

impl ProjectilePool {
    /// Pre-allocate `count` inactive projectiles.
    pub fn warm(&mut self, world: &mut World, count: usize) {
        for _ in 0..count {
            self.allocate(world);
        }
    }

    fn allocate(&mut self, world: &mut World) -> Entity {
        let entity = world.spawn((
            Projectile {
                active: false,
                damage: PROJECTILE_DAMAGE,
                expires_at_tick: 0,
            },
            Position::default(),
            Velocity::default(),
            Orientation::default(),
        ));
        self.entities.push(entity);
        entity
    }

    /// Return the first inactive projectile in creation order, allocating a
    /// new entity when all existing ones are in flight. The returned entity
    /// is still inactive; `ProjectileSpawner::fire` activates it.
    pub fn acquire(&mut self, world: &mut World) -> Entity {
        for &entity in &self.entities {
            if let Ok(projectile) = world.get::<&Projectile>(entity) {
                if !projectile.active {
                    return entity;
                }
            }
        }
        self.allocate(world)
    }

    /// Mark a projectile inactive and hand ownership back to the pool.
    /// Idempotent: releasing an already-pooled projectile changes nothing,
    /// and a handle the pool never issued is logged and ignored.
    pub fn release(&self, world: &mut World, entity: Entity) {
        if !self.entities.contains(&entity) {
            log::warn!("release of a projectile the pool never issued; ignoring");
            return;
        }
        let Ok(mut projectile) = world.get::<&mut Projectile>(entity) else {
            return;
        };
        if !projectile.active {
            return;
        }
        projectile.active = false;
        drop(projectile);

        if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
            *vel = Velocity::default();
        }
    }

    /// Total projectiles ever allocated (active + pooled).
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }
}

/// Thin facade the firing subsystem goes through; owns the pool.
#[derive(Debug, Default)]
pub struct ProjectileSpawner {
    pool: ProjectilePool,
}

impl ProjectileSpawner {
    pub fn pool(&self) -> &ProjectilePool {
        &self.pool
    }

    /// Pre-allocate pooled projectiles at session start.
    pub fn warm(&mut self, world: &mut World, count: usize) {
        self.pool.warm(world, count);
    }

    /// Acquire a pooled projectile and launch it from `origin` along
    /// `direction`. A zero-length direction is logged and ignored.
    pub fn fire(
        &mut self,
        world: &mut World,
        current_tick: u64,
        origin: Position,
        direction: DVec3,
    ) -> Option<Entity> {
        let Some(dir) = direction.try_normalize() else {
            log::warn!("projectile fired with a zero-length direction; ignoring");
            return None;
        };
        let entity = self.pool.acquire(world);
        launch(world, entity, current_tick, origin, dir);
        Some(entity)
    }
}

/// Reset and launch a projectile: position to the muzzle, velocity along the
/// normalized direction, nose oriented to match, lifetime deadline restarted.
/// Overwriting the deadline is what cancels any timer left over from the
/// previous flight.
fn launch(world: &mut World, entity: Entity, current_tick: u64, origin: Position, dir: DVec3) {
    if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
        projectile.active = true;
        projectile.expires_at_tick = current_tick + PROJECTILE_LIFETIME_TICKS;
    }
    if let Ok(mut pos) = world.get::<&mut Position>(entity) {
        *pos = origin;
    }
    if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
        *vel = Velocity::from(dir * PROJECTILE_SPEED);
    }
    if let Ok(mut orient) = world.get::<&mut Orientation>(entity) {
        orient.rotation = facing(dir);
    }
}
