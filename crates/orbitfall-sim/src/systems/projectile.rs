//! Projectile collision and lifetime-expiry systems.

use hecs::{Entity, World};

use orbitfall_core::components::{Hostile, HostileProfile, Projectile};
use orbitfall_core::constants::{GROUND_HEIGHT, PROJECTILE_HIT_RADIUS};
use orbitfall_core::enums::HostilePhase;
use orbitfall_core::types::Position;

use crate::hostile;
use crate::pool::ProjectilePool;

/// Proximity collision. A hit applies the projectile's damage to the first
/// alive hostile within the hit radius; any contact — hostile or ground —
/// consumes the projectile. Dead hostiles no longer collide.
pub fn collide(world: &mut World, pool: &ProjectilePool) {
    let mut hits: Vec<(Entity, Entity, f64)> = Vec::new();
    let mut consumed: Vec<Entity> = Vec::new();

    {
        let mut projectiles = world.query::<(&Projectile, &Position)>();
        for (proj_entity, (projectile, proj_pos)) in projectiles.iter() {
            if !projectile.active {
                continue;
            }

            if proj_pos.z <= GROUND_HEIGHT {
                consumed.push(proj_entity);
                continue;
            }

            let mut hostiles = world.query::<(&Hostile, &HostileProfile, &Position)>();
            let hit = hostiles
                .iter()
                .find(|(_, (_, profile, host_pos))| {
                    profile.phase == HostilePhase::Orbiting
                        && proj_pos.range_to(host_pos) <= PROJECTILE_HIT_RADIUS
                })
                .map(|(host_entity, _)| host_entity);

            if let Some(host_entity) = hit {
                hits.push((proj_entity, host_entity, projectile.damage));
            }
        }
    }

    for (proj_entity, host_entity, damage) in hits {
        hostile::take_damage(world, host_entity, damage);
        pool.release(world, proj_entity);
    }
    for proj_entity in consumed {
        pool.release(world, proj_entity);
    }
}

/// Auto-return: any active projectile whose deadline has passed goes back to
/// the pool. A collision earlier in the tick already cleared `active`, so a
/// stale deadline can never double-return a projectile.
pub fn expire(world: &mut World, pool: &ProjectilePool, current_tick: u64) {
    let mut due: Vec<Entity> = Vec::new();
    {
        let mut query = world.query::<&Projectile>();
        for (entity, projectile) in query.iter() {
            if projectile.active && current_tick >= projectile.expires_at_tick {
                due.push(entity);
            }
        }
    }
    for entity in due {
        pool.release(world, entity);
    }
}
