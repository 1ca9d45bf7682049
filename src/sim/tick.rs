//! Per-frame simulation update
//!
//! One tick advances every projectile, then every obstacle, then resolves
//! collisions. The order matters: both entity kinds must be at their
//! post-move positions before the overlap tests run, so collisions are
//! evaluated against same-frame state rather than stale positions.

use super::collision::aabb_overlap;
use super::state::{GameEvent, Phase, Simulation};
use crate::consts::PROJECTILE_SPEED;

/// Advance the simulation by one frame. No-op while paused.
pub fn tick(state: &mut Simulation) {
    if state.is_paused() {
        return;
    }

    state.time_ticks += 1;

    // 1. Projectiles rise; cull those that reached the top.
    for projectile in &mut state.projectiles {
        projectile.pos.y -= PROJECTILE_SPEED;
    }
    state.projectiles.retain(|p| p.pos.y > 0.0);

    // 2. Obstacles fall; cull those past the bottom edge (no event).
    let floor = state.bounds().y;
    for obstacle in &mut state.obstacles {
        obstacle.pos.y += obstacle.fall_speed;
    }
    state.obstacles.retain(|o| o.pos.y <= floor);

    // 3. Collisions against the updated positions.
    resolve_collisions(state);
}

/// Two-phase collision sweep: scan everything first, apply removals after.
///
/// Player-vs-obstacle runs before obstacle-vs-projectile so a ship hit
/// preempts projectile removal. Exactly one terminal collision is processed
/// per tick: obstacles are scanned in insertion order and the first overlap
/// wins.
fn resolve_collisions(state: &mut Simulation) {
    let player_box = state.player.aabb();

    // Terminal collision: first obstacle overlapping the ship, insertion
    // order. Everything after it is moot once the run is over.
    if let Some(idx) = state
        .obstacles
        .iter()
        .position(|o| aabb_overlap(&o.aabb(), &player_box))
    {
        let obstacle = state.obstacles.remove(idx);
        log::info!(
            "ship hit by obstacle #{} at tick {}",
            obstacle.id,
            state.time_ticks
        );
        state.phase = Phase::Paused;
        state.push_event(GameEvent::Hit);
        return;
    }

    // Pairwise obstacle/projectile resolution. First unconsumed projectile
    // (insertion order) to overlap an obstacle consumes both; consumed
    // entities take no further matches this tick.
    let mut dead_obstacles = vec![false; state.obstacles.len()];
    let mut dead_projectiles = vec![false; state.projectiles.len()];

    for (oi, obstacle) in state.obstacles.iter().enumerate() {
        let obstacle_box = obstacle.aabb();
        for (pi, projectile) in state.projectiles.iter().enumerate() {
            if dead_projectiles[pi] {
                continue;
            }
            if aabb_overlap(&obstacle_box, &projectile.aabb()) {
                dead_obstacles[oi] = true;
                dead_projectiles[pi] = true;
                break;
            }
        }
    }

    let mut keep = dead_obstacles.iter().map(|dead| !dead);
    state.obstacles.retain(|_| keep.next().unwrap());
    let mut keep = dead_projectiles.iter().map(|dead| !dead);
    state.projectiles.retain(|_| keep.next().unwrap());
}
