//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer tick cadence only, no wall-clock reads
//! - Seeded RNG only
//! - Stable insertion order for entity collections
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, aabb_overlap};
pub use entity::{Obstacle, Player, Projectile};
pub use spawn::SpawnScheduler;
pub use state::{AxisIntent, GameEvent, Phase, Simulation};
pub use tick::tick;
