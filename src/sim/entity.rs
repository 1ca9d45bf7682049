//! Entity value types
//!
//! Entities are plain data records; the presentation layer reads them and
//! produces visuals. Nothing here knows about rendering, input devices, or
//! audio.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// The player ship. A session has exactly one; it is never removed, a
/// terminal collision ends the session instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner, screen coordinates (y grows downward)
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels moved per movement command
    pub speed: f32,
}

impl Player {
    /// Bounding box for collision checks
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// A falling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Always square
    pub size: Vec2,
    /// Pixels fallen per tick
    pub fall_speed: f32,
}

impl Obstacle {
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// A projectile fired by the player, rising at a fixed rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Projectile {
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}
