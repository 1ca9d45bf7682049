//! Astro Dodge - a falling-obstacle dodge-and-shoot arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, tick, spawning)
//! - `config`: Play-area bounds and gameplay tuning
//! - `session`: Owns one simulation run and wires the frame/spawn drivers
//!
//! The simulation is headless: it exposes plain entity records for whatever
//! presentation layer the host provides and queues named events for the
//! audio collaborator. Everything is driven by explicit calls, so a test can
//! run a full session without a clock.

pub mod config;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use session::{Command, Session};
pub use sim::{GameEvent, Phase, Simulation};

/// Game configuration constants
pub mod consts {
    /// Wall-clock period between obstacle spawns (milliseconds)
    pub const SPAWN_PERIOD_MS: f64 = 2000.0;

    /// Obstacles spawn just above the visible play area
    pub const OBSTACLE_SPAWN_Y: f32 = -30.0;
    /// Obstacle edge length range, uniform [min, max)
    pub const OBSTACLE_MIN_SIZE: f32 = 30.0;
    pub const OBSTACLE_MAX_SIZE: f32 = 60.0;
    /// Obstacle fall speed range (pixels per tick), uniform [min, max)
    pub const OBSTACLE_MIN_FALL_SPEED: f32 = 1.0;
    pub const OBSTACLE_MAX_FALL_SPEED: f32 = 3.5;

    /// Projectile rise per tick (pixels)
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_WIDTH: f32 = 5.0;
    pub const PROJECTILE_HEIGHT: f32 = 10.0;
    /// Projectiles appear this far above the ship's nose
    pub const PROJECTILE_MUZZLE_OFFSET: f32 = 10.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Pixels moved per movement command
    pub const PLAYER_SPEED: f32 = 50.0;
    /// Ship starts this far below the vertical center
    pub const PLAYER_SPAWN_Y_OFFSET: f32 = 280.0;
}
