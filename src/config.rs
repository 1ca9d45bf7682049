//! Game configuration
//!
//! The play-area bounds are required at construction; everything else has a
//! tuned default. A config that cannot host a playable session is rejected
//! up front rather than limping along.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration problems that make a session impossible
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("play area dimensions must be positive, got {width}x{height}")]
    NonPositivePlayArea { width: f32, height: f32 },
    #[error("play area {width}x{height} cannot contain a {player_width}x{player_height} player")]
    PlayAreaTooSmall {
        width: f32,
        height: f32,
        player_width: f32,
        player_height: f32,
    },
    #[error("spawn period must be positive, got {0} ms")]
    NonPositiveSpawnPeriod(f64),
    #[error("player speed must be positive, got {0}")]
    NonPositivePlayerSpeed(f32),
}

/// Settings for one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Play-area width in pixels
    pub width: f32,
    /// Play-area height in pixels
    pub height: f32,
    /// Wall-clock period between obstacle spawns (milliseconds)
    pub spawn_period_ms: f64,
    /// Player ship bounding-box size
    pub player_size: Vec2,
    /// Pixels the ship moves per movement command
    pub player_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            spawn_period_ms: SPAWN_PERIOD_MS,
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            player_speed: PLAYER_SPEED,
        }
    }
}

impl GameConfig {
    /// Config with the given play-area bounds and default tuning
    pub fn with_bounds(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject configs the simulation cannot meaningfully run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::NonPositivePlayArea {
                width: self.width,
                height: self.height,
            });
        }
        if self.player_size.x > self.width || self.player_size.y > self.height {
            return Err(ConfigError::PlayAreaTooSmall {
                width: self.width,
                height: self.height,
                player_width: self.player_size.x,
                player_height: self.player_size.y,
            });
        }
        if self.spawn_period_ms <= 0.0 {
            return Err(ConfigError::NonPositiveSpawnPeriod(self.spawn_period_ms));
        }
        if self.player_speed <= 0.0 {
            return Err(ConfigError::NonPositivePlayerSpeed(self.player_speed));
        }
        Ok(())
    }

    /// Play-area bounds as a vector
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
