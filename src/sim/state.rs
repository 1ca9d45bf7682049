//! Simulation state and input-driven commands
//!
//! One `Simulation` is one run: a player ship, the live obstacle and
//! projectile collections, a seeded RNG for spawn randomization, and a queue
//! of events for the audio collaborator.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Obstacle, Player, Projectile};
use crate::config::{ConfigError, GameConfig};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active gameplay
    Running,
    /// Terminal state after the ship is hit. There is no resume transition;
    /// a fresh `Simulation` is the only recovery.
    Paused,
}

/// Discrete events for the audio collaborator, drained by the host each
/// frame. The core never depends on what the host does with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A projectile was fired
    Shoot,
    /// The ship was hit by an obstacle (terminal)
    Hit,
}

/// Per-axis movement intent, -1 / 0 / 1 on each axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisIntent {
    pub horizontal: i8,
    pub vertical: i8,
}

impl AxisIntent {
    pub const UP: Self = Self {
        horizontal: 0,
        vertical: -1,
    };
    pub const DOWN: Self = Self {
        horizontal: 0,
        vertical: 1,
    };
    pub const LEFT: Self = Self {
        horizontal: -1,
        vertical: 0,
    };
    pub const RIGHT: Self = Self {
        horizontal: 1,
        vertical: 0,
    };
}

/// Complete state of one game run
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Play-area bounds (width, height)
    bounds: Vec2,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: Phase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The player ship
    pub player: Player,
    /// Live obstacles, insertion order
    pub obstacles: Vec<Obstacle>,
    /// Live projectiles, insertion order
    pub projectiles: Vec<Projectile>,
    /// Spawn randomization
    rng: Pcg32,
    /// Pending events, drained by the host
    events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl Simulation {
    /// Create a new run from a validated config and a seed
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let bounds = config.bounds();
        let size = config.player_size;
        // Ship starts horizontally centered, below the vertical center,
        // clamped into bounds for small play areas.
        let spawn = Vec2::new(
            (bounds.x - size.x) / 2.0,
            ((bounds.y - size.y) / 2.0 + PLAYER_SPAWN_Y_OFFSET).clamp(0.0, bounds.y - size.y),
        );

        Ok(Self {
            bounds,
            seed,
            phase: Phase::Running,
            time_ticks: 0,
            player: Player {
                pos: spawn,
                size,
                speed: config.player_speed,
            },
            obstacles: Vec::new(),
            projectiles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
        })
    }

    /// Play-area bounds (width, height)
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Queue an event for the host to drain
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn one obstacle just above the play area with randomized position,
    /// size, and fall speed. No-op while paused.
    pub fn spawn_obstacle(&mut self) {
        if self.is_paused() {
            return;
        }

        let x = self.rng.random_range(0.0..self.bounds.x);
        let edge = self.rng.random_range(OBSTACLE_MIN_SIZE..OBSTACLE_MAX_SIZE);
        let fall_speed = self
            .rng
            .random_range(OBSTACLE_MIN_FALL_SPEED..OBSTACLE_MAX_FALL_SPEED);

        let id = self.next_entity_id();
        log::debug!("spawn obstacle #{id}: x={x:.1} size={edge:.1} fall={fall_speed:.2}");
        self.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(x, OBSTACLE_SPAWN_Y),
            size: Vec2::splat(edge),
            fall_speed,
        });
    }

    /// Move the ship by one step of its speed along each intended axis.
    ///
    /// Axes are committed independently: a candidate position that leaves
    /// the play area on one axis is rejected on that axis only, the other
    /// still applies. No-op while paused.
    pub fn move_player(&mut self, intent: AxisIntent) {
        if self.is_paused() {
            return;
        }

        let new_x = self.player.pos.x + self.player.speed * intent.horizontal as f32;
        let new_y = self.player.pos.y + self.player.speed * intent.vertical as f32;

        if new_x >= 0.0 && new_x <= self.bounds.x - self.player.size.x {
            self.player.pos.x = new_x;
        }
        if new_y >= 0.0 && new_y <= self.bounds.y - self.player.size.y {
            self.player.pos.y = new_y;
        }
    }

    /// Fire a projectile from the ship's nose. No-op while paused.
    pub fn fire(&mut self) {
        if self.is_paused() {
            return;
        }

        let id = self.next_entity_id();
        self.projectiles.push(Projectile {
            id,
            pos: Vec2::new(
                self.player.pos.x + self.player.size.x / 2.0 - PROJECTILE_WIDTH / 2.0,
                self.player.pos.y - PROJECTILE_MUZZLE_OFFSET,
            ),
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
        });
        self.push_event(GameEvent::Shoot);
    }
}
