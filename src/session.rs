//! Session driver
//!
//! A `Session` is one explicit game run: it owns the simulation and the
//! spawn scheduler, maps discrete input intents onto simulation commands,
//! and is what the host's frame clock drives. Constructing a second session
//! is how a restart works; nothing here is process-wide.

use crate::config::{ConfigError, GameConfig};
use crate::sim::{self, AxisIntent, GameEvent, Simulation, SpawnScheduler};

/// Discrete input intents from the host's input source, mapped 1:1 onto
/// simulation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Fire,
}

/// One game run: simulation plus its drivers
#[derive(Debug)]
pub struct Session {
    sim: Simulation,
    spawner: SpawnScheduler,
    last_time_ms: Option<f64>,
}

impl Session {
    /// Start a session from a config and a run seed
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let sim = Simulation::new(config, seed)?;
        log::info!(
            "session started: {}x{} play area, seed {seed}",
            config.width,
            config.height
        );
        Ok(Self {
            sim,
            spawner: SpawnScheduler::new(config.spawn_period_ms),
            last_time_ms: None,
        })
    }

    /// Apply one input intent
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::MoveUp => self.sim.move_player(AxisIntent::UP),
            Command::MoveDown => self.sim.move_player(AxisIntent::DOWN),
            Command::MoveLeft => self.sim.move_player(AxisIntent::LEFT),
            Command::MoveRight => self.sim.move_player(AxisIntent::RIGHT),
            Command::Fire => self.sim.fire(),
        }
    }

    /// Run one frame at the given wall-clock timestamp (milliseconds).
    ///
    /// Advances the spawn scheduler by the elapsed wall time, then runs
    /// exactly one simulation tick. On the tick that ends the run the
    /// spawner is cancelled so the timer does not outlive the game.
    pub fn frame(&mut self, now_ms: f64) {
        let wall_dt = match self.last_time_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_time_ms = Some(now_ms);

        self.spawner.advance(&mut self.sim, wall_dt);

        let was_running = !self.sim.is_paused();
        sim::tick(&mut self.sim);

        if was_running && self.sim.is_paused() {
            self.spawner.cancel();
        }
    }

    /// Read access for the presentation sink
    #[inline]
    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    /// Take pending audio events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.sim.drain_events()
    }

    /// Whether the run has ended
    #[inline]
    pub fn is_over(&self) -> bool {
        self.sim.is_paused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Obstacle;
    use glam::Vec2;

    fn session() -> Session {
        Session::new(&GameConfig::default(), 2025).unwrap()
    }

    #[test]
    fn test_frame_drives_spawner_by_wall_clock() {
        let mut session = session();
        session.frame(0.0);
        assert!(session.sim().obstacles.is_empty());

        // Many frames inside one spawn period: still nothing.
        for i in 1..=10 {
            session.frame(i as f64 * 16.0);
        }
        assert!(session.sim().obstacles.is_empty());

        // Crossing the 2000 ms mark spawns exactly one obstacle.
        session.frame(2100.0);
        assert_eq!(session.sim().obstacles.len(), 1);
    }

    #[test]
    fn test_commands_map_to_sim() {
        let mut session = session();
        let start = session.sim().player.pos;

        session.handle(Command::MoveLeft);
        assert_eq!(session.sim().player.pos.x, start.x - 50.0);

        session.handle(Command::MoveUp);
        assert_eq!(session.sim().player.pos.y, start.y - 50.0);

        session.handle(Command::Fire);
        assert_eq!(session.sim().projectiles.len(), 1);
        assert_eq!(session.drain_events(), vec![GameEvent::Shoot]);
    }

    #[test]
    fn test_spawner_cancelled_on_terminal_collision() {
        let mut session = session();
        let player_pos = session.sim().player.pos;

        // Park an obstacle on the ship so the next tick is terminal.
        let id = session.sim.next_entity_id();
        session.sim.obstacles.push(Obstacle {
            id,
            pos: player_pos,
            size: Vec2::splat(40.0),
            fall_speed: 0.0,
        });

        session.frame(0.0);
        assert!(session.is_over());
        assert!(session.spawner.is_cancelled());
        assert_eq!(session.drain_events(), vec![GameEvent::Hit]);

        // Later frames are inert, however much wall time passes.
        session.frame(60_000.0);
        assert!(session.sim().obstacles.is_empty());
        assert_eq!(session.sim().time_ticks, 1);
    }

    #[test]
    fn test_fresh_session_restarts_clean() {
        let config = GameConfig::default();
        let mut first = Session::new(&config, 1).unwrap();
        first.sim.phase = crate::sim::Phase::Paused;
        assert!(first.is_over());

        let second = Session::new(&config, 2).unwrap();
        assert!(!second.is_over());
        assert!(second.sim().obstacles.is_empty());
    }
}
