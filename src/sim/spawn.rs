//! Wall-clock obstacle spawning
//!
//! Spawn cadence is time-based while movement cadence is frame-based, so the
//! scheduler runs off elapsed wall-clock milliseconds fed by the host rather
//! than off the tick counter. The session cancels it once the run ends so no
//! timer outlives the game.

use super::state::Simulation;

/// Periodic obstacle spawner
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    period_ms: f64,
    elapsed_ms: f64,
    cancelled: bool,
}

impl SpawnScheduler {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0.0,
            cancelled: false,
        }
    }

    /// Feed elapsed wall-clock time and spawn one obstacle per full period.
    /// No-op while the simulation is paused or after cancellation; paused
    /// time is not accumulated.
    pub fn advance(&mut self, sim: &mut Simulation, wall_dt_ms: f64) {
        if self.cancelled || sim.is_paused() {
            return;
        }

        self.elapsed_ms += wall_dt_ms;
        while self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            sim.spawn_obstacle();
        }
    }

    /// Permanently stop the scheduler. Idempotent.
    pub fn cancel(&mut self) {
        if !self.cancelled {
            log::debug!("spawn scheduler cancelled");
            self.cancelled = true;
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::Phase;

    fn sim() -> Simulation {
        Simulation::new(&GameConfig::default(), 31337).unwrap()
    }

    #[test]
    fn test_spawns_once_per_period() {
        let mut sim = sim();
        let mut scheduler = SpawnScheduler::new(2000.0);

        scheduler.advance(&mut sim, 1999.0);
        assert!(sim.obstacles.is_empty());

        scheduler.advance(&mut sim, 1.0);
        assert_eq!(sim.obstacles.len(), 1);

        // Leftover time carries over between calls
        scheduler.advance(&mut sim, 1000.0);
        scheduler.advance(&mut sim, 1000.0);
        assert_eq!(sim.obstacles.len(), 2);
    }

    #[test]
    fn test_large_delta_spawns_multiple() {
        let mut sim = sim();
        let mut scheduler = SpawnScheduler::new(2000.0);
        scheduler.advance(&mut sim, 6500.0);
        assert_eq!(sim.obstacles.len(), 3);
    }

    #[test]
    fn test_noop_while_paused() {
        let mut sim = sim();
        sim.phase = Phase::Paused;
        let mut scheduler = SpawnScheduler::new(2000.0);
        scheduler.advance(&mut sim, 10_000.0);
        assert!(sim.obstacles.is_empty());
    }

    #[test]
    fn test_cancel_is_permanent_and_idempotent() {
        let mut sim = sim();
        let mut scheduler = SpawnScheduler::new(2000.0);
        scheduler.cancel();
        scheduler.cancel();
        assert!(scheduler.is_cancelled());
        scheduler.advance(&mut sim, 10_000.0);
        assert!(sim.obstacles.is_empty());
    }
}
