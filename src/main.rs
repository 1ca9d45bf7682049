//! Astro Dodge headless demo
//!
//! Runs a session at ~60 Hz with a small autopilot until the ship is hit,
//! logging spawn/shoot/hit events along the way. Useful for watching the
//! core behave without wiring up a renderer.
//!
//! Usage: `astro-dodge [--seed N] [--config path.json]`

use std::time::{Duration, Instant};

use astro_dodge::{Command, GameConfig, GameEvent, Session};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (seed, config) = match parse_args() {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    let mut session = match Session::new(&config, seed) {
        Ok(session) => session,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    let frame_period = Duration::from_millis(16);
    let mut fire_cooldown = 0u32;

    while !session.is_over() {
        for command in autopilot(&session, &mut fire_cooldown) {
            session.handle(command);
        }

        session.frame(start.elapsed().as_secs_f64() * 1000.0);

        for event in session.drain_events() {
            match event {
                GameEvent::Shoot => log::debug!("audio: shoot"),
                GameEvent::Hit => log::info!("audio: hit"),
            }
        }

        std::thread::sleep(frame_period);
    }

    let sim = session.sim();
    log::info!(
        "run over after {} ticks ({:.1}s), {} obstacles still falling",
        sim.time_ticks,
        start.elapsed().as_secs_f64(),
        sim.obstacles.len()
    );
}

/// Dodge the nearest descending obstacle, fire on a short cooldown.
fn autopilot(session: &Session, fire_cooldown: &mut u32) -> Vec<Command> {
    let sim = session.sim();
    let player = &sim.player;
    let mut commands = Vec::new();

    // The most dangerous obstacle is the lowest one overlapping our column.
    let threat = sim
        .obstacles
        .iter()
        .filter(|o| {
            o.pos.x < player.pos.x + player.size.x + 20.0
                && o.pos.x + o.size.x > player.pos.x - 20.0
        })
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    if let Some(threat) = threat {
        let threat_center = threat.pos.x + threat.size.x / 2.0;
        let player_center = player.pos.x + player.size.x / 2.0;
        if player_center <= threat_center {
            commands.push(Command::MoveLeft);
        } else {
            commands.push(Command::MoveRight);
        }
    }

    if *fire_cooldown == 0 {
        commands.push(Command::Fire);
        *fire_cooldown = 12;
    } else {
        *fire_cooldown -= 1;
    }

    commands
}

fn parse_args() -> Result<(u64, GameConfig), String> {
    let mut seed: Option<u64> = None;
    let mut config = GameConfig::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid seed '{value}'"))?,
                );
            }
            "--config" => {
                let path = args.next().ok_or("--config requires a path")?;
                let json = std::fs::read_to_string(&path)
                    .map_err(|err| format!("cannot read {path}: {err}"))?;
                config = GameConfig::from_json(&json)
                    .map_err(|err| format!("cannot parse {path}: {err}"))?;
            }
            other => {
                return Err(format!(
                    "unknown argument '{other}'\nusage: astro-dodge [--seed N] [--config path.json]"
                ));
            }
        }
    }

    let seed = seed.unwrap_or_else(rand::random);
    Ok((seed, config))
}
