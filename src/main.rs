//! Neon Flap headless runner
//!
//! Plays a few autopilot rounds at a simulated 60 Hz and prints the final
//! snapshot as JSON. Usage: `neon-flap [seed] [rounds] [config.json]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use neon_flap::consts::TICK_DT;
    use neon_flap::sim::{GamePhase, SimEvent};
    use neon_flap::{Driver, SimConfig, autopilot};

    const DEFAULT_SEED: u64 = 0x5EED;
    const DEFAULT_ROUNDS: u32 = 3;
    /// Rounds the autopilot survives this long are cut short
    const MAX_ROUND_TICKS: u64 = 20_000;

    struct Args {
        seed: u64,
        rounds: u32,
        config_path: Option<String>,
    }

    fn parse_args() -> Result<Args, String> {
        let mut args = std::env::args().skip(1);
        let seed = match args.next() {
            Some(s) => s.parse().map_err(|_| format!("invalid seed '{s}'"))?,
            None => DEFAULT_SEED,
        };
        let rounds = match args.next() {
            Some(s) => s.parse().map_err(|_| format!("invalid round count '{s}'"))?,
            None => DEFAULT_ROUNDS,
        };
        Ok(Args {
            seed,
            rounds,
            config_path: args.next(),
        })
    }

    fn load_config(path: Option<&str>) -> Result<SimConfig, String> {
        let Some(path) = path else {
            return Ok(SimConfig::default());
        };
        let json = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
        SimConfig::from_json(&json).map_err(|e| format!("{path}: {e}"))
    }

    pub fn run() -> Result<(), String> {
        let args = parse_args()?;
        let config = load_config(args.config_path.as_deref())?;
        log::info!(
            "Neon Flap (native) seed={:#x} rounds={}",
            args.seed,
            args.rounds
        );
        match config.to_json() {
            Ok(json) => log::debug!("Effective config: {json}"),
            Err(e) => log::warn!("Could not serialize config: {e}"),
        }

        let mut driver = Driver::new(config.clone(), args.seed).map_err(|e| e.to_string())?;

        for round in 1..=args.rounds {
            if driver.engine().phase() == GamePhase::Playing {
                driver.engine_mut().reset();
            } else {
                driver.queue_activate();
            }
            let mut snapshot = driver.engine().snapshot();

            while !snapshot.is_over() && snapshot.tick_count < MAX_ROUND_TICKS {
                if autopilot::should_activate(&snapshot, &config) {
                    driver.queue_activate();
                }
                if let Some(next) = driver.frame(TICK_DT) {
                    for event in &next.events {
                        if let SimEvent::NewBest { best } = event {
                            log::debug!("Round {round}: new best {best}");
                        }
                    }
                    snapshot = next;
                }
            }

            if !snapshot.is_over() {
                log::warn!("Round {round} cut short after {MAX_ROUND_TICKS} ticks");
            }
            log::info!(
                "Round {round}: score {} in {} ticks (best {})",
                snapshot.score,
                snapshot.tick_count,
                snapshot.best_score
            );
        }

        let json = serde_json::to_string_pretty(&driver.engine().snapshot())
            .map_err(|e| e.to_string())?;
        println!("{json}");
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives the engine directly; nothing to do here
}
