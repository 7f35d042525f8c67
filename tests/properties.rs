//! Invariants of the simulation checked over random seeds and input streams

use std::collections::HashSet;

use neon_flap::sim::{GamePhase, SimEvent, SimulationSnapshot};
use neon_flap::{Engine, SimConfig, TickInput, autopilot};
use proptest::prelude::*;

const EPS: f32 = 1e-3;

/// Autopilot input with random extra activations mixed in; the extras also
/// restart the game after a crash.
fn next_input(snapshot: &SimulationSnapshot, config: &SimConfig, extra: bool) -> TickInput {
    TickInput {
        activate: extra || autopilot::should_activate(snapshot, config),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn gap_tops_stay_in_range(
        seed in any::<u64>(),
        gap_height in 40.0f32..400.0,
        margin in 0.0f32..90.0,
    ) {
        let config = SimConfig {
            gravity: 0.0,
            gap_height,
            min_gap_margin: margin,
            body_size: 30.0,
            spawn_interval: 10,
            ..Default::default()
        };
        prop_assume!(config.validate().is_ok());
        let (min, max) = config.gap_top_range();

        let mut engine = Engine::new(config, seed).unwrap();
        engine.reset();
        for _ in 0..200 {
            let snapshot = engine.tick();
            for event in &snapshot.events {
                if let SimEvent::ObstacleSpawned { gap_top, .. } = event {
                    prop_assert!(*gap_top >= min && *gap_top <= max,
                        "gap top {} outside [{}, {}]", gap_top, min, max);
                }
            }
            if snapshot.phase != GamePhase::Playing {
                break;
            }
        }
    }

    #[test]
    fn round_invariants_hold(
        seed in any::<u64>(),
        extras in prop::collection::vec(prop::bool::weighted(0.03), 1..2500),
    ) {
        let config = SimConfig::default();
        let mut engine = Engine::new(config.clone(), seed).unwrap();
        let mut before = engine.snapshot();
        let mut scored_ids: HashSet<u32> = HashSet::new();

        for extra in extras {
            let input = next_input(&before, &config, extra);
            let after = engine.step(&input);

            // Best never drops and always covers the round score
            prop_assert!(after.best_score >= before.best_score);
            prop_assert!(after.score <= after.best_score);

            if after.events.contains(&SimEvent::RoundStarted) {
                prop_assert_eq!(after.score, 0);
                scored_ids.clear();
            } else if before.phase == GamePhase::Playing {
                // Score within a round only goes up, one obstacle at a time
                prop_assert!(after.score >= before.score);

                // Velocity integrates gravity; a flap replaces it first
                let expected_vel = if input.activate {
                    config.impulse + config.gravity
                } else {
                    before.body.vel + config.gravity
                };
                prop_assert!((after.body.vel - expected_vel).abs() < EPS);

                // Obstacle count only rises on spawn ticks, and then by one
                let spawned = after
                    .events
                    .iter()
                    .any(|e| matches!(e, SimEvent::ObstacleSpawned { .. }));
                if spawned {
                    prop_assert!(after.tick_count.is_multiple_of(u64::from(config.spawn_interval)));
                    prop_assert_eq!(after.obstacles.len(), before.obstacles.len() + 1);
                } else {
                    prop_assert!(after.obstacles.len() <= before.obstacles.len());
                }
            }

            // Scored flags are write-once
            for obstacle in &after.obstacles {
                if scored_ids.contains(&obstacle.id) {
                    prop_assert!(obstacle.scored, "obstacle {} lost its scored flag", obstacle.id);
                }
                if obstacle.scored {
                    scored_ids.insert(obstacle.id);
                }
            }

            // Obstacles stay in spawn order, which is also left-to-right order
            for pair in after.obstacles.windows(2) {
                prop_assert!(pair[0].id < pair[1].id);
                prop_assert!(pair[0].x < pair[1].x);
            }

            before = after;
        }
    }

    #[test]
    fn ticks_outside_play_change_nothing(seed in any::<u64>(), idle_ticks in 1usize..200) {
        let mut engine = Engine::new(SimConfig::default(), seed).unwrap();

        // Start screen
        let idle = engine.snapshot();
        for _ in 0..idle_ticks {
            prop_assert_eq!(&engine.tick(), &idle);
        }

        // Fall to the floor, then keep ticking
        engine.reset();
        while engine.tick().phase == GamePhase::Playing {}
        let over = engine.snapshot();
        prop_assert_eq!(over.phase, GamePhase::GameOver);
        for _ in 0..idle_ticks {
            prop_assert_eq!(&engine.tick(), &over);
        }
    }

    #[test]
    fn same_seed_same_game(
        seed in any::<u64>(),
        extras in prop::collection::vec(prop::bool::weighted(0.05), 1..800),
    ) {
        let config = SimConfig::default();
        let mut a = Engine::new(config.clone(), seed).unwrap();
        let mut b = Engine::new(config.clone(), seed).unwrap();
        let mut snapshot = a.snapshot();

        for extra in extras {
            let input = next_input(&snapshot, &config, extra);
            snapshot = a.step(&input);
            prop_assert_eq!(&snapshot, &b.step(&input));
        }
    }
}
