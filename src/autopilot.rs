//! Demo autopilot - plays the game for attract mode and the headless runner
//!
//! Aims the body at a point in the lower part of the next gap and flaps
//! whenever the body is about to sink below it. A flap carries the body
//! roughly sixty units up before it falls back, so the aim point sits well
//! below the gap top.

use crate::config::SimConfig;
use crate::sim::{GamePhase, SimulationSnapshot};

/// Distance kept between the body's bottom edge and the gap bottom at the aim point
const AIM_CLEARANCE: f32 = 23.0;

/// Vertical position the autopilot is trying to hold
pub fn aim_point(snapshot: &SimulationSnapshot, config: &SimConfig) -> f32 {
    let body = &snapshot.body;
    match snapshot.next_obstacle_after(body.x - body.half_extent) {
        Some(obstacle) => obstacle.gap_bottom - body.half_extent - AIM_CLEARANCE,
        None => config.field_height / 2.0,
    }
}

/// Whether to activate before the next tick
pub fn should_activate(snapshot: &SimulationSnapshot, config: &SimConfig) -> bool {
    if snapshot.phase != GamePhase::Playing {
        return false;
    }
    let body = &snapshot.body;
    body.y + body.vel > aim_point(snapshot, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Engine, TickInput};

    #[test]
    fn test_aims_for_middle_without_obstacles() {
        let config = SimConfig::default();
        let mut engine = Engine::new(config.clone(), 3).expect("valid");
        engine.reset();
        let snapshot = engine.snapshot();
        assert_eq!(aim_point(&snapshot, &config), 300.0);
    }

    #[test]
    fn test_flaps_only_when_sinking_below_aim() {
        let config = SimConfig::default();
        let mut engine = Engine::new(config.clone(), 3).expect("valid");
        engine.reset();

        // Rising well above the aim point: leave it alone
        engine.activate();
        let snapshot = engine.tick();
        assert!(!should_activate(&snapshot, &config));

        // Not playing: never activate
        let idle = Engine::new(config.clone(), 3).expect("valid");
        assert!(!should_activate(&idle.snapshot(), &config));
    }

    #[test]
    fn test_hovers_until_first_obstacle() {
        let config = SimConfig::default();
        let mut engine = Engine::new(config.clone(), 3).expect("valid");
        engine.reset();

        let mut snapshot = engine.snapshot();
        for _ in 0..99 {
            let input = TickInput {
                activate: should_activate(&snapshot, &config),
            };
            snapshot = engine.step(&input);
            assert_eq!(snapshot.phase, GamePhase::Playing);
        }
        assert!((240.0..=320.0).contains(&snapshot.body.y));
    }

    #[test]
    fn test_clears_first_obstacle() {
        let config = SimConfig::default();
        let mut engine = Engine::new(config.clone(), 7).expect("valid");
        engine.reset();

        let mut snapshot = engine.snapshot();
        for _ in 0..400 {
            let input = TickInput {
                activate: should_activate(&snapshot, &config),
            };
            snapshot = engine.step(&input);
        }
        assert_eq!(snapshot.phase, GamePhase::Playing);
        assert!(snapshot.score >= 1);
    }
}
