//! Read-only view of the simulation handed to the renderer after each tick

use serde::{Deserialize, Serialize};

use super::state::{Body, GamePhase, Obstacle, SimEvent};
use crate::config::SimConfig;
use crate::consts::{MAX_TILT, TILT_PER_VELOCITY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    pub x: f32,
    pub y: f32,
    pub vel: f32,
    pub half_extent: f32,
    /// Nose-up/nose-down rotation to draw the body with (radians)
    pub tilt: f32,
}

impl BodyView {
    pub fn from_body(body: &Body) -> Self {
        Self {
            x: body.x,
            y: body.y,
            vel: body.vel,
            half_extent: body.half_extent,
            tilt: tilt_for_velocity(body.vel),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub x: f32,
    pub width: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
    pub scored: bool,
}

impl ObstacleView {
    pub fn from_obstacle(obstacle: &Obstacle, config: &SimConfig) -> Self {
        Self {
            id: obstacle.id,
            x: obstacle.x,
            width: config.obstacle_width,
            gap_top: obstacle.gap_top,
            gap_bottom: obstacle.gap_bottom(config.gap_height),
            scored: obstacle.scored(),
        }
    }
}

/// Everything a renderer or driver needs from one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub phase: GamePhase,
    pub tick_count: u64,
    pub body: BodyView,
    /// Live obstacles in spawn (left-to-right) order
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub best_score: u32,
    /// Events since the previous tick
    pub events: Vec<SimEvent>,
}

impl SimulationSnapshot {
    /// The first obstacle whose trailing edge has not yet cleared `x`
    pub fn next_obstacle_after(&self, x: f32) -> Option<&ObstacleView> {
        self.obstacles.iter().find(|o| o.x + o.width >= x)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Velocity-proportional tilt, clamped to +-45 degrees
pub fn tilt_for_velocity(vel: f32) -> f32 {
    (vel * TILT_PER_VELOCITY).clamp(-MAX_TILT, MAX_TILT)
}
