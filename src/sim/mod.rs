//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` = one step)
//! - Seeded (or injected) RNG only
//! - Obstacles kept in spawn order
//! - No rendering, input-device or timing dependencies

pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Aabb, ObstacleShape, body_boundary_collision, body_obstacle_collision};
pub use snapshot::{BodyView, ObstacleView, SimulationSnapshot, tilt_for_velocity};
pub use state::{Body, CrashCause, GamePhase, Obstacle, ScoreBoard, SimEvent};
pub use tick::{Engine, TickInput};
