//! Neon Flap - a side-scrolling arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring, game phase)
//! - `config`: Data-driven tuning with construction-time validation
//! - `driver`: Reference frame loop that feeds ticks and input into the simulation
//! - `autopilot`: Demo controller that plays the game on its own

pub mod autopilot;
pub mod config;
pub mod driver;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use driver::{Driver, FrameClock};
pub use error::ConfigError;
pub use sim::{Engine, GamePhase, SimEvent, SimulationSnapshot, TickInput};

/// Default tuning constants (play-field units, per-tick rates)
pub mod consts {
    /// Play-field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Downward acceleration added to the body's velocity every tick
    pub const GRAVITY: f32 = 0.4;
    /// Velocity the body is set to on activate (negative = upward)
    pub const IMPULSE: f32 = -7.0;

    /// Obstacle defaults
    pub const OBSTACLE_SPEED: f32 = 3.0;
    pub const SPAWN_INTERVAL_TICKS: u32 = 100;
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const GAP_HEIGHT: f32 = 160.0;
    /// Minimum distance between the gap and the top/bottom of the field
    pub const MIN_GAP_MARGIN: f32 = 50.0;

    /// Body defaults - square bounding box centered on (BODY_X, y)
    pub const BODY_SIZE: f32 = 34.0;
    pub const BODY_X: f32 = 100.0;
    pub const BODY_START_Y: f32 = 300.0;

    /// Tilt the renderer applies per unit of vertical velocity (radians)
    pub const TILT_PER_VELOCITY: f32 = 0.1;
    /// Maximum tilt either way (radians)
    pub const MAX_TILT: f32 = std::f32::consts::FRAC_PI_4;

    /// Nominal tick rate the driver runs the simulation at
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame delta the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
