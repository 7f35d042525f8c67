//! Simulation tuning
//!
//! Every value is fixed for a session. The engine refuses to start with a
//! configuration that would make the game unwinnable or trivial.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tuning values consumed at engine construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Body physics (per tick, downward is positive) ===
    pub gravity: f32,
    pub impulse: f32,

    // === Obstacles ===
    /// Horizontal distance every obstacle moves left per tick
    pub obstacle_speed: f32,
    /// A new obstacle spawns whenever the tick counter is a multiple of this
    pub spawn_interval: u32,
    pub obstacle_width: f32,
    /// Height of the passable gap
    pub gap_height: f32,
    /// Minimum distance between the gap and the field's top and bottom
    pub min_gap_margin: f32,

    // === Body ===
    /// Side length of the body's square bounding box
    pub body_size: f32,
    /// Fixed horizontal position of the body's center
    pub body_x: f32,
    /// Vertical position of the body's center at the start of each round
    pub body_start_y: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            gravity: GRAVITY,
            impulse: IMPULSE,

            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval: SPAWN_INTERVAL_TICKS,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            min_gap_margin: MIN_GAP_MARGIN,

            body_size: BODY_SIZE,
            body_x: BODY_X,
            body_start_y: BODY_START_Y,
        }
    }
}

impl SimConfig {
    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations that cannot produce a fair game
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("gravity", self.gravity),
            ("impulse", self.impulse),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("min_gap_margin", self.min_gap_margin),
            ("body_size", self.body_size),
            ("body_x", self.body_x),
            ("body_start_y", self.body_start_y),
        ];
        if let Some(&(field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }

        let positives = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("body_size", self.body_size),
        ];
        if let Some(&(field, value)) = positives.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::NonPositive { field, value });
        }
        if self.min_gap_margin < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "min_gap_margin",
                value: self.min_gap_margin,
            });
        }

        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.gravity < 0.0 {
            return Err(ConfigError::NegativeGravity(self.gravity));
        }
        if self.impulse >= 0.0 {
            return Err(ConfigError::NonUpwardImpulse(self.impulse));
        }

        if self.gap_height <= self.body_size {
            return Err(ConfigError::GapTooSmall {
                gap_height: self.gap_height,
                body_size: self.body_size,
            });
        }
        if self.min_gap_margin * 2.0 + self.gap_height >= self.field_height {
            return Err(ConfigError::GapDoesNotFit {
                gap_height: self.gap_height,
                min_gap_margin: self.min_gap_margin,
                field_height: self.field_height,
            });
        }

        let half = self.half_body();
        let x_fits = self.body_x - half >= 0.0 && self.body_x + half <= self.field_width;
        let y_fits = self.body_start_y - half >= 0.0 && self.body_start_y + half <= self.field_height;
        if !x_fits || !y_fits {
            return Err(ConfigError::BodyOutOfField {
                x: self.body_x,
                y: self.body_start_y,
            });
        }

        Ok(())
    }

    /// Half the body's side length
    #[inline]
    pub fn half_body(&self) -> f32 {
        self.body_size / 2.0
    }

    /// Inclusive range a spawned obstacle's gap top is drawn from
    pub fn gap_top_range(&self) -> (f32, f32) {
        let min = self.min_gap_margin;
        let max = self.field_height - self.gap_height - self.min_gap_margin;
        (min, max)
    }
}
