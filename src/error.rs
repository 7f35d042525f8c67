//! Error types
//!
//! Only configuration can fail. Crashing into an obstacle or the field edge is
//! a normal game outcome and is reported through `GamePhase::GameOver`.

use std::error::Error;
use std::fmt;

/// A tuning configuration that would make the game unplayable.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A value is NaN or infinite.
    NonFinite { field: &'static str },
    /// A dimension or rate that must be strictly positive is not.
    NonPositive { field: &'static str, value: f32 },
    /// Obstacles would never spawn.
    ZeroSpawnInterval,
    /// Gravity pulls the body upward.
    NegativeGravity(f32),
    /// The activate impulse does not point upward.
    NonUpwardImpulse(f32),
    /// The gap is not taller than the body, so no obstacle can be passed.
    GapTooSmall { gap_height: f32, body_size: f32 },
    /// The gap plus its top and bottom margins does not fit in the field.
    GapDoesNotFit {
        gap_height: f32,
        min_gap_margin: f32,
        field_height: f32,
    },
    /// The body's start position lies outside the field.
    BodyOutOfField { x: f32, y: f32 },
    /// The configuration could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "'{field}' must be a finite number"),
            Self::NonPositive { field, value } => {
                write!(f, "'{field}' must be greater than zero (got {value})")
            }
            Self::ZeroSpawnInterval => write!(f, "'spawn_interval' must be at least one tick"),
            Self::NegativeGravity(g) => write!(f, "gravity must not be negative (got {g})"),
            Self::NonUpwardImpulse(i) => {
                write!(f, "impulse must be negative, i.e. upward (got {i})")
            }
            Self::GapTooSmall {
                gap_height,
                body_size,
            } => write!(
                f,
                "gap height {gap_height} must exceed body size {body_size}"
            ),
            Self::GapDoesNotFit {
                gap_height,
                min_gap_margin,
                field_height,
            } => write!(
                f,
                "gap height {gap_height} plus 2 x margin {min_gap_margin} must be less than field height {field_height}"
            ),
            Self::BodyOutOfField { x, y } => {
                write!(f, "body start position ({x}, {y}) is outside the field")
            }
            Self::Parse(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
