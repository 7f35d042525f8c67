//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle title screen, waiting for the first activate
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Round ended, waiting for an activate to start the next one
    GameOver,
}

/// The player-controlled body
///
/// Its horizontal position and size are fixed for the session; only the
/// vertical position and velocity change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Fixed horizontal center
    pub x: f32,
    /// Vertical center (0 = field top, grows downward)
    pub y: f32,
    /// Vertical velocity in units per tick (positive = falling)
    pub vel: f32,
    /// Half the side length of the square bounding box
    pub half_extent: f32,
}

impl Body {
    pub fn new(x: f32, y: f32, half_extent: f32) -> Self {
        Self {
            x,
            y,
            vel: 0.0,
            half_extent,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y - self.half_extent
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.half_extent
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x - self.half_extent
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.half_extent
    }
}

/// A gapped barrier scrolling toward the body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Spawn-order id, unique within a round
    pub id: u32,
    /// Leading (left) edge
    pub x: f32,
    /// Distance from the field top to the top of the passable gap
    pub gap_top: f32,
    /// One-shot flag, see [`Obstacle::mark_scored`]
    scored: bool,
}

impl Obstacle {
    pub fn new(id: u32, x: f32, gap_top: f32) -> Self {
        Self {
            id,
            x,
            gap_top,
            scored: false,
        }
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }

    #[inline]
    pub fn gap_bottom(&self, gap_height: f32) -> f32 {
        self.gap_top + gap_height
    }

    pub fn scored(&self) -> bool {
        self.scored
    }

    /// Flag the obstacle as scored. Returns false if it already was.
    ///
    /// There is no way to clear the flag again.
    pub fn mark_scored(&mut self) -> bool {
        !std::mem::replace(&mut self.scored, true)
    }
}

/// Round score and session best, updated as one value
///
/// The fields are private so the pair can only change through
/// [`ScoreBoard::award`] and [`ScoreBoard::new_round`]; `score <= best` holds
/// after every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u32,
    best: u32,
}

impl ScoreBoard {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Add one point. Returns true if this set a new best.
    pub fn award(&mut self) -> bool {
        self.score += 1;
        let new_best = self.score > self.best;
        self.best = self.best.max(self.score);
        new_best
    }

    /// Zero the round score, keeping the best
    pub fn new_round(&mut self) {
        self.score = 0;
    }

    /// Raise the best to at least `best` (e.g. a value the driver persisted)
    pub fn raise_best(&mut self, best: u32) {
        self.best = self.best.max(best);
    }
}

/// What ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Body's top edge went above the field
    Ceiling,
    /// Body's bottom edge went below the field
    Floor,
    /// Body overlapped an obstacle's barrier
    Obstacle { id: u32 },
}

/// Things that happened during a tick, reported to the driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    RoundStarted,
    Flapped,
    ObstacleSpawned { id: u32, gap_top: f32 },
    Scored { score: u32 },
    NewBest { best: u32 },
    Crashed { cause: CrashCause },
}
