//! Fixed-step simulation engine
//!
//! [`Engine`] owns all game state and advances it one tick per call. It has
//! no notion of wall-clock time; the driver decides when to call `tick`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{self, ObstacleShape};
use super::obstacles;
use super::physics;
use super::snapshot::{BodyView, ObstacleView, SimulationSnapshot};
use super::state::{Body, CrashCause, GamePhase, Obstacle, ScoreBoard, SimEvent};
use crate::config::SimConfig;
use crate::error::ConfigError;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap, or start a round when not playing (click/tap/space)
    pub activate: bool,
}

/// The simulation: body, obstacles, score and phase
pub struct Engine<R: Rng = Pcg32> {
    config: SimConfig,
    shape: ObstacleShape,
    rng: R,
    phase: GamePhase,
    body: Body,
    /// Live obstacles in spawn order
    obstacles: Vec<Obstacle>,
    tick_count: u64,
    scores: ScoreBoard,
    next_id: u32,
    /// Events not yet handed out in a snapshot
    events: Vec<SimEvent>,
}

impl Engine<Pcg32> {
    /// Create an engine whose obstacle gaps are drawn from a seeded PCG
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine drawing obstacle gaps from `rng`
    ///
    /// Fails if the configuration cannot produce a fair game.
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let shape = ObstacleShape {
            width: config.obstacle_width,
            gap_height: config.gap_height,
            field_height: config.field_height,
        };
        let body = Body::new(config.body_x, config.body_start_y, config.half_body());

        Ok(Self {
            config,
            shape,
            rng,
            phase: GamePhase::Start,
            body,
            obstacles: Vec::new(),
            tick_count: 0,
            scores: ScoreBoard::default(),
            next_id: 1,
            events: Vec::new(),
        })
    }

    /// Start a fresh round. The best score survives.
    pub fn reset(&mut self) {
        self.body = Body::new(
            self.config.body_x,
            self.config.body_start_y,
            self.config.half_body(),
        );
        self.obstacles.clear();
        self.tick_count = 0;
        self.next_id = 1;
        self.scores.new_round();
        self.phase = GamePhase::Playing;
        self.events.push(SimEvent::RoundStarted);
        log::info!("Round started (best {})", self.scores.best());
    }

    /// The single player input: flap while playing, otherwise start a round
    pub fn activate(&mut self) {
        match self.phase {
            GamePhase::Start | GamePhase::GameOver => self.reset(),
            GamePhase::Playing => {
                physics::apply_impulse(&mut self.body, self.config.impulse);
                // Repeated flaps before a tick report once
                if self.events.last() != Some(&SimEvent::Flapped) {
                    self.events.push(SimEvent::Flapped);
                }
            }
        }
    }

    /// Apply the latched input at the tick boundary, then tick
    pub fn step(&mut self, input: &TickInput) -> SimulationSnapshot {
        if input.activate {
            self.activate();
        }
        self.tick()
    }

    /// Advance exactly one tick if playing; otherwise leave the state alone
    pub fn tick(&mut self) -> SimulationSnapshot {
        if self.phase == GamePhase::Playing {
            if let Some(cause) = self.advance_round() {
                self.phase = GamePhase::GameOver;
                self.events.push(SimEvent::Crashed { cause });
                log::info!(
                    "Game over after {} ticks: {:?}, score {} (best {})",
                    self.tick_count,
                    cause,
                    self.scores.score(),
                    self.scores.best()
                );
            }
        }

        let events = std::mem::take(&mut self.events);
        SimulationSnapshot {
            events,
            ..self.snapshot()
        }
    }

    /// Physics, spawning, scrolling, collision and scoring for one tick.
    /// Returns the crash cause if the round ended.
    fn advance_round(&mut self) -> Option<CrashCause> {
        physics::integrate(&mut self.body, self.config.gravity);
        let mut crash = collision::body_boundary_collision(&self.body, self.config.field_height);

        self.tick_count += 1;
        if obstacles::spawn_due(self.tick_count, self.config.spawn_interval) {
            self.spawn_obstacle();
        }

        // Every obstacle is scrolled, tested and scored even after a hit; the first hit names the cause
        for obstacle in &mut self.obstacles {
            obstacles::advance(obstacle, self.config.obstacle_speed);

            let hit = collision::body_obstacle_collision(&self.body, obstacle, &self.shape);
            if hit && crash.is_none() {
                crash = Some(CrashCause::Obstacle { id: obstacle.id });
            }

            if obstacle.right(self.config.obstacle_width) < self.body.x && obstacle.mark_scored() {
                let new_best = self.scores.award();
                log::trace!("Passed obstacle {}, score {}", obstacle.id, self.scores.score());
                self.events.push(SimEvent::Scored {
                    score: self.scores.score(),
                });
                if new_best {
                    self.events.push(SimEvent::NewBest {
                        best: self.scores.best(),
                    });
                }
            }
        }

        let culled = obstacles::cull(&mut self.obstacles, self.config.obstacle_width);
        if culled > 0 {
            log::debug!("Culled {culled} obstacle(s), {} live", self.obstacles.len());
        }

        crash
    }

    fn spawn_obstacle(&mut self) {
        let id = self.next_id;
        self.next_id += 1;
        let gap_top = obstacles::draw_gap_top(&mut self.rng, self.config.gap_top_range());
        self.obstacles
            .push(Obstacle::new(id, self.config.field_width, gap_top));
        self.events.push(SimEvent::ObstacleSpawned { id, gap_top });
        log::debug!("Spawned obstacle {id} at tick {} (gap top {gap_top})", self.tick_count);
    }

    /// Current state without advancing; pending events are included but not consumed
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            phase: self.phase,
            tick_count: self.tick_count,
            body: BodyView::from_body(&self.body),
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView::from_obstacle(o, &self.config))
                .collect(),
            score: self.scores.score(),
            best_score: self.scores.best(),
            events: self.events.clone(),
        }
    }

    /// Seed the best score from outside (e.g. a value the driver persisted).
    /// Only ever raises it.
    pub fn restore_best(&mut self, best: u32) {
        self.scores.raise_best(best);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn best_score(&self) -> u32 {
        self.scores.best()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
