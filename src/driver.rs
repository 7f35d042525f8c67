//! Reference driver: turns variable frame times into fixed simulation ticks
//!
//! The engine only knows about ticks. This module owns the frame-rate side:
//! an accumulator that converts elapsed seconds into a whole number of ticks,
//! and a one-shot input latch so any number of activations between two ticks
//! collapse into a single impulse.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::config::SimConfig;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, TICK_DT};
use crate::error::ConfigError;
use crate::sim::{Engine, GamePhase, SimulationSnapshot, TickInput};

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f32,
    accumulator: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICK_DT)
    }
}

impl FrameClock {
    /// A clock ticking every `step` seconds; a non-positive or non-finite
    /// step falls back to `TICK_DT`
    pub fn new(step: f32) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            log::warn!("Invalid tick step {step}, using {TICK_DT}");
            TICK_DT
        };
        Self {
            step,
            accumulator: 0.0,
        }
    }

    /// Account for `dt` seconds of wall time and return how many ticks are due
    ///
    /// Long frames are clamped and at most `MAX_SUBSTEPS` ticks run per frame;
    /// time beyond that is dropped rather than carried into later frames.
    pub fn advance(&mut self, dt: f32) -> u32 {
        // A NaN frame time would poison the accumulator for good
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS {
            self.accumulator %= self.step;
        }
        ticks
    }
}

/// Owns an engine and feeds it ticks and input
pub struct Driver<R: Rng = Pcg32> {
    engine: Engine<R>,
    clock: FrameClock,
    input: TickInput,
}

impl Driver<Pcg32> {
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(Engine::new(config, seed)?))
    }
}

impl<R: Rng> Driver<R> {
    pub fn from_engine(engine: Engine<R>) -> Self {
        Self {
            engine,
            clock: FrameClock::default(),
            input: TickInput::default(),
        }
    }

    /// Replace the frame clock (e.g. a different tick rate)
    pub fn with_clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    /// Register a jump/click. While playing, the impulse waits for the next
    /// tick boundary; otherwise a new round starts right away.
    pub fn queue_activate(&mut self) {
        match self.engine.phase() {
            GamePhase::Playing => self.input.activate = true,
            GamePhase::Start | GamePhase::GameOver => self.engine.activate(),
        }
    }

    /// True if an activation is waiting for the next tick
    pub fn activate_pending(&self) -> bool {
        self.input.activate
    }

    /// Run the ticks due for a frame of `dt` seconds
    ///
    /// Returns the snapshot after the last tick with every event from the
    /// frame, or `None` if no tick was due.
    pub fn frame(&mut self, dt: f32) -> Option<SimulationSnapshot> {
        let ticks = self.clock.advance(dt);

        let mut events = Vec::new();
        let mut last = None;
        for _ in 0..ticks {
            let input = self.input;
            let mut snapshot = self.engine.step(&input);

            // Clear one-shot inputs after processing
            self.input.activate = false;

            events.append(&mut snapshot.events);
            last = Some(snapshot);
        }

        last.map(|snapshot| SimulationSnapshot { events, ..snapshot })
    }

    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine<R> {
        &mut self.engine
    }
}
