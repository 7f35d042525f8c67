//! Body physics
//!
//! Explicit Euler integration at a fixed per-tick rate. Velocity is updated
//! first and the new velocity is used for the position step.

use super::state::Body;

/// Advance the body one tick under gravity
#[inline]
pub fn integrate(body: &mut Body, gravity: f32) {
    body.vel += gravity;
    body.y += body.vel;
}

/// Flap: set the velocity to the impulse, whatever the body was doing
#[inline]
pub fn apply_impulse(body: &mut Body, impulse: f32) {
    body.vel = impulse;
}
