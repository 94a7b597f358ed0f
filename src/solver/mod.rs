//! Per-frame particle update pipeline
//!
//! `step` advances every particle through integration and obstacle
//! resolution; `step_field` is the Bevy system wrapper that drives it from
//! the shared [`FieldState`] resource.

pub mod collide;
pub mod integrate;

pub use collide::resolve_obstacles;
pub use integrate::{bounce_off_walls, in_bounds, integrate};

use bevy::prelude::*;
use rand::Rng;

use crate::config::FieldParams;
use crate::core::{FieldState, Particle};
use crate::geometry::Obstacle;
use crate::math::Vector;

/// Advance the whole field by one frame.
///
/// Particles are independent within a step: each sees only its own pre-step
/// state, so iteration order is irrelevant.
pub fn step(
    particles: &mut [Particle],
    obstacles: &[Obstacle],
    params: &FieldParams,
    bounds: Vector,
    rng: &mut impl Rng,
) {
    for particle in particles.iter_mut() {
        integrate(particle, params, bounds, rng);
        resolve_obstacles(particle, obstacles);
    }
}

/// Frame system: advances the field unless it is paused.
///
/// Parameters are read fresh here, so slider changes between frames take
/// effect exactly at the next step.
pub fn step_field(mut state: ResMut<FieldState>, params: Res<FieldParams>) {
    if !state.running() {
        return;
    }

    let bounds = state.bounds();
    let (particles, obstacles) = state.particles_mut_and_obstacles();
    step(particles, obstacles, &params, bounds, &mut rand::rng());
}
