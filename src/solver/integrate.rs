//! Per-particle motion integration
//!
//! Advances one particle through displacement, viscous damping, velocity
//! jitter and wall bounces. Obstacle resolution happens afterwards in
//! `collide`.

use rand::Rng;

use crate::config::constants::{BOUNCE_RESTITUTION, FLOW_DISPLACEMENT_SCALE};
use crate::config::FieldParams;
use crate::core::Particle;
use crate::math::Vector;

/// Advance a single particle by one frame, without obstacle handling.
///
/// Order matters: displacement uses the pre-damping velocity, and wall
/// bounces see the jittered velocity, matching the originating animation.
pub fn integrate(particle: &mut Particle, params: &FieldParams, bounds: Vector, rng: &mut impl Rng) {
    particle.position += particle.velocity * FLOW_DISPLACEMENT_SCALE * params.flow_velocity;

    particle.velocity *= params.damping_factor();

    let jitter = params.jitter;
    particle.velocity += Vector::new(
        rng.random_range(-jitter..=jitter),
        rng.random_range(-jitter..=jitter),
    );

    bounce_off_walls(particle, bounds);
}

/// Reflect and clamp a particle that left the canvas on either axis.
pub fn bounce_off_walls(particle: &mut Particle, bounds: Vector) {
    if particle.position.x < 0.0 || particle.position.x > bounds.x {
        particle.velocity.x *= -BOUNCE_RESTITUTION;
        particle.position.x = particle.position.x.clamp(0.0, bounds.x);
    }

    if particle.position.y < 0.0 || particle.position.y > bounds.y {
        particle.velocity.y *= -BOUNCE_RESTITUTION;
        particle.position.y = particle.position.y.clamp(0.0, bounds.y);
    }
}

/// Containment invariant checked after every step.
pub fn in_bounds(particle: &Particle, bounds: Vector) -> bool {
    particle.position.x >= 0.0
        && particle.position.x <= bounds.x
        && particle.position.y >= 0.0
        && particle.position.y <= bounds.y
}
