// Tuning constants for the particle field animation
use crate::math::Real;

// Motion
/// Fraction of velocity removed per step at full viscosity.
pub const VISCOSITY_DAMPING: Real = 0.5;
/// Displacement multiplier applied to `flow_velocity` each step.
pub const FLOW_DISPLACEMENT_SCALE: Real = 2.0;
/// Initial velocity components are uniform in `+-INIT_SPEED_SCALE * flow_velocity`.
pub const INIT_SPEED_SCALE: Real = 1.5;
/// Default amplitude of the per-step Brownian-like velocity jitter.
pub const DEFAULT_JITTER: Real = 0.05;

// Collisions
/// Velocity retained after bouncing off a wall or rectangle side.
pub const BOUNCE_RESTITUTION: Real = 0.8;

// Particle appearance
pub const PARTICLE_SATURATION: Real = 0.8;
pub const PARTICLE_LIGHTNESS: Real = 0.6;
pub const PARTICLE_ALPHA: Real = 0.7;
