//! Point particles for the field animation
//!
//! Particles carry position, velocity, a fixed visual radius and a fixed
//! color. They are created in a batch, mutated in place every frame, and
//! discarded wholesale on reset.

use bevy::prelude::Color;

use crate::math::{Real, Vector, zero_vector};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vector,
    pub velocity: Vector,
    pub radius: Real,
    pub color: Color,
}

impl Particle {
    pub fn zeroed() -> Self {
        Self {
            position: zero_vector(),
            velocity: zero_vector(),
            radius: 1.0,
            color: Color::WHITE,
        }
    }

    pub fn new(position: Vector) -> Self {
        Self {
            position,
            ..Self::zeroed()
        }
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_radius(mut self, radius: Real) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[inline(always)]
    pub fn speed(&self) -> Real {
        self.velocity.length()
    }
}
