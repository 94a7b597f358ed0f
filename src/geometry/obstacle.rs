//! Static obstacles particles deflect around.
//!
//! Geometry is fixed for the lifetime of a particle field; a resize installs
//! a freshly laid-out set.

use crate::config::constants::BOUNCE_RESTITUTION;
use crate::math::{Real, Vector, reflect, unit_normal_or_default};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Obstacle {
    Circle { center: Vector, radius: Real },
    Rect { min: Vector, size: Vector },
}

impl Obstacle {
    pub fn circle(center: Vector, radius: Real) -> Self {
        Self::Circle { center, radius }
    }

    pub fn rect(min: Vector, size: Vector) -> Self {
        Self::Rect { min, size }
    }

    /// Whether a particle of `particle_radius` at `position` penetrates this
    /// obstacle. Exact tangency does not count as overlap.
    pub fn overlaps(&self, position: Vector, particle_radius: Real) -> bool {
        match *self {
            Self::Circle { center, radius } => {
                position.distance(center) < radius + particle_radius
            }
            Self::Rect { min, size } => {
                let max = min + size;
                position.x + particle_radius > min.x
                    && position.x - particle_radius < max.x
                    && position.y + particle_radius > min.y
                    && position.y - particle_radius < max.y
            }
        }
    }

    /// Resolve a collision against this obstacle, mutating position and
    /// velocity in place. No-op when there is no penetration.
    pub fn resolve(&self, position: &mut Vector, velocity: &mut Vector, particle_radius: Real) {
        if !self.overlaps(*position, particle_radius) {
            return;
        }

        match *self {
            Self::Circle { center, radius } => {
                let offset = *position - center;
                let distance = offset.length();
                let normal = unit_normal_or_default(offset);

                *velocity = reflect(*velocity, normal);

                // Push the particle out along the normal so it rests tangent.
                let penetration = radius + particle_radius - distance;
                *position += normal * penetration;
            }
            Self::Rect { min, size } => {
                let max = min + size;

                // Coarse side heuristic: a center already past the rect's
                // x-extent bounces horizontally, anything else vertically.
                // Diagonal approaches can mis-classify; kept as cosmetic.
                if position.x < min.x || position.x > max.x {
                    velocity.x *= -BOUNCE_RESTITUTION;
                } else {
                    velocity.y *= -BOUNCE_RESTITUTION;
                }

                if position.x < min.x {
                    position.x = min.x - particle_radius;
                }
                if position.x > max.x {
                    position.x = max.x + particle_radius;
                }
                if position.y < min.y {
                    position.y = min.y - particle_radius;
                }
                if position.y > max.y {
                    position.y = max.y + particle_radius;
                }
            }
        }
    }
}
