//! Obstacle collision pass
//!
//! Obstacles are tested independently and resolved sequentially; they are
//! sparse and non-overlapping, so no simultaneous solve is needed.

use crate::core::Particle;
use crate::geometry::Obstacle;

pub fn resolve_obstacles(particle: &mut Particle, obstacles: &[Obstacle]) {
    for obstacle in obstacles {
        obstacle.resolve(&mut particle.position, &mut particle.velocity, particle.radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;

    #[test]
    fn penetrating_particle_ends_up_tangent() {
        let center = Vec2::new(200.0, 200.0);
        let obstacles = [Obstacle::circle(center, 40.0)];
        let mut particle = Particle::new(Vec2::new(210.0, 200.0))
            .with_velocity(Vec2::new(-1.0, 0.0))
            .with_radius(3.0);

        resolve_obstacles(&mut particle, &obstacles);

        let distance = particle.position.distance(center);
        assert!(distance >= 43.0 - 1.0e-4);
    }

    #[test]
    fn resolution_is_idempotent() {
        let obstacles = [
            Obstacle::circle(Vec2::new(200.0, 200.0), 40.0),
            Obstacle::rect(Vec2::new(100.0, 320.0), Vec2::new(100.0, 20.0)),
        ];
        let mut particle = Particle::new(Vec2::new(230.0, 200.0))
            .with_velocity(Vec2::new(-2.0, 1.0))
            .with_radius(2.0);

        resolve_obstacles(&mut particle, &obstacles);
        let resolved_position = particle.position;
        let resolved_velocity = particle.velocity;

        // A second pass over an already-resolved state changes nothing.
        resolve_obstacles(&mut particle, &obstacles);
        assert_eq!(particle.position, resolved_position);
        assert_eq!(particle.velocity, resolved_velocity);
    }

    #[test]
    fn clear_particle_passes_through_untouched() {
        let obstacles = [Obstacle::circle(Vec2::new(200.0, 200.0), 40.0)];
        let mut particle = Particle::new(Vec2::new(10.0, 10.0))
            .with_velocity(Vec2::new(1.0, 1.0))
            .with_radius(2.0);

        resolve_obstacles(&mut particle, &obstacles);

        assert_eq!(particle.position, Vec2::new(10.0, 10.0));
        assert_eq!(particle.velocity, Vec2::new(1.0, 1.0));
    }
}
