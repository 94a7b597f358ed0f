//! Field presets
//!
//! One configurable animator replaces the site's three near-identical
//! per-page copies: a preset carries the particle count, look, link
//! threshold, and an obstacle layout derived from the canvas bounds.

use bevy::prelude::Color;
use rand::Rng;

use crate::config::constants::{
    INIT_SPEED_SCALE, PARTICLE_ALPHA, PARTICLE_LIGHTNESS, PARTICLE_SATURATION,
};
use crate::config::FieldParams;
use crate::core::Particle;
use crate::geometry::Obstacle;
use crate::math::{Real, Vector};

/// Obstacle layout as a function of canvas bounds, so a resize can rebuild
/// the same arrangement at the new dimensions.
pub type ObstacleLayout = fn(Vector) -> Vec<Obstacle>;

#[derive(Clone, Copy, Debug)]
pub struct FieldPreset {
    pub name: &'static str,
    pub particle_count: usize,
    /// Visual radius range, `[min, max)`.
    pub radius_min: Real,
    pub radius_max: Real,
    /// Hue band for particle colors, `[min, max)` degrees.
    pub hue_min: Real,
    pub hue_max: Real,
    /// Maximum distance at which two particles get a connecting line.
    pub link_distance: Real,
    pub link_color: Color,
    pub obstacles: ObstacleLayout,
}

fn no_obstacles(_bounds: Vector) -> Vec<Obstacle> {
    Vec::new()
}

fn demo_obstacles(bounds: Vector) -> Vec<Obstacle> {
    vec![
        Obstacle::circle(bounds / 2.0, 40.0),
        Obstacle::rect(
            Vector::new(bounds.x / 4.0, bounds.y - 80.0),
            Vector::new(100.0, 20.0),
        ),
    ]
}

impl FieldPreset {
    /// Sparse background field used behind the landing hero.
    pub fn hero() -> Self {
        Self {
            name: "hero",
            particle_count: 50,
            radius_min: 2.0,
            radius_max: 7.0,
            hue_min: 190.0,
            hue_max: 250.0,
            link_distance: 100.0,
            link_color: Color::srgba(0.39, 0.78, 1.0, 0.1),
            obstacles: no_obstacles,
        }
    }

    /// Dense interactive field with a circular and a rectangular obstacle.
    pub fn demo() -> Self {
        Self {
            name: "demo",
            particle_count: 150,
            radius_min: 1.0,
            radius_max: 5.0,
            hue_min: 190.0,
            hue_max: 220.0,
            link_distance: 80.0,
            link_color: Color::srgba(0.39, 0.78, 1.0, 0.05),
            obstacles: demo_obstacles,
        }
    }

    pub fn with_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_link_distance(mut self, link_distance: Real) -> Self {
        self.link_distance = link_distance;
        self
    }

    pub fn with_obstacles(mut self, obstacles: ObstacleLayout) -> Self {
        self.obstacles = obstacles;
        self
    }

    pub fn layout_obstacles(&self, bounds: Vector) -> Vec<Obstacle> {
        (self.obstacles)(bounds)
    }

    /// Generate a fresh particle batch for the given canvas bounds.
    ///
    /// Positions are uniform over the canvas, velocity components uniform in
    /// `+-1.5 * flow_velocity`, radius and hue uniform over the preset
    /// ranges. A count of zero yields an empty batch.
    pub fn seed(&self, bounds: Vector, params: &FieldParams, rng: &mut impl Rng) -> Vec<Particle> {
        let speed = INIT_SPEED_SCALE * params.flow_velocity;
        (0..self.particle_count)
            .map(|_| {
                let position = Vector::new(
                    rng.random_range(0.0..=bounds.x),
                    rng.random_range(0.0..=bounds.y),
                );
                let velocity =
                    Vector::new(rng.random_range(-speed..=speed), rng.random_range(-speed..=speed));
                let hue = rng.random_range(self.hue_min..self.hue_max);

                Particle::new(position)
                    .with_velocity(velocity)
                    .with_radius(rng.random_range(self.radius_min..self.radius_max))
                    .with_color(Color::hsla(
                        hue,
                        PARTICLE_SATURATION,
                        PARTICLE_LIGHTNESS,
                        PARTICLE_ALPHA,
                    ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BOUNDS: Vector = Vector::new(400.0, 300.0);

    #[test]
    fn seed_respects_bounds_and_ranges() {
        let preset = FieldPreset::demo();
        let params = FieldParams::new(0.5, 1.0);
        let mut rng = StdRng::seed_from_u64(7);
        let batch = preset.seed(BOUNDS, &params, &mut rng);

        assert_eq!(batch.len(), 150);
        for particle in &batch {
            assert!(particle.position.x >= 0.0 && particle.position.x <= BOUNDS.x);
            assert!(particle.position.y >= 0.0 && particle.position.y <= BOUNDS.y);
            assert!(particle.velocity.x.abs() <= 1.5);
            assert!(particle.velocity.y.abs() <= 1.5);
            assert!(particle.radius >= 1.0 && particle.radius < 5.0);
        }
    }

    #[test]
    fn zero_flow_velocity_seeds_stationary_particles() {
        let preset = FieldPreset::hero();
        let params = FieldParams::new(0.5, 0.0);
        let mut rng = StdRng::seed_from_u64(7);
        for particle in preset.seed(BOUNDS, &params, &mut rng) {
            assert_eq!(particle.velocity, Vector::ZERO);
        }
    }

    #[test]
    fn zero_count_seeds_empty_batch() {
        let preset = FieldPreset::hero().with_count(0);
        let params = FieldParams::default();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(preset.seed(BOUNDS, &params, &mut rng).is_empty());
    }

    #[test]
    fn demo_layout_scales_with_bounds() {
        let obstacles = FieldPreset::demo().layout_obstacles(BOUNDS);
        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[0], Obstacle::circle(Vector::new(200.0, 150.0), 40.0));
        assert_eq!(
            obstacles[1],
            Obstacle::rect(Vector::new(100.0, 220.0), Vector::new(100.0, 20.0))
        );
    }

    #[test]
    fn hero_layout_is_clear() {
        assert!(FieldPreset::hero().layout_obstacles(BOUNDS).is_empty());
    }
}
