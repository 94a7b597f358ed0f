use bevy::prelude::*;
use rand::Rng;

use crate::config::FieldParams;
use crate::core::particle::Particle;
use crate::core::particle_set::ParticleSet;
use crate::geometry::Obstacle;
use crate::math::Vector;
use crate::presets::FieldPreset;

/// Aggregate state for one particle field.
///
/// Owns the particle batch, the obstacle layout, the canvas bounds and the
/// running flag; everything one animation surface needs, advanced once per
/// frame by `solver::step_field`.
#[derive(Resource)]
pub struct FieldState {
    preset: FieldPreset,
    bounds: Vector,
    particle_set: ParticleSet,
    obstacles: Vec<Obstacle>,
    running: bool,
    reseed_requested: bool,
}

impl FieldState {
    pub fn new(preset: FieldPreset) -> Self {
        Self {
            preset,
            bounds: Vector::ZERO,
            particle_set: ParticleSet::new(),
            obstacles: Vec::new(),
            running: true,
            // Bounds are unknown until the window is first queried.
            reseed_requested: true,
        }
    }

    pub fn preset(&self) -> &FieldPreset {
        &self.preset
    }

    /// Install a different preset; particles regenerate on the next frame.
    pub fn set_preset(&mut self, preset: FieldPreset) {
        self.preset = preset;
        self.reseed_requested = true;
    }

    pub fn bounds(&self) -> Vector {
        self.bounds
    }

    pub fn particle_count(&self) -> usize {
        self.particle_set.len()
    }

    pub fn particles(&self) -> &[Particle] {
        self.particle_set.particles()
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        self.particle_set.particles_mut()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Split borrow used by the per-frame step.
    pub fn particles_mut_and_obstacles(&mut self) -> (&mut [Particle], &[Obstacle]) {
        (self.particle_set.particles_mut(), &self.obstacles)
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Ask for a regeneration with the current preset on the next frame.
    pub fn request_reseed(&mut self) {
        self.reseed_requested = true;
    }

    /// Whether the canvas changed size or a reseed is pending.
    pub fn needs_reseed(&self, bounds: Vector) -> bool {
        self.reseed_requested || self.bounds != bounds
    }

    /// Regenerate the particle batch and obstacle layout for new bounds.
    pub fn reseed(&mut self, bounds: Vector, params: &FieldParams, rng: &mut impl Rng) {
        self.bounds = bounds;
        self.obstacles = self.preset.layout_obstacles(bounds);
        let batch = self.preset.seed(bounds, params, rng);
        self.particle_set.replace(batch);
        self.reseed_requested = false;

        debug!(
            "reseeded '{}' field: {} particles, {} obstacles, {}x{}",
            self.preset.name,
            self.particle_set.len(),
            self.obstacles.len(),
            bounds.x,
            bounds.y,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BOUNDS: Vector = Vector::new(640.0, 480.0);

    #[test]
    fn fresh_state_wants_a_reseed() {
        let state = FieldState::new(FieldPreset::demo());
        assert!(state.needs_reseed(BOUNDS));
    }

    #[test]
    fn reseed_populates_particles_and_obstacles() {
        let mut state = FieldState::new(FieldPreset::demo());
        let mut rng = StdRng::seed_from_u64(11);
        state.reseed(BOUNDS, &FieldParams::default(), &mut rng);

        assert_eq!(state.particle_count(), 150);
        assert_eq!(state.obstacles().len(), 2);
        assert_eq!(state.bounds(), BOUNDS);
        assert!(!state.needs_reseed(BOUNDS));
    }

    #[test]
    fn resize_triggers_reseed() {
        let mut state = FieldState::new(FieldPreset::hero());
        let mut rng = StdRng::seed_from_u64(11);
        state.reseed(BOUNDS, &FieldParams::default(), &mut rng);

        assert!(state.needs_reseed(Vector::new(800.0, 600.0)));
        assert!(!state.needs_reseed(BOUNDS));
    }

    #[test]
    fn preset_switch_triggers_reseed() {
        let mut state = FieldState::new(FieldPreset::hero());
        let mut rng = StdRng::seed_from_u64(11);
        state.reseed(BOUNDS, &FieldParams::default(), &mut rng);

        state.set_preset(FieldPreset::demo());
        assert!(state.needs_reseed(BOUNDS));
    }

    #[test]
    fn pause_and_resume_toggle_the_flag() {
        let mut state = FieldState::new(FieldPreset::hero());
        assert!(state.running());
        state.pause();
        assert!(!state.running());
        state.resume();
        assert!(state.running());
        state.toggle_running();
        assert!(!state.running());
    }

    #[test]
    fn zero_count_reseed_is_fine() {
        let mut state = FieldState::new(FieldPreset::hero().with_count(0));
        let mut rng = StdRng::seed_from_u64(11);
        state.reseed(BOUNDS, &FieldParams::default(), &mut rng);
        assert_eq!(state.particle_count(), 0);
    }
}
