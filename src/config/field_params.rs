use bevy::prelude::*;

use crate::config::constants::{DEFAULT_JITTER, VISCOSITY_DAMPING};
use crate::math::Real;

/// Externally adjustable parameters for the particle field.
///
/// Both sliders live in `[0, 1]` and are read fresh at the start of each
/// frame; changes between frames take effect on the next step only.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    /// Damping coefficient: higher values slow particles faster.
    pub viscosity: Real,

    /// Scales the displacement applied per frame.
    pub flow_velocity: Real,

    /// Amplitude of the per-step random velocity jitter. Cosmetic; set to
    /// zero for deterministic motion.
    pub jitter: Real,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            viscosity: 0.5,
            flow_velocity: 0.5,
            jitter: DEFAULT_JITTER,
        }
    }
}

impl FieldParams {
    pub fn new(viscosity: Real, flow_velocity: Real) -> Self {
        Self {
            viscosity: viscosity.clamp(0.0, 1.0),
            flow_velocity: flow_velocity.clamp(0.0, 1.0),
            jitter: DEFAULT_JITTER,
        }
    }

    pub fn with_jitter(mut self, jitter: Real) -> Self {
        self.jitter = jitter.max(0.0);
        self
    }

    pub fn set_viscosity(&mut self, viscosity: Real) {
        self.viscosity = viscosity.clamp(0.0, 1.0);
    }

    pub fn set_flow_velocity(&mut self, flow_velocity: Real) {
        self.flow_velocity = flow_velocity.clamp(0.0, 1.0);
    }

    /// Multiplicative velocity damping factor for one step.
    #[inline(always)]
    pub fn damping_factor(&self) -> Real {
        1.0 - VISCOSITY_DAMPING * self.viscosity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_unit_range() {
        let params = FieldParams::new(1.7, -0.3);
        assert_eq!(params.viscosity, 1.0);
        assert_eq!(params.flow_velocity, 0.0);
    }

    #[test]
    fn setters_clamp() {
        let mut params = FieldParams::default();
        params.set_viscosity(2.0);
        params.set_flow_velocity(-1.0);
        assert_eq!(params.viscosity, 1.0);
        assert_eq!(params.flow_velocity, 0.0);
    }

    #[test]
    fn damping_factor_spans_half_to_one() {
        assert_eq!(FieldParams::new(0.0, 0.5).damping_factor(), 1.0);
        assert_eq!(FieldParams::new(1.0, 0.5).damping_factor(), 0.5);
    }
}
