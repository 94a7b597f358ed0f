use bevy::prelude::*;

pub mod config;
pub mod core;
pub mod geometry;
pub mod laminar;
pub mod math;
pub mod presets;
pub mod render;
pub mod solver;

// Public re-exports for clean API
pub use crate::config::{FieldParams, constants};
pub use crate::core::{FieldState, Particle, ParticleSet};
pub use crate::geometry::Obstacle;
pub use crate::laminar::LaminarParams;
pub use crate::presets::FieldPreset;

use crate::render::{
    configure_gizmos, draw_links, draw_obstacles, sync_canvas, update_particle_transforms,
};
use crate::solver::step_field;

/// Particle field animator plugin.
///
/// Owns the whole frame pipeline: re-query the surface and reseed on change,
/// advance the field, sync visuals, then draw obstacles and proximity links.
/// Everything runs to completion within one frame in a fixed order.
pub struct FlowFieldPlugin {
    pub preset: FieldPreset,
}

impl Default for FlowFieldPlugin {
    fn default() -> Self {
        Self {
            preset: FieldPreset::demo(),
        }
    }
}

impl Plugin for FlowFieldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(FieldState::new(self.preset))
            .insert_resource(FieldParams::default())
            .insert_resource(LaminarParams::default())
            .add_systems(Startup, configure_gizmos)
            .add_systems(
                Update,
                (
                    sync_canvas,
                    step_field,
                    update_particle_transforms,
                    draw_obstacles,
                    draw_links,
                    laminar::draw_laminar,
                )
                    .chain(),
            );
    }
}
