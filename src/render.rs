//! Rendering systems
//!
//! One mesh entity per particle (index-keyed like the solver state), link
//! lines and obstacle outlines via gizmos. The canvas coordinate system is
//! y-down with the origin at the top-left, converted here into world space.

use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::config::FieldParams;
use crate::core::FieldState;
use crate::geometry::Obstacle;
use crate::math::Vector;

const OBSTACLE_COLOR: Color = Color::srgba(0.39, 0.39, 0.39, 0.5);
const LINK_WIDTH: f32 = 0.5;

#[derive(Component)]
pub struct ParticleVisual {
    pub index: usize,
}

/// Canvas coordinates (origin top-left, y down) to world coordinates
/// (origin at canvas center, y up).
#[inline]
pub fn field_to_world(position: Vector, bounds: Vector) -> Vec3 {
    Vec3::new(position.x - bounds.x / 2.0, bounds.y / 2.0 - position.y, 0.0)
}

fn spawn_particle_entity(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    index: usize,
    position: Vec3,
    radius: f32,
    color: Color,
) {
    commands.spawn((
        ParticleVisual { index },
        Mesh2d(meshes.add(Circle::new(radius))),
        MeshMaterial2d(materials.add(color)),
        Transform::from_translation(position),
    ));
}

/// Re-query the drawing surface every frame; regenerate the field whenever
/// the dimensions changed or a reseed was requested, and rebuild the visual
/// entities to match the new batch.
pub fn sync_canvas(
    mut commands: Commands,
    window: Query<&Window>,
    mut state: ResMut<FieldState>,
    params: Res<FieldParams>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    visuals: Query<Entity, With<ParticleVisual>>,
) {
    // No drawing surface: the loop simply does not start.
    let Ok(window) = window.single() else {
        return;
    };

    let bounds = Vector::new(window.width(), window.height());
    if bounds.x <= 0.0 || bounds.y <= 0.0 || !state.needs_reseed(bounds) {
        return;
    }

    state.reseed(bounds, &params, &mut rand::rng());

    for entity in visuals.iter() {
        commands.entity(entity).despawn();
    }

    for (index, particle) in state.particles().iter().enumerate() {
        spawn_particle_entity(
            &mut commands,
            &mut meshes,
            &mut materials,
            index,
            field_to_world(particle.position, bounds),
            particle.radius,
            particle.color,
        );
    }
}

pub fn update_particle_transforms(
    state: Res<FieldState>,
    mut query: Query<(&ParticleVisual, &mut Transform)>,
) {
    let bounds = state.bounds();
    let particles = state.particles();
    for (visual, mut transform) in query.iter_mut() {
        if let Some(particle) = particles.get(visual.index) {
            transform.translation = field_to_world(particle.position, bounds);
        }
    }
}

/// Faint lines between every pair of particles within the preset link
/// distance. O(n^2) over at most a couple hundred particles.
pub fn draw_links(state: Res<FieldState>, mut gizmos: Gizmos) {
    let bounds = state.bounds();
    let link_distance = state.preset().link_distance;
    let link_color = state.preset().link_color;
    let particles = state.particles();

    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let a = particles[i].position;
            let b = particles[j].position;
            if a.distance(b) < link_distance {
                gizmos.line_2d(
                    field_to_world(a, bounds).truncate(),
                    field_to_world(b, bounds).truncate(),
                    link_color,
                );
            }
        }
    }
}

pub fn draw_obstacles(state: Res<FieldState>, mut gizmos: Gizmos) {
    let bounds = state.bounds();
    for obstacle in state.obstacles() {
        match *obstacle {
            Obstacle::Circle { center, radius } => {
                gizmos.circle_2d(
                    field_to_world(center, bounds).truncate(),
                    radius,
                    OBSTACLE_COLOR,
                );
            }
            Obstacle::Rect { min, size } => {
                let center = min + size / 2.0;
                gizmos.rect_2d(
                    Isometry2d::from_translation(field_to_world(center, bounds).truncate()),
                    size,
                    OBSTACLE_COLOR,
                );
            }
        }
    }
}

// Keeps gizmo line width at the faint hairline the site used.
pub fn configure_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = LINK_WIDTH;
}
