//! Laminar pipe-flow visualizer
//!
//! A second decorative animation: horizontal flow layers inside a pipe with
//! a parabolic velocity profile, tracer dots drifting per layer, and the
//! profile curve drawn across the pipe. Disabled by default; the demo binary
//! toggles it over the particle field.

use bevy::prelude::*;

use crate::math::{Real, Vector};

pub const LAYER_COUNT: usize = 20;
pub const TRACERS_PER_LAYER: usize = 5;
/// Fraction of the canvas height occupied by the pipe.
pub const PIPE_HEIGHT_RATIO: Real = 0.8;
/// Tracer drift in canvas units per second per unit of layer speed.
pub const TRACER_DRIFT_SCALE: Real = 20.0;

const WALL_COLOR: Color = Color::srgb(0.4, 0.4, 0.4);
const TRACER_COLOR: Color = Color::WHITE;
const PROFILE_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.7);
const TRACER_RADIUS: Real = 2.0;

/// Externally adjustable parameters for the laminar overlay.
#[derive(Resource, Clone, Copy, Debug)]
pub struct LaminarParams {
    pub enabled: bool,
    /// Reynolds-number slider, nominally 1..=10.
    pub reynolds: Real,
    /// Damping slider in [0, 1]; thicker fluid flows slower.
    pub viscosity: Real,
}

impl Default for LaminarParams {
    fn default() -> Self {
        Self {
            enabled: false,
            reynolds: 5.0,
            viscosity: 0.8,
        }
    }
}

/// Parabolic profile over the pipe cross-section: 1 at the centerline,
/// 0 at both walls. `normalized_y` runs from -1 (one wall) to 1 (the other).
#[inline]
pub fn velocity_profile(normalized_y: Real) -> Real {
    1.0 - normalized_y * normalized_y
}

/// Flow speed of one layer, scaled by the Reynolds slider and slowed by
/// viscosity. The +0.2 keeps the divisor away from zero at full viscosity.
pub fn layer_speed(layer: usize, params: &LaminarParams) -> Real {
    let normalized_y = 2.0 * (layer as Real / LAYER_COUNT as Real) - 1.0;
    velocity_profile(normalized_y) * params.reynolds * 2.0 / (params.viscosity + 0.2)
}

/// Speed-interpolated layer tint: slow layers deep blue, fast layers bright.
pub fn layer_tint(speed: Real) -> Color {
    let r = (speed * 25.0).min(255.0) / 255.0;
    let g = (50.0 + speed * 10.0).min(255.0) / 255.0;
    let b = (150.0 + speed * 10.0).min(255.0) / 255.0;
    Color::srgba(r, g, b, 0.8)
}

/// Horizontal tracer position for one dot, wrapping at the canvas width.
pub fn tracer_x(elapsed_secs: Real, speed: Real, tracer: usize, width: Real) -> Real {
    if width <= 0.0 {
        return 0.0;
    }
    let spacing = width / TRACERS_PER_LAYER as Real;
    (elapsed_secs * speed * TRACER_DRIFT_SCALE + tracer as Real * spacing) % width
}

/// Gizmo overlay drawing the pipe, layers, tracers and profile curve.
pub fn draw_laminar(
    params: Res<LaminarParams>,
    time: Res<Time>,
    window: Query<&Window>,
    mut gizmos: Gizmos,
) {
    if !params.enabled {
        return;
    }
    let Ok(window) = window.single() else {
        return;
    };

    let width = window.width();
    let height = window.height();
    let pipe_height = height * PIPE_HEIGHT_RATIO;
    let pipe_top = (height - pipe_height) / 2.0;
    let half = Vector::new(width, height) / 2.0;
    // Canvas (y down, origin top-left) to world.
    let to_world = |x: Real, y: Real| Vector::new(x - half.x, half.y - y);

    // Pipe walls.
    gizmos.line_2d(to_world(0.0, pipe_top), to_world(width, pipe_top), WALL_COLOR);
    gizmos.line_2d(
        to_world(0.0, pipe_top + pipe_height),
        to_world(width, pipe_top + pipe_height),
        WALL_COLOR,
    );

    let layer_height = pipe_height / LAYER_COUNT as Real;
    let elapsed = time.elapsed_secs();

    for layer in 0..LAYER_COUNT {
        let y = pipe_top + layer as Real * layer_height;
        let speed = layer_speed(layer, &params);
        let mid = y + layer_height / 2.0;

        gizmos.line_2d(to_world(0.0, mid), to_world(width, mid), layer_tint(speed));

        for tracer in 0..TRACERS_PER_LAYER {
            let x = tracer_x(elapsed, speed, tracer, width);
            gizmos.circle_2d(to_world(x, mid), TRACER_RADIUS, TRACER_COLOR);
        }
    }

    // Velocity profile curve bulging from the pipe centerline.
    let max_bulge = width / 4.0;
    let mut points = vec![to_world(width / 2.0, pipe_top)];
    let mut y = 0.0;
    while y <= pipe_height {
        let normalized_y = 2.0 * (y / pipe_height) - 1.0;
        let speed = velocity_profile(normalized_y) * params.reynolds * 2.0
            / (params.viscosity + 0.2);
        points.push(to_world(width / 2.0 + speed * max_bulge / 50.0, pipe_top + y));
        y += 5.0;
    }
    points.push(to_world(width / 2.0, pipe_top + pipe_height));
    gizmos.linestrip_2d(points, PROFILE_COLOR);
}
