use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use flowfield2d::{FieldParams, FieldPreset, FieldState, FlowFieldPlugin, LaminarParams};

/// Slider sweep rate per second of key hold.
const PARAM_RATE: f32 = 0.5;

fn init(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn controls(
    input: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut state: ResMut<FieldState>,
    mut params: ResMut<FieldParams>,
    mut laminar: ResMut<LaminarParams>,
) {
    if input.just_pressed(KeyCode::Space) {
        state.toggle_running();
    }
    if input.just_pressed(KeyCode::KeyR) {
        state.request_reseed();
    }
    if input.just_pressed(KeyCode::Digit1) {
        state.set_preset(FieldPreset::hero());
    }
    if input.just_pressed(KeyCode::Digit2) {
        state.set_preset(FieldPreset::demo());
    }
    if input.just_pressed(KeyCode::KeyL) {
        laminar.enabled = !laminar.enabled;
        // The overlay replaces the field visually; stop stepping under it.
        if laminar.enabled {
            state.pause();
        } else {
            state.resume();
        }
    }

    let delta = PARAM_RATE * time.delta_secs();
    if input.pressed(KeyCode::ArrowUp) {
        let viscosity = params.viscosity + delta;
        params.set_viscosity(viscosity);
    }
    if input.pressed(KeyCode::ArrowDown) {
        let viscosity = params.viscosity - delta;
        params.set_viscosity(viscosity);
    }
    if input.pressed(KeyCode::ArrowRight) {
        let flow = params.flow_velocity + delta;
        params.set_flow_velocity(flow);
    }
    if input.pressed(KeyCode::ArrowLeft) {
        let flow = params.flow_velocity - delta;
        params.set_flow_velocity(flow);
    }
}

#[derive(Component)]
struct OverlayText;

fn setup_overlay(mut commands: Commands) {
    commands.spawn((
        Text::default(),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        OverlayText,
    ));
}

fn update_overlay(
    diagnostics: Res<DiagnosticsStore>,
    state: Res<FieldState>,
    params: Res<FieldParams>,
    laminar: Res<LaminarParams>,
    mut query: Query<&mut Text, With<OverlayText>>,
) {
    for mut text in &mut query {
        let fps = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|fps| fps.smoothed())
            .unwrap_or(0.0);

        let mode = if laminar.enabled {
            "laminar".to_string()
        } else {
            format!(
                "{} ({})",
                state.preset().name,
                if state.running() { "running" } else { "paused" }
            )
        };

        text.0 = format!(
            "FPS: {:.1}\nMode: {}\nParticles: {}\nViscosity: {:.0}%  Flow: {:.0}%\n\
             [space] pause  [r] reset  [1/2] preset  [l] laminar  [arrows] sliders",
            fps,
            mode,
            state.particle_count(),
            params.viscosity * 100.0,
            params.flow_velocity * 100.0,
        );
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(FlowFieldPlugin::default())
        .add_systems(Startup, (init, setup_overlay))
        .add_systems(Update, (controls, update_overlay))
        .run();
}
