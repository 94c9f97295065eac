use bevy::prelude::*;
use bevy::window::PrimaryWindow;
#[cfg(not(target_arch = "wasm32"))]
use constants::palette::{PALETTE, palette_hex};
use constants::palette::palette_name;
use particle_cloud::ShapeKind;

use crate::engine::cloud::CloudState;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::motion::sensor::MotionSensor;
#[cfg(target_arch = "wasm32")]
use particle_cloud::InteractionMode;

/// Track the horizontal cursor position and the window width it is read
/// against. Both feed the pointer disturbance on the next advance.
pub fn pointer_tracking_system(
    mut cursor_events: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut state: ResMut<CloudState>,
) {
    if let Ok(window) = windows.single() {
        state.window_width = window.width();
    }

    for event in cursor_events.read() {
        state.pointer_x = event.position.x;
    }
}

/// Handle shape, colour, and mode switching via keyboard input.
/// Conditionally disable keyboard input during WASM compilation; web builds
/// receive the same commands as RPC notifications instead.
pub fn keyboard_input_system(
    mut state: ResMut<CloudState>,
    #[cfg(not(target_arch = "wasm32"))] mut sensor: ResMut<MotionSensor>,
    #[cfg(not(target_arch = "wasm32"))] keyboard: Res<ButtonInput<KeyCode>>,
    #[cfg(target_arch = "wasm32")] mut last_observed: Local<
        Option<(ShapeKind, usize, InteractionMode)>,
    >,
) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut requested = None;

        if keyboard.just_pressed(KeyCode::Digit1) {
            requested = Some(ShapeKind::Heart);
        }

        if keyboard.just_pressed(KeyCode::Digit2) {
            requested = Some(ShapeKind::Flower);
        }

        if keyboard.just_pressed(KeyCode::Digit3) {
            requested = Some(ShapeKind::Saturn);
        }

        if keyboard.just_pressed(KeyCode::Digit4) {
            requested = Some(ShapeKind::Buddha);
        }

        if keyboard.just_pressed(KeyCode::Digit5) {
            requested = Some(ShapeKind::Fireworks);
        }

        if let Some(kind) = requested {
            match state.engine.retarget(kind) {
                Ok(()) => println!("Shape: {}", kind.label()),
                Err(error) => warn!("Shape change rejected: {error}"),
            }
        }

        if keyboard.just_pressed(KeyCode::KeyR) {
            let kind = state.engine.kind();
            match state.engine.retarget(kind) {
                Ok(()) => println!("Reshuffled the {} cloud", kind.label()),
                Err(error) => warn!("Reshuffle rejected: {error}"),
            }
        }

        if keyboard.just_pressed(KeyCode::KeyC) {
            state.colour_index = (state.colour_index + 1) % PALETTE.len();
            println!(
                "Colour: {} ({})",
                palette_name(state.colour_index),
                palette_hex(state.colour_index)
            );
        }

        if keyboard.just_pressed(KeyCode::KeyM) {
            state.mode = state.mode.toggled();
            // A stale baseline frame would spike the energy on re-entry.
            sensor.reset();
            println!("Interaction mode: {}", state.mode.label());
        }
    }

    // For WASM builds the same commands arrive as RPC notifications handled
    // in web_rpc.rs; this system only logs the changes it observes. The
    // whole state mutates every frame as the cloud advances, so change
    // detection alone cannot tell a command apart from a tick.
    #[cfg(target_arch = "wasm32")]
    {
        let observed = (state.engine.kind(), state.colour_index, state.mode);
        if *last_observed != Some(observed) {
            if last_observed.is_some() {
                info!(
                    "Cloud controls: {} | {} | {}",
                    observed.0.label(),
                    palette_name(observed.1),
                    observed.2.label()
                );
            }
            *last_observed = Some(observed);
        }
    }
}
