use bevy::prelude::*;

use crate::engine::cloud::CloudAssets;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Marker for the one-line shape/colour/mode readout.
#[derive(Component)]
pub struct StatusText;

// Final transition once the cloud entity exists
pub fn transition_to_running(
    assets: Res<CloudAssets>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if assets.is_spawned {
        println!("→ Cloud ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
