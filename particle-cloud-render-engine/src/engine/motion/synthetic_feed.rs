use bevy::prelude::*;
use particle_cloud::InteractionMode;
use particle_cloud::motion::{FRAME_BYTES, FRAME_HEIGHT, FRAME_WIDTH};

use crate::engine::cloud::CloudState;
use crate::engine::motion::sensor::MotionSensor;

/// Width of the bright bar in raster columns.
const SYNTHETIC_BAR_WIDTH: usize = 6;
/// Columns the bar drifts per frame.
const SYNTHETIC_BAR_STEP: usize = 2;

/// Wrapping column position of the bright bar.
#[derive(Resource, Default)]
pub struct SyntheticFeed {
    column: usize,
}

/// Feeds the estimator a drifting vertical bar while motion mode is active.
///
/// Each step rewrites one step width of columns at either bar edge, enough
/// to keep the energy visibly charged without pinning the raw activity.
pub fn drive_synthetic_feed(
    state: Res<CloudState>,
    mut feed: ResMut<SyntheticFeed>,
    mut sensor: ResMut<MotionSensor>,
) {
    if state.mode != InteractionMode::Motion {
        return;
    }

    let mut frame = vec![0u8; FRAME_BYTES];
    for row in 0..FRAME_HEIGHT {
        for offset in 0..SYNTHETIC_BAR_WIDTH {
            let column = (feed.column + offset) % FRAME_WIDTH;
            let index = (row * FRAME_WIDTH + column) * 4;
            frame[index] = 255;
            frame[index + 1] = 255;
            frame[index + 2] = 255;
            frame[index + 3] = 255;
        }
    }
    feed.column = (feed.column + SYNTHETIC_BAR_STEP) % FRAME_WIDTH;

    if let Err(error) = sensor.estimator.sample(&frame) {
        warn!("Synthetic motion frame rejected: {error}");
    }
}
