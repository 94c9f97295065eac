use bevy::prelude::*;
use particle_cloud::MotionEstimator;

/// Estimator state shared by the RPC frame handler and the synthetic feed.
#[derive(Resource, Default)]
pub struct MotionSensor {
    pub estimator: MotionEstimator,
}

impl MotionSensor {
    /// Current smoothed motion energy in `[0, 1]`.
    pub fn energy(&self) -> f32 {
        self.estimator.value()
    }

    /// Drops the reference frame so the next raster primes instead of diffing.
    pub fn reset(&mut self) {
        self.estimator.reset();
    }
}
