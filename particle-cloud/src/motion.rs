//! Frame-difference motion energy from a downsampled video feed.
//!
//! The estimator consumes tiny rgba rasters and keeps a single smoothed
//! activity scalar. It never talks to a camera itself; hosts decide where
//! frames come from and simply stop sampling when no feed is available.

use crate::error::CloudError;

/// Fixed analysis raster width.
pub const FRAME_WIDTH: usize = 64;
/// Fixed analysis raster height.
pub const FRAME_HEIGHT: usize = 48;
/// Pixels per analysis frame.
pub const FRAME_PIXELS: usize = FRAME_WIDTH * FRAME_HEIGHT;
/// Bytes per analysis frame, rgba interleaved.
pub const FRAME_BYTES: usize = FRAME_PIXELS * 4;

/// Summed rgb channel delta above which a pixel counts as changed.
pub const DIFF_THRESHOLD: u32 = 50;
/// Fraction of the raster that has to change for full activity.
pub const ACTIVITY_NORMALISER: f32 = 0.1;
/// Portion of the previous energy kept each sample.
pub const ENERGY_RETAIN: f32 = 0.8;
/// Portion of the new raw activity blended in each sample.
pub const ENERGY_GAIN: f32 = 0.2;

#[derive(Debug, Default)]
pub struct MotionEstimator {
    previous: Option<Vec<u8>>,
    energy: f32,
}

impl MotionEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one rgba raster and get the updated energy in `[0, 1]`.
    ///
    /// The first frame after construction or [`reset`](Self::reset) only
    /// primes the baseline and reports zero. Alpha bytes are ignored.
    pub fn sample(&mut self, frame: &[u8]) -> Result<f32, CloudError> {
        if frame.len() != FRAME_BYTES {
            return Err(CloudError::FrameLength {
                expected: FRAME_BYTES,
                got: frame.len(),
            });
        }

        match &mut self.previous {
            Some(previous) => {
                let mut changed = 0usize;
                for (now, before) in frame.chunks_exact(4).zip(previous.chunks_exact(4)) {
                    let delta = u32::from(now[0].abs_diff(before[0]))
                        + u32::from(now[1].abs_diff(before[1]))
                        + u32::from(now[2].abs_diff(before[2]));
                    if delta > DIFF_THRESHOLD {
                        changed += 1;
                    }
                }

                let raw =
                    (changed as f32 / (FRAME_PIXELS as f32 * ACTIVITY_NORMALISER)).min(1.0);
                self.energy = self.energy * ENERGY_RETAIN + raw * ENERGY_GAIN;
                previous.copy_from_slice(frame);
            }
            None => self.previous = Some(frame.to_vec()),
        }

        Ok(self.energy)
    }

    /// Last computed energy, without consuming a frame.
    pub fn value(&self) -> f32 {
        self.energy
    }

    /// Drop the baseline and zero the energy. The next sample primes again.
    pub fn reset(&mut self) {
        self.previous = None;
        self.energy = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_frame(value: u8) -> Vec<u8> {
        vec![value; FRAME_BYTES]
    }

    #[test]
    fn first_frame_only_primes() {
        let mut estimator = MotionEstimator::new();
        let energy = estimator.sample(&flat_frame(200)).unwrap();
        assert_eq!(energy, 0.0);
    }

    #[test]
    fn full_frame_change_saturates_raw_activity() {
        let mut estimator = MotionEstimator::new();
        estimator.sample(&flat_frame(0)).unwrap();
        let energy = estimator.sample(&flat_frame(255)).unwrap();
        assert_relative_eq!(energy, ENERGY_GAIN);
    }

    #[test]
    fn still_scene_decays_geometrically() {
        let mut estimator = MotionEstimator::new();
        estimator.sample(&flat_frame(0)).unwrap();
        estimator.sample(&flat_frame(255)).unwrap();
        let before = estimator.value();
        let after = estimator.sample(&flat_frame(255)).unwrap();
        assert_relative_eq!(after, before * ENERGY_RETAIN);
    }

    #[test]
    fn sub_threshold_deltas_are_ignored() {
        let mut estimator = MotionEstimator::new();
        estimator.sample(&flat_frame(100)).unwrap();
        // 16 per channel sums to 48, under the threshold.
        let energy = estimator.sample(&flat_frame(116)).unwrap();
        assert_eq!(energy, 0.0);
    }

    #[test]
    fn wrong_length_is_rejected_before_state_changes() {
        let mut estimator = MotionEstimator::new();
        let err = estimator.sample(&[0u8; 16]).unwrap_err();
        assert_eq!(
            err,
            CloudError::FrameLength {
                expected: FRAME_BYTES,
                got: 16
            }
        );
        assert_eq!(estimator.value(), 0.0);
    }

    #[test]
    fn reset_requires_repriming() {
        let mut estimator = MotionEstimator::new();
        estimator.sample(&flat_frame(0)).unwrap();
        estimator.sample(&flat_frame(255)).unwrap();
        estimator.reset();
        assert_eq!(estimator.value(), 0.0);
        let energy = estimator.sample(&flat_frame(0)).unwrap();
        assert_eq!(energy, 0.0);
    }
}
