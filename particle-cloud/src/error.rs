use thiserror::Error;

/// Failures surfaced at the library boundary.
/// Invalid configuration is rejected before any buffer is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CloudError {
    /// A cloud needs at least one point.
    #[error("point count must be at least 1 (requested {requested})")]
    InvalidPointCount { requested: usize },

    /// A motion raster did not match the fixed estimator grid.
    #[error("motion frame must be {expected} bytes, got {got}")]
    FrameLength { expected: usize, got: usize },
}
