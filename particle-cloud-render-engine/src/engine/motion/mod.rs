//! Motion input plumbing for the host.
//!
//! The page owns the real camera on web builds and ships rasters over RPC;
//! native builds run a synthetic feed so the motion path stays exercised
//! without any capture device.

/// Shared estimator resource both frame sources sample into.
pub mod sensor;

/// Drifting-bar raster generator for native builds.
pub mod synthetic_feed;
