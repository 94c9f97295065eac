//! Core simulation for an interactive particle cloud.
//!
//! A cloud is a flat buffer of points generated from one of the named
//! silhouettes, morphed toward its target a little each tick, scattered by
//! a disturbance signal, and handed to a renderer as a read-only frame.
//! Everything here is host-agnostic: no windowing, no gpu, no camera
//! access. Hosts feed ticks in and draw what comes out.

/// Library error type.
pub mod error;
/// Pointer and motion input mapped onto the disturbance scale.
pub mod interaction;
/// The per-tick morph, scatter and spin state machine.
pub mod morph;
/// Frame-difference motion energy from downsampled video rasters.
pub mod motion;
/// Procedural generators for the selectable silhouettes.
pub mod shape;

pub use error::CloudError;
pub use interaction::InteractionMode;
pub use morph::{CloudFrame, MorphEngine};
pub use motion::MotionEstimator;
pub use shape::ShapeKind;
