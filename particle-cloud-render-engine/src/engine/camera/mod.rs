//! Orbit camera for the particle scene.
//!
//! Drag-to-orbit around the cloud at a fixed radius with smoothed
//! interpolation and a clamped pitch band. No zoom, no pan.

/// Orbit camera resource and controller system.
pub mod orbit_camera;
