//! Core runtime systems for cloud simulation and diagnostics.
//!
//! Provides the per-frame morph pipeline, interaction input handling,
//! and FPS tracking utilities for development and user feedback.

/// Per-frame cloud advancement and GPU upload.
///
/// Steps the morph engine, refreshes the position texture and material
/// uniforms, and rebuilds the sprite mesh when the point count changes.
pub mod cloud_update;

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to the embedding page via RPC and updates
/// native UI overlays.
pub mod fps_tracking;

/// Pointer tracking and keyboard shortcuts.
///
/// Handles cursor position capture plus shape, colour, and mode switching
/// via keyboard (native) or RPC notifications (WASM).
pub mod interaction_input;
