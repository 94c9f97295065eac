//! Core application state management.
//!
//! Handles the loading-to-running lifecycle and the marker components for
//! the built-in UI overlays.

/// Application state machine and loading transitions.
///
/// Loading covers preset resolution and cloud creation; Running drives the
/// per-frame simulation systems.
pub mod app_state;
