//! Shared tunables for the particle cloud workspace.

pub mod cloud;
pub mod palette;
pub mod render_settings;
