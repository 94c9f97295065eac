//! Startup configuration assets.
//!
//! The engine boots from one JSON presets file resolved through the asset
//! server, with built-in defaults covering a missing or unreadable file.

/// Scene presets asset: initial shape, colour, count and interaction mode.
pub mod scene_presets;
