use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::cloud::DEFAULT_POINT_COUNT;
use constants::palette::DEFAULT_COLOUR_INDEX;
use particle_cloud::{InteractionMode, ShapeKind};

/// Startup presets as a Bevy asset. Mirrors the JSON structure exactly;
/// every field falls back to the built-in default when absent.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct ScenePresets {
    #[serde(default)]
    pub shape: ShapeKind,
    #[serde(default = "default_colour_index")]
    pub colour_index: usize,
    #[serde(default = "default_point_count")]
    pub point_count: usize,
    #[serde(default)]
    pub mode: InteractionMode,
    /// Optional fixed seed for a reproducible opening cloud.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_colour_index() -> usize {
    DEFAULT_COLOUR_INDEX
}

fn default_point_count() -> usize {
    DEFAULT_POINT_COUNT
}

impl Default for ScenePresets {
    fn default() -> Self {
        Self {
            shape: ShapeKind::default(),
            colour_index: DEFAULT_COLOUR_INDEX,
            point_count: DEFAULT_POINT_COUNT,
            mode: InteractionMode::default(),
            seed: None,
        }
    }
}
