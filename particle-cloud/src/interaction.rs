//! Mapping of pointer and motion input onto the disturbance scale.

use serde::{Deserialize, Serialize};

/// Energy multiplier lifting subtle webcam motion onto the full scale.
pub const MOTION_GAIN: f32 = 5.0;

/// Which input source drives the scatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    #[default]
    Pointer,
    Motion,
}

impl InteractionMode {
    pub fn label(self) -> &'static str {
        match self {
            InteractionMode::Pointer => "Pointer",
            InteractionMode::Motion => "Motion",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            InteractionMode::Pointer => InteractionMode::Motion,
            InteractionMode::Motion => InteractionMode::Pointer,
        }
    }
}

impl std::fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Horizontal pointer position as a disturbance level.
///
/// Deliberately unclamped: a capture drag past the window edge reads past
/// the ends, and the consumer clamps at its own boundary. A degenerate
/// width reports zero rather than dividing by it.
pub fn pointer_disturbance(x: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    x / width
}

/// Motion energy as a disturbance level, saturating at one.
pub fn motion_disturbance(energy: f32) -> f32 {
    (energy * MOTION_GAIN).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pointer_spans_the_window() {
        assert_eq!(pointer_disturbance(0.0, 1920.0), 0.0);
        assert_relative_eq!(pointer_disturbance(960.0, 1920.0), 0.5);
        assert_relative_eq!(pointer_disturbance(1920.0, 1920.0), 1.0);
    }

    #[test]
    fn pointer_outside_the_window_reads_past_the_ends() {
        assert!(pointer_disturbance(2400.0, 1920.0) > 1.0);
        assert!(pointer_disturbance(-100.0, 1920.0) < 0.0);
    }

    #[test]
    fn zero_width_window_reports_stillness() {
        assert_eq!(pointer_disturbance(500.0, 0.0), 0.0);
        assert_eq!(pointer_disturbance(500.0, -1.0), 0.0);
    }

    #[test]
    fn motion_gain_saturates() {
        assert_relative_eq!(motion_disturbance(0.05), 0.25);
        assert_relative_eq!(motion_disturbance(0.2), 1.0);
        assert_eq!(motion_disturbance(0.9), 1.0);
    }

    #[test]
    fn mode_toggle_is_an_involution() {
        for mode in [InteractionMode::Pointer, InteractionMode::Motion] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }
}
