//! Morph and scatter state for a live cloud.
//!
//! The engine owns two position buffers. `current` is what a host renders;
//! `target` is the silhouette the cloud is converging toward. Each tick
//! moves every coordinate a rate-limited step toward its target, smooths
//! the scatter level toward the incoming disturbance, and accumulates the
//! clock driving the jitter term.

use glam::Vec3;
use tracing::info;

use crate::error::CloudError;
use crate::shape::{self, ShapeKind};

/// Per-second fraction of the remaining distance closed by the morph.
pub const MORPH_RATE: f32 = 2.5;
/// Coordinates closer than this to their target snap exactly onto it.
pub const SNAP_EPSILON: f32 = 0.01;
/// Per-tick smoothing factor pulling scatter toward the disturbance.
pub const SCATTER_SMOOTHING: f32 = 0.1;
/// Idle spin about the vertical axis, radians per second.
pub const SPIN_RATE: f32 = 0.05;

/// Radial displacement at full scatter.
pub const SCATTER_PUSH: f32 = 5.0;
/// Noise displacement at full scatter.
pub const SCATTER_JITTER: f32 = 0.5;
/// Opacity lost at full scatter.
pub const SCATTER_FADE: f32 = 0.5;

/// Read-only view of one tick's output.
#[derive(Debug, Clone, Copy)]
pub struct CloudFrame<'a> {
    /// Flat `xyzxyz` buffer, `3 * count` values.
    pub positions: &'a [f32],
    /// Smoothed scatter level in `[0, 1]`.
    pub scatter: f32,
    /// Accumulated clock feeding the jitter term.
    pub time: f32,
    /// Accumulated idle spin, radians.
    pub spin: f32,
    /// Last colour handed to the tick, linear rgb.
    pub colour: Vec3,
}

impl CloudFrame<'_> {
    pub fn count(&self) -> usize {
        self.positions.len() / 3
    }
}

pub struct MorphEngine {
    kind: ShapeKind,
    current: Vec<f32>,
    target: Vec<f32>,
    scatter: f32,
    elapsed: f32,
    spin: f32,
    colour: Vec3,
}

impl MorphEngine {
    /// Build an engine already settled on `kind`: current and target start
    /// identical, so nothing moves until the first retarget.
    pub fn new(kind: ShapeKind, count: usize) -> Result<Self, CloudError> {
        let positions = shape::generate(kind, count)?;
        Ok(Self::from_positions(kind, positions))
    }

    /// Seeded variant of [`MorphEngine::new`] for reproducible runs.
    pub fn new_seeded(kind: ShapeKind, count: usize, seed: u64) -> Result<Self, CloudError> {
        let positions = shape::generate_seeded(kind, count, seed)?;
        Ok(Self::from_positions(kind, positions))
    }

    fn from_positions(kind: ShapeKind, positions: Vec<f32>) -> Self {
        Self {
            kind,
            current: positions.clone(),
            target: positions,
            scatter: 0.0,
            elapsed: 0.0,
            spin: 0.0,
            colour: Vec3::ONE,
        }
    }

    /// Swap in a freshly generated target silhouette. Current positions are
    /// left alone so the cloud morphs over from wherever it is.
    pub fn retarget(&mut self, kind: ShapeKind) -> Result<(), CloudError> {
        self.target = shape::generate(kind, self.count())?;
        self.kind = kind;
        info!("morphing toward {kind}");
        Ok(())
    }

    /// Seeded variant of [`MorphEngine::retarget`].
    pub fn retarget_seeded(&mut self, kind: ShapeKind, seed: u64) -> Result<(), CloudError> {
        self.target = shape::generate_seeded(kind, self.count(), seed)?;
        self.kind = kind;
        info!("morphing toward {kind}");
        Ok(())
    }

    /// Resize the cloud. Both buffers are rebuilt together at the new count
    /// so they can never disagree on length; the scatter level and clocks
    /// carry over.
    pub fn set_count(&mut self, count: usize) -> Result<(), CloudError> {
        if count == self.count() {
            return Ok(());
        }
        let positions = shape::generate(self.kind, count)?;
        self.current = positions.clone();
        self.target = positions;
        info!("rebuilt cloud with {count} points");
        Ok(())
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// `disturbance` is the raw interaction level for this tick; the engine
    /// smooths it, so feeding a spiky signal still yields a calm scatter.
    /// `colour` passes through to the next [`CloudFrame`] untouched.
    pub fn advance(&mut self, dt: f32, disturbance: f32, colour: Vec3) {
        let dt = dt.max(0.0);
        let disturbance = disturbance.clamp(0.0, 1.0);

        self.scatter += (disturbance - self.scatter) * SCATTER_SMOOTHING;

        let step = MORPH_RATE * dt;
        for (current, target) in self.current.iter_mut().zip(&self.target) {
            let diff = target - *current;
            if diff.abs() > SNAP_EPSILON {
                *current += diff * step;
            } else {
                *current = *target;
            }
        }

        self.spin += SPIN_RATE * dt;
        self.elapsed += dt;
        self.colour = colour;
    }

    /// Current tick output. Borrowing keeps this free of copies and makes
    /// the read-only contract structural.
    pub fn snapshot(&self) -> CloudFrame<'_> {
        CloudFrame {
            positions: &self.current,
            scatter: self.scatter,
            time: self.elapsed,
            spin: self.spin,
            colour: self.colour,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn count(&self) -> usize {
        self.current.len() / 3
    }

    pub fn scatter(&self) -> f32 {
        self.scatter
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn colour(&self) -> Vec3 {
        self.colour
    }
}

/// Jitter field sampled per point. Mirrors the vertex shader so CPU-side
/// tooling can reproduce exactly what the GPU displaces.
pub fn scatter_noise(position: Vec3, time: f32) -> f32 {
    (position.y * 2.0 + time).sin() * (position.x * 2.0 + time * 0.5).cos()
}

/// Rest position pushed outward along its radial direction plus a uniform
/// jitter offset. A point at the origin has no radial direction and only
/// jitters.
pub fn scattered_position(position: Vec3, scatter: f32, time: f32) -> Vec3 {
    let outward = position.normalize_or_zero() * scatter * SCATTER_PUSH;
    let jitter = Vec3::splat(scatter_noise(position, time)) * scatter * SCATTER_JITTER;
    position + outward + jitter
}

/// Point opacity at a given scatter level.
pub fn scatter_alpha(scatter: f32) -> f32 {
    1.0 - scatter * SCATTER_FADE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn coordinates_inside_epsilon_snap_exactly() {
        let mut engine = MorphEngine::new_seeded(ShapeKind::Heart, 4, 7).unwrap();
        engine.retarget_seeded(ShapeKind::Heart, 8).unwrap();
        for _ in 0..3000 {
            engine.advance(0.016, 0.0, Vec3::ONE);
        }
        let frame = engine.snapshot();
        assert_eq!(frame.positions, engine.target.as_slice());
    }

    #[test]
    fn scatter_smoothing_is_per_tick_not_per_second() {
        let mut fast = MorphEngine::new_seeded(ShapeKind::Flower, 2, 1).unwrap();
        let mut slow = MorphEngine::new_seeded(ShapeKind::Flower, 2, 1).unwrap();
        fast.advance(0.008, 1.0, Vec3::ONE);
        slow.advance(0.032, 1.0, Vec3::ONE);
        assert_relative_eq!(fast.scatter(), slow.scatter());
        assert_relative_eq!(fast.scatter(), SCATTER_SMOOTHING);
    }

    #[test]
    fn origin_point_scatters_without_nan() {
        let p = scattered_position(Vec3::ZERO, 1.0, 3.0);
        assert!(p.is_finite());
        // Jitter only; no radial push to inherit.
        let noise = scatter_noise(Vec3::ZERO, 3.0);
        assert_relative_eq!(p.x, noise * SCATTER_JITTER);
    }

    #[test]
    fn resize_rebuilds_both_buffers_together() {
        let mut engine = MorphEngine::new_seeded(ShapeKind::Saturn, 100, 3).unwrap();
        engine.retarget_seeded(ShapeKind::Buddha, 4).unwrap();
        engine.advance(0.016, 0.5, Vec3::ONE);
        engine.set_count(50).unwrap();
        assert_eq!(engine.count(), 50);
        assert_eq!(engine.current.len(), engine.target.len());
        assert_eq!(engine.current, engine.target);
    }
}
