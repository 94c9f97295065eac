//! Procedural point generation for the selectable cloud silhouettes.
//!
//! Every generator fills a flat `xyzxyz` buffer of `3 * count` finite
//! values, each point drawn independently. Generation is randomised; the
//! seeded entry point exists so tests and offline tooling get reproducible
//! clouds.

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};
use tracing::debug;

use crate::error::CloudError;

/// Selectable cloud silhouettes, in selection order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Heart,
    Flower,
    Saturn,
    Buddha,
    Fireworks,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Heart,
        ShapeKind::Flower,
        ShapeKind::Saturn,
        ShapeKind::Buddha,
        ShapeKind::Fireworks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Heart => "Heart",
            ShapeKind::Flower => "Flower",
            ShapeKind::Saturn => "Saturn",
            ShapeKind::Buddha => "Buddha",
            ShapeKind::Fireworks => "Fireworks",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Generate a cloud with an entropy-seeded rng.
pub fn generate(kind: ShapeKind, count: usize) -> Result<Vec<f32>, CloudError> {
    let mut rng = SmallRng::from_os_rng();
    generate_with(kind, count, &mut rng)
}

/// Generate a fully deterministic cloud from an explicit seed.
pub fn generate_seeded(kind: ShapeKind, count: usize, seed: u64) -> Result<Vec<f32>, CloudError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_with(kind, count, &mut rng)
}

/// Generate a cloud using the caller's rng.
pub fn generate_with<R: Rng>(
    kind: ShapeKind,
    count: usize,
    rng: &mut R,
) -> Result<Vec<f32>, CloudError> {
    if count == 0 {
        return Err(CloudError::InvalidPointCount { requested: count });
    }

    let mut positions = Vec::with_capacity(count * 3);
    for _ in 0..count {
        let point = match kind {
            ShapeKind::Heart => heart_point(rng),
            ShapeKind::Flower => flower_point(rng),
            ShapeKind::Saturn => saturn_point(rng),
            ShapeKind::Buddha => buddha_point(rng),
            ShapeKind::Fireworks => fireworks_point(rng),
        };
        positions.extend_from_slice(&point.to_array());
    }

    debug!("generated {count} point {kind} cloud");
    Ok(positions)
}

const HEART_SCALE: f32 = 0.25;

/// Parametric heart curve with depth and an inward spread so the volume
/// fills rather than outlining.
fn heart_point<R: Rng>(rng: &mut R) -> Vec3 {
    let theta = rng.random::<f32>() * TAU;

    let hx = 16.0 * theta.sin().powi(3);
    let hy = 13.0 * theta.cos()
        - 5.0 * (2.0 * theta).cos()
        - 2.0 * (3.0 * theta).cos()
        - (4.0 * theta).cos();

    let x = hx * HEART_SCALE;
    let y = hy * HEART_SCALE;
    // Thicker through the middle, flat at the lobes and tip.
    let z = (rng.random::<f32>() - 0.5) * 4.0 * theta.sin();

    let spread = rng.random::<f32>();
    Vec3::new(x, y, z) * spread
}

/// Four-petal polar rose, lifted into a shallow dome.
fn flower_point<R: Rng>(rng: &mut R) -> Vec3 {
    let theta = rng.random::<f32>() * TAU;
    let radius = (4.0 * theta).cos() + 2.0;
    let dist = rng.random::<f32>() * 2.0;

    Vec3::new(
        dist * theta.cos() * radius,
        (dist * PI).sin() * 2.0 - 1.0,
        dist * theta.sin() * radius,
    )
}

/// Ring-plane tilt about x, radians.
pub const SATURN_TILT: f32 = 0.4;
/// Share of points landing in the ring rather than the body.
pub const SATURN_RING_FRACTION: f32 = 0.6;
pub const SATURN_RING_INNER: f32 = 3.0;
pub const SATURN_RING_OUTER: f32 = 5.5;
pub const SATURN_BODY_RADIUS: f32 = 2.5;

/// Ringed planet: a thin annulus around a solid body, the whole tilted
/// about x.
fn saturn_point<R: Rng>(rng: &mut R) -> Vec3 {
    let p = if rng.random::<f32>() < SATURN_RING_FRACTION {
        let angle = rng.random::<f32>() * TAU;
        let radius =
            SATURN_RING_INNER + rng.random::<f32>() * (SATURN_RING_OUTER - SATURN_RING_INNER);
        Vec3::new(
            angle.cos() * radius,
            (rng.random::<f32>() - 0.5) * 0.2,
            angle.sin() * radius,
        )
    } else {
        sphere_point(rng, SATURN_BODY_RADIUS)
    };

    let (sin_t, cos_t) = SATURN_TILT.sin_cos();
    Vec3::new(p.x, p.y * cos_t - p.z * sin_t, p.y * sin_t + p.z * cos_t)
}

/// Downward shift applied to the assembled figure so it sits centred.
pub const BUDDHA_DROP: f32 = 1.5;

/// Abstract meditating silhouette stacked from three regions: head sphere,
/// torso column, wide base annulus. The finished point drops on y so the
/// composite sits centred.
fn buddha_point<R: Rng>(rng: &mut R) -> Vec3 {
    let region = rng.random::<f32>();

    let mut p = if region < 0.2 {
        sphere_point(rng, 0.8) + Vec3::new(0.0, 2.5, 0.0)
    } else if region < 0.6 {
        let angle = rng.random::<f32>() * TAU;
        let radius = rng.random::<f32>() * 1.2;
        Vec3::new(
            angle.cos() * radius,
            rng.random::<f32>() * 2.5,
            angle.sin() * radius,
        )
    } else {
        let angle = rng.random::<f32>() * TAU;
        let radius = 1.0 + rng.random::<f32>() * 2.0;
        Vec3::new(
            angle.cos() * radius,
            (rng.random::<f32>() - 0.5) * 0.8,
            angle.sin() * radius,
        )
    };

    p.y -= BUDDHA_DROP;
    p
}

/// Outer burst radius.
pub const FIREWORKS_RADIUS: f32 = 5.0;

/// Burst snapshot: radii biased hard toward the outer shell so the cloud
/// reads as an explosion front, not a filled ball.
fn fireworks_point<R: Rng>(rng: &mut R) -> Vec3 {
    let radius = FIREWORKS_RADIUS * rng.random::<f32>().powf(0.1);
    unit_direction(rng) * radius
}

/// Uniform point inside a sphere. The cube root keeps interior density
/// uniform instead of clustering at the centre.
fn sphere_point<R: Rng>(rng: &mut R, radius: f32) -> Vec3 {
    let r = radius * rng.random::<f32>().cbrt();
    unit_direction(rng) * r
}

/// Uniform direction on the unit sphere via the acos polar-angle draw.
fn unit_direction<R: Rng>(rng: &mut R) -> Vec3 {
    let theta = rng.random::<f32>() * TAU;
    let phi = (2.0 * rng.random::<f32>() - 1.0).acos();
    let sin_phi = phi.sin();
    Vec3::new(sin_phi * theta.cos(), sin_phi * theta.sin(), phi.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_direction_is_normalised() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..200 {
            let d = unit_direction(&mut rng);
            assert_relative_eq!(d.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn sphere_point_stays_inside_radius() {
        let mut rng = SmallRng::seed_from_u64(12);
        for _ in 0..500 {
            assert!(sphere_point(&mut rng, 2.5).length() <= 2.5 + 1e-5);
        }
    }

    #[test]
    fn shape_names_round_trip_through_serde() {
        for kind in ShapeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: ShapeKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }
}
