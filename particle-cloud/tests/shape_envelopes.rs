use glam::Vec3;
use particle_cloud::shape::{self, ShapeKind};
use particle_cloud::CloudError;

const COUNT: usize = 8000;
const EPS: f32 = 1e-3;

fn cloud(kind: ShapeKind, seed: u64) -> Vec<f32> {
    shape::generate_seeded(kind, COUNT, seed).unwrap()
}

fn points(buffer: &[f32]) -> impl Iterator<Item = Vec3> + '_ {
    buffer.chunks_exact(3).map(|c| Vec3::new(c[0], c[1], c[2]))
}

#[test]
fn every_shape_fills_the_buffer_with_finite_values() {
    for kind in ShapeKind::ALL {
        let buffer = cloud(kind, 21);
        assert_eq!(buffer.len(), COUNT * 3, "{kind}");
        assert!(buffer.iter().all(|v| v.is_finite()), "{kind}");
    }
}

#[test]
fn heart_stays_inside_the_curve_extremes() {
    for p in points(&cloud(ShapeKind::Heart, 1)) {
        // x peaks at 16 * 0.25, y at 17 * 0.25 on the lower cusp.
        assert!(p.x.abs() <= 4.0 + EPS);
        assert!(p.y >= -4.25 - EPS && p.y <= 1.25 + EPS);
        assert!(p.z.abs() <= 2.0 + EPS);
    }
}

#[test]
fn flower_petals_respect_the_rose_envelope() {
    let buffer = cloud(ShapeKind::Flower, 2);
    let mut reaches_tips = false;
    for p in points(&buffer) {
        assert!(p.y >= -3.0 - EPS && p.y <= 1.0 + EPS);
        let planar = (p.x * p.x + p.z * p.z).sqrt();
        assert!(planar <= 6.0 + EPS);
        // Radius at this angle may not exceed the rose curve itself.
        if planar > EPS {
            let theta = p.z.atan2(p.x);
            assert!(planar <= 2.0 * ((4.0 * theta).cos() + 2.0) + EPS);
        }
        if planar > 4.0 {
            reaches_tips = true;
        }
    }
    assert!(reaches_tips, "no points reached the outer petals");
}

#[test]
fn saturn_splits_into_ring_and_body_after_untilting() {
    let tilt = 0.4_f32;
    let (sin_t, cos_t) = tilt.sin_cos();
    let mut ring = 0usize;
    let mut body = 0usize;

    for p in points(&cloud(ShapeKind::Saturn, 3)) {
        // Undo the fixed tilt about x.
        let y = p.y * cos_t + p.z * sin_t;
        let z = -p.y * sin_t + p.z * cos_t;
        let planar = (p.x * p.x + z * z).sqrt();

        if planar >= 3.0 - EPS {
            assert!(planar <= 5.5 + EPS);
            assert!(y.abs() <= 0.1 + EPS);
            ring += 1;
        } else {
            assert!(Vec3::new(p.x, y, z).length() <= 2.5 + EPS);
            body += 1;
        }
    }

    let fraction = ring as f32 / (ring + body) as f32;
    assert!(
        (fraction - 0.6).abs() < 0.03,
        "ring fraction {fraction} strayed from 0.6"
    );
}

#[test]
fn saturn_body_is_volume_uniform() {
    let tilt = 0.4_f32;
    let (sin_t, cos_t) = tilt.sin_cos();
    let mut body = 0usize;
    let mut inner = 0usize;
    let mut mid = 0usize;

    for p in points(&cloud(ShapeKind::Saturn, 4)) {
        let y = p.y * cos_t + p.z * sin_t;
        let z = -p.y * sin_t + p.z * cos_t;
        if (p.x * p.x + z * z).sqrt() >= 3.0 - EPS {
            continue;
        }
        body += 1;
        let r = Vec3::new(p.x, y, z).length();
        if r <= 1.25 {
            inner += 1;
        }
        if r <= 2.0 {
            mid += 1;
        }
    }

    // Uniform volume follows the cubic CDF: half the radius holds an
    // eighth of the points, 0.8 of the radius just over half.
    let inner_fraction = inner as f32 / body as f32;
    let mid_fraction = mid as f32 / body as f32;
    assert!(
        (inner_fraction - 0.125).abs() < 0.03,
        "inner-sphere fraction {inner_fraction} strayed from 0.125"
    );
    assert!(
        (mid_fraction - 0.512).abs() < 0.04,
        "mid-sphere fraction {mid_fraction} strayed from 0.512"
    );
}

#[test]
fn buddha_keeps_head_torso_and_base_in_their_bands() {
    let buffer = cloud(ShapeKind::Buddha, 5);
    let mut head = false;
    let mut torso = false;
    let mut base = false;

    for p in points(&buffer) {
        assert!(p.y >= -1.9 - EPS && p.y <= 1.8 + EPS);
        let planar = (p.x * p.x + p.z * p.z).sqrt();
        assert!(planar <= 3.0 + EPS);

        if p.y > 1.0 + EPS {
            head = true;
        }
        if planar <= 1.2 && p.y > -1.1 && p.y < 0.2 {
            torso = true;
        }
        if p.y < -1.1 - EPS && planar > 1.2 {
            base = true;
        }
    }

    assert!(head, "no points above the torso column");
    assert!(torso, "no points in the torso column");
    assert!(base, "no points in the wide base");
}

#[test]
fn fireworks_concentrate_on_the_outer_shell() {
    let buffer = cloud(ShapeKind::Fireworks, 6);
    let mut shell = 0usize;
    for p in points(&buffer) {
        let r = p.length();
        assert!(r <= 5.0 + EPS);
        if r >= 4.0 {
            shell += 1;
        }
    }
    // The tenth-root radius bias puts ~89% of points past 0.8 of the radius.
    assert!(shell as f32 / COUNT as f32 > 0.8);
}

#[test]
fn seeded_generation_is_reproducible() {
    for kind in ShapeKind::ALL {
        assert_eq!(cloud(kind, 42), cloud(kind, 42), "{kind}");
        assert_ne!(cloud(kind, 42), cloud(kind, 43), "{kind}");
    }
}

#[test]
fn empty_clouds_are_rejected() {
    let err = shape::generate(ShapeKind::Heart, 0).unwrap_err();
    assert_eq!(err, CloudError::InvalidPointCount { requested: 0 });
}
