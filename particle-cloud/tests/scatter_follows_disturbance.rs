use glam::Vec3;
use particle_cloud::interaction::{self, InteractionMode};
use particle_cloud::morph::{self, MorphEngine};
use particle_cloud::shape::ShapeKind;

const DT: f32 = 0.016;
const COLOUR: Vec3 = Vec3::ONE;

fn engine() -> MorphEngine {
    MorphEngine::new_seeded(ShapeKind::Heart, 200, 31).unwrap()
}

#[test]
fn sustained_disturbance_saturates_scatter() {
    let mut engine = engine();
    for _ in 0..200 {
        engine.advance(DT, 1.0, COLOUR);
    }
    assert!(engine.scatter() > 0.99);
    assert!(engine.scatter() <= 1.0);
}

#[test]
fn scatter_rises_monotonically_then_decays_monotonically() {
    let mut engine = engine();
    let mut last = 0.0;
    for _ in 0..50 {
        engine.advance(DT, 1.0, COLOUR);
        assert!(engine.scatter() > last);
        last = engine.scatter();
    }
    for _ in 0..50 {
        engine.advance(DT, 0.0, COLOUR);
        assert!(engine.scatter() < last);
        last = engine.scatter();
    }
    assert!(last < 0.01);
}

#[test]
fn out_of_range_disturbance_is_clamped_at_the_tick() {
    let mut spiky = engine();
    let mut calm = engine();
    for _ in 0..30 {
        spiky.advance(DT, 7.5, COLOUR);
        calm.advance(DT, 1.0, COLOUR);
    }
    assert_eq!(spiky.scatter(), calm.scatter());

    for _ in 0..30 {
        spiky.advance(DT, -3.0, COLOUR);
        calm.advance(DT, 0.0, COLOUR);
    }
    assert_eq!(spiky.scatter(), calm.scatter());
}

#[test]
fn pointer_sweep_drives_the_full_scatter_range() {
    let width = 1280.0;
    let mut engine = engine();

    for _ in 0..200 {
        engine.advance(DT, interaction::pointer_disturbance(width, width), COLOUR);
    }
    let agitated = engine.scatter();
    assert!(agitated > 0.99);

    for _ in 0..200 {
        engine.advance(DT, interaction::pointer_disturbance(0.0, width), COLOUR);
    }
    assert!(engine.scatter() < 0.01);
    assert!(engine.scatter() < agitated);
}

#[test]
fn scattered_points_fade_and_push_outward() {
    let rest = Vec3::new(1.0, 2.0, 2.0);
    let calm = morph::scattered_position(rest, 0.0, 0.0);
    assert_eq!(calm, rest);
    assert_eq!(morph::scatter_alpha(0.0), 1.0);

    let burst = morph::scattered_position(rest, 1.0, 0.0);
    assert!(burst.length() > rest.length());
    assert_eq!(morph::scatter_alpha(1.0), 0.5);
    assert!(morph::scatter_alpha(1.0) < morph::scatter_alpha(0.5));
}

#[test]
fn mode_labels_match_their_wire_names() {
    assert_eq!(
        serde_json::to_string(&InteractionMode::Pointer).unwrap(),
        "\"pointer\""
    );
    assert_eq!(
        serde_json::to_string(&InteractionMode::Motion).unwrap(),
        "\"motion\""
    );
}
