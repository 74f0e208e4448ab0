use dangle::{Rope, RopeError, Vec2};

fn classic() -> Rope<f64> {
    Rope::new(Vec2::new(400.0, 50.0), 300.0, 20).unwrap()
}

fn adjacent_distances(rope: &Rope<f64>) -> Vec<f64> {
    rope.snapshot().windows(2).map(|w| w[0].distance(w[1])).collect()
}

#[test]
fn rope_correct_particle_count() {
    let rope = classic();
    assert_eq!(rope.len(), 20);
    assert_eq!(rope.segment_count(), 19);
    assert!((rope.segment_length() - 300.0 / 19.0).abs() < 1e-12);
    assert!(rope.particle(0).unwrap().pinned);
    assert!(rope.particles()[1..].iter().all(|p| !p.pinned));
}

#[test]
fn too_few_particles_is_rejected() {
    assert_eq!(
        Rope::new(Vec2::new(0.0f64, 0.0), 10.0, 1).unwrap_err(),
        RopeError::TooFewParticles { count: 1 }
    );
    assert_eq!(
        Rope::new(Vec2::new(0.0f64, 0.0), 10.0, 0).unwrap_err(),
        RopeError::TooFewParticles { count: 0 }
    );
}

#[test]
fn bad_length_or_anchor_is_rejected() {
    let origin = Vec2::new(0.0f64, 0.0);
    assert_eq!(Rope::new(origin, 0.0, 5).unwrap_err(), RopeError::InvalidLength);
    assert_eq!(Rope::new(origin, -3.0, 5).unwrap_err(), RopeError::InvalidLength);
    assert_eq!(Rope::new(origin, f64::NAN, 5).unwrap_err(), RopeError::InvalidLength);
    assert_eq!(
        Rope::new(Vec2::new(f64::INFINITY, 0.0), 10.0, 5).unwrap_err(),
        RopeError::NonFiniteAnchor
    );
}

#[test]
fn initial_layout_hangs_straight_down() {
    for n in 2..=40 {
        let rope = Rope::new(Vec2::new(123.0f64, 45.0), 250.0, n).unwrap();
        let seg = rope.segment_length();
        for (i, p) in rope.particles().iter().enumerate() {
            assert_eq!(p.position.x, 123.0);
            assert_eq!(p.position, p.previous_position);
            assert!(p.position.y >= 45.0, "particle {} above the anchor", i);
        }
        for d in adjacent_distances(&rope) {
            assert!((d - seg).abs() <= 1e-9 * seg, "n = {}: distance {} vs segment {}", n, d, seg);
        }
    }
}

#[test]
fn one_tick_drops_the_rope_without_runaway_stretch() {
    let mut rope = classic();
    let before = rope.snapshot();

    rope.update(0.5, 0.99, 5);
    let after = rope.snapshot();

    assert_eq!(after[0], Vec2::new(400.0, 50.0));
    for i in 1..after.len() {
        assert!(after[i].y > before[i].y, "particle {} did not fall: {} -> {}", i, before[i].y, after[i].y);
    }
    let seg = rope.segment_length();
    for d in adjacent_distances(&rope) {
        assert!(d <= seg * 1.5, "segment stretched to {} (rest {})", d, seg);
    }
}

#[test]
fn anchor_is_invariant_under_update() {
    let mut rope = classic();
    for _ in 0..500 {
        rope.update(0.5, 0.99, 5);
        assert_eq!(rope.anchor(), Vec2::new(400.0, 50.0));
    }
}

#[test]
fn short_rope_settles_within_one_percent() {
    let mut rope = Rope::new(Vec2::new(400.0f64, 50.0), 300.0, 5).unwrap();
    for _ in 0..50 {
        rope.update(0.5, 0.99, 5);
    }
    let stretch = rope.max_stretch();
    assert!(stretch < 0.01, "max stretch after 50 ticks: {}", stretch);
}

#[test]
fn long_rope_settles_with_enough_passes() {
    let mut rope = classic();
    for _ in 0..50 {
        rope.update(0.5, 0.99, 200);
    }
    let stretch = rope.max_stretch();
    assert!(stretch < 0.01, "max stretch after 50 ticks: {}", stretch);
}

#[test]
fn snapshot_is_idempotent() {
    let mut rope = classic();
    for _ in 0..7 {
        rope.update(0.5, 0.99, 5);
    }
    let a = rope.snapshot();
    let b = rope.snapshot();
    assert_eq!(a, b);
    let as_tuples: Vec<(f64, f64)> = a.into_iter().map(Into::into).collect();
    assert_eq!(as_tuples.len(), 20);
    assert_eq!(as_tuples[0], (400.0, 50.0));
}

#[test]
fn coincident_particles_stay_finite() {
    let mut rope = classic();
    let shared = rope.particle(3).unwrap().position;
    let p4 = rope.particle_mut(4).unwrap();
    p4.position = shared;
    p4.previous_position = shared;

    let stats = rope.update(0.0, 0.99, 5);
    assert!(stats.degenerate >= 1, "expected the coincident pair to be skipped");
    for p in rope.particles() {
        assert!(p.position.is_finite(), "non-finite position {:?}", p.position);
    }

    for _ in 0..100 {
        rope.update(0.5, 0.99, 5);
    }
    assert!(rope.particles().iter().all(|p| p.position.is_finite()));
}

#[test]
fn pin_and_unpin_check_bounds() {
    let mut rope = classic();
    assert_eq!(
        rope.pin(20).unwrap_err(),
        RopeError::ParticleOutOfBounds { index: 20, count: 20 }
    );

    rope.pin(19).unwrap();
    let tail = rope.particle(19).unwrap().position;
    for _ in 0..20 {
        rope.update(0.5, 0.99, 5);
    }
    assert_eq!(rope.particle(19).unwrap().position, tail);

    rope.unpin(19).unwrap();
    rope.update(0.5, 0.99, 5);
    assert_ne!(rope.particle(19).unwrap().position, tail);
}

#[test]
fn f32_rope_falls_too() {
    let mut rope: Rope<f32> = Rope::new(Vec2::new(10.0, 10.0), 9.0, 4).unwrap();
    let start = rope.snapshot();
    rope.update(0.5, 0.99, 5);
    let end = rope.snapshot();
    assert_eq!(end[0], start[0]);
    assert!(end[3].y > start[3].y);
}
