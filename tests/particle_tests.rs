// Host-side tests for particle seeding and advancement.
// The root crate is wasm-only, so these exercise the pure core crate directly.

use app_core::{
    CurveField, CurveParameters, ParticleSet, BASE_ADVANCE_RATE, PARTICLE_BASE_SIZE,
    PULSE_AMPLITUDE, PULSE_BASE, RADIAL_VELOCITY_BAND, SPEED_MAX, SPEED_MIN, TUBE_RADIUS,
};
use std::f32::consts::TAU;

fn params(count: usize) -> CurveParameters {
    CurveParameters {
        particle_count: count,
        ..CurveParameters::default()
    }
}

#[test]
fn initialize_produces_the_exact_population() {
    let set = ParticleSet::new(&params(257), 7).unwrap();
    assert_eq!(set.len(), 257);
    assert!(!set.is_empty());
}

#[test]
fn zero_count_population_is_valid() {
    let set = ParticleSet::new(&params(0), 1).unwrap();
    assert!(set.is_empty());
}

#[test]
fn seeded_fields_stay_in_their_bands() {
    let set = ParticleSet::new(&params(2000), 11).unwrap();
    for p in set.particles() {
        assert!(p.tube_offset >= 0.0 && p.tube_offset <= TUBE_RADIUS);
        assert!(p.radial_angle >= 0.0 && p.radial_angle < TAU);
        assert!(p.speed >= SPEED_MIN && p.speed <= SPEED_MAX);
        assert!(p.radial_angular_velocity.abs() <= RADIAL_VELOCITY_BAND + 1e-6);
        assert!(p.alpha >= 0.8 && p.alpha <= 1.0);
    }
}

#[test]
fn curve_parameters_cover_two_traversals() {
    let set = ParticleSet::new(&params(100), 3).unwrap();
    let ps = set.particles();
    assert!(ps[0].curve_parameter.abs() < 1e-6);
    let expected_last = 99.0 / 100.0 * 2.0 * TAU;
    assert!((ps[99].curve_parameter - expected_last).abs() < 1e-3);
    for w in ps.windows(2) {
        assert!(w[1].curve_parameter > w[0].curve_parameter);
    }
}

#[test]
fn advance_is_tick_driven_and_exact() {
    // Two ticks move t by exactly twice the per-tick rate times the particle
    // speed, and the radial angle by twice its angular velocity; wall-clock
    // time feeds only the cosmetic pulse. With speed = 1 and zero angular
    // velocity this reduces to t += 2 * BASE_ADVANCE_RATE, angle unchanged.
    let mut set = ParticleSet::new(&params(50), 5).unwrap();
    let before: Vec<(f32, f32)> = set
        .particles()
        .iter()
        .map(|p| (p.curve_parameter, p.radial_angle))
        .collect();
    set.advance(0.0);
    set.advance(16.0);
    for (p, (t0, a0)) in set.particles().iter().zip(&before) {
        let expected_t = t0 + 2.0 * BASE_ADVANCE_RATE * p.speed;
        let expected_a = a0 + 2.0 * p.radial_angular_velocity;
        assert!((p.curve_parameter - expected_t).abs() < 1e-5);
        assert!((p.radial_angle - expected_a).abs() < 1e-5);
    }
}

#[test]
fn position_is_rederived_from_the_curve() {
    let mut set = ParticleSet::new(&params(64), 9).unwrap();
    set.advance(250.0);
    let curve = CurveField::new(CurveParameters::default().scale);
    for p in set.particles() {
        let expected = curve.position_at(p.curve_parameter, p.tube_offset, p.radial_angle);
        assert!(p.position.distance(expected) < 1e-5);
    }
}

#[test]
fn pulse_scale_stays_in_its_band() {
    let mut set = ParticleSet::new(&params(64), 1).unwrap();
    for step in 0..200 {
        set.advance(step as f64 * 16.7);
        for p in set.particles() {
            assert!(p.pulse_scale >= PULSE_BASE - PULSE_AMPLITUDE - 1e-4);
            assert!(p.pulse_scale <= PULSE_BASE + PULSE_AMPLITUDE + 1e-4);
        }
    }
}

#[test]
fn same_seed_reproduces_the_same_population() {
    let a = ParticleSet::new(&params(128), 77).unwrap();
    let b = ParticleSet::new(&params(128), 77).unwrap();
    for (x, y) in a.particles().iter().zip(b.particles()) {
        assert_eq!(x.curve_parameter, y.curve_parameter);
        assert_eq!(x.speed, y.speed);
        assert_eq!(x.tube_offset, y.tube_offset);
        assert_eq!(x.radial_angle, y.radial_angle);
        assert_eq!(x.radial_angular_velocity, y.radial_angular_velocity);
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    let p = CurveParameters {
        scale: 0.0,
        ..CurveParameters::default()
    };
    assert!(ParticleSet::new(&p, 1).is_err());

    let p = CurveParameters {
        tube_radius: -0.1,
        ..CurveParameters::default()
    };
    assert!(ParticleSet::new(&p, 1).is_err());
}

#[test]
fn write_instances_projects_every_particle() {
    let mut set = ParticleSet::new(&params(40), 2).unwrap();
    set.advance(10.0);
    let mut out = Vec::new();
    set.write_instances(&mut out);
    assert_eq!(out.len(), 40);
    for (inst, p) in out.iter().zip(set.particles()) {
        assert_eq!(inst.pos, p.position.to_array());
        assert!((inst.scale - PARTICLE_BASE_SIZE * p.pulse_scale).abs() < 1e-6);
        assert_eq!(inst.color[3], p.alpha);
    }
}

#[test]
fn clear_empties_the_population() {
    let mut set = ParticleSet::new(&params(40), 2).unwrap();
    set.clear();
    assert!(set.is_empty());
    let mut out = vec![];
    set.write_instances(&mut out);
    assert!(out.is_empty());
}
