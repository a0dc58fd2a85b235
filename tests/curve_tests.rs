// Host-side tests for the lemniscate tube geometry.
// The root crate is wasm-only, so these exercise the pure core crate directly.

use app_core::CurveField;
use std::f32::consts::TAU;

fn analytic_centerline(scale: f32, t: f32) -> (f32, f32) {
    let denom = 1.0 + t.sin() * t.sin();
    (
        scale * t.cos() / denom,
        scale * t.sin() * t.cos() / denom,
    )
}

#[test]
fn centerline_matches_analytic_formula() {
    let curve = CurveField::new(8.0);
    for i in 0..400 {
        let t = i as f32 / 400.0 * 2.0 * TAU;
        let p = curve.position_at(t, 0.0, 0.0);
        let (x, y) = analytic_centerline(8.0, t);
        assert!((p.x - x).abs() < 1e-4, "x mismatch at t={t}: {} vs {x}", p.x);
        assert!((p.y - y).abs() < 1e-4, "y mismatch at t={t}: {} vs {y}", p.y);
        assert!(p.z.abs() < 1e-6, "centerline must stay in-plane at t={t}");
    }
}

#[test]
fn zero_offset_ignores_the_radial_angle() {
    let curve = CurveField::new(8.0);
    for i in 0..32 {
        let t = i as f32 * 0.41;
        let a = curve.position_at(t, 0.0, 0.0);
        let b = curve.position_at(t, 0.0, 2.3);
        assert!(a.distance(b) < 1e-6);
    }
}

#[test]
fn tube_cross_section_is_circular() {
    // Every offset point must sit exactly `tube_offset` away from the
    // centerline point, for any angle around the cross-section.
    let curve = CurveField::new(8.0);
    for i in 0..50 {
        let t = i as f32 * 0.37;
        let center = curve.position_at(t, 0.0, 0.0);
        for j in 0..12 {
            let angle = j as f32 / 12.0 * TAU;
            for offset in [0.1_f32, 0.3, 0.89] {
                let on_tube = curve.position_at(t, offset, angle);
                let dist = on_tube.distance(center);
                assert!(
                    (dist - offset).abs() < 1e-3,
                    "t={t} angle={angle} offset={offset}: dist={dist}"
                );
            }
        }
    }
}

#[test]
fn curve_is_periodic_in_t() {
    let curve = CurveField::new(8.0);
    for i in 0..40 {
        let t = i as f32 * 0.31;
        let a = curve.position_at(t, 0.5, 1.0);
        let b = curve.position_at(t + TAU, 0.5, 1.0);
        assert!(a.distance(b) < 1e-3, "period mismatch at t={t}");
    }
}

#[test]
fn degenerate_tangent_falls_back_to_the_centerline() {
    // A microscopic curve makes the forward difference vanish; the guard
    // must yield the centerline point instead of dividing by ~zero.
    let curve = CurveField::new(1e-30);
    let p = curve.position_at(0.7, 0.5, 1.3);
    assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
    assert!(p.x.abs() < 1e-20 && p.y.abs() < 1e-20);
    assert_eq!(p.z, 0.0, "tube offset must be dropped entirely");
}

#[test]
fn scale_grows_the_curve_linearly() {
    let small = CurveField::new(4.0);
    let large = CurveField::new(8.0);
    for i in 0..32 {
        let t = i as f32 * 0.29;
        let a = small.position_at(t, 0.0, 0.0);
        let b = large.position_at(t, 0.0, 0.0);
        assert!((b.x - 2.0 * a.x).abs() < 1e-4);
        assert!((b.y - 2.0 * a.y).abs() < 1e-4);
    }
}
