use super::*;
use approx::assert_relative_eq;

fn quarter_arc() -> CubicBezier {
    // Viertelkreis mit Radius 10 um den Ursprung, von (10, 0) nach (0, 10)
    let k = crate::core::BEZIER_CIRCLE_KAPPA * 10.0;
    CubicBezier::new(
        DVec2::new(10.0, 0.0),
        DVec2::new(10.0, k),
        DVec2::new(k, 10.0),
        DVec2::new(0.0, 10.0),
    )
}

// ── Position ──

#[test]
fn test_position_endpunkte_exakt() {
    let curve = quarter_arc();
    assert_eq!(curve.position(0.0), curve.p0);
    assert_eq!(curve.position(1.0), curve.p3);
}

#[test]
fn test_position_symmetrie() {
    // Symmetrische S-Kurve → Mittelpunkt bei (5, 5)
    let curve = CubicBezier::new(
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 10.0),
        DVec2::new(10.0, 0.0),
        DVec2::new(10.0, 10.0),
    );
    let mid = curve.position(0.5);
    assert_relative_eq!(mid.x, 5.0, epsilon = 1e-12);
    assert_relative_eq!(mid.y, 5.0, epsilon = 1e-12);
}

#[test]
fn test_position_extrapoliert_ausserhalb_0_1() {
    let curve = CubicBezier::straight(DVec2::ZERO, DVec2::new(9.0, 0.0));
    let before = curve.position(-1.0);
    let after = curve.position(2.0);
    assert_relative_eq!(before.x, -9.0, epsilon = 1e-9);
    assert_relative_eq!(after.x, 18.0, epsilon = 1e-9);
}

#[test]
fn test_viertelkreis_bleibt_nahe_am_radius() {
    let curve = quarter_arc();
    for p in sample(&curve, 64) {
        // Bekannter Maximalfehler der Kappa-Näherung ≈ 0.027 %
        assert!((p.length() - 10.0).abs() < 0.01, "Radius {:.4}", p.length());
    }
}

// ── Tangente ──

#[test]
fn test_tangente_an_endpunkten() {
    let curve = quarter_arc();
    assert_eq!(curve.tangent(0.0), 3.0 * (curve.p1 - curve.p0));
    assert_eq!(curve.tangent(1.0), 3.0 * (curve.p3 - curve.p2));
}

#[test]
fn test_gerade_hat_konstante_tangente() {
    let curve = CubicBezier::straight(DVec2::new(1.0, 2.0), DVec2::new(31.0, -8.0));
    let expected = curve.p3 - curve.p0;
    for i in 0..=20 {
        let d = curve.tangent(i as f64 / 20.0);
        assert_relative_eq!(d.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(d.y, expected.y, epsilon = 1e-9);
    }
}

#[test]
fn test_heading_viertelkreis() {
    let curve = quarter_arc();
    assert_relative_eq!(curve.heading(0.0), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    assert_relative_eq!(curve.heading(1.0), std::f64::consts::PI, epsilon = 1e-12);
}

#[test]
fn test_tangente_entspricht_differenzenquotient() {
    let curve = quarter_arc();
    let h = 1e-6;
    for &t in &[0.1, 0.5, 0.9] {
        let numeric = (curve.position(t + h) - curve.position(t - h)) / (2.0 * h);
        let analytic = curve.tangent(t);
        assert!((numeric - analytic).length() < 1e-4);
    }
}

// ── Bogenlänge ──

#[test]
fn test_arc_length_gerade() {
    let curve = CubicBezier::straight(DVec2::ZERO, DVec2::new(30.0, 40.0));
    assert_relative_eq!(curve.arc_length(1), 50.0, epsilon = 1e-9);
    assert_relative_eq!(curve.arc_length(100), 50.0, epsilon = 1e-9);
}

#[test]
fn test_arc_length_viertelkreis() {
    let length = quarter_arc().arc_length(DEFAULT_ARC_LENGTH_SEGMENTS);
    let expected = std::f64::consts::FRAC_PI_2 * 10.0;
    assert!((length - expected).abs() / expected < 1e-3);
}

#[test]
fn test_arc_length_ohne_kurve_ist_null() {
    assert_eq!(arc_length(None, 100), 0.0);
}

#[test]
fn test_arc_length_null_segmente_wie_eins() {
    let curve = quarter_arc();
    assert_eq!(curve.arc_length(0), curve.arc_length(1));
}

#[test]
fn test_sample_anzahl_und_endpunkte() {
    let curve = quarter_arc();
    let points = sample(&curve, 10);
    assert_eq!(points.len(), 11);
    assert_eq!(points[0], curve.p0);
    assert_eq!(points[10], curve.p3);
}

// ── Arc-Length-Tabelle ──

#[test]
fn test_lut_gesamtlaenge_wie_arc_length() {
    let curve = quarter_arc();
    let table = ArcLengthTable::new(&curve, 100);
    assert_relative_eq!(table.total_length(), curve.arc_length(100), epsilon = 1e-12);
}

#[test]
fn test_lut_klemmt_distanz() {
    let curve = quarter_arc();
    let table = ArcLengthTable::new(&curve, 64);
    assert_eq!(table.t_at_distance(-5.0), 0.0);
    assert_eq!(table.t_at_distance(table.total_length() + 1.0), 1.0);
    assert_eq!(table.position_at_distance(1e9), curve.p3);
}

#[test]
fn test_lut_gleichmaessige_schritte() {
    let curve = quarter_arc();
    let table = ArcLengthTable::new(&curve, 256);
    let total = table.total_length();
    let steps = 10;
    let mut prev = table.position_at_distance(0.0);
    for i in 1..=steps {
        let p = table.position_at_distance(total * i as f64 / steps as f64);
        let step = prev.distance(p);
        assert!((step - total / steps as f64).abs() < 0.01, "Schritt {}: {:.4}", i, step);
        prev = p;
    }
}

#[test]
fn test_lut_gerade_ist_linear() {
    let curve = CubicBezier::straight(DVec2::ZERO, DVec2::new(100.0, 0.0));
    let table = ArcLengthTable::new(&curve, 50);
    assert_relative_eq!(table.t_at_distance(25.0), 0.25, epsilon = 1e-9);
    assert_relative_eq!(table.position_at_distance(60.0).x, 60.0, epsilon = 1e-9);
}
