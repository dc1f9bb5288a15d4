//! Reine Geometrie-Funktionen für zentripetale Catmull-Rom-Splines.
//!
//! Layer-neutral: wird von `core` (Segment-Auswertung), `app` (Render-Szene)
//! und den Benchmarks genutzt, ohne Zirkel-Abhängigkeiten zu erzeugen.

use crate::core::SplineError;
use glam::Vec2;

/// Knoten-Abstände unterhalb dieses Werts gelten als entartet.
pub const KNOT_EPSILON: f32 = 1e-6;

/// Prüft, ob `alpha` ein gültiger Parametrisierungs-Exponent ist.
///
/// 0.0 = uniform, 0.5 = zentripetal, 1.0 = chordal.
pub fn validate_alpha(alpha: f32) -> Result<f32, SplineError> {
    if alpha.is_finite() && (0.0..=1.0).contains(&alpha) {
        Ok(alpha)
    } else {
        Err(SplineError::InvalidAlpha(alpha))
    }
}

/// Berechnet die Knotenwerte `[t0, t1, t2, t3]` für vier Kontrollpunkte.
///
/// `t0 = 0`, `t(i+1) = t(i) + |P(i+1) - P(i)|^alpha`.
pub fn centripetal_knots(points: [Vec2; 4], alpha: f32) -> [f32; 4] {
    let mut knots = [0.0f32; 4];
    for i in 1..4 {
        let chord = points[i].distance_squared(points[i - 1]);
        // |d|^alpha = (|d|²)^(alpha/2); 0^0 ergibt 1 (uniform)
        knots[i] = knots[i - 1] + chord.powf(alpha * 0.5);
    }
    knots
}

/// Affine Kombination von `p` und `q` an der Knotenposition `knot` in `[lo, hi]`.
///
/// Bei entartetem Intervall fallen `p` und `q` zusammen; dann wird linear
/// (Mittelpunkt) interpoliert statt durch Null zu teilen.
#[inline]
fn knot_lerp(p: Vec2, q: Vec2, lo: f32, hi: f32, knot: f32) -> Vec2 {
    let span = hi - lo;
    if span.abs() < KNOT_EPSILON {
        return p.lerp(q, 0.5);
    }
    p * ((hi - knot) / span) + q * ((knot - lo) / span)
}

/// Berechnet einen Punkt auf dem Segment `p1 → p2` (t ∈ [0, 1]).
///
/// `p0` und `p3` sind die äußeren Kontrollpunkte. Auswertung über die
/// rekursive Pyramide affiner Kombinationen (Barry-Goldman) im
/// Knoten-Parameterraum.
pub fn centripetal_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32, alpha: f32) -> Vec2 {
    let [t0, t1, t2, t3] = centripetal_knots([p0, p1, p2, p3], alpha);
    let knot = t1 + t * (t2 - t1);

    let a1 = knot_lerp(p0, p1, t0, t1, knot);
    let a2 = knot_lerp(p1, p2, t1, t2, knot);
    let a3 = knot_lerp(p2, p3, t2, t3, knot);

    let b1 = knot_lerp(a1, a2, t0, t2, knot);
    let b2 = knot_lerp(a2, a3, t1, t3, knot);

    knot_lerp(b1, b2, t1, t2, knot)
}

/// Tastet das Segment `p1 → p2` in `steps` gleichen Parameterschritten ab.
///
/// Liefert `steps + 1` Punkte inkl. beider Endpunkte.
pub fn sample_span(points: [Vec2; 4], steps: usize, alpha: f32) -> Result<Vec<Vec2>, SplineError> {
    if steps == 0 {
        return Err(SplineError::InvalidStepCount);
    }
    let [p0, p1, p2, p3] = points;
    Ok((0..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            centripetal_point(p0, p1, p2, p3, t, alpha)
        })
        .collect())
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square() -> [Vec2; 4] {
        [
            Vec2::new(0.1, 0.1),
            Vec2::new(0.5, 0.1),
            Vec2::new(0.5, 0.5),
            Vec2::new(0.1, 0.5),
        ]
    }

    fn irregular() -> [Vec2; 4] {
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.1, 0.4),
            Vec2::new(0.8, 0.5),
            Vec2::new(0.9, 0.1),
        ]
    }

    #[test]
    fn test_validate_alpha() {
        assert!(validate_alpha(0.0).is_ok());
        assert!(validate_alpha(0.5).is_ok());
        assert!(validate_alpha(1.0).is_ok());
        assert_eq!(validate_alpha(1.5), Err(SplineError::InvalidAlpha(1.5)));
        assert!(validate_alpha(-0.1).is_err());
        assert!(validate_alpha(f32::NAN).is_err());
    }

    #[test]
    fn test_knots_centripetal() {
        // Abstände 0.4 → sqrt(0.4) pro Intervall
        let knots = centripetal_knots(square(), 0.5);
        let step = 0.4f32.sqrt();
        assert_abs_diff_eq!(knots[0], 0.0);
        assert_abs_diff_eq!(knots[1], step, epsilon = 1e-5);
        assert_abs_diff_eq!(knots[2], 2.0 * step, epsilon = 1e-5);
        assert_abs_diff_eq!(knots[3], 3.0 * step, epsilon = 1e-5);
    }

    #[test]
    fn test_knots_uniform_and_chordal() {
        let uniform = centripetal_knots(irregular(), 0.0);
        assert_eq!(uniform, [0.0, 1.0, 2.0, 3.0]);

        let chordal = centripetal_knots(irregular(), 1.0);
        let pts = irregular();
        assert_abs_diff_eq!(chordal[1], pts[0].distance(pts[1]), epsilon = 1e-5);
        assert_abs_diff_eq!(
            chordal[3] - chordal[2],
            pts[2].distance(pts[3]),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_endpoint_interpolation() {
        let [p0, p1, p2, p3] = irregular();
        for alpha in [0.0, 0.5, 1.0] {
            let start = centripetal_point(p0, p1, p2, p3, 0.0, alpha);
            let end = centripetal_point(p0, p1, p2, p3, 1.0, alpha);
            assert!(start.distance(p1) < 1e-5, "alpha={alpha}: Start {start:?}");
            assert!(end.distance(p2) < 1e-5, "alpha={alpha}: Ende {end:?}");
        }
    }

    #[test]
    fn test_continuity() {
        let [p0, p1, p2, p3] = irregular();
        let dt = 0.001;
        let mut prev = centripetal_point(p0, p1, p2, p3, 0.0, 0.5);
        let mut t = dt;
        while t <= 1.0 {
            let current = centripetal_point(p0, p1, p2, p3, t, 0.5);
            assert!(
                prev.distance(current) < 10.0 * dt,
                "Sprung bei t={t}: {:.5}",
                prev.distance(current)
            );
            prev = current;
            t += dt;
        }
    }

    #[test]
    fn test_alpha_changes_interior_but_not_endpoints() {
        let [p0, p1, p2, p3] = irregular();
        let uniform = centripetal_point(p0, p1, p2, p3, 0.5, 0.0);
        let centripetal = centripetal_point(p0, p1, p2, p3, 0.5, 0.5);
        let chordal = centripetal_point(p0, p1, p2, p3, 0.5, 1.0);
        assert!(uniform.distance(centripetal) > 1e-4);
        assert!(centripetal.distance(chordal) > 1e-4);
        assert!(uniform.distance(chordal) > 1e-4);
    }

    #[test]
    fn test_uniform_matches_classic_catmull_rom() {
        let [p0, p1, p2, p3] = irregular();
        let t = 0.3f32;
        let t2 = t * t;
        let t3 = t2 * t;
        let classic = 0.5
            * ((2.0 * p1)
                + (-p0 + p2) * t
                + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
                + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3);
        let barry_goldman = centripetal_point(p0, p1, p2, p3, t, 0.0);
        assert!(classic.distance(barry_goldman) < 1e-5);
    }

    #[test]
    fn test_degenerate_spans_stay_finite() {
        let p = Vec2::new(0.3, 0.3);
        let q = Vec2::new(0.6, 0.4);
        // P0 == P1 und P2 == P3
        for t in [0.0, 0.25, 0.5, 1.0] {
            let result = centripetal_point(p, p, q, q, t, 0.5);
            assert!(result.is_finite(), "t={t}: {result:?}");
        }
        // P1 == P2: Segment schrumpft auf einen Punkt
        let result = centripetal_point(Vec2::ZERO, p, p, q, 0.5, 0.5);
        assert!(result.distance(p) < 1e-5);
    }

    #[test]
    fn test_sample_span_counts_and_endpoints() {
        let pts = square();
        let samples = sample_span(pts, 50, 0.5).expect("Samples erwartet");
        assert_eq!(samples.len(), 51);
        assert!(samples[0].distance(pts[1]) < 1e-5);
        assert!(samples[50].distance(pts[2]) < 1e-5);
        assert_eq!(sample_span(pts, 0, 0.5), Err(SplineError::InvalidStepCount));
    }

    #[test]
    fn test_polyline_length() {
        let pts = vec![Vec2::ZERO, Vec2::new(3.0, 0.0), Vec2::new(3.0, 4.0)];
        assert_abs_diff_eq!(polyline_length(&pts), 7.0, epsilon = 1e-6);
        assert_eq!(polyline_length(&[]), 0.0);
    }
}
