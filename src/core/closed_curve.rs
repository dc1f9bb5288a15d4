//! Abgeschlossene Schleife aus Catmull-Rom-Segmenten.

use super::{PointArena, SplineError, SplineSegment};
use crate::shared::spline_geometry::polyline_length;
use glam::Vec2;

/// Eine fertig geschlossene Kurve: besitzt ihre Punkte und ihre Segmente.
///
/// Wird nach dem Schließen nicht mehr verändert. Für N Punkte existieren
/// genau N Segmente; Segment `i` verläuft von Punkt `i` nach Punkt `(i+1) mod N`.
#[derive(Debug, Clone)]
pub struct ClosedCurve {
    points: PointArena,
    segments: Vec<SplineSegment>,
}

impl ClosedCurve {
    pub(crate) fn new(points: PointArena, segments: Vec<SplineSegment>) -> Self {
        Self { points, segments }
    }

    /// Kontrollpunkte der Kurve (inkl. Tangenten).
    pub fn points(&self) -> &PointArena {
        &self.points
    }

    /// Segmente in Zeichenreihenfolge.
    pub fn segments(&self) -> &[SplineSegment] {
        &self.segments
    }

    /// Anzahl der Segmente.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Positionen aller Kontrollpunkte.
    pub fn control_positions(&self) -> Vec<Vec2> {
        self.points.positions()
    }

    /// Tastet ein einzelnes Segment ab.
    pub fn sample_segment(
        &self,
        index: usize,
        steps: usize,
        alpha: f32,
    ) -> Option<Result<Vec<Vec2>, SplineError>> {
        self.segments
            .get(index)
            .map(|seg| seg.sample(&self.points, steps, alpha))
    }

    /// Geschlossene Polyline über alle Segmente.
    ///
    /// Gemeinsame Segment-Endpunkte werden nur einmal ausgegeben; der erste
    /// Punkt wird am Ende wiederholt.
    pub fn polyline(&self, steps: usize, alpha: f32) -> Result<Vec<Vec2>, SplineError> {
        let mut out = Vec::with_capacity(self.segments.len() * steps + 1);
        for seg in &self.segments {
            let samples = seg.sample(&self.points, steps, alpha)?;
            let skip = usize::from(!out.is_empty());
            out.extend(samples.into_iter().skip(skip));
        }
        Ok(out)
    }

    /// Approximierte Bogenlänge der Schleife.
    pub fn length(&self, steps: usize, alpha: f32) -> Result<f32, SplineError> {
        Ok(polyline_length(&self.polyline(steps, alpha)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ControlPoint, PointId};
    use approx::assert_relative_eq;

    /// Quadrat (0.1..0.5) mit Segment `i` von Punkt `i` nach `i+1 mod 4`.
    fn square_curve() -> ClosedCurve {
        let mut points = PointArena::new();
        for (x, y) in [(0.1, 0.1), (0.5, 0.1), (0.5, 0.5), (0.1, 0.5)] {
            points.push(ControlPoint::new(x, y));
        }
        let segments = (0..4)
            .map(|i| {
                SplineSegment::new(
                    PointId((i + 3) % 4),
                    PointId(i),
                    PointId((i + 1) % 4),
                    PointId((i + 2) % 4),
                )
            })
            .collect();
        ClosedCurve::new(points, segments)
    }

    #[test]
    fn test_sample_segment_runs_between_neighbours() {
        let curve = square_curve();
        let samples = curve
            .sample_segment(2, 10, 0.5)
            .expect("Segment 2 existiert")
            .expect("Samples erwartet");
        assert_eq!(samples.len(), 11);
        assert!(samples[0].distance(Vec2::new(0.5, 0.5)) < 1e-5);
        assert!(samples[10].distance(Vec2::new(0.1, 0.5)) < 1e-5);

        assert!(curve.sample_segment(4, 10, 0.5).is_none());
        assert_eq!(
            curve.sample_segment(0, 0, 0.5),
            Some(Err(SplineError::InvalidStepCount))
        );
    }

    #[test]
    fn test_length_matches_polyline() {
        let curve = square_curve();
        let polyline = curve.polyline(20, 0.5).expect("Polyline erwartet");
        assert_eq!(polyline.len(), 4 * 20 + 1);

        let length = curve.length(20, 0.5).expect("Länge erwartet");
        assert_relative_eq!(length, polyline_length(&polyline), epsilon = 1e-6);

        // Die Kurve umschließt das Quadrat und ist länger als dessen Umfang
        assert!(length > 1.6, "Länge {length}");
        assert!(length < 2.4, "Länge {length}");
    }
}
