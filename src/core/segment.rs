//! Ein Catmull-Rom-Segment über vier Kontrollpunkt-Referenzen.

use super::{PointArena, PointId, SplineError};
use crate::shared::spline_geometry::{centripetal_point, sample_span};
use glam::Vec2;

/// Vier-Punkte-Fenster `(P0, P1, P2, P3)`; gezeichnet wird der Abschnitt P1 → P2.
///
/// Unveränderlich nach der Konstruktion. Positionen werden bei jeder
/// Auswertung live aus der Arena gelesen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplineSegment {
    points: [PointId; 4],
}

impl SplineSegment {
    /// Erstellt ein Segment aus äußerem Start-, Start-, End- und äußerem End-Punkt.
    pub fn new(before: PointId, start: PointId, end: PointId, after: PointId) -> Self {
        Self {
            points: [before, start, end, after],
        }
    }

    /// Die vier referenzierten Punkte in Reihenfolge P0..P3.
    pub fn control_points(&self) -> [PointId; 4] {
        self.points
    }

    /// Startpunkt des gezeichneten Abschnitts (P1).
    pub fn start(&self) -> PointId {
        self.points[1]
    }

    /// Endpunkt des gezeichneten Abschnitts (P2).
    pub fn end(&self) -> PointId {
        self.points[2]
    }

    /// Löst die vier IDs gegen `arena` auf.
    pub fn positions(&self, arena: &PointArena) -> Result<[Vec2; 4], SplineError> {
        let mut out = [Vec2::ZERO; 4];
        for (slot, id) in out.iter_mut().zip(self.points) {
            *slot = arena.position(id).ok_or(SplineError::UnknownPoint(id))?;
        }
        Ok(out)
    }

    /// Wertet das Segment bei `t ∈ [0, 1]` aus.
    pub fn evaluate(&self, arena: &PointArena, t: f32, alpha: f32) -> Result<Vec2, SplineError> {
        let [p0, p1, p2, p3] = self.positions(arena)?;
        Ok(centripetal_point(p0, p1, p2, p3, t, alpha))
    }

    /// Dichte Punktliste für den Renderer (`steps + 1` Punkte).
    pub fn sample(
        &self,
        arena: &PointArena,
        steps: usize,
        alpha: f32,
    ) -> Result<Vec<Vec2>, SplineError> {
        sample_span(self.positions(arena)?, steps, alpha)
    }
}
