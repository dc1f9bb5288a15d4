//! Lifecycle-Methoden des CurveBuilder (Punkt hinzufügen, Schließen, Reset).

use super::state::{
    in_unit_square, BuildStep, BuilderState, CurveBuilder, IgnoreReason, MIN_CLOSURE_POINTS,
};
use crate::core::{ClosedCurve, ControlPoint, PointArena, PointId, SplineSegment};
use glam::Vec2;

impl CurveBuilder {
    /// Verarbeitet einen Klick an `pos` (normalisierte Koordinaten).
    pub fn add_point(&mut self, pos: Vec2) -> BuildStep {
        if !pos.is_finite() {
            log::warn!("Punkt mit ungültigen Koordinaten verworfen: {:?}", pos);
            return BuildStep::Ignored(IgnoreReason::NonFinite);
        }
        if !in_unit_square(pos) {
            log::warn!("Punkt außerhalb des Zeichenbereichs verworfen: {:?}", pos);
            return BuildStep::Ignored(IgnoreReason::OutOfRange);
        }

        match self.state() {
            BuilderState::Empty => BuildStep::Added {
                point: self.push_point(pos),
                segment_added: false,
            },
            BuilderState::OnePoint => {
                if self.is_near_first(pos) {
                    log::debug!("Punkt liegt auf dem Startpunkt, verworfen");
                    return BuildStep::Ignored(IgnoreReason::TooCloseToFirst);
                }
                BuildStep::Added {
                    point: self.push_point(pos),
                    segment_added: false,
                }
            }
            BuilderState::Building => {
                if self.is_near_first(pos) {
                    if self.points.len() < MIN_CLOSURE_POINTS {
                        log::debug!(
                            "Schließen mit {} Punkten nicht möglich, verworfen",
                            self.points.len()
                        );
                        return BuildStep::Ignored(IgnoreReason::ClosureTooFewPoints);
                    }
                    return BuildStep::Closed(self.close_loop());
                }
                if self.is_near_last(pos) {
                    log::debug!("Punkt liegt auf dem letzten Punkt, verworfen");
                    return BuildStep::Ignored(IgnoreReason::TooCloseToLast);
                }
                self.extend(pos)
            }
        }
    }

    /// Verwirft Punkte und Segmente der Kurve in Arbeit.
    pub fn reset(&mut self) {
        if !self.points.is_empty() {
            log::info!(
                "Kurve in Arbeit verworfen ({} Punkte, {} Segmente)",
                self.points.len(),
                self.segments.len()
            );
        }
        self.points.clear();
        self.segments.clear();
    }

    fn push_point(&mut self, pos: Vec2) -> PointId {
        let id = self.points.push(ControlPoint::from_position(pos));
        log::info!(
            "Punkt {} = ({}, {}) hinzugefügt",
            self.points.len(),
            pos.x,
            pos.y
        );
        id
    }

    /// Hängt einen neuen Punkt an: Tangente des Vorgängers, ggf. neues Segment.
    fn extend(&mut self, pos: Vec2) -> BuildStep {
        let k = self.points.len();
        let new_id = self.push_point(pos);

        // Vorgänger kennt jetzt beide Nachbarn
        update_tangent_logged(&mut self.points, PointId(k - 1), PointId(k - 2), new_id);

        let segment_added = k >= 3;
        if segment_added {
            self.segments.push(SplineSegment::new(
                PointId(k - 3),
                PointId(k - 2),
                PointId(k - 1),
                new_id,
            ));
            log::info!("Spline ({}) -> ({}) hinzugefügt", k - 1, k);
        }

        BuildStep::Added {
            point: new_id,
            segment_added,
        }
    }

    /// Schließt die Schleife über den ersten Punkt.
    ///
    /// Voraussetzung: mindestens `MIN_CLOSURE_POINTS` Punkte. Ergänzt die drei
    /// Segmente über die Naht, sodass Segment `i` von Punkt `i` nach `i+1 mod n`
    /// verläuft, und leert den Arbeitszustand.
    fn close_loop(&mut self) -> ClosedCurve {
        let n = self.points.len();
        let first = PointId(0);
        let second = PointId(1);
        let third = PointId(2);
        let last = PointId(n - 1);
        let second_last = PointId(n - 2);
        let third_last = PointId(n - 3);

        update_tangent_logged(&mut self.points, last, second_last, first);
        update_tangent_logged(&mut self.points, first, last, second);

        self.segments
            .push(SplineSegment::new(third_last, second_last, last, first));
        log::info!("Spline ({}) -> ({}) hinzugefügt", n - 1, n);

        self.segments
            .push(SplineSegment::new(second_last, last, first, second));
        log::info!("Spline ({}) -> (1) hinzugefügt", n);

        self.segments
            .insert(0, SplineSegment::new(last, first, second, third));
        log::info!("Spline (1) -> (2) hinzugefügt");

        let points = std::mem::take(&mut self.points);
        let segments = std::mem::take(&mut self.segments);
        log::info!("Kurve geschlossen ({} Segmente)", segments.len());
        ClosedCurve::new(points, segments)
    }
}

/// Tangenten-Update; ein entarteter Fall wird geloggt und übersprungen.
fn update_tangent_logged(arena: &mut PointArena, target: PointId, prev: PointId, next: PointId) {
    if let Err(e) = arena.update_tangent(target, prev, next) {
        log::warn!("{}", e);
    }
}
