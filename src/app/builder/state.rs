//! State-Definitionen und Hilfsmethoden für den Kurven-Builder.

use crate::core::{ClosedCurve, PointArena, PointId, SplineSegment};
use crate::shared::CLOSURE_TOLERANCE;
use glam::Vec2;

/// Mindestanzahl Punkte, ab der eine Schleife geschlossen werden darf.
pub const MIN_CLOSURE_POINTS: usize = 4;

/// Ob `pos` im normalisierten Zeichenbereich [0, 1]² liegt.
pub(crate) fn in_unit_square(pos: Vec2) -> bool {
    pos.cmpge(Vec2::ZERO).all() && pos.cmple(Vec2::ONE).all()
}

/// Zustand der Arbeits-Punktliste.
///
/// `Closed` ist transient: nach dem Schließen geht der Builder sofort
/// wieder in `Empty` über.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// Noch kein Punkt gesetzt
    Empty,
    /// Genau ein Punkt gesetzt, noch kein Segment möglich
    OnePoint,
    /// Mindestens zwei Punkte, Segmente entstehen ab dem vierten
    Building,
}

/// Grund, aus dem ein Klick verworfen wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Zweiter Punkt liegt auf dem ersten
    TooCloseToFirst,
    /// Klick auf den Startpunkt, aber zu wenige Punkte für eine Schleife
    ClosureTooFewPoints,
    /// Neuer Punkt liegt auf dem zuletzt gesetzten
    TooCloseToLast,
    /// Koordinaten sind NaN oder unendlich
    NonFinite,
    /// Koordinaten liegen außerhalb des normalisierten Bereichs [0, 1]²
    OutOfRange,
}

/// Ergebnis eines `add_point`-Aufrufs.
#[derive(Debug, Clone)]
pub enum BuildStep {
    /// Punkt übernommen
    Added {
        /// ID des neuen Punkts in der Arbeitsliste
        point: PointId,
        /// Ob dabei ein neues Segment entstanden ist
        segment_added: bool,
    },
    /// Schleife geschlossen, Arbeitszustand geleert
    Closed(ClosedCurve),
    /// Klick verworfen, Arbeitszustand unverändert
    Ignored(IgnoreReason),
}

/// Baut eine geschlossene Catmull-Rom-Kurve Punkt für Punkt auf.
#[derive(Debug, Clone)]
pub struct CurveBuilder {
    /// Arbeits-Punktliste in Klick-Reihenfolge
    pub(crate) points: PointArena,
    /// Bereits erzeugte Segmente der Kurve in Arbeit
    pub(crate) segments: Vec<SplineSegment>,
    /// Schließ-Toleranz (normalisiert)
    pub closure_tolerance: f32,
}

impl CurveBuilder {
    /// Erstellt einen leeren Builder mit Standard-Toleranz.
    pub fn new() -> Self {
        Self::with_tolerance(CLOSURE_TOLERANCE)
    }

    /// Erstellt einen leeren Builder mit eigener Schließ-Toleranz.
    pub fn with_tolerance(closure_tolerance: f32) -> Self {
        Self {
            points: PointArena::new(),
            segments: Vec::new(),
            closure_tolerance,
        }
    }

    /// Aktueller Zustand, abgeleitet aus der Punktanzahl.
    pub fn state(&self) -> BuilderState {
        match self.points.len() {
            0 => BuilderState::Empty,
            1 => BuilderState::OnePoint,
            _ => BuilderState::Building,
        }
    }

    /// Kontrollpunkte der Kurve in Arbeit.
    pub fn points(&self) -> &PointArena {
        &self.points
    }

    /// Segmente der Kurve in Arbeit.
    pub fn segments(&self) -> &[SplineSegment] {
        &self.segments
    }

    /// Positionen der Kontrollpunkte (für Marker).
    pub fn control_positions(&self) -> Vec<Vec2> {
        self.points.positions()
    }

    /// Ob der nächste Klick auf dem Startpunkt die Schleife schließen würde.
    pub fn can_close(&self) -> bool {
        self.points.len() >= MIN_CLOSURE_POINTS
    }

    /// Ob `pos` innerhalb der Schließ-Toleranz um den ersten Punkt liegt.
    pub(crate) fn is_near_first(&self, pos: Vec2) -> bool {
        self.points
            .first()
            .is_some_and(|p| p.position.distance(pos) < self.closure_tolerance)
    }

    /// Ob `pos` innerhalb der Toleranz um den zuletzt gesetzten Punkt liegt.
    pub(crate) fn is_near_last(&self, pos: Vec2) -> bool {
        self.points
            .last()
            .is_some_and(|p| p.position.distance(pos) < self.closure_tolerance)
    }

    /// Statuszeile für die Host-Oberfläche.
    pub fn status_text(&self) -> &str {
        match self.state() {
            BuilderState::Empty => "Startpunkt klicken",
            BuilderState::OnePoint => "Nächsten Punkt klicken",
            BuilderState::Building if self.can_close() => {
                "Weitere Punkte klicken oder Startpunkt klicken zum Schließen"
            }
            BuilderState::Building => "Weitere Punkte klicken (mind. 4 zum Schließen)",
        }
    }
}

impl Default for CurveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
