//! Kontrollpunkte mit Tangente und die Arena, in der sie leben.
//!
//! Segmente halten keine Punkte, sondern `PointId`s in eine `PointArena`.
//! Ein Punkt kann so von bis zu zwei benachbarten Segmenten referenziert
//! und trotzdem in-place (Tangente) aktualisiert werden.

use super::SplineError;
use glam::Vec2;

/// Stabiler Index eines Kontrollpunkts innerhalb seiner `PointArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

impl PointId {
    /// Gibt den rohen Arena-Index zurück.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Vom Benutzer gesetzter Punkt mit zugehöriger Einheits-Tangente.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position in normalisierten Koordinaten
    pub position: Vec2,
    /// Einheits-Tangente (Nullvektor, solange nicht berechnet)
    pub tangent: Vec2,
}

impl ControlPoint {
    /// Erstellt einen Punkt an `(x, y)` ohne Tangente.
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_position(Vec2::new(x, y))
    }

    /// Erstellt einen Punkt an `position` ohne Tangente.
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            tangent: Vec2::ZERO,
        }
    }

    /// Euklidischer Abstand zu einem anderen Punkt.
    pub fn distance(&self, other: &ControlPoint) -> f32 {
        self.position.distance(other.position)
    }

    /// Ob bereits eine Tangente berechnet wurde.
    pub fn has_tangent(&self) -> bool {
        self.tangent != Vec2::ZERO
    }

    /// Setzt die Tangente auf die Einheitsrichtung `prev → next`.
    ///
    /// Fallen `prev` und `next` zusammen, bleibt die bisherige Tangente
    /// erhalten und `SplineError::DegenerateTangent` wird zurückgegeben.
    pub fn update_tangent(&mut self, prev: Vec2, next: Vec2) -> Result<Vec2, SplineError> {
        let tangent = unit_direction(prev, next).ok_or(SplineError::DegenerateTangent {
            at: self.position,
        })?;
        self.tangent = tangent;
        Ok(tangent)
    }
}

/// Einheitsvektor von `from` nach `to`, `None` bei zusammenfallenden Punkten.
pub fn unit_direction(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    let norm = delta.length();
    if norm == 0.0 || !norm.is_finite() {
        return None;
    }
    Some(delta / norm)
}

/// Append-only Speicher für Kontrollpunkte mit stabilen Indizes.
///
/// Einzelne Punkte werden nie entfernt; geleert wird nur als Ganzes.
#[derive(Debug, Clone, Default)]
pub struct PointArena {
    points: Vec<ControlPoint>,
}

impl PointArena {
    /// Erstellt eine leere Arena.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Legt einen Punkt ab und gibt seine ID zurück.
    pub fn push(&mut self, point: ControlPoint) -> PointId {
        let id = PointId(self.points.len());
        self.points.push(point);
        id
    }

    /// Liefert den Punkt zu `id`.
    pub fn get(&self, id: PointId) -> Option<&ControlPoint> {
        self.points.get(id.0)
    }

    /// Position des Punkts zu `id`.
    pub fn position(&self, id: PointId) -> Option<Vec2> {
        self.get(id).map(|p| p.position)
    }

    /// Aktualisiert die Tangente von `target` aus den Positionen von `prev` und `next`.
    ///
    /// Unbekannte IDs werden wie zusammenfallende Nachbarn behandelt.
    pub fn update_tangent(
        &mut self,
        target: PointId,
        prev: PointId,
        next: PointId,
    ) -> Result<Vec2, SplineError> {
        let (Some(prev_pos), Some(next_pos)) = (self.position(prev), self.position(next)) else {
            return Err(SplineError::DegenerateTangent {
                at: self.position(target).unwrap_or(Vec2::ZERO),
            });
        };
        match self.points.get_mut(target.0) {
            Some(point) => point.update_tangent(prev_pos, next_pos),
            None => Err(SplineError::DegenerateTangent { at: Vec2::ZERO }),
        }
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Arena leer ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Erster Punkt (in Einfüge-Reihenfolge).
    pub fn first(&self) -> Option<&ControlPoint> {
        self.points.first()
    }

    /// Letzter Punkt (in Einfüge-Reihenfolge).
    pub fn last(&self) -> Option<&ControlPoint> {
        self.points.last()
    }

    /// ID des zuletzt abgelegten Punkts.
    pub fn last_id(&self) -> Option<PointId> {
        self.points.len().checked_sub(1).map(PointId)
    }

    /// Alle Punkte in Einfüge-Reihenfolge.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Alle Positionen in Einfüge-Reihenfolge.
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Verwirft alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
