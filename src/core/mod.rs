//! Core-Domänentypen: Kontrollpunkte, Segmente, geschlossene Kurven, Viewport.

pub mod closed_curve;
pub mod control_point;
pub mod error;
pub mod segment;
pub mod viewport;

pub use closed_curve::ClosedCurve;
pub use control_point::{unit_direction, ControlPoint, PointArena, PointId};
pub use error::SplineError;
pub use segment::SplineSegment;
pub use viewport::Viewport;
