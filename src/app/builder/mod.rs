//! Kurven-Builder: baut aus geklickten Punkten eine geschlossene Spline.
//!
//! Aufgeteilt in:
//! - `state`    : Struct, Zustände, Ergebnis-Typen, Hilfsmethoden
//! - `lifecycle`: add_point, Schließen der Schleife, reset

mod lifecycle;
mod state;

pub use state::{BuildStep, BuilderState, CurveBuilder, IgnoreReason, MIN_CLOSURE_POINTS};
