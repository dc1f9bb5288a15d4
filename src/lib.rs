//! Catmull-Rom-Splines Library.
//! Geschlossene zentripetale Catmull-Rom-Kurven durch geklickte Punkte;
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    AddPointOutcome, AppCommand, AppController, AppIntent, BuilderState, CurveBuilder,
    CurveSession, IgnoreReason, MouseButton,
};
pub use core::{ClosedCurve, ControlPoint, PointArena, PointId, SplineError, SplineSegment, Viewport};
pub use render::{CurveRenderer, TextRenderer};
pub use shared::{RenderScene, SplineOptions};
