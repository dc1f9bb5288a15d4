//! Geteilte Typen und Funktionen für layer-übergreifende Verträge.
//!
//! Enthält Optionen, reine Spline-Geometrie und die Render-Szene, die
//! zwischen `app` und `render` geteilt werden.

pub mod options;
mod render_scene;
pub mod spline_geometry;

pub use options::SplineOptions;
pub use options::{CLOSURE_TOLERANCE, DEFAULT_ALPHA, SAMPLE_STEPS};
pub use render_scene::{PointMarker, RenderScene, SampledCurve};
