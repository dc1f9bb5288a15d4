//! Application-Layer: Controller, Session, Events und Kurven-Builder.

pub mod builder;
pub mod command_log;
pub mod controller;
pub mod events;
mod intent_mapping;
pub mod render_scene;
pub mod reveal;
pub mod session;

pub use builder::{BuilderState, CurveBuilder, IgnoreReason};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, MouseButton};
pub use render_scene::build as build_render_scene;
pub use reveal::RevealAnimation;
pub use session::{AddPointOutcome, CurveSession};
