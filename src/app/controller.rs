//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, CurveSession};
use crate::shared::RenderScene;

/// Orchestriert Host-Events auf die CurveSession.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        session: &mut CurveSession,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(session, intent);
        for command in commands {
            self.handle_command(session, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf der Session aus.
    pub fn handle_command(
        &mut self,
        session: &mut CurveSession,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        session.command_log.record(command.clone());

        match command {
            AppCommand::AddControlPoint { pos } => {
                let outcome = session.add_control_point(pos.x, pos.y);
                log::debug!("Klick bei {:?}: {:?}", pos, outcome);
                session.last_add_outcome = Some(outcome);
            }
            AppCommand::ResetSession => session.reset_session(),
            AppCommand::RequestRedraw => session.request_redraw(),
            AppCommand::SetAlpha { alpha } => session.set_alpha(alpha)?,
            AppCommand::ApplyOptions { options } => session.apply_options(options),
            AppCommand::AdvanceFrame { elapsed_ms } => session.advance_frame(elapsed_ms),
            AppCommand::RequestExit => session.should_exit = true,
        }

        Ok(())
    }

    /// Baut die RenderScene für den aktuellen Frame.
    pub fn build_render_scene(&self, session: &CurveSession) -> RenderScene {
        render_scene::build(session)
    }
}
