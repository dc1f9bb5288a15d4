//! Mapping von Host-Intents auf mutierende App-Commands.

use super::events::MouseButton;
use super::{AppCommand, AppIntent, CurveSession};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(session: &CurveSession, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportClicked { button, screen_pos } => match button {
            MouseButton::Left => {
                let pos = session.viewport().screen_to_normalized(screen_pos);
                vec![AppCommand::AddControlPoint { pos }]
            }
            MouseButton::Right => vec![AppCommand::ResetSession],
            MouseButton::Middle => vec![AppCommand::RequestRedraw],
        },
        AppIntent::ControlPointRequested { pos } => vec![AppCommand::AddControlPoint { pos }],
        AppIntent::ResetRequested => vec![AppCommand::ResetSession],
        AppIntent::RedrawRequested => vec![AppCommand::RequestRedraw],
        AppIntent::AlphaChanged { alpha } => vec![AppCommand::SetAlpha { alpha }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::FrameAdvanced { elapsed_ms } => vec![AppCommand::AdvanceFrame { elapsed_ms }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
