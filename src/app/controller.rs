//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::CurveScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Hover ===
            AppCommand::SetPointHover { index } => {
                handlers::interaction::set_point_hover(state, index)
            }
            AppCommand::ClearPointHover => handlers::interaction::clear_point_hover(state),
            AppCommand::SetLineHover { pos } => handlers::interaction::set_line_hover(state, pos),
            AppCommand::ClearLineHover => handlers::interaction::clear_line_hover(state),

            // === Drag-Session ===
            AppCommand::BeginPointDrag { index } => handlers::interaction::begin_drag(state, index),
            AppCommand::UpdatePointDrag { pos } => handlers::interaction::update_drag(state, pos),
            AppCommand::CommitPointDrag => handlers::interaction::commit_drag(state),

            // === Editing ===
            AppCommand::InsertPointAtHover => handlers::editing::insert_point(state),
            AppCommand::ResetCurve => handlers::editing::reset_curve(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> CurveScene {
        render_scene::build(state)
    }
}
