//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Events, deren Vorbedingung im aktuellen Zustand nicht erfüllt ist
//! (z.B. Hover während eines Drags), erzeugen keine Commands.

use super::state::HoverState;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let dragging = state.is_dragging();

    match intent {
        // ── Pointer-Events ──────────────────────────────────────
        AppIntent::PointerDownOnPoint { index } if !dragging => {
            vec![AppCommand::BeginPointDrag { index }]
        }
        AppIntent::PointerMoveOnPoint { index } if !dragging => {
            if state.interaction.hover == HoverState::Point(index) {
                vec![]
            } else {
                vec![AppCommand::SetPointHover { index }]
            }
        }
        AppIntent::PointerLeftPoint => match state.interaction.hover {
            HoverState::Point(_) => vec![AppCommand::ClearPointHover],
            _ => vec![],
        },
        AppIntent::PointerMoveOnLine { pos: Some(pos) } if !dragging => {
            vec![AppCommand::SetLineHover { pos }]
        }
        AppIntent::PointerLeftLine => match state.interaction.hover {
            HoverState::Line(_) => vec![AppCommand::ClearLineHover],
            _ => vec![],
        },
        AppIntent::PointerMoveOnSurface { pos } if dragging => {
            vec![AppCommand::UpdatePointDrag { pos }]
        }
        AppIntent::PointerReleased if dragging => vec![AppCommand::CommitPointDrag],
        AppIntent::LineClicked if !dragging => match state.interaction.hover {
            HoverState::Line(_) => vec![AppCommand::InsertPointAtHover],
            _ => vec![],
        },

        // ── Kurve & History ─────────────────────────────────────
        AppIntent::UndoRequested if !dragging => vec![AppCommand::Undo],
        AppIntent::RedoRequested if !dragging => vec![AppCommand::Redo],
        AppIntent::ResetCurveRequested if !dragging => vec![AppCommand::ResetCurve],

        // ── Datei ───────────────────────────────────────────────
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::FileSelected { path } if !dragging => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveFile { path: Some(path) }]
        }

        // ── Optionen & Anwendung ────────────────────────────────
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        ignored => {
            log::debug!("Intent ohne Wirkung im aktuellen Zustand: {:?}", ignored);
            vec![]
        }
    }
}

#[cfg(test)]
mod tests;
