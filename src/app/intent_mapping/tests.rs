use crate::app::state::{DragSession, HoverState};
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::Boundary;
use glam::Vec2;

use super::map_intent_to_commands;

fn dragging_state() -> AppState {
    let mut state = AppState::new();
    state.interaction.drag = Some(DragSession {
        index: 1,
        boundary: Boundary::LAST,
        position: Vec2::new(1.0, 1.0),
    });
    state
}

#[test]
fn save_requested_maps_to_save_file_without_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SaveRequested);

    assert_eq!(commands, vec![AppCommand::SaveFile { path: None }]);
}

#[test]
fn pointer_down_on_point_starts_drag_when_idle() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::PointerDownOnPoint { index: 0 });

    assert_eq!(commands, vec![AppCommand::BeginPointDrag { index: 0 }]);
}

#[test]
fn hover_and_pointer_down_are_ignored_while_dragging() {
    let state = dragging_state();

    for intent in [
        AppIntent::PointerDownOnPoint { index: 0 },
        AppIntent::PointerMoveOnPoint { index: 0 },
        AppIntent::PointerMoveOnLine {
            pos: Some(Vec2::new(0.5, 0.5)),
        },
        AppIntent::LineClicked,
        AppIntent::UndoRequested,
    ] {
        assert!(map_intent_to_commands(&state, intent).is_empty());
    }
}

#[test]
fn surface_move_and_release_only_act_while_dragging() {
    let idle = AppState::new();
    let pos = Vec2::new(0.3, 0.4);

    assert!(map_intent_to_commands(&idle, AppIntent::PointerMoveOnSurface { pos }).is_empty());
    assert!(map_intent_to_commands(&idle, AppIntent::PointerReleased).is_empty());

    let dragging = dragging_state();
    assert_eq!(
        map_intent_to_commands(&dragging, AppIntent::PointerMoveOnSurface { pos }),
        vec![AppCommand::UpdatePointDrag { pos }]
    );
    assert_eq!(
        map_intent_to_commands(&dragging, AppIntent::PointerReleased),
        vec![AppCommand::CommitPointDrag]
    );
}

#[test]
fn line_click_requires_line_hover() {
    let mut state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::LineClicked).is_empty());

    state.interaction.hover = HoverState::Line(Vec2::new(0.5, 0.5));
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::LineClicked),
        vec![AppCommand::InsertPointAtHover]
    );
}

#[test]
fn line_move_without_position_is_a_noop() {
    let state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::PointerMoveOnLine { pos: None }).is_empty());
}

#[test]
fn leave_events_only_clear_matching_hover() {
    let mut state = AppState::new();
    state.interaction.hover = HoverState::Point(1);

    assert!(map_intent_to_commands(&state, AppIntent::PointerLeftLine).is_empty());
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::PointerLeftPoint),
        vec![AppCommand::ClearPointHover]
    );
}

#[test]
fn repeated_move_on_same_point_emits_nothing() {
    let mut state = AppState::new();
    state.interaction.hover = HoverState::Point(1);

    assert!(map_intent_to_commands(&state, AppIntent::PointerMoveOnPoint { index: 1 }).is_empty());
}

#[test]
fn save_path_selected_maps_to_explicit_save() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SaveFilePathSelected {
            path: "kurve.json".to_string(),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::SaveFile {
            path: Some("kurve.json".to_string())
        }]
    );
}
