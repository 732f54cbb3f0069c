use curve_editor::{AppCommand, AppController, AppIntent, AppState, CurvePoints, CursorAffordance};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Zeichnet alle Beobachter-Aufrufe auf.
fn observe(state: &mut AppState) -> Rc<RefCell<Vec<Vec<[f32; 2]>>>> {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    state.set_observer(move |points| sink.borrow_mut().push(points.to_pairs()));
    calls
}

fn state_with(points: &[[f32; 2]]) -> AppState {
    let mut state = AppState::new();
    state.curve = CurvePoints::from_points(points.iter().map(|&p| Vec2::from_array(p)).collect())
        .expect("gültige Testkurve");
    state
}

fn run(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }
}

#[test]
fn test_click_on_line_inserts_point_and_notifies_once() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let calls = observe(&mut state);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::PointerMoveOnLine {
                pos: Some(Vec2::new(0.5, 0.5)),
            },
            AppIntent::LineClicked,
        ],
    );

    assert_eq!(
        state.curve.to_pairs(),
        vec![[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]]
    );
    assert_eq!(
        *calls.borrow(),
        vec![vec![[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]]]
    );
}

#[test]
fn test_drag_interior_point_clamps_to_upper_neighbour() {
    let mut controller = AppController::new();
    let mut state = state_with(&[[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]]);
    let calls = observe(&mut state);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::PointerMoveOnPoint { index: 1 },
            AppIntent::PointerDownOnPoint { index: 1 },
            AppIntent::PointerMoveOnSurface {
                pos: Vec2::new(0.3, 1.5),
            },
        ],
    );

    // Während des Drags: committete Liste unverändert, keine Meldung
    assert!(state.is_dragging());
    assert_eq!(state.committed_points()[1], Vec2::new(0.5, 0.5));
    assert_eq!(
        state.editing_points().expect("Drag aktiv")[1],
        Vec2::new(0.3, 1.0)
    );
    assert!(calls.borrow().is_empty());

    run(&mut controller, &mut state, vec![AppIntent::PointerReleased]);

    assert!(!state.is_dragging());
    assert_eq!(state.committed_points()[1], Vec2::new(0.3, 1.0));
    assert_eq!(calls.borrow().len(), 1);
    assert_eq!(calls.borrow()[0][1], [0.3, 1.0]);
}

#[test]
fn test_drag_first_point_keeps_y_at_zero() {
    let mut controller = AppController::new();
    let mut state = state_with(&[[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]]);

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::PointerDownOnPoint { index: 0 }],
    );

    for raw in [
        Vec2::new(0.4, 0.9),
        Vec2::new(1.7, -0.5),
        Vec2::new(-0.3, 3.0),
        Vec2::new(0.25, 0.0),
    ] {
        run(
            &mut controller,
            &mut state,
            vec![AppIntent::PointerMoveOnSurface { pos: raw }],
        );
        let editing = state.editing_points().expect("Drag aktiv");
        assert_eq!(editing[0].y, 0.0);
        assert!((0.0..=1.0).contains(&editing[0].x));
    }

    run(&mut controller, &mut state, vec![AppIntent::PointerReleased]);
    assert_eq!(state.committed_points()[0], Vec2::new(0.25, 0.0));
}

#[test]
fn test_drag_moves_never_notify() {
    let mut controller = AppController::new();
    let mut state = state_with(&[[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]]);
    let calls = observe(&mut state);

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::PointerDownOnPoint { index: 1 }],
    );
    for step in 0..20 {
        let t = step as f32 / 20.0;
        run(
            &mut controller,
            &mut state,
            vec![AppIntent::PointerMoveOnSurface {
                pos: Vec2::new(t, 1.0 - t),
            }],
        );
    }
    assert!(calls.borrow().is_empty());

    run(&mut controller, &mut state, vec![AppIntent::PointerReleased]);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn test_endpoints_survive_mixed_edit_sequence() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let sequence = [
        (Vec2::new(0.2, 0.3), Vec2::new(-1.0, 2.0)),
        (Vec2::new(0.6, 0.7), Vec2::new(0.9, -4.0)),
        (Vec2::new(0.5, 0.5), Vec2::new(0.1, 0.55)),
    ];

    for (insert_at, drag_to) in sequence {
        run(
            &mut controller,
            &mut state,
            vec![
                AppIntent::PointerMoveOnLine {
                    pos: Some(insert_at),
                },
                AppIntent::LineClicked,
                AppIntent::PointerLeftLine,
            ],
        );

        let last = state.curve.len() - 1;
        for index in [0, 1, last] {
            run(
                &mut controller,
                &mut state,
                vec![
                    AppIntent::PointerDownOnPoint { index },
                    AppIntent::PointerMoveOnSurface { pos: drag_to },
                    AppIntent::PointerReleased,
                ],
            );
        }

        let points = state.committed_points();
        assert_eq!(points[0].y, 0.0);
        assert_eq!(points[points.len() - 1].y, 1.0);
        assert!(points.windows(2).all(|pair| pair[0].y <= pair[1].y));
    }
}

#[test]
fn test_hover_is_ignored_while_dragging() {
    let mut controller = AppController::new();
    let mut state = state_with(&[[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]]);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::PointerMoveOnPoint { index: 1 },
            AppIntent::PointerDownOnPoint { index: 1 },
        ],
    );
    assert_eq!(state.cursor_affordance(), CursorAffordance::Default);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::PointerMoveOnPoint { index: 2 },
            AppIntent::PointerMoveOnLine {
                pos: Some(Vec2::new(0.7, 0.7)),
            },
            AppIntent::PointerDownOnPoint { index: 2 },
        ],
    );

    assert_eq!(state.cursor_affordance(), CursorAffordance::Default);
    assert_eq!(state.interaction.drag.map(|s| s.index), Some(1));
}

#[test]
fn test_cursor_affordance_follows_hover_events() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::PointerMoveOnLine {
            pos: Some(Vec2::new(0.4, 0.4)),
        }],
    );
    assert_eq!(state.cursor_affordance(), CursorAffordance::Crosshair);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::PointerLeftLine,
            AppIntent::PointerMoveOnPoint { index: 0 },
        ],
    );
    assert_eq!(state.cursor_affordance(), CursorAffordance::Grab);

    run(&mut controller, &mut state, vec![AppIntent::PointerLeftPoint]);
    assert_eq!(state.cursor_affordance(), CursorAffordance::Default);
}

#[test]
fn test_click_outside_any_interval_changes_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let calls = observe(&mut state);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::PointerMoveOnLine {
                pos: Some(Vec2::new(0.5, -0.2)),
            },
            AppIntent::LineClicked,
        ],
    );

    assert_eq!(state.curve, CurvePoints::new());
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_release_without_drag_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let calls = observe(&mut state);

    run(&mut controller, &mut state, vec![AppIntent::PointerReleased]);

    assert!(calls.borrow().is_empty());
    assert!(state.command_log.is_empty());
}

#[test]
fn test_undo_redo_restore_and_notify() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let calls = observe(&mut state);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::PointerMoveOnLine {
                pos: Some(Vec2::new(0.5, 0.5)),
            },
            AppIntent::LineClicked,
            AppIntent::UndoRequested,
        ],
    );
    assert_eq!(state.curve, CurvePoints::new());

    run(&mut controller, &mut state, vec![AppIntent::RedoRequested]);
    assert_eq!(state.curve.len(), 3);

    assert_eq!(calls.borrow().len(), 3);
    assert_eq!(calls.borrow()[1], vec![[0.0, 0.0], [1.0, 1.0]]);
}

#[test]
fn test_observer_replacement_only_calls_latest() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let first = observe(&mut state);
    let second = observe(&mut state);

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::PointerMoveOnLine {
            pos: Some(Vec2::new(0.5, 0.5)),
        }],
    );
    assert!(second.borrow().is_empty());

    run(&mut controller, &mut state, vec![AppIntent::LineClicked]);

    assert!(first.borrow().is_empty());
    assert_eq!(second.borrow().len(), 1);
}

#[test]
fn test_drag_pipeline_is_logged_in_order() {
    let mut controller = AppController::new();
    let mut state = state_with(&[[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]]);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::PointerDownOnPoint { index: 1 },
            AppIntent::PointerMoveOnSurface {
                pos: Vec2::new(0.2, 0.2),
            },
            AppIntent::PointerMoveOnSurface {
                pos: Vec2::new(0.4, 0.3),
            },
            AppIntent::PointerReleased,
        ],
    );

    assert_eq!(
        state.command_log.entries(),
        &[
            AppCommand::BeginPointDrag { index: 1 },
            AppCommand::UpdatePointDrag {
                pos: Vec2::new(0.4, 0.3)
            },
            AppCommand::CommitPointDrag,
        ]
    );
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::RequestExit)
    ));
}

#[test]
fn test_reset_curve_restores_default() {
    let mut controller = AppController::new();
    let mut state = state_with(&[[0.0, 0.0], [0.2, 0.4], [1.0, 1.0]]);
    let calls = observe(&mut state);

    run(&mut controller, &mut state, vec![AppIntent::ResetCurveRequested]);

    assert_eq!(state.curve, CurvePoints::new());
    assert_eq!(calls.borrow().len(), 1);
    assert!(state.can_undo());
}
