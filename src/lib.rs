//! Curve Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, ChangeNotifier, DragSession, HoverState,
    InteractionState, UiState,
};
pub use core::{create_boundary, Boundary, CurvePoints, CurveViewport, LineHit};
pub use json::{parse_points_json, write_points_json};
pub use shared::{CursorAffordance, CurveScene, EditorOptions};
