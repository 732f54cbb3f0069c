//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod notifier;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand des Editors (Punktliste, Hover, Drag).
pub mod state;
pub mod use_cases;

pub use crate::shared::CursorAffordance;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use notifier::ChangeNotifier;
pub use render_scene::build as build_render_scene;
pub use state::{AppState, DragSession, HoverState, InteractionState, UiState};
