//! Application State — zentrale Datenhaltung.

mod app_state;
mod interaction;
mod ui;

pub use app_state::AppState;
pub use interaction::{DragSession, HoverState, InteractionState};
pub use ui::UiState;
