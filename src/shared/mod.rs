//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod cursor;
pub mod options;
mod render_scene;

pub use cursor::CursorAffordance;
pub use options::EditorOptions;
pub use render_scene::CurveScene;
