//! UI-Komponenten: Canvas, Menü, Status-Bar, Input-Handling, Dialoge.

pub mod canvas;
pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert den Host des Kurven-Editors: Zeichnen,
/// Hit-Test und Übersetzung von Maus/Tastatur in `AppIntent`s.
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use canvas::{cursor_icon, paint_curve_scene};
pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
