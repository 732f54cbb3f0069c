//! Canvas-Input-Handling: Maus-Events → AppIntent.
//!
//! Der Canvas übernimmt die Rolle des Host-Renderers: Hit-Test auf
//! Markern und Pick-Linie, Leave-/Move-Übergänge, Pointer-Down auf
//! Punkten, Klick auf die Linie und globales Loslassen.

mod target;

pub use target::{classify_target, transition_intents, PointerTarget};

use super::keyboard;
use crate::app::AppIntent;
use crate::core::CurveViewport;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Verwaltet den Input-Zustand des Canvas zwischen zwei Frames.
#[derive(Default)]
pub struct InputState {
    last_target: PointerTarget,
    /// Screen-Position des Zeigers im letzten Frame
    last_pointer: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas- und Keyboard-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// `points` ist die aktuell angezeigte Liste, `dragging` der Drag-Zustand
    /// vor diesem Frame.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport: &CurveViewport,
        points: &[Vec2],
        dragging: bool,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let (pointer_pos, pressed, clicked, released, primary_down) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_clicked(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
            )
        });
        // Andere Fenster (Menü, Dialoge) verdecken den Canvas
        let over_canvas = response.contains_pointer();

        let pointer = pointer_pos.map(|p| Vec2::new(p.x, p.y));
        let screen = pointer.filter(|_| over_canvas || dragging);
        let target = classify_target(points, viewport, screen, options, dragging);

        // Keyboard-Shortcuts (ausgelagert in keyboard/)
        let mut events = keyboard::collect_keyboard_intents(ui);
        events.extend(self.frame_intents(
            pointer,
            target,
            FrameButtons {
                pressed,
                clicked,
                released,
                primary_down,
            },
            dragging,
        ));
        events
    }

    /// Bildet Ziel und Tastenzustand eines Frames auf AppIntents ab und
    /// merkt sich Ziel und Zeigerposition für den nächsten Frame.
    fn frame_intents(
        &mut self,
        pointer: Option<Vec2>,
        target: PointerTarget,
        buttons: FrameButtons,
        dragging: bool,
    ) -> Vec<AppIntent> {
        let moved = pointer != self.last_pointer;
        let mut events = transition_intents(self.last_target, target, moved);

        match target {
            PointerTarget::Point(index) if buttons.pressed && !dragging => {
                events.push(AppIntent::PointerDownOnPoint { index });
            }
            PointerTarget::Line(_) if buttons.clicked && !dragging => {
                events.push(AppIntent::LineClicked);
            }
            _ => {}
        }

        // Loslassen wird global gelesen, auch außerhalb des Canvas.
        // Ohne gedrückte Taste endet ein Drag spätestens im nächsten Frame.
        if dragging && (buttons.released || !buttons.primary_down) {
            events.push(AppIntent::PointerReleased);
        }

        self.last_target = target;
        self.last_pointer = pointer;
        events
    }
}

/// Tastenzustand der Primärtaste in einem Frame.
#[derive(Debug, Clone, Copy, Default)]
struct FrameButtons {
    pressed: bool,
    clicked: bool,
    released: bool,
    primary_down: bool,
}
