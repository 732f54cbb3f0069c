use super::*;

fn collect_with_key_event(event: egui::Event) -> Vec<AppIntent> {
    collect_with_focus(event, None)
}

fn collect_with_focus(event: egui::Event, focused: Option<egui::Id>) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    if let egui::Event::Key { modifiers, .. } = &event {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        if let Some(id) = focused {
            ctx.memory_mut(|m| m.request_focus(id));
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui);
        });
    });

    events
}

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

#[test]
fn test_ctrl_z_emits_undo_intent() {
    let events = collect_with_key_event(key_event(egui::Key::Z, egui::Modifiers::COMMAND));

    assert_eq!(events, vec![AppIntent::UndoRequested]);
}

#[test]
fn test_ctrl_shift_z_emits_redo_intent() {
    let events = collect_with_key_event(key_event(
        egui::Key::Z,
        egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
    ));

    assert_eq!(events, vec![AppIntent::RedoRequested]);
}

#[test]
fn test_ctrl_y_emits_redo_intent() {
    let events = collect_with_key_event(key_event(egui::Key::Y, egui::Modifiers::COMMAND));

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
}

#[test]
fn test_ctrl_o_emits_open_intent() {
    let events = collect_with_key_event(key_event(egui::Key::O, egui::Modifiers::COMMAND));

    assert_eq!(events, vec![AppIntent::OpenFileRequested]);
}

#[test]
fn test_ctrl_s_and_ctrl_shift_s_differ() {
    let save = collect_with_key_event(key_event(egui::Key::S, egui::Modifiers::COMMAND));
    let save_as = collect_with_key_event(key_event(
        egui::Key::S,
        egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
    ));

    assert_eq!(save, vec![AppIntent::SaveRequested]);
    assert_eq!(save_as, vec![AppIntent::SaveAsRequested]);
}

#[test]
fn test_plain_z_emits_nothing() {
    let events = collect_with_key_event(key_event(egui::Key::Z, egui::Modifiers::NONE));

    assert!(events.is_empty());
}

#[test]
fn test_shortcuts_are_ignored_while_text_field_has_focus() {
    let events = collect_with_focus(
        key_event(egui::Key::Z, egui::Modifiers::COMMAND),
        Some(egui::Id::new("history_depth_field")),
    );

    assert!(events.is_empty());
}
