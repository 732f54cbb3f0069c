//! Curve Editor.
//!
//! Interaktiver Editor für eine Polylinie über `[0,1]²`: Punkte ziehen,
//! per Klick auf die Linie einfügen, Änderungen an einen Beobachter melden.

use curve_editor::core::CurveViewport;
use curve_editor::{ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;
use glam::Vec2;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Curve Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([720.0, 780.0])
                .with_title("Curve Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Curve Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(editor_options);
        // Host-Callback: committete Liste als [x, y]-Paare melden
        state.set_observer(|points| {
            log::info!("Punktliste geändert: {:?}", points.to_pairs());
        });

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_meaningful_events = !events.is_empty();

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport = CurveViewport::fit(
                    Vec2::new(rect.min.x, rect.min.y),
                    Vec2::new(rect.width(), rect.height()),
                    self.state.options.viewport_padding,
                );

                let display_points = self.state.display_points().into_owned();
                events.extend(self.input.collect_canvas_events(
                    ui,
                    &response,
                    &viewport,
                    &display_points,
                    self.state.is_dragging(),
                    &self.state.options,
                ));

                let scene = self.controller.build_render_scene(&self.state);
                ui::paint_curve_scene(ui.painter(), rect, &viewport, &scene);

                if response.contains_pointer() || scene.is_dragging() {
                    ctx.set_cursor_icon(ui::cursor_icon(&scene));
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("Fehler: {:#}", e));
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.is_dragging()
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
