//! Vektor2D-Editor.
//!
//! Interaktiver 2D-Vektorgrafik-Editor: Punkte, Linien, Rechtecke und
//! Ellipsen zeichnen, selektieren, transformieren und gegen ein Clip-Window
//! beschneiden. Host auf Basis von eframe/egui.

use std::time::Duration;

use eframe::egui;
use vektor2d_editor::{render, ui, AppController, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run().inspect_err(|e| log::error!("Editor beendet mit Fehler: {e}"))
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("Vektor2D-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!("Optionen-Datei konnte nicht angelegt werden: {:#}", e);
            }
        }

        ui::log_key_bindings();

        let state = AppState::with_options(editor_options);
        let title = ui::status_text(&state);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(state.options.viewport_size)
                .with_title(title.clone()),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Vektor2D-Editor",
            options,
            Box::new(move |_cc| Ok(Box::new(EditorApp::new(state, title)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
    title: String,
}

impl EditorApp {
    fn new(state: AppState, title: String) -> Self {
        Self {
            state,
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
            title,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());
                let viewport_size = [rect.width(), rect.height()];

                let events = ctx.input(|i| ui::InputState::collect_events(i, rect));
                let intents = self.input.events_to_intents(&events, viewport_size);
                self.controller.handle_intents(&mut self.state, intents);

                let scene = self.controller.build_render_scene(&self.state);
                let mut backend = render::PainterBackend::new(ui.painter(), rect);
                self.renderer.render_scene(&mut backend, &scene);
            });

        self.sync_title(ctx);

        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ctx.request_repaint_after(Duration::from_secs_f32(
            self.state.options.frame_interval_secs(),
        ));
    }
}

impl EditorApp {
    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = ui::status_text(&self.state);
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}
