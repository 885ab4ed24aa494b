//! Statuszeile: Fenstertitel und Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Statuszeile im Format `Mode: … | Selected: Object n | Transform: …`.
///
/// Die Objektnummer ist 1-basiert.
pub fn status_text(state: &AppState) -> String {
    let mode = if state.editor.selection_mode {
        "SELECT"
    } else {
        state.editor.active_tool.label()
    };
    let mut text = format!("Mode: {mode}");

    if let Some(index) = state.selected_index() {
        text.push_str(&format!(" | Selected: Object {}", index + 1));
    }
    if let Some(transform_mode) = state.editor.transform_mode {
        text.push_str(&format!(" | Transform: {}", transform_mode.label()));
    }
    text
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(status_text(state));

            ui.separator();

            ui.label(format!("Objekte: {}", state.shape_count()));

            ui.separator();

            let [r, g, b] = state.editor.current_color;
            ui.label(format!(
                "Farbe: ({r:.1}, {g:.1}, {b:.1}) | Breite: {}",
                state.editor.current_width
            ));

            if state.editor.window_defining {
                ui.separator();
                ui.label(
                    egui::RichText::new("Clip-Window: Ecken anklicken")
                        .color(egui::Color32::YELLOW),
                );
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
