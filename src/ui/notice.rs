//! Modal message rendering.

use crate::notice::Notice;
use eframe::egui;

/// Draw a notice filling `ui`. Returns true once dismissed.
pub fn notice_panel(ui: &mut egui::Ui, notice: &Notice) -> bool {
    let mut dismissed = false;

    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.heading(&notice.title);
        ui.add_space(8.0);
        ui.label(&notice.body);
        ui.add_space(12.0);
        if ui.button("OK").clicked() {
            dismissed = true;
        }
    });

    dismissed || dismiss_key_pressed(ui.ctx())
}

/// Draw a notice as a window centred over the viewport. Returns true once dismissed.
pub fn notice_window(ctx: &egui::Context, notice: &Notice) -> bool {
    let mut dismissed = false;

    egui::Window::new(&notice.title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(&notice.body);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    dismissed || dismiss_key_pressed(ctx)
}

fn dismiss_key_pressed(ctx: &egui::Context) -> bool {
    ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape))
}
