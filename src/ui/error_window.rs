//! Fatal startup error window.
//!
//! Release builds have no console, so a failure before the main window opens
//! is shown in a small window of its own before the process exits.

use eframe::egui;

/// Window size of the error report.
const ERROR_SIZE: [f32; 2] = [420.0, 160.0];

/// Text shown for a fatal error: the message followed by its causes.
pub fn fatal_message(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}

/// One-shot window showing a fatal error with an OK button.
pub struct ErrorWindow {
    message: String,
}

impl ErrorWindow {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl eframe::App for ErrorWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut close = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(&self.message);
            ui.add_space(12.0);
            if ui.button("OK").clicked() {
                close = true;
            }
        });

        if ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
            close = true;
        }
        if close {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Log a fatal error and show it to the user.
///
/// Blocks until the error window is closed. If the window itself cannot be
/// opened the error is only logged.
pub fn show_error(title: &str, err: &anyhow::Error) {
    let message = fatal_message(err);
    tracing::error!("{}", message);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(ERROR_SIZE)
            .with_resizable(false)
            .with_always_on_top(),
        ..Default::default()
    };

    let window = ErrorWindow::new(message);
    if let Err(e) = eframe::run_native(title, options, Box::new(|_cc| Ok(Box::new(window)))) {
        tracing::warn!(error = %e, "Could not open error window");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_fatal_message_includes_causes() {
        let err = std::fs::read("pigment-moji-missing-dataset.json")
            .context("Failed to load emoji dataset")
            .unwrap_err();

        let message = fatal_message(&err);
        assert!(message.starts_with("Failed to load emoji dataset: "));
        assert!(message.len() > "Failed to load emoji dataset: ".len());
    }

    #[test]
    fn test_error_window_keeps_message() {
        let err = anyhow::anyhow!("Failed to load tray icon");
        let window = ErrorWindow::new(fatal_message(&err));
        assert_eq!(window.message(), "Failed to load tray icon");
    }
}
