//! Colour selection dialog using eframe/egui.
//!
//! Event-driven half of the dialog contract: the dialog is opened with a
//! format and a starting colour, drawn every frame, and yields a
//! [`DialogOutcome`] once the user confirms or cancels.

use crate::color::{ColorFormat, DialogOutcome, Rgb};
use eframe::egui::{self, color_picker};

/// Open colour dialog.
pub struct ColorDialogWindow {
    /// Format the confirmed colour will be copied in
    pub format: ColorFormat,

    /// Colour currently shown in the picker
    color: egui::Color32,
}

impl ColorDialogWindow {
    pub fn new(format: ColorFormat, initial: Rgb) -> Self {
        Self {
            format,
            color: egui::Color32::from_rgb(initial.red, initial.green, initial.blue),
        }
    }

    /// Colour currently shown in the picker.
    pub fn current(&self) -> Rgb {
        Rgb::new(self.color.r(), self.color.g(), self.color.b())
    }

    /// Draw the dialog. Returns the outcome once the user answers.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<DialogOutcome> {
        let mut outcome = None;

        ui.heading(format!("Select Colour ({})", self.format.label()));
        ui.separator();

        color_picker::color_picker_color32(ui, &mut self.color, color_picker::Alpha::Opaque);

        ui.add_space(8.0);
        let preview = self.current().format(self.format);
        ui.horizontal(|ui| {
            ui.label("Copies:");
            ui.monospace(&preview);
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                outcome = Some(DialogOutcome::Confirmed(self.current()));
            }
            if ui.button("Cancel").clicked() {
                outcome = Some(DialogOutcome::Cancelled);
            }
        });

        let (enter, escape) = ui.ctx().input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Escape),
            )
        });
        let editing = ui.ctx().memory(|m| m.focused().is_some());

        outcome.or_else(|| self.key_outcome(enter, escape, editing))
    }

    /// Outcome of a key press. Enter belongs to a focused field, if any.
    fn key_outcome(&self, enter: bool, escape: bool, editing: bool) -> Option<DialogOutcome> {
        if escape {
            Some(DialogOutcome::Cancelled)
        } else if enter && !editing {
            Some(DialogOutcome::Confirmed(self.current()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_on_initial_colour() {
        let dialog = ColorDialogWindow::new(ColorFormat::Rgb, Rgb::new(9, 8, 7));
        assert_eq!(dialog.current(), Rgb::new(9, 8, 7));
        assert_eq!(dialog.format, ColorFormat::Rgb);
    }

    #[test]
    fn test_enter_while_editing_does_not_confirm() {
        let dialog = ColorDialogWindow::new(ColorFormat::Hex, Rgb::new(1, 2, 3));
        assert_eq!(dialog.key_outcome(true, false, true), None);
        assert_eq!(
            dialog.key_outcome(true, false, false),
            Some(DialogOutcome::Confirmed(Rgb::new(1, 2, 3)))
        );
    }

    #[test]
    fn test_escape_cancels_even_while_editing() {
        let dialog = ColorDialogWindow::new(ColorFormat::Hex, Rgb::WHITE);
        assert_eq!(dialog.key_outcome(false, true, true), Some(DialogOutcome::Cancelled));
        assert_eq!(dialog.key_outcome(false, false, false), None);
    }
}
