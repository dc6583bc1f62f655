//! Shared styling for the picker dialogs and the finder window.

use eframe::egui;

/// Theme colors.
pub struct Theme {
    /// Background color
    pub background: egui::Color32,

    /// Surface color (list rows, dialogs)
    pub surface: egui::Color32,

    /// Accent color (selected row, focused buttons)
    pub accent: egui::Color32,

    /// Text primary color
    pub text_primary: egui::Color32,

    /// Text secondary color (hints, previews)
    pub text_secondary: egui::Color32,

    /// Border color
    pub border: egui::Color32,
}

impl Theme {
    /// Dark theme.
    pub fn dark() -> Self {
        Self {
            background: egui::Color32::from_rgb(32, 32, 32),
            surface: egui::Color32::from_rgb(45, 45, 45),
            accent: egui::Color32::from_rgb(0, 120, 212),
            text_primary: egui::Color32::from_rgb(255, 255, 255),
            text_secondary: egui::Color32::from_rgb(180, 180, 180),
            border: egui::Color32::from_rgb(60, 60, 60),
        }
    }

    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        // Panel colors
        style.visuals.panel_fill = self.background;
        style.visuals.window_fill = self.surface;
        style.visuals.extreme_bg_color = self.surface;

        // Widget colors
        style.visuals.widgets.noninteractive.bg_fill = self.surface;
        style.visuals.widgets.inactive.bg_fill = self.surface;
        style.visuals.widgets.inactive.weak_bg_fill = self.surface;
        style.visuals.widgets.hovered.bg_fill = self.border;
        style.visuals.widgets.active.bg_fill = self.accent;

        // Text colors
        style.visuals.widgets.noninteractive.fg_stroke.color = self.text_primary;
        style.visuals.widgets.inactive.fg_stroke.color = self.text_secondary;
        style.visuals.widgets.hovered.fg_stroke.color = self.text_primary;
        style.visuals.widgets.active.fg_stroke.color = self.text_primary;

        // Selected list rows
        style.visuals.selection.bg_fill = self.accent;
        style.visuals.selection.stroke.color = self.text_primary;

        style.visuals.window_rounding = egui::Rounding::same(8.0);

        ctx.set_style(style);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
