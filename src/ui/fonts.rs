//! Emoji font registration.

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

/// Name the emoji font is registered under.
pub const EMOJI_FONT: &str = "emoji";

/// Default fonts with `font` appended as a fallback to every family.
pub fn emoji_font_definitions(font: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(EMOJI_FONT.to_owned(), FontData::from_owned(font));

    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(EMOJI_FONT.to_owned());
    }
    fonts
}

/// Install the emoji font on a context.
pub fn install_emoji_font(ctx: &egui::Context, font: Vec<u8>) {
    ctx.set_fonts(emoji_font_definitions(font));
}
