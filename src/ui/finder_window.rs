//! Emoji finder window implementation using eframe/egui.
//!
//! Search field on top, the filtered emoji list in the middle, and the copy
//! button at the bottom.

use crate::clipboard::ClipboardPort;
use crate::emoji::EmojiFinder;
use crate::notice::Notice;
use crate::ui::fonts::install_emoji_font;
use crate::ui::notice::notice_window;
use crate::ui::theme::Theme;
use eframe::egui;

/// Finder window state.
pub struct FinderWindow<C: ClipboardPort> {
    finder: EmojiFinder,
    clipboard: C,
    /// Search field contents
    search: String,
    /// Confirmation notice; blocks the rest of the window while open
    notice: Option<Notice>,
}

impl<C: ClipboardPort> FinderWindow<C> {
    /// Create the window with the emoji font installed.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        finder: EmojiFinder,
        clipboard: C,
        emoji_font: Vec<u8>,
    ) -> Self {
        install_emoji_font(&cc.egui_ctx, emoji_font);
        Theme::default().apply(&cc.egui_ctx);

        Self {
            finder,
            clipboard,
            search: String::new(),
            notice: None,
        }
    }

    fn copy_selected(&mut self) {
        if let Some(emoji) = self.finder.copy_selected_emoji(&mut self.clipboard) {
            self.notice = Some(Notice::emoji_copied(&emoji));
        }
    }

    fn show_search(&mut self, ui: &mut egui::Ui) {
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.search)
                .hint_text("Search...")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.finder.on_query_changed(&self.search);
        }
    }

    fn show_list(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, row) in self.finder.rows().iter().enumerate() {
                    let selected = self.finder.selected_row() == Some(index);
                    if ui.selectable_label(selected, row).clicked() {
                        clicked = Some(index);
                    }
                }
            });

        if clicked.is_some() {
            self.finder.select(clicked);
        }
    }
}

impl<C: ClipboardPort> eframe::App for FinderWindow<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let modal_open = self.notice.is_some();

        egui::TopBottomPanel::bottom("copy_button")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.add_enabled_ui(!modal_open, |ui| {
                    let button = egui::Button::new("Copy Emoji to Clipboard");
                    if ui.add_sized([ui.available_width(), 28.0], button).clicked() {
                        self.copy_selected();
                    }
                });
                ui.add_space(6.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                self.show_search(ui);
                ui.add_space(4.0);
                self.show_list(ui);
            });
        });

        if let Some(notice) = &self.notice {
            if notice_window(ctx, notice) {
                self.notice = None;
            }
        }
    }
}
