//! Tray application shell.
//!
//! The colour picker lives in the tray; its only window is hidden while idle
//! and shown on top for the colour dialog or the About notice.

use crate::clipboard::ClipboardPort;
use crate::color::DialogOutcome;
use crate::config::PickerConfig;
use crate::notice::Notice;
use crate::picker::{PickerCommand, PigmentPicker, APP_NAME};
use crate::ui::color_dialog::ColorDialogWindow;
use crate::ui::notice::notice_panel;
use crate::ui::theme::Theme;
use crate::ui::tray::{TrayError, TrayEvent, TrayManager};
use eframe::egui;
use tray_icon::Icon;

/// Window size while a dialog is showing.
pub const DIALOG_SIZE: [f32; 2] = [320.0, 420.0];

/// Whether the shell window is on screen.
///
/// Hide requests are sent once per transition, since every viewport command
/// schedules another frame.
#[derive(Debug, Default)]
struct Visibility {
    shown: bool,
}

impl Visibility {
    /// The window was put on screen.
    fn mark_shown(&mut self) {
        self.shown = true;
    }

    /// Record the state at the end of a frame. Returns true when the window
    /// has to be hidden now.
    fn settle(&mut self, idle: bool) -> bool {
        if idle && self.shown {
            self.shown = false;
            return true;
        }
        false
    }
}

/// What the shell window is showing.
enum Modal {
    Idle,
    Color(ColorDialogWindow),
    Notice(Notice),
}

/// eframe application hosting the tray icon and its dialogs.
pub struct PickerWindow<C: ClipboardPort> {
    picker: PigmentPicker<C>,
    tray: TrayManager,
    modal: Modal,
    visibility: Visibility,
    tooltip: String,
}

impl<C: ClipboardPort> PickerWindow<C> {
    /// Create the tray icon and wire menu clicks to wake the UI.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        clipboard: C,
        icon: Icon,
        config: &PickerConfig,
    ) -> Result<Self, TrayError> {
        Theme::default().apply(&cc.egui_ctx);

        let mut tray = TrayManager::new();
        tray.create(icon, &config.tooltip)?;

        let ctx = cc.egui_ctx.clone();
        tray.forward_menu_events(move || {
            // A hidden viewport is not repainted, so surface it first
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
            ctx.request_repaint();
        });

        Ok(Self {
            picker: PigmentPicker::new(clipboard),
            tray,
            modal: Modal::Idle,
            visibility: Visibility::default(),
            tooltip: config.tooltip.clone(),
        })
    }

    fn run_command(&mut self, ctx: &egui::Context, command: PickerCommand) {
        match command {
            PickerCommand::OpenColorDialog { format, initial } => {
                self.modal = Modal::Color(ColorDialogWindow::new(format, initial));
                self.surface(ctx, APP_NAME);
            }
            PickerCommand::ShowNotice(notice) => {
                self.surface(ctx, &notice.title);
                self.modal = Modal::Notice(notice);
            }
            PickerCommand::Exit => {
                let _ = self.tray.destroy();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn surface(&mut self, ctx: &egui::Context, title: &str) {
        self.visibility.mark_shown();
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
        ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
        ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
    }

    fn dismiss(&mut self) {
        self.modal = Modal::Idle;
    }

    fn finish_color(&mut self, outcome: DialogOutcome) {
        if let Modal::Color(dialog) = &self.modal {
            let format = dialog.format;
            if let Some(text) = self.picker.copy_color(format, outcome) {
                let tooltip = format!("{} ({})", self.tooltip, text);
                if let Err(e) = self.tray.set_tooltip(&tooltip) {
                    tracing::debug!(error = %e, "Tooltip update failed");
                }
            }
        }
        self.dismiss();
    }
}

impl<C: ClipboardPort> eframe::App for PickerWindow<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tray.process_events();
        let events: Vec<TrayEvent> = self.tray.events().try_iter().collect();
        for TrayEvent::MenuItemClicked { action } in events {
            // The menu wake has already shown the window
            self.visibility.mark_shown();
            let command = self.picker.handle_menu(action);
            self.run_command(ctx, command);
        }

        // Closing the window dismisses the dialog; only Quit ends the app
        if ctx.input(|i| i.viewport().close_requested()) && !self.picker.should_exit() {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            if matches!(self.modal, Modal::Color(_)) {
                self.finish_color(DialogOutcome::Cancelled);
            } else {
                self.dismiss();
            }
        }

        let mut color_outcome = None;
        let mut notice_done = false;

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.modal {
            Modal::Idle => {}
            Modal::Color(dialog) => color_outcome = dialog.show(ui),
            Modal::Notice(notice) => notice_done = notice_panel(ui, notice),
        });

        if let Some(outcome) = color_outcome {
            self.finish_color(outcome);
        } else if notice_done {
            self.dismiss();
        }

        let idle = matches!(self.modal, Modal::Idle) && !self.picker.should_exit();
        if self.visibility.settle(idle) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
        }
    }
}
