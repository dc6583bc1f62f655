//! Tray colour picker state and actions.
//!
//! Maps tray menu actions to dialog requests and turns confirmed colours
//! into clipboard writes. The toolkit shell owns the actual dialogs.

use crate::clipboard::ClipboardPort;
use crate::color::{ColorDialog, ColorFormat, DialogOutcome, Rgb};
use crate::notice::Notice;

/// Tray menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Hex,
    Rgb,
    About,
    Quit,
}

impl MenuAction {
    /// All actions in menu order.
    pub const ALL: [MenuAction; 4] = [
        MenuAction::Hex,
        MenuAction::Rgb,
        MenuAction::About,
        MenuAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Hex => ColorFormat::Hex.label(),
            MenuAction::Rgb => ColorFormat::Rgb.label(),
            MenuAction::About => "About",
            MenuAction::Quit => "Quit",
        }
    }
}

/// What the shell has to do in response to a menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerCommand {
    /// Open the colour dialog at `initial`; report back with [`PigmentPicker::copy_color`]
    OpenColorDialog { format: ColorFormat, initial: Rgb },
    /// Show an informational modal
    ShowNotice(Notice),
    /// Stop the event loop
    Exit,
}

pub const APP_NAME: &str = "Pigment Picker";

const ABOUT_BODY: &str = "A teeny, tiny colour picker utility.\n\
                          © Jessica Leyba 2023.\n\
                          See the README and LICENSE files for more information.";

/// Tray colour picker core.
pub struct PigmentPicker<C: ClipboardPort> {
    clipboard: C,
    last_color: Rgb,
    should_exit: bool,
}

impl<C: ClipboardPort> PigmentPicker<C> {
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard,
            last_color: Rgb::default(),
            should_exit: false,
        }
    }

    /// Colour the dialog opens on: the last confirmed one.
    pub fn last_color(&self) -> Rgb {
        self.last_color
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Translate a menu click into a shell command.
    pub fn handle_menu(&mut self, action: MenuAction) -> PickerCommand {
        tracing::debug!(?action, "Tray menu action");
        match action {
            MenuAction::Hex => self.request_color(ColorFormat::Hex),
            MenuAction::Rgb => self.request_color(ColorFormat::Rgb),
            MenuAction::About => PickerCommand::ShowNotice(self.show_about_dialog()),
            MenuAction::Quit => {
                self.quit_application();
                PickerCommand::Exit
            }
        }
    }

    fn request_color(&self, format: ColorFormat) -> PickerCommand {
        PickerCommand::OpenColorDialog {
            format,
            initial: self.last_color,
        }
    }

    /// Pick a colour and copy it as `#rrggbb`.
    pub fn copy_color_hex(&mut self, dialog: &mut dyn ColorDialog) -> Option<String> {
        let outcome = dialog.pick(self.last_color);
        self.copy_color(ColorFormat::Hex, outcome)
    }

    /// Pick a colour and copy it as `rgb(R, G, B)`.
    pub fn copy_color_rgb(&mut self, dialog: &mut dyn ColorDialog) -> Option<String> {
        let outcome = dialog.pick(self.last_color);
        self.copy_color(ColorFormat::Rgb, outcome)
    }

    /// Apply a dialog answer. Cancellation does nothing.
    ///
    /// Returns the text written to the clipboard.
    pub fn copy_color(&mut self, format: ColorFormat, outcome: DialogOutcome) -> Option<String> {
        let color = outcome.confirmed()?;
        self.last_color = color;

        let text = color.format(format);
        match self.clipboard.write(&text) {
            Ok(()) => {
                tracing::info!(color = %text, "Copied colour to clipboard");
                Some(text)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write failed");
                None
            }
        }
    }

    /// Contents of the About modal.
    pub fn show_about_dialog(&self) -> Notice {
        Notice::new(format!("About {}", APP_NAME), ABOUT_BODY)
    }

    /// Mark the application for exit.
    pub fn quit_application(&mut self) {
        tracing::info!("Quit requested");
        self.should_exit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    fn confirm(color: Rgb) -> impl FnMut(Rgb) -> DialogOutcome {
        move |_| DialogOutcome::Confirmed(color)
    }

    fn cancel(_initial: Rgb) -> DialogOutcome {
        DialogOutcome::Cancelled
    }

    #[test]
    fn test_copy_color_hex() {
        let mut picker = PigmentPicker::new(MemoryClipboard::new());
        let copied = picker.copy_color_hex(&mut confirm(Rgb::new(0x12, 0xab, 0xff)));

        assert_eq!(copied.as_deref(), Some("#12abff"));
        assert_eq!(picker.clipboard().contents(), Some("#12abff"));
    }

    #[test]
    fn test_copy_color_rgb() {
        let mut picker = PigmentPicker::new(MemoryClipboard::new());
        picker.copy_color_rgb(&mut confirm(Rgb::new(255, 0, 9)));
        assert_eq!(picker.clipboard().contents(), Some("rgb(255, 0, 9)"));
    }

    #[test]
    fn test_cancel_leaves_clipboard_untouched() {
        let mut picker = PigmentPicker::new(MemoryClipboard::with_contents("keep"));

        assert_eq!(picker.copy_color_hex(&mut cancel), None);
        assert_eq!(picker.copy_color_rgb(&mut cancel), None);

        assert_eq!(picker.clipboard().contents(), Some("keep"));
        assert_eq!(picker.clipboard().write_count(), 0);
        assert_eq!(picker.last_color(), Rgb::WHITE);
    }

    #[test]
    fn test_dialog_reopens_on_last_colour() {
        let mut picker = PigmentPicker::new(MemoryClipboard::new());
        picker.copy_color_hex(&mut confirm(Rgb::new(1, 2, 3)));

        let mut seen = None;
        let mut dialog = |initial: Rgb| {
            seen = Some(initial);
            DialogOutcome::Cancelled
        };
        picker.copy_color_rgb(&mut dialog);

        assert_eq!(seen, Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_menu_dispatch() {
        let mut picker = PigmentPicker::new(MemoryClipboard::new());

        assert_eq!(
            picker.handle_menu(MenuAction::Hex),
            PickerCommand::OpenColorDialog {
                format: ColorFormat::Hex,
                initial: Rgb::WHITE,
            }
        );
        assert!(matches!(
            picker.handle_menu(MenuAction::Rgb),
            PickerCommand::OpenColorDialog {
                format: ColorFormat::Rgb,
                ..
            }
        ));
        assert!(!picker.should_exit());
        assert_eq!(picker.handle_menu(MenuAction::Quit), PickerCommand::Exit);
        assert!(picker.should_exit());
    }

    #[test]
    fn test_about_changes_nothing() {
        let mut picker = PigmentPicker::new(MemoryClipboard::new());
        let PickerCommand::ShowNotice(notice) = picker.handle_menu(MenuAction::About) else {
            panic!("expected a notice");
        };

        assert_eq!(notice.title, "About Pigment Picker");
        assert_eq!(
            notice.body,
            "A teeny, tiny colour picker utility.\n\
             © Jessica Leyba 2023.\n\
             See the README and LICENSE files for more information."
        );
        assert_eq!(picker.clipboard().write_count(), 0);
        assert!(!picker.should_exit());
    }

    #[test]
    fn test_menu_order() {
        let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Hex", "RGB", "About", "Quit"]);
    }
}
