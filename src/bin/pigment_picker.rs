//! Pigment Picker: tray colour picker.
//!
//! Right-click the tray icon and pick Hex or RGB to copy a colour.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{anyhow, Context, Result};
use eframe::egui;
use pigment_moji::config::{resolve_resource, PickerConfig};
use pigment_moji::logging::init_logging;
use pigment_moji::picker::APP_NAME;
use pigment_moji::resources::load_tray_icon;
use pigment_moji::ui::picker_window::DIALOG_SIZE;
use pigment_moji::ui::show_error;
use pigment_moji::{LazyClipboard, PickerWindow};

fn run() -> Result<()> {
    let config = PickerConfig::default();

    let icon_path = resolve_resource(&config.icon_path);
    let icon = load_tray_icon(&icon_path)
        .with_context(|| format!("Failed to load tray icon from {}", icon_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size(DIALOG_SIZE)
            .with_resizable(false)
            .with_always_on_top()
            .with_visible(false),
        ..Default::default()
    };

    tracing::info!("Starting {}", APP_NAME);
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let window = PickerWindow::new(cc, LazyClipboard::new(), icon, &config)?;
            Ok(Box::new(window))
        }),
    )
    .map_err(|e| anyhow!("Event loop failed: {e}"))
}

fn main() -> Result<()> {
    init_logging();

    if let Err(e) = run() {
        show_error("Pigment Picker Error", &e);
        return Err(e);
    }
    Ok(())
}
