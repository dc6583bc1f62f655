//! FuzzyMoji Finder: searchable emoji picker window.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{anyhow, Context, Result};
use eframe::egui;
use pigment_moji::config::{resolve_resource, FinderConfig};
use pigment_moji::fuzzy::PartialRatio;
use pigment_moji::logging::init_logging;
use pigment_moji::resources::load_font;
use pigment_moji::ui::show_error;
use pigment_moji::{load_entries, EmojiFinder, FinderWindow, LazyClipboard};

fn run() -> Result<()> {
    let config = FinderConfig::default();

    let font_path = resolve_resource(&config.font_path);
    let font = load_font(&font_path)
        .with_context(|| format!("Failed to load emoji font from {}", font_path.display()))?;

    let dataset_path = resolve_resource(&config.dataset_path);
    let entries = load_entries(&dataset_path).context("Failed to load emoji dataset")?;
    let finder = EmojiFinder::with_scorer(
        entries,
        Box::new(PartialRatio),
        config.similarity_threshold,
    );

    let (x, y) = config.window_position;
    let (width, height) = config.window_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&config.window_title)
            .with_position([x, y])
            .with_inner_size([width, height]),
        ..Default::default()
    };

    tracing::info!("Starting {}", config.window_title);
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |cc| {
            Ok(Box::new(FinderWindow::new(
                cc,
                finder,
                LazyClipboard::new(),
                font,
            )))
        }),
    )
    .map_err(|e| anyhow!("Event loop failed: {e}"))
}

fn main() -> Result<()> {
    init_logging();

    if let Err(e) = run() {
        show_error("FuzzyMoji Finder Error", &e);
        return Err(e);
    }
    Ok(())
}
