mod app;
mod cli;
mod color;
mod data;
mod state;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::SetPlotApp;
use clap::Parser;
use cli::Cli;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let paths = cli.paths();

    let datasets = data::loader::parse_data(&paths)
        .inspect_err(|e| {
            log::error!("Failed to load benchmark data: {e}");
            if e.is_not_found() {
                log::info!("`generate_sample` writes the default .data files");
            }
        })
        .context("loading benchmark data")?;
    if datasets.add.is_empty() {
        log::warn!("No measurements found in {} files", paths.len());
    }
    log::info!(
        "Loaded {} measurements per operation for algorithms {:?}",
        datasets.add.len(),
        datasets.algorithms()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let state = AppState::new(datasets, paths);
    eframe::run_native(
        "setplot – Set Operation Timings",
        options,
        Box::new(|_cc| Ok(Box::new(SetPlotApp::new(state)))),
    )
    .map_err(|e| anyhow!("rendering failed: {e}"))
}
