mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueHint};
use eframe::egui;

use app::LaunchDashApp;
use config::DashboardConfig;
use state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Launch records dashboard", long_about = None)]
struct Cli {
    /// Launch records CSV (overrides `data_path` from the config)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    data: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref()).context("loading config")?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    // The dashboard has nothing to show without its dataset.
    let dataset = data::loader::load_csv(&config.data_path)
        .with_context(|| format!("loading launch records from {}", config.data_path.display()))?;
    log::info!(
        "Loaded {} launches from {}: sites {:?}, payload {:?}..{:?} kg",
        dataset.len(),
        config.data_path.display(),
        dataset.sites(),
        dataset.min_payload(),
        dataset.max_payload()
    );
    if dataset.is_empty() {
        log::warn!("{} has no launch rows", config.data_path.display());
    }

    let title = config.title.clone();
    let state = AppState::new(config, dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1300.0, 850.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow!("running the dashboard window: {e}"))
}
