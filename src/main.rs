mod app;
mod color;
mod export;
mod predict;
mod state;
mod ui;

use std::path::PathBuf;

use app::StationcastApp;
use eframe::egui;
use predict::loader::PollutionModel;
use state::AppState;

const DEFAULT_MODEL_PATH: &str = "pollution_model.json";
const DEFAULT_COLUMNS_PATH: &str = "model_columns.json";

fn artifact_path(env_var: &str, default: &str) -> PathBuf {
    std::env::var_os(env_var)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

fn main() -> eframe::Result {
    env_logger::init();

    // Without its artifacts the app cannot serve a single prediction, so a
    // load failure is fatal rather than a degraded mode.
    let model_path = artifact_path("STATIONCAST_MODEL", DEFAULT_MODEL_PATH);
    let columns_path = artifact_path("STATIONCAST_COLUMNS", DEFAULT_COLUMNS_PATH);
    let model = match PollutionModel::load(&model_path, &columns_path) {
        Ok(model) => model,
        Err(e) => {
            log::error!("Failed to load model artifacts: {e:#}");
            eprintln!("Failed to load model artifacts: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 760.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stationcast – Water Pollution Predictor",
        options,
        Box::new(move |_cc| Ok(Box::new(StationcastApp::new(AppState::new(model))))),
    )
}
