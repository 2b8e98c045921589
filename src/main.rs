//! FilmLens - Film dataset explorer & interactive chart viewer
//!
//! Loads the film table from `films.csv` in the working directory and opens
//! an egui window for browsing rows and plotting charts over a selection.

mod charts;
mod data;
mod gui;

use std::path::Path;

use anyhow::Context;
use eframe::egui;
use log::info;

use data::Dataset;
use gui::FilmLensApp;

const DATASET_FILE: &str = "films.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = Dataset::load(Path::new(DATASET_FILE))
        .with_context(|| format!("could not load {DATASET_FILE} from the working directory"))?;
    info!("loaded {} films from {DATASET_FILE}", dataset.row_count());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 675.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("FilmLens"),
        ..Default::default()
    };

    eframe::run_native(
        "FilmLens",
        options,
        Box::new(move |_cc| Ok(Box::new(FilmLensApp::new(dataset)))),
    )
    .map_err(|err| anyhow::anyhow!("window error: {err}"))
}
