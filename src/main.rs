mod app;
mod data;
mod util;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "data/scholars.json")]
    dataset: String,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "scholar-atlas",
        options,
        Box::new(move |cc| Ok(Box::new(app::ScholarAtlasApp::new(cc, args.dataset.clone())))),
    )
}
