mod app;
mod convert;
mod host;
mod messages;
mod panels;
mod states;
mod worker;

use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Optional folder to open on startup.
    let initial_folder = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Vitrine"),
        ..Default::default()
    };

    eframe::run_native(
        "Vitrine",
        options,
        Box::new(|cc| Ok(Box::new(app::VitrineApp::new(&cc.egui_ctx, initial_folder)))),
    )
}
