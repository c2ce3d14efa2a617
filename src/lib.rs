pub mod app;
pub mod config;
pub mod error;
pub mod feed;
pub mod fog;
pub mod geometry;
pub mod logging;
pub mod modal;
pub mod preview;
pub mod ui;
pub use error::{AppError, AppResult};

/// Entrypoint used by the binary and integration harnesses.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting vitrine");

    let manifest = config::load_manifest()?;
    tracing::info!(
        timeline_items = manifest.timeline.len(),
        tiles = manifest.tiles.len(),
        "loaded showcase manifest"
    );

    app::App::new(manifest).start()
}
