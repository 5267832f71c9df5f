use std::path::PathBuf;

use vitrine_core::config::VitrineConfig;
use vitrine_core::viewer::MediaItem;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// List the images of a folder, then decode them one by one.
    LoadFolder { path: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    FolderListed {
        folder: PathBuf,
        media: Vec<MediaItem>,
    },
    ImageDecoded {
        source: String,
        image: egui::ColorImage,
        /// Pixel size before any display downscaling.
        original_size: [u32; 2],
    },
    ConfigImported {
        config: VitrineConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
