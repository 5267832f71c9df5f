use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use vitrine_core::viewer::MediaItem;

use crate::convert::dynamic_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp", "tif", "tiff"];

pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("vitrine-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadFolder { path } => handle_load_folder(&path, &tx, &ctx),
        }
    }
    debug!("Worker channel closed");
}

fn handle_load_folder(folder: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let start = Instant::now();
    let paths = match list_images(folder) {
        Ok(paths) => paths,
        Err(e) => {
            send_error(tx, ctx, format!("{e:#}"));
            return;
        }
    };
    if paths.is_empty() {
        send_log(tx, ctx, format!("No images in {}", folder.display()));
    }

    let media: Vec<MediaItem> = paths.iter().map(|p| media_item(p)).collect();
    info!(folder = %folder.display(), count = media.len(), "Folder listed");
    send(
        tx,
        ctx,
        WorkerResult::FolderListed {
            folder: folder.to_path_buf(),
            media: media.clone(),
        },
    );

    for (path, item) in paths.iter().zip(&media) {
        match image::open(path) {
            Ok(img) => {
                let (image, original_size) = dynamic_to_color_image(&img);
                send(
                    tx,
                    ctx,
                    WorkerResult::ImageDecoded {
                        source: item.source.clone(),
                        image,
                        original_size,
                    },
                );
            }
            Err(e) => {
                warn!(path = %path.display(), "Decode failed: {e}");
                send_error(tx, ctx, format!("Failed to decode {}: {e}", path.display()));
            }
        }
    }

    send_log(
        tx,
        ctx,
        format!("Decoded {} images in {:.1}s", media.len(), start.elapsed().as_secs_f32()),
    );
}

/// Image files directly inside `folder`, sorted by name.
fn list_images(folder: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder)
        .with_context(|| format!("Failed to read folder {}", folder.display()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && is_image(p))
        .collect();
    paths.sort();
    Ok(paths)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// The file stem doubles as alt text.
fn media_item(path: &Path) -> MediaItem {
    let alt = path
        .file_stem()
        .map(|s| s.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_default();
    MediaItem::new(path.to_string_lossy(), alt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_ignores_case_and_other_files() {
        assert!(is_image(Path::new("a/b/Photo.JPG")));
        assert!(is_image(Path::new("shot.webp")));
        assert!(!is_image(Path::new("notes.txt")));
        assert!(!is_image(Path::new("no_extension")));
    }

    #[test]
    fn test_media_item_uses_stem_as_alt_text() {
        let item = media_item(Path::new("/shop/red_leather-bag.png"));
        assert_eq!(item.alt_text, "red leather bag");
        assert_eq!(item.source, "/shop/red_leather-bag.png");
    }
}
