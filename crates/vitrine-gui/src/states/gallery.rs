use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use vitrine_core::geometry::Size;
use vitrine_core::viewer::{MediaItem, MediaList};

/// Uploaded texture plus the image's original pixel size.
pub struct LoadedImage {
    pub texture: egui::TextureHandle,
    pub original_size: [u32; 2],
}

impl LoadedImage {
    pub fn natural_size(&self) -> Size {
        Size::new(self.original_size[0] as f32, self.original_size[1] as f32)
    }
}

/// Currently opened folder and its decoded images, keyed by media source.
pub struct GalleryState {
    pub folder: Option<PathBuf>,
    pub media: MediaList,
    pub images: HashMap<String, LoadedImage>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            folder: None,
            media: Arc::from(Vec::<MediaItem>::new()),
            images: HashMap::new(),
        }
    }
}

impl GalleryState {
    /// Replace the gallery contents; textures are dropped and reloaded.
    pub fn replace(&mut self, folder: PathBuf, media: Vec<MediaItem>) {
        self.folder = Some(folder);
        self.media = media.into();
        self.images.clear();
    }

    pub fn image(&self, item: &MediaItem) -> Option<&LoadedImage> {
        self.images.get(&item.source)
    }

    pub fn loaded_count(&self) -> usize {
        self.images.len()
    }
}
