mod gallery;
mod ui;

pub use gallery::{GalleryState, LoadedImage};
pub use ui::UIState;
