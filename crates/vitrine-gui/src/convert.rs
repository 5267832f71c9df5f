use image::{imageops::FilterType, DynamicImage};

/// Longest side uploaded as a texture. Larger images are downscaled.
pub const MAX_TEXTURE_SIDE: u32 = 2048;

/// Convert a decoded image to an egui ColorImage, downscaling oversized ones.
/// Returns the image and its original pixel size.
pub fn dynamic_to_color_image(img: &DynamicImage) -> (egui::ColorImage, [u32; 2]) {
    let original = [img.width(), img.height()];
    let rgba = if img.width().max(img.height()) > MAX_TEXTURE_SIDE {
        img.resize(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE, FilterType::Triangle)
            .to_rgba8()
    } else {
        img.to_rgba8()
    };

    let size = [rgba.width() as usize, rgba.height() as usize];
    let image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    (image, original)
}
