//! Image loading utilities for sprite data
//!
//! Provides PNG loading through the `image` crate. Every image is converted
//! to RGBA8 so alpha lookups work the same regardless of the file's format.

use crate::assets::AssetError;
use crate::render::raster::RasterImage;
use crate::render::SharedImage;
use std::path::Path;
use std::sync::Arc;

/// Load an image from a file path
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RasterImage, AssetError> {
    let path_ref = path.as_ref();

    log::debug!("Loading image from: {:?}", path_ref);

    if !path_ref.exists() {
        return Err(AssetError::NotFound(path_ref.display().to_string()));
    }

    let img = image::open(path_ref)
        .map_err(|e| AssetError::LoadFailed(format!("Failed to load image {}: {}", path_ref.display(), e)))?;

    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    log::info!("Loaded image {}x{} from {:?}", width, height, path_ref);

    Ok(RasterImage::from_rgba(rgba_img))
}

/// Load image from memory (useful for embedded resources)
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<RasterImage, AssetError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {}", e)))?;

    let rgba_img = img.to_rgba8();
    log::debug!("Loaded image {}x{} from memory", rgba_img.width(), rgba_img.height());

    Ok(RasterImage::from_rgba(rgba_img))
}

/// Load every path into a shared image, stopping at the first failure
pub fn load_shared_images<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<SharedImage>, AssetError> {
    paths
        .iter()
        .map(|path| load_image(path).map(|img| Arc::new(img) as SharedImage))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SpriteImage;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encoded_png() -> Vec<u8> {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, Rgba([10, 20, 30, 255]));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_load_image_from_bytes() {
        let img = load_image_from_bytes(&encoded_png()).unwrap();
        assert_eq!(img.size(), (3, 2));
        assert_eq!(img.pixel(2, 1), [10, 20, 30, 255]);
        assert_eq!(img.alpha_at(0, 0), 0);
    }

    #[test]
    fn test_load_image_from_garbage_fails() {
        let result = load_image_from_bytes(b"definitely not a png");
        assert!(matches!(result, Err(AssetError::LoadFailed(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_image("this/path/does/not/exist.png");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_load_shared_images_from_disk() {
        let path = std::env::temp_dir().join(format!("sprite_utils_loader_{}.png", std::process::id()));
        std::fs::write(&path, encoded_png()).unwrap();

        let images = load_shared_images(&[&path, &path]).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].size(), (3, 2));
    }
}
