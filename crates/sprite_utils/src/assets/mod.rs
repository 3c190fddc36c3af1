//! Asset loading
//!
//! Decodes sprite images from disk or memory into [`RasterImage`]s that can
//! be shared between sprites.
//!
//! [`RasterImage`]: crate::render::raster::RasterImage

pub mod image_loader;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),
}
