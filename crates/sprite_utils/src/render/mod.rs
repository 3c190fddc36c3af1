//! Rendering capability contract
//!
//! Sprites never talk to a graphics API directly. They only need two
//! capabilities from the host's backend:
//!
//! - [`SpriteImage`]: report dimensions and per-pixel color for an image
//! - [`RenderTarget`]: composite a source image under an affine transform
//!
//! The [`raster`] module provides a software implementation of both on top
//! of the `image` crate, used for headless rendering and tests.

pub mod raster;

use crate::foundation::math::Mat3;
use std::fmt::Debug;
use std::sync::Arc;

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Shared, read-only image handle
///
/// Many sprites may reference the same image; it is never cloned per sprite.
pub type SharedImage = Arc<dyn SpriteImage>;

/// Read access to a 2D raster image
pub trait SpriteImage: Debug {
    /// Image dimensions as `(width, height)` in pixels
    fn size(&self) -> (u32, u32);

    /// RGBA color of the pixel at local coordinates `(x, y)`
    ///
    /// Coordinates outside `[0, width) x [0, height)` return transparent
    /// black.
    fn pixel(&self, x: u32, y: u32) -> [u8; 4];

    /// Alpha of the pixel at `(x, y)`; zero means fully transparent
    fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixel(x, y)[3]
    }

    /// Image width in pixels
    fn width(&self) -> u32 {
        self.size().0
    }

    /// Image height in pixels
    fn height(&self) -> u32 {
        self.size().1
    }
}

/// A surface that images can be composited onto
pub trait RenderTarget {
    /// Draw `source` onto this target, mapping source pixel space through
    /// `transform` into target pixel space
    fn composite(&mut self, source: &dyn SpriteImage, transform: &Mat3) -> RenderResult<()>;
}

/// Rendering errors
///
/// These are surfaced verbatim through every `draw` call; nothing in this
/// crate catches or retries them.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The draw transform cannot be applied
    ///
    /// Occurs when the transform contains non-finite values or is singular,
    /// so destination pixels cannot be mapped back into the source image.
    #[error("Invalid transform: {0}")]
    InvalidTransform(String),

    /// A rendering operation failed in the backend
    #[error("Rendering failed: {0}")]
    RenderingFailed(String),
}
