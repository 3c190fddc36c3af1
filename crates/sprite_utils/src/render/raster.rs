//! Software RGBA raster backend
//!
//! [`RasterImage`] wraps an [`image::RgbaImage`] and acts both as a sprite
//! image and as a render target. Compositing inverse-maps every destination
//! pixel center through the draw transform and samples the nearest source
//! pixel, blending with straight-alpha source-over.

use super::{RenderError, RenderResult, RenderTarget, SpriteImage};
use crate::foundation::math::{Mat3, Point2};
use image::{Rgba, RgbaImage};

/// CPU-side RGBA image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pixels: RgbaImage,
}

impl RasterImage {
    /// Create a fully transparent image
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    /// Create a solid color image (useful for testing and defaults)
    #[must_use]
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba(color)),
        }
    }

    /// Wrap already-decoded pixel data
    #[must_use]
    pub const fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Set a single pixel; out-of-bounds writes are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if let Some(pixel) = self.pixels.get_pixel_mut_checked(x, y) {
            *pixel = Rgba(color);
        }
    }

    /// Borrow the underlying pixel buffer
    #[must_use]
    pub const fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consume the image and return the underlying pixel buffer
    #[must_use]
    pub fn into_rgba(self) -> RgbaImage {
        self.pixels
    }

    /// Number of pixels with non-zero alpha
    #[must_use]
    pub fn opaque_pixel_count(&self) -> usize {
        self.pixels.pixels().filter(|p| p.0[3] != 0).count()
    }

    /// Destination-space bounds `(min_x, min_y, max_x, max_y)` touched by
    /// `source` under `transform`, clipped to this image
    fn covered_bounds(&self, source_size: (u32, u32), transform: &Mat3) -> Option<(u32, u32, u32, u32)> {
        let (sw, sh) = (f64::from(source_size.0), f64::from(source_size.1));
        let corners = [(0.0, 0.0), (sw, 0.0), (0.0, sh), (sw, sh)]
            .map(|(x, y)| transform.transform_point(&Point2::new(x, y)));

        let min_x = corners.iter().map(|p| p.x).fold(f64::INFINITY, f64::min).floor();
        let min_y = corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min).floor();
        let max_x = corners.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max).ceil();
        let max_y = corners.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max).ceil();

        let (tw, th) = self.pixels.dimensions();
        let clip = |v: f64, limit: u32| v.clamp(0.0, f64::from(limit)) as u32;
        let bounds = (clip(min_x, tw), clip(min_y, th), clip(max_x, tw), clip(max_y, th));

        (bounds.0 < bounds.2 && bounds.1 < bounds.3).then_some(bounds)
    }
}

impl SpriteImage for RasterImage {
    fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels.get_pixel_checked(x, y).map_or([0; 4], |p| p.0)
    }
}

impl RenderTarget for RasterImage {
    fn composite(&mut self, source: &dyn SpriteImage, transform: &Mat3) -> RenderResult<()> {
        if transform.iter().any(|v| !v.is_finite()) {
            return Err(RenderError::InvalidTransform(format!(
                "transform contains non-finite values: {transform:?}"
            )));
        }
        let inverse = transform.try_inverse().ok_or_else(|| {
            RenderError::InvalidTransform(format!("transform is not invertible: {transform:?}"))
        })?;

        let (sw, sh) = source.size();
        if sw == 0 || sh == 0 {
            return Ok(());
        }
        let Some((min_x, min_y, max_x, max_y)) = self.covered_bounds((sw, sh), transform) else {
            return Ok(());
        };

        for dy in min_y..max_y {
            for dx in min_x..max_x {
                let center = Point2::new(f64::from(dx) + 0.5, f64::from(dy) + 0.5);
                let local = inverse.transform_point(&center);
                let (sx, sy) = (local.x.floor(), local.y.floor());
                if sx < 0.0 || sy < 0.0 || sx >= f64::from(sw) || sy >= f64::from(sh) {
                    continue;
                }

                let src = source.pixel(sx as u32, sy as u32);
                if src[3] == 0 {
                    continue;
                }
                let dst = self.pixels.get_pixel_mut(dx, dy);
                dst.0 = blend_over(src, dst.0);
            }
        }

        Ok(())
    }
}

/// Straight-alpha source-over blend of `src` onto `dst`
fn blend_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    if src[3] == u8::MAX {
        return src;
    }

    let sa = f32::from(src[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0; 4];
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let value = (f32::from(src[c]) * sa + f32::from(dst[c]) * da * (1.0 - sa)) / out_a;
        out[c] = value.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    out
}
