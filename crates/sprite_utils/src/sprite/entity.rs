//! Image-backed sprite with position, rotation and velocity

use super::SimpleSprite;
use crate::foundation::math::{center_rotation_transform, Mat3, Point2i, Rect, Vec2};
use crate::render::{RenderResult, RenderTarget, SharedImage};
use std::time::Duration;

/// An image with an integer position, a velocity and a rotation
///
/// `position` is always the top-left corner of the unrotated image. The
/// rotation pivots on the image center and is only applied when drawing or
/// testing collisions; the image pixels themselves are never modified.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Shared image drawn for this sprite
    pub image: SharedImage,
    /// Top-left corner of the unrotated image in world space
    pub position: Point2i,
    /// Velocity in world units per frame
    pub velocity: Vec2,
    /// Rotation in radians around the image center
    pub rotation: f64,
}

impl Sprite {
    /// Create a stationary, unrotated sprite at the origin
    #[must_use]
    pub fn new(image: SharedImage) -> Self {
        Self {
            image,
            position: Point2i::origin(),
            velocity: Vec2::zeros(),
            rotation: 0.0,
        }
    }

    /// Builder pattern: Set position
    #[must_use]
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Point2i::new(x, y);
        self
    }

    /// Builder pattern: Set velocity
    #[must_use]
    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = Vec2::new(vx, vy);
        self
    }

    /// Builder pattern: Set rotation in radians
    #[must_use]
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Add `(dx, dy)` to the current velocity
    pub fn apply_impulse(&mut self, dx: f64, dy: f64) {
        self.velocity += Vec2::new(dx, dy);
    }

    /// Set rotation in radians
    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    /// Image dimensions as `(width, height)`
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.image.size()
    }

    /// Axis-aligned bounds of the unrotated image in world space
    #[must_use]
    pub fn hitbox(&self) -> Rect {
        let (width, height) = self.size();
        Rect::from_origin_size(self.position, width, height)
    }

    /// Transform mapping image pixel space into world space
    #[must_use]
    pub fn draw_transform(&self) -> Mat3 {
        let (width, height) = self.size();
        center_rotation_transform(width, height, self.rotation, self.position)
    }

    /// Whether the opaque pixels of this sprite touch those of `other`
    ///
    /// See [`super::collision::is_colliding`].
    #[must_use]
    pub fn is_colliding(&self, other: &Self) -> bool {
        super::collision::is_colliding(self, other)
    }
}

impl SimpleSprite for Sprite {
    /// Move by the velocity, truncating each component toward zero
    ///
    /// The fractional part is dropped every frame, so a velocity of 0.6
    /// never moves the sprite. Positions saturate at the `i32` limits. The
    /// logical time is not used.
    fn update(&mut self, _now: Duration) {
        self.position.x = self.position.x.saturating_add(self.velocity.x as i32);
        self.position.y = self.position.y.saturating_add(self.velocity.y as i32);
    }

    fn draw(&self, target: &mut dyn RenderTarget) -> RenderResult<()> {
        target.composite(self.image.as_ref(), &self.draw_transform())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::raster::RasterImage;
    use crate::render::{RenderError, SpriteImage};
    use std::f64::consts::PI;
    use std::sync::Arc;

    fn image(width: u32, height: u32) -> SharedImage {
        Arc::new(RasterImage::new(width, height))
    }

    struct FailingTarget;

    impl RenderTarget for FailingTarget {
        fn composite(&mut self, _source: &dyn SpriteImage, _transform: &Mat3) -> RenderResult<()> {
            Err(RenderError::RenderingFailed("device lost".into()))
        }
    }

    #[test]
    fn test_update_truncates_velocity() {
        let cases = [
            ((0.0, 0.0), (0, 0)),
            ((1.0, 0.0), (1, 0)),
            ((0.0, 1.0), (0, 1)),
            ((0.6, 1.2), (0, 1)),
            ((1.0, 2.0), (1, 2)),
            ((-3.0, -5.0), (-3, -5)),
            ((-0.9, -1.7), (0, -1)),
        ];

        for ((vx, vy), expected) in cases {
            let mut sprite = Sprite::new(image(5, 5)).with_velocity(vx, vy);
            sprite.update(Duration::ZERO);
            assert_eq!((sprite.position.x, sprite.position.y), expected, "velocity ({vx}, {vy})");
        }
    }

    #[test]
    fn test_update_truncates_every_frame() {
        let mut sprite = Sprite::new(image(5, 5)).with_velocity(0.6, 2.5);
        for _ in 0..2 {
            sprite.update(Duration::ZERO);
        }
        assert_eq!(sprite.position, Point2i::new(0, 4));
    }

    #[test]
    fn test_update_saturates_at_coordinate_limits() {
        let mut sprite = Sprite::new(image(4, 4)).with_position(i32::MAX, i32::MIN).with_velocity(1.0, -1.0);
        sprite.update(Duration::ZERO);
        assert_eq!(sprite.position, Point2i::new(i32::MAX, i32::MIN));

        sprite.velocity = Vec2::new(f64::MAX, f64::NAN);
        sprite.position = Point2i::new(10, 10);
        sprite.update(Duration::ZERO);
        assert_eq!(sprite.position, Point2i::new(i32::MAX, 10));
    }

    #[test]
    fn test_apply_impulse_from_rest() {
        for (dx, dy) in [(0.0, 0.0), (1.0, 1.0), (-1.0, -1.0), (2.5, -0.25)] {
            let mut sprite = Sprite::new(image(5, 5));
            sprite.apply_impulse(dx, dy);
            assert_eq!(sprite.velocity, Vec2::new(dx, dy));
        }
    }

    #[test]
    fn test_apply_impulse_accumulates() {
        let mut sprite = Sprite::new(image(5, 5)).with_velocity(1.0, -1.0);
        sprite.apply_impulse(0.5, 0.5);
        sprite.apply_impulse(0.5, -1.5);
        assert_eq!(sprite.velocity, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_rotation_does_not_move_position() {
        let mut sprite = Sprite::new(image(4, 6)).with_position(3, 7);
        sprite.set_rotation(PI / 3.0);
        assert_eq!(sprite.position, Point2i::new(3, 7));
        assert_eq!(sprite.hitbox(), Rect::from_origin_size(Point2i::new(3, 7), 4, 6));
    }

    #[test]
    fn test_draw_onto_canvas() {
        let solid: SharedImage = Arc::new(RasterImage::solid_color(5, 5, [255, 0, 0, 255]));
        let sprite = Sprite::new(solid).with_position(2, 2);
        let mut screen = RasterImage::new(10, 10);

        assert!(sprite.draw(&mut screen).is_ok());
        assert_eq!(screen.opaque_pixel_count(), 25);
        assert_eq!(screen.pixel(2, 2), [255, 0, 0, 255]);
        assert_eq!(screen.pixel(1, 1), [0; 4]);
    }

    #[test]
    fn test_draw_propagates_render_error() {
        let sprite = Sprite::new(image(5, 5));
        let result = sprite.draw(&mut FailingTarget);
        assert!(matches!(result, Err(RenderError::RenderingFailed(msg)) if msg == "device lost"));
    }

    #[test]
    fn test_sprites_share_one_image() {
        let shared = image(2, 2);
        let a = Sprite::new(shared.clone());
        let b = a.clone().with_position(4, 4);
        assert!(Arc::ptr_eq(&a.image, &b.image));
        assert_eq!(Arc::strong_count(&shared), 3);
    }
}
