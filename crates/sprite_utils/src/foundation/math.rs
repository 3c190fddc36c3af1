//! Math utilities and types
//!
//! Provides the 2D math types used for sprite placement and collision
//! queries. World coordinates are integers (top-left anchored, y down);
//! velocities, rotations and draw transforms are `f64`.

pub use nalgebra::{Matrix3, Point2, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f64>;

/// 2D homogeneous transform matrix
pub type Mat3 = Matrix3<f64>;

/// Integer point in world or local pixel space
pub type Point2i = Point2<i32>;

/// Rotate the point `(x, y)` by `theta` radians around `(origin_x, origin_y)`
///
/// The rotated offset is truncated toward zero before the origin is added
/// back, so small negative offsets are biased toward the origin.
#[must_use]
pub fn rotate_point(x: i32, y: i32, theta: f64, origin_x: i32, origin_y: i32) -> (i32, i32) {
    let (sin_theta, cos_theta) = theta.sin_cos();
    rotate_point_sin_cos(x, y, sin_theta, cos_theta, origin_x, origin_y)
}

/// [`rotate_point`] with a precomputed sine and cosine
///
/// Lets hot loops rotate many points by the same angle without recomputing
/// the trigonometry; results are identical to [`rotate_point`].
#[must_use]
pub fn rotate_point_sin_cos(x: i32, y: i32, sin_theta: f64, cos_theta: f64, origin_x: i32, origin_y: i32) -> (i32, i32) {
    let tx = f64::from(x) - f64::from(origin_x);
    let ty = f64::from(y) - f64::from(origin_y);

    let rx = ((tx * cos_theta - ty * sin_theta) as i32).saturating_add(origin_x);
    let ry = ((tx * sin_theta + ty * cos_theta) as i32).saturating_add(origin_y);

    (rx, ry)
}

/// Build the draw transform for an image of `width`x`height` at `position`
///
/// The image is rotated by `rotation` around its own center, then translated
/// so that its unrotated top-left corner lands on `position`.
#[must_use]
pub fn center_rotation_transform(width: u32, height: u32, rotation: f64, position: Point2i) -> Mat3 {
    let half = Vec2::new(f64::from(width) / 2.0, f64::from(height) / 2.0);
    let offset = Vec2::new(f64::from(position.x), f64::from(position.y));

    Mat3::new_translation(&offset)
        * Mat3::new_translation(&half)
        * Mat3::new_rotation(rotation)
        * Mat3::new_translation(&-half)
}

/// Axis-aligned integer rectangle, min inclusive and max exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Top-left corner (inclusive)
    pub min: Point2i,
    /// Bottom-right corner (exclusive)
    pub max: Point2i,
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(Point2i::origin(), Point2i::origin())
    }
}

impl Rect {
    /// Create a rectangle from its corners
    #[must_use]
    pub const fn new(min: Point2i, max: Point2i) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from a top-left corner and a size
    ///
    /// The far corner saturates at `i32::MAX`, clipping rectangles that would
    /// extend past the edge of the coordinate space.
    #[must_use]
    pub fn from_origin_size(origin: Point2i, width: u32, height: u32) -> Self {
        let extend = |start: i32, len: u32| start.saturating_add(i32::try_from(len).unwrap_or(i32::MAX));
        Self {
            min: origin,
            max: Point2i::new(extend(origin.x, width), extend(origin.y, height)),
        }
    }

    /// Width in pixels (zero for inverted rectangles)
    #[must_use]
    pub fn width(&self) -> u32 {
        span(self.min.x, self.max.x)
    }

    /// Height in pixels (zero for inverted rectangles)
    #[must_use]
    pub fn height(&self) -> u32 {
        span(self.min.y, self.max.y)
    }

    /// Whether the rectangle contains no pixels
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `point` lies inside the rectangle
    #[must_use]
    pub fn contains(&self, point: Point2i) -> bool {
        self.min.x <= point.x && point.x < self.max.x && self.min.y <= point.y && point.y < self.max.y
    }

    /// Whether the two rectangles share at least one pixel
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Largest rectangle contained in both, or the zero rectangle if disjoint
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let result = Self {
            min: Point2i::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point2i::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };

        if result.is_empty() {
            Self::default()
        } else {
            result
        }
    }
}

fn span(min: i32, max: i32) -> u32 {
    (i64::from(max) - i64::from(min)).clamp(0, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_rotate_point_zero_angle_is_identity() {
        assert_eq!(rotate_point(3, -4, 0.0, 1, 1), (3, -4));
    }

    #[test]
    fn test_rotate_point_quarter_turn() {
        // (1, 0) around the origin lands on (0, 1)
        assert_eq!(rotate_point(1, 0, FRAC_PI_2, 0, 0), (0, 1));
        // around (1, 1), (2, 1) lands on (1, 2)
        assert_eq!(rotate_point(2, 1, FRAC_PI_2, 1, 1), (1, 2));
    }

    #[test]
    fn test_rotate_point_truncates_toward_zero() {
        // (-0.707, 0.707) truncates to (0, 0), where flooring would give (-1, 0)
        assert_eq!(rotate_point(1, 0, 3.0 * PI / 4.0, 0, 0), (0, 0));
        assert_eq!(rotate_point(2, 0, PI, 0, 0), (-2, 0));
    }

    #[test]
    fn test_center_rotation_transform_no_rotation_is_translation() {
        let m = center_rotation_transform(4, 2, 0.0, Point2i::new(10, 20));
        let p = m.transform_point(&Point2::new(0.0, 0.0));
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_center_rotation_transform_pivots_on_center() {
        let m = center_rotation_transform(4, 4, FRAC_PI_2, Point2i::new(0, 0));
        let center = m.transform_point(&Point2::new(2.0, 2.0));
        assert_relative_eq!(center.x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(center.y, 2.0, epsilon = 1e-9);

        let corner = m.transform_point(&Point2::new(0.0, 0.0));
        assert_relative_eq!(corner.x, 4.0, epsilon = 1e-9);
        assert_relative_eq!(corner.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rect_overlap_and_intersection() {
        let a = Rect::from_origin_size(Point2i::new(0, 0), 2, 2);
        let b = Rect::from_origin_size(Point2i::new(1, 1), 2, 2);
        let c = Rect::from_origin_size(Point2i::new(5, 5), 2, 2);

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(
            a.intersect(&b),
            Rect::new(Point2i::new(1, 1), Point2i::new(2, 2))
        );
        assert_eq!(a.intersect(&c), Rect::default());
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Rect::from_origin_size(Point2i::new(0, 0), 2, 2);
        let b = Rect::from_origin_size(Point2i::new(2, 0), 2, 2);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let empty = Rect::from_origin_size(Point2i::new(0, 0), 0, 3);
        let full = Rect::from_origin_size(Point2i::new(-1, -1), 5, 5);
        assert!(empty.is_empty());
        assert!(!empty.overlaps(&full));
        assert!(!full.overlaps(&empty));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::from_origin_size(Point2i::new(-2, -2), 2, 2);
        assert!(r.contains(Point2i::new(-2, -2)));
        assert!(r.contains(Point2i::new(-1, -1)));
        assert!(!r.contains(Point2i::new(0, -1)));
        assert_eq!((r.width(), r.height()), (2, 2));
    }

    #[test]
    fn test_rect_saturates_at_coordinate_limit() {
        let r = Rect::from_origin_size(Point2i::new(i32::MAX - 1, i32::MAX - 3), 4, 4);
        assert_eq!(r.max, Point2i::new(i32::MAX, i32::MAX));
        assert_eq!((r.width(), r.height()), (1, 3));
        assert!(!r.is_empty());

        let huge = Rect::from_origin_size(Point2i::new(0, 0), u32::MAX, 1);
        assert_eq!(huge.max.x, i32::MAX);
    }

    #[test]
    fn test_rect_span_covers_full_range() {
        let r = Rect::new(Point2i::new(i32::MIN, 0), Point2i::new(i32::MAX, 1));
        assert_eq!(r.width(), u32::MAX);
        assert_eq!(r.height(), 1);
    }

    #[test]
    fn test_rotate_point_far_from_origin() {
        assert_eq!(rotate_point(i32::MAX - 1, 0, 0.0, i32::MAX, 0), (i32::MAX - 1, 0));
        assert_eq!(rotate_point(i32::MAX, 0, PI, 0, 0), (-i32::MAX, 0));
    }
}
