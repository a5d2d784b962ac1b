//! Integer geometry shared by every drawing routine.
//!
//! Provides the pixel-space point, segment and bounding-box types, and the
//! rotation primitive used for rotated squares.

use std::fmt;

/// Trigonometric values with a smaller magnitude are snapped to zero.
const TRIG_EPSILON: f64 = 1e-10;

/// A pixel-space point with integer coordinates.
///
/// Points are plain values: "moving" a point produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`, saturating at the `i32`
    /// range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Coordinates widened to 64 bits.
    pub(crate) fn widen(self) -> (i64, i64) {
        (i64::from(self.x), i64::from(self.y))
    }

    /// Narrow 64-bit coordinates, saturating at the `i32` range.
    pub(crate) fn saturating_from_wide((x, y): (i64, i64)) -> Self {
        Self::new(saturate(x), saturate(y))
    }

    /// Rotate this point about `center` by `angle` radians.
    ///
    /// See [`rotate`].
    #[must_use]
    pub fn rotated(self, center: Self, angle: f64) -> Self {
        rotate(self, center, angle)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An ordered pair of points.
///
/// Direction matters for rasterization (stepping starts at `start`) but not
/// for intersection tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// Finish point.
    pub finish: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, finish: Point) -> Self {
        Self { start, finish }
    }

    /// Whether start and finish coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.finish
    }

    /// Number of pixels Bresenham stepping visits, endpoints included.
    #[must_use]
    pub fn pixel_count(&self) -> u32 {
        let dx = self.start.x.abs_diff(self.finish.x);
        let dy = self.start.y.abs_diff(self.finish.y);
        dx.max(dy) + 1
    }
}

/// Axis-aligned bounding box with inclusive integer extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Smallest x.
    pub min_x: i32,
    /// Smallest y.
    pub min_y: i32,
    /// Largest x.
    pub max_x: i32,
    /// Largest y.
    pub max_y: i32,
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` for an empty slice.
    #[must_use]
    pub fn of(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let init = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(rest.iter().fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Midpoint of the box, rounded toward negative infinity.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            midpoint(self.min_x, self.max_x),
            midpoint(self.min_y, self.max_y),
        )
    }

    /// Check if a point lies inside the box (edges included).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

fn midpoint(a: i32, b: i32) -> i32 {
    ((i64::from(a) + i64::from(b)).div_euclid(2)) as i32
}

fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Rotate `point` about `center` by `angle` radians.
///
/// Applies the standard rotation matrix to the offset from `center` and
/// rounds the result to the nearest pixel (halves away from zero). Sine and
/// cosine values within `1e-10` of zero are treated as exactly zero, so
/// quarter turns land on exact pixels. Results past the `i32` range
/// saturate.
///
/// # Example
///
/// ```
/// use pixel_raster::geometry::{rotate, Point};
///
/// let p = rotate(Point::new(10, 0), Point::ORIGIN, std::f64::consts::FRAC_PI_2);
/// assert_eq!(p, Point::new(0, 10));
/// ```
#[must_use]
pub fn rotate(point: Point, center: Point, angle: f64) -> Point {
    Point::saturating_from_wide(rotate_wide(point.widen(), center.widen(), angle))
}

/// [`rotate`] on 64-bit coordinates, without narrowing the result.
pub(crate) fn rotate_wide((x, y): (i64, i64), (cx, cy): (i64, i64), angle: f64) -> (i64, i64) {
    let xf = (x - cx) as f64;
    let yf = (y - cy) as f64;

    let snap = |v: f64| if v.abs() < TRIG_EPSILON { 0.0 } else { v };
    let cos_a = snap(angle.cos());
    let sin_a = snap(angle.sin());

    let new_x = xf * cos_a - yf * sin_a;
    let new_y = xf * sin_a + yf * cos_a;

    (new_x.round() as i64 + cx, new_y.round() as i64 + cy)
}
