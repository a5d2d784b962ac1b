//! Primitive rendering functions.
//!
//! Implements integer rasterization for segments, squares, circles and
//! ellipses. Every routine validates its parameters before the first pixel
//! write and clips silently at the canvas edge.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::geometry::{rotate_wide, Point, Segment};

// ============================================================================
// Line Drawing
// ============================================================================

/// Iterator over the pixels of a segment using Bresenham's algorithm.
///
/// Yields both endpoints and produces an 8-connected run of exactly
/// `max(|dx|, |dy|) + 1` points. Stepping starts at the segment's start, so
/// reversing a segment may pick a different pixel on ties.
#[derive(Debug, Clone)]
pub struct SegmentPixels {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl SegmentPixels {
    /// Start stepping from `start` towards `finish`.
    #[must_use]
    pub fn new(start: Point, finish: Point) -> Self {
        Self::wide(start.widen(), finish.widen())
    }

    /// Stepping between 64-bit endpoints, which may lie past the `i32`
    /// range.
    fn wide((x0, y0): (i64, i64), (x1, y1): (i64, i64)) -> Self {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }

    fn step(&mut self) -> Option<(i64, i64)> {
        if self.done {
            return None;
        }

        let current = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

impl Iterator for SegmentPixels {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        // Public constructors take `Point`s, so every step fits in i32
        self.step().map(|(x, y)| Point::new(x as i32, y as i32))
    }
}

impl From<Segment> for SegmentPixels {
    fn from(s: Segment) -> Self {
        Self::new(s.start, s.finish)
    }
}

/// Draw a segment using integer Bresenham stepping.
///
/// Every pixel from `start` to `finish` inclusive is written exactly once.
///
/// # Errors
///
/// Returns [`Error::DegenerateSegment`] if `start == finish`; nothing is
/// drawn in that case.
///
/// # Example
///
/// ```
/// use pixel_raster::prelude::*;
/// use pixel_raster::render::segment;
///
/// let mut fb = Framebuffer::filled(10, 10, Rgba::BLACK).unwrap();
/// segment(&mut fb, Point::new(1, 1), Point::new(8, 4), Rgba::WHITE).unwrap();
/// assert_eq!(fb.count(Rgba::WHITE), 8);
/// ```
pub fn segment<C>(canvas: &mut C, start: Point, finish: Point, color: C::Color) -> Result<()>
where
    C: Canvas + ?Sized,
{
    if Segment::new(start, finish).is_degenerate() {
        return Err(Error::DegenerateSegment { at: start });
    }
    trace_segment(canvas, start.widen(), finish.widen(), color);
    Ok(())
}

/// Bresenham stepping without the zero-length check; a collapsed segment
/// plots its single point. Returns the number of on-canvas writes.
fn trace_segment<C>(canvas: &mut C, start: (i64, i64), finish: (i64, i64), color: C::Color) -> usize
where
    C: Canvas + ?Sized,
{
    let mut pixels = SegmentPixels::wide(start, finish);
    let mut written = 0;
    while let Some((x, y)) = pixels.step() {
        if plot_wide(canvas, x, y, color) {
            written += 1;
        }
    }
    written
}

/// Plot at a widened coordinate; anything past the `i32` range is clipped.
fn plot_wide<C, T>(canvas: &mut C, x: T, y: T, color: C::Color) -> bool
where
    C: Canvas + ?Sized,
    T: TryInto<i32>,
{
    match (x.try_into(), y.try_into()) {
        (Ok(x), Ok(y)) => canvas.plot(x, y, color),
        _ => false,
    }
}

/// Draw an open path through `points`.
///
/// Zero-length steps between repeated points are skipped. Fewer than two
/// points draws nothing. Returns the number of segments drawn.
pub fn polyline<C>(canvas: &mut C, points: &[Point], color: C::Color) -> usize
where
    C: Canvas + ?Sized,
{
    points
        .windows(2)
        .filter(|w| segment(canvas, w[0], w[1], color).is_ok())
        .count()
}

// ============================================================================
// Square Drawing
// ============================================================================

/// Corners of the square anchored at `(x, y)` with side `side`, rotated
/// about its center by `angle_degrees`.
///
/// Corner order is top-left, top-right, bottom-right, bottom-left (before
/// rotation). The center is `(x + side / 2, y + side / 2)` in integer
/// arithmetic. Corners past the `i32` range saturate.
#[must_use]
pub fn square_corners(x: i32, y: i32, side: i32, angle_degrees: f64) -> [Point; 4] {
    wide_corners(x, y, side, angle_degrees).map(Point::saturating_from_wide)
}

fn wide_corners(x: i32, y: i32, side: i32, angle_degrees: f64) -> [(i64, i64); 4] {
    let (x, y, side) = (i64::from(x), i64::from(y), i64::from(side));
    let radians = angle_degrees.to_radians();
    let center = (x + side / 2, y + side / 2);
    [(x, y), (x + side, y), (x + side, y + side), (x, y + side)]
        .map(|corner| rotate_wide(corner, center, radians))
}

/// Draw the outline of a square, optionally rotated about its center.
///
/// Only the conjunction `x <= 0 && y <= 0 && side < 1` is rejected. A
/// square with `side < 1` elsewhere passes this guard; use
/// [`Validation::Strict`](crate::config::Validation::Strict) through the
/// [`Renderer`](crate::render::Renderer) to reject it unconditionally.
///
/// # Errors
///
/// Returns [`Error::InvalidSquare`] when the guard fails.
pub fn square<C>(
    canvas: &mut C,
    x: i32,
    y: i32,
    side: i32,
    angle_degrees: f64,
    color: C::Color,
) -> Result<()>
where
    C: Canvas + ?Sized,
{
    if x <= 0 && y <= 0 && side < 1 {
        return Err(Error::InvalidSquare { x, y, side });
    }

    let corners = wide_corners(x, y, side, angle_degrees);
    log::trace!("square at ({x}, {y}) side {side} angle {angle_degrees}: {corners:?}");
    for (i, &from) in corners.iter().enumerate() {
        trace_segment(canvas, from, corners[(i + 1) % 4], color);
    }
    Ok(())
}

/// Fill the square `[x, x + side] x [y, y + side]`, both ends inclusive.
///
/// Returns the number of on-canvas pixels written.
pub fn fill_square<C>(canvas: &mut C, x: i32, y: i32, side: i32, color: C::Color) -> usize
where
    C: Canvas + ?Sized,
{
    let mut written = 0;
    for px in x..=x.saturating_add(side) {
        for py in y..=y.saturating_add(side) {
            if canvas.plot(px, py, color) {
                written += 1;
            }
        }
    }
    written
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Draw a circle outline using the midpoint algorithm.
///
/// Radius 0 plots the center.
///
/// # Errors
///
/// Returns [`Error::NegativeRadius`] for `radius < 0`.
///
/// # Example
///
/// ```
/// use pixel_raster::prelude::*;
/// use pixel_raster::render::circle;
///
/// let mut fb = Framebuffer::filled(100, 100, Rgba::WHITE).unwrap();
/// circle(&mut fb, Point::new(50, 50), 20, Rgba::GREEN).unwrap();
/// assert_eq!(fb.get_pixel(70, 50), Some(Rgba::GREEN));
/// assert_eq!(fb.get_pixel(50, 50), Some(Rgba::WHITE));
/// ```
pub fn circle<C>(canvas: &mut C, center: Point, radius: i32, color: C::Color) -> Result<()>
where
    C: Canvas + ?Sized,
{
    if radius < 0 {
        return Err(Error::NegativeRadius(radius));
    }

    let (cx, cy) = center.widen();
    let mut plot_octants = |x: i64, y: i64| {
        for (px, py) in [(x, y), (-x, y), (x, -y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)] {
            plot_wide(canvas, cx + px, cy + py, color);
        }
    };

    let mut x = 0;
    let mut y = i64::from(radius);
    let mut decision = 1 - y;

    plot_octants(x, y);
    while x < y {
        if decision < 0 {
            decision += 2 * x + 1;
        } else {
            decision += 2 * (x - y) + 1;
            y -= 1;
        }
        x += 1;
        plot_octants(x, y);
    }
    Ok(())
}

// ============================================================================
// Ellipse Drawing
// ============================================================================

/// Draw an axis-aligned ellipse outline using the two-region midpoint
/// algorithm.
///
/// `semi_major` is the horizontal semi-axis `a`, `semi_minor` the vertical
/// semi-axis `b`; despite the names either may be the larger one.
///
/// Region 1 steps along x from the top of the ellipse while the slope is
/// shallow (`b²x <= a²y`); region 2 restarts at the right extreme and steps
/// along y while `a²y <= b²x`.
///
/// # Errors
///
/// Returns [`Error::InvalidEllipse`] if either semi-axis is negative or both
/// are zero.
pub fn ellipse<C>(
    canvas: &mut C,
    center: Point,
    semi_major: i32,
    semi_minor: i32,
    color: C::Color,
) -> Result<()>
where
    C: Canvas + ?Sized,
{
    if semi_major < 0 || semi_minor < 0 || (semi_major == 0 && semi_minor == 0) {
        return Err(Error::InvalidEllipse {
            semi_major,
            semi_minor,
        });
    }

    // Decision terms reach a²·b, past i64 for axes near the i32 limit
    let (cx, cy) = (i128::from(center.x), i128::from(center.y));
    let mut plot_quadrants = |x: i128, y: i128| {
        for (px, py) in [(x, y), (-x, y), (x, -y), (-x, -y)] {
            plot_wide(canvas, cx + px, cy + py, color);
        }
    };

    let a = i128::from(semi_major);
    let b = i128::from(semi_minor);
    let a2 = a * a;
    let b2 = b * b;

    // Region 1
    let mut x = 0;
    let mut y = b;
    let mut decision = b2 - a2 * b + a2 / 4;
    plot_quadrants(x, y);
    while b2 * x <= a2 * y {
        x += 1;
        if decision < 0 {
            decision += b2 * (2 * x + 1);
        } else {
            y -= 1;
            decision += b2 * (2 * x + 1) - 2 * a2 * y;
        }
        plot_quadrants(x, y);
    }

    // Region 2
    let mut x = a;
    let mut y = 0;
    let mut decision = a2 - b2 * a + b2 / 4;
    plot_quadrants(x, y);
    while a2 * y <= b2 * x {
        y += 1;
        if decision < 0 {
            decision += a2 * (2 * y + 1);
        } else {
            x -= 1;
            decision += a2 * (2 * y + 1) - 2 * b2 * x;
        }
        plot_quadrants(x, y);
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
