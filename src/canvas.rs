//! The pixel surface every drawing routine writes to.
//!
//! The rasterizer never owns a surface: the caller lends one for the
//! duration of a single call. Anything that can read and write a color at
//! a non-negative integer coordinate can be a [`Canvas`].

use crate::geometry::Point;

/// Addressable 2D pixel surface.
///
/// Coordinates are `0 <= x < width`, `0 <= y < height`. Colors only need
/// equality: fills compare them, nothing blends them.
pub trait Canvas {
    /// Color stored at each pixel.
    type Color: Copy + PartialEq;

    /// Surface size as `(width, height)`.
    fn bounds(&self) -> (u32, u32);

    /// Color at `(x, y)`, or `None` outside the surface.
    fn get(&self, x: u32, y: u32) -> Option<Self::Color>;

    /// Write `color` at `(x, y)`. Out-of-bounds writes are ignored.
    fn set(&mut self, x: u32, y: u32, color: Self::Color);

    /// Whether a signed coordinate lies on the surface.
    fn contains(&self, x: i32, y: i32) -> bool {
        let (width, height) = self.bounds();
        x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height
    }

    /// Color at a signed coordinate, or `None` outside the surface.
    fn color_at(&self, x: i32, y: i32) -> Option<Self::Color> {
        if self.contains(x, y) {
            self.get(x as u32, y as u32)
        } else {
            None
        }
    }

    /// Write `color` at a signed coordinate, clipping silently.
    ///
    /// Returns whether the pixel was on the surface.
    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: Self::Color) -> bool {
        if self.contains(x, y) {
            self.set(x as u32, y as u32, color);
            true
        } else {
            false
        }
    }
}

/// A point tagged with the color it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel<C> {
    /// Location.
    pub point: Point,
    /// Color tag.
    pub color: C,
}

impl<C: Copy> Pixel<C> {
    /// Create a new tagged pixel.
    #[must_use]
    pub const fn new(point: Point, color: C) -> Self {
        Self { point, color }
    }

    /// Write this pixel onto `canvas`, clipping silently.
    pub fn plot<K>(self, canvas: &mut K) -> bool
    where
        K: Canvas<Color = C> + ?Sized,
    {
        canvas.plot(self.point.x, self.point.y, self.color)
    }
}

/// A canvas wrapper that records every write passed to the inner surface.
///
/// Useful for erase/redraw bookkeeping and for checking exactly which
/// pixels a primitive touched.
pub struct Recording<'a, K: Canvas + ?Sized> {
    inner: &'a mut K,
    writes: Vec<Pixel<K::Color>>,
}

impl<'a, K: Canvas + ?Sized> Recording<'a, K> {
    /// Wrap `inner`, starting with an empty write log.
    pub fn new(inner: &'a mut K) -> Self {
        Self {
            inner,
            writes: Vec::new(),
        }
    }

    /// Consume the wrapper and return the write log.
    #[must_use]
    pub fn into_writes(self) -> Vec<Pixel<K::Color>> {
        self.writes
    }
}

impl<K: Canvas + ?Sized> Canvas for Recording<'_, K> {
    type Color = K::Color;

    fn bounds(&self) -> (u32, u32) {
        self.inner.bounds()
    }

    fn get(&self, x: u32, y: u32) -> Option<Self::Color> {
        self.inner.get(x, y)
    }

    fn set(&mut self, x: u32, y: u32, color: Self::Color) {
        let (width, height) = self.inner.bounds();
        if x < width && y < height {
            self.writes
                .push(Pixel::new(Point::new(x as i32, y as i32), color));
        }
        self.inner.set(x, y, color);
    }
}
