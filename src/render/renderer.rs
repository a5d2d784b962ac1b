//! The renderer facade.
//!
//! [`Renderer`] bundles the rasterizer, the polygon seed search and the
//! region fills behind one configured entry point. It holds no pixel state:
//! every call borrows the canvas it draws on.

use super::fill;
use super::polygon::{self, seed_candidates};
use super::primitives;
use crate::canvas::Canvas;
use crate::config::{RendererConfig, SeedStrategy};
use crate::error::{Error, Result};
use crate::geometry::Point;

/// A drawable primitive with its geometric parameters.
///
/// Position, scale and rotation state belong to the caller; a shape is the
/// already-transformed geometry to rasterize.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Straight segment between two distinct points.
    Segment {
        /// Start point.
        start: Point,
        /// Finish point.
        finish: Point,
    },
    /// Square outline anchored at its top-left corner, rotated about its
    /// center.
    Square {
        /// Top-left corner before rotation.
        origin: Point,
        /// Side length in pixels.
        side: i32,
        /// Rotation in degrees.
        angle_degrees: f64,
    },
    /// Circle outline.
    Circle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: i32,
    },
    /// Axis-aligned ellipse outline.
    Ellipse {
        /// Center point.
        center: Point,
        /// Horizontal semi-axis.
        semi_major: i32,
        /// Vertical semi-axis.
        semi_minor: i32,
    },
    /// Closed polygon, outlined and filled with the same color.
    Polygon(Vec<Point>),
    /// Open path.
    Polyline(Vec<Point>),
}

impl Shape {
    /// Human-readable variant name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Segment { .. } => "segment",
            Self::Square { .. } => "square",
            Self::Circle { .. } => "circle",
            Self::Ellipse { .. } => "ellipse",
            Self::Polygon(_) => "polygon",
            Self::Polyline(_) => "polyline",
        }
    }
}

/// Configured facade over every drawing and fill operation.
///
/// # Example
///
/// ```
/// use pixel_raster::prelude::*;
///
/// let mut fb = Framebuffer::filled(100, 100, Rgba::BLACK).unwrap();
/// let renderer = Renderer::new();
/// let triangle = [
///     Point::new(10, 10),
///     Point::new(90, 10),
///     Point::new(50, 80),
///     Point::new(10, 10),
/// ];
/// renderer.draw_polygon(&mut fb, &triangle, Rgba::RED).unwrap();
/// assert_eq!(fb.get_pixel(50, 40), Some(Rgba::RED));
/// assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLACK));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    /// Renderer with the default (historical) configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(RendererConfig::new())
    }

    /// Renderer with an explicit configuration.
    #[must_use]
    pub const fn with_config(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RendererConfig {
        &self.config
    }

    // ========================================================================
    // Rasterizer
    // ========================================================================

    /// Draw a segment. See [`segment`](super::segment).
    pub fn segment<C>(&self, canvas: &mut C, start: Point, finish: Point, color: C::Color) -> Result<()>
    where
        C: Canvas + ?Sized,
    {
        log::trace!("segment {start} -> {finish}");
        primitives::segment(canvas, start, finish, color)
    }

    /// Draw a square outline rotated by `angle_degrees` about its center.
    ///
    /// The side/position guard follows the configured
    /// [`Validation`](crate::config::Validation).
    pub fn square<C>(
        &self,
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
        self.config.validation.check_square(x, y, side)?;
        primitives::square(canvas, x, y, side, angle_degrees, color)
    }

    /// Draw a circle outline. See [`circle`](super::circle).
    pub fn circle<C>(&self, canvas: &mut C, center: Point, radius: i32, color: C::Color) -> Result<()>
    where
        C: Canvas + ?Sized,
    {
        log::trace!("circle at {center} radius {radius}");
        primitives::circle(canvas, center, radius, color)
    }

    /// Draw an ellipse outline. See [`ellipse`](super::ellipse).
    pub fn ellipse<C>(
        &self,
        canvas: &mut C,
        center: Point,
        semi_major: i32,
        semi_minor: i32,
        color: C::Color,
    ) -> Result<()>
    where
        C: Canvas + ?Sized,
    {
        log::trace!("ellipse at {center} axes {semi_major}x{semi_minor}");
        primitives::ellipse(canvas, center, semi_major, semi_minor, color)
    }

    /// Draw an open path. Returns the number of segments drawn.
    pub fn polyline<C>(&self, canvas: &mut C, points: &[Point], color: C::Color) -> usize
    where
        C: Canvas + ?Sized,
    {
        primitives::polyline(canvas, points, color)
    }

    /// Paint the inclusive square `[x, x + side] x [y, y + side]`.
    pub fn fill_square<C>(&self, canvas: &mut C, x: i32, y: i32, side: i32, color: C::Color) -> usize
    where
        C: Canvas + ?Sized,
    {
        primitives::fill_square(canvas, x, y, side, color)
    }

    // ========================================================================
    // Polygons
    // ========================================================================

    /// Outline a closed polygon and fill its interior with the same color.
    ///
    /// Equivalent to [`fill_polygon`](Self::fill_polygon) with
    /// `outline == fill`.
    pub fn draw_polygon<C>(&self, canvas: &mut C, points: &[Point], color: C::Color) -> Result<()>
    where
        C: Canvas + ?Sized,
    {
        self.fill_polygon(canvas, points, color, color)
    }

    /// Outline a closed polygon in `outline` and flood its interior with
    /// `fill`, using the outline color as the flood boundary.
    ///
    /// The point list is validated first. The outline is then drawn edge by
    /// edge, including the closing edge when a leniently validated ring does
    /// not repeat its first point (zero-length edges are skipped). Only
    /// afterwards is an interior seed searched for, so a
    /// [`Error::NoSeedFound`] failure leaves the outline on the canvas.
    ///
    /// With [`SeedStrategy::Midlines`] the first candidate is used as is,
    /// even if it landed on an outline pixel (the fill is then a no-op).
    pub fn fill_polygon<C>(
        &self,
        canvas: &mut C,
        points: &[Point],
        outline: C::Color,
        fill: C::Color,
    ) -> Result<()>
    where
        C: Canvas + ?Sized,
    {
        self.config.validation.check_polygon(points)?;

        outline_ring(canvas, points, outline);

        let seed = match self.config.seed_strategy {
            SeedStrategy::Midlines => polygon::find_seed(points, SeedStrategy::Midlines),
            SeedStrategy::Scanline => seed_candidates(points, SeedStrategy::Scanline)
                .find(|p| canvas.color_at(p.x, p.y).is_some_and(|c| c != outline)),
        };

        let Some(seed) = seed else {
            log::warn!("no interior seed for polygon with {} vertices", points.len());
            return Err(Error::NoSeedFound {
                vertices: points.len(),
            });
        };

        log::debug!("polygon seed at {seed}");
        fill::flood_fill(canvas, seed, fill, outline);
        Ok(())
    }

    /// Ray-casting point-in-polygon test. See [`is_inside`](super::is_inside).
    #[must_use]
    pub fn is_inside(&self, p: Point, points: &[Point]) -> bool {
        polygon::is_inside(p, points)
    }

    // ========================================================================
    // Region fills
    // ========================================================================

    /// Flood fill from `seed`. See [`flood_fill`](super::flood_fill).
    pub fn flood_fill<C>(&self, canvas: &mut C, seed: Point, fill: C::Color, boundary: C::Color) -> usize
    where
        C: Canvas + ?Sized,
    {
        fill::flood_fill(canvas, seed, fill, boundary)
    }

    /// Border fill from `seed`. See [`border_fill`](super::border_fill).
    pub fn border_fill<C>(&self, canvas: &mut C, seed: Point, fill: C::Color, border: C::Color) -> usize
    where
        C: Canvas + ?Sized,
    {
        fill::border_fill(canvas, seed, fill, border)
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Rotate `point` about `center` by `angle` radians. See
    /// [`geometry::rotate`](crate::geometry::rotate).
    #[must_use]
    pub fn rotate(&self, point: Point, center: Point, angle: f64) -> Point {
        crate::geometry::rotate(point, center, angle)
    }

    // ========================================================================
    // Shapes
    // ========================================================================

    /// Draw any [`Shape`] in `color`.
    pub fn draw<C>(&self, canvas: &mut C, shape: &Shape, color: C::Color) -> Result<()>
    where
        C: Canvas + ?Sized,
    {
        log::trace!("draw {}", shape.name());
        match shape {
            Shape::Segment { start, finish } => self.segment(canvas, *start, *finish, color),
            Shape::Square {
                origin,
                side,
                angle_degrees,
            } => self.square(canvas, origin.x, origin.y, *side, *angle_degrees, color),
            Shape::Circle { center, radius } => self.circle(canvas, *center, *radius, color),
            Shape::Ellipse {
                center,
                semi_major,
                semi_minor,
            } => self.ellipse(canvas, *center, *semi_major, *semi_minor, color),
            Shape::Polygon(points) => self.draw_polygon(canvas, points, color),
            Shape::Polyline(points) => {
                self.polyline(canvas, points, color);
                Ok(())
            }
        }
    }

    /// Undraw a shape by redrawing its outline in `background`.
    ///
    /// Polygons are erased with the same outline-and-fill pass, so a filled
    /// polygon drawn over a uniform background is fully removed.
    pub fn erase<C>(&self, canvas: &mut C, shape: &Shape, background: C::Color) -> Result<()>
    where
        C: Canvas + ?Sized,
    {
        match shape {
            Shape::Polygon(points) => {
                self.config.validation.check_polygon(points)?;
                let Some(&first) = points.first() else {
                    return Ok(());
                };
                let Some(current) = canvas.color_at(first.x, first.y) else {
                    return self.draw(canvas, shape, background);
                };
                // Repaint the interior first while the outline still bounds it
                let seed = seed_candidates(points, SeedStrategy::Scanline)
                    .find(|p| canvas.color_at(p.x, p.y).is_some_and(|c| c == current));
                if let Some(seed) = seed {
                    fill::flood_fill(canvas, seed, background, background);
                }
                outline_ring(canvas, points, background);
                Ok(())
            }
            _ => self.draw(canvas, shape, background),
        }
    }
}

/// Draw every edge of the ring, closing it if the last point does not
/// repeat the first.
fn outline_ring<C>(canvas: &mut C, points: &[Point], color: C::Color)
where
    C: Canvas + ?Sized,
{
    primitives::polyline(canvas, points, color);
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        primitives::polyline(canvas, &[last, first], color);
    }
}
