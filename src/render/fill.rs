//! Region filling: flood fill and border fill.
//!
//! Both fills spread over the 4-connected neighbourhood (no diagonals) using
//! an explicit work-list, so region size is bounded by heap memory rather
//! than call-stack depth. Bounds are checked per visited pixel: a seed off
//! the canvas paints nothing.

use crate::canvas::Canvas;
use crate::geometry::Point;

/// 4-connected neighbour offsets: right, left, down, up.
const NEIGHBOURS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Flood fill the region of the seed pixel's color.
///
/// Reads the color at `seed` as the original color and repaints every
/// 4-connected pixel still carrying exactly that color with `fill`. Any
/// color change stops the spread. Nothing happens when the original color
/// already equals `fill` or `boundary`, which makes a repeated call a no-op.
///
/// Returns the number of pixels painted.
///
/// # Example
///
/// ```
/// use pixel_raster::prelude::*;
/// use pixel_raster::render::{flood_fill, square};
///
/// let mut fb = Framebuffer::filled(40, 40, Rgba::BLACK).unwrap();
/// square(&mut fb, 10, 10, 10, 0.0, Rgba::WHITE).unwrap();
/// let painted = flood_fill(&mut fb, Point::new(15, 15), Rgba::RED, Rgba::WHITE);
/// assert_eq!(painted, 9 * 9);
/// ```
pub fn flood_fill<C>(canvas: &mut C, seed: Point, fill: C::Color, boundary: C::Color) -> usize
where
    C: Canvas + ?Sized,
{
    let Some(original) = canvas.color_at(seed.x, seed.y) else {
        return 0;
    };
    if original == fill || original == boundary {
        return 0;
    }

    let painted = spread(canvas, seed, fill, |current| current == original);
    log::debug!("flood fill from {seed} painted {painted} pixels");
    painted
}

/// Fill outward from `seed` until pixels of `border` (or `fill`) are met.
///
/// Unlike [`flood_fill`], this repaints every color other than `border` and
/// `fill`, so the spread crosses color changes that are not the border.
/// A seed already colored `border` or `fill` paints nothing.
///
/// Returns the number of pixels painted.
pub fn border_fill<C>(canvas: &mut C, seed: Point, fill: C::Color, border: C::Color) -> usize
where
    C: Canvas + ?Sized,
{
    let painted = spread(canvas, seed, fill, |current| current != border && current != fill);
    log::debug!("border fill from {seed} painted {painted} pixels");
    painted
}

/// Paint `fill` over every pixel reachable from `seed` whose color passes
/// `accept`. `accept` must reject `fill`, otherwise the spread never ends.
fn spread<C, F>(canvas: &mut C, seed: Point, fill: C::Color, accept: F) -> usize
where
    C: Canvas + ?Sized,
    F: Fn(C::Color) -> bool,
{
    let mut pending = vec![seed];
    let mut painted = 0;

    while let Some(p) = pending.pop() {
        match canvas.color_at(p.x, p.y) {
            Some(current) if accept(current) => {}
            _ => continue,
        }

        canvas.plot(p.x, p.y, fill);
        painted += 1;

        pending.extend(NEIGHBOURS.iter().map(|&(dx, dy)| p.offset(dx, dy)));
    }

    painted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::framebuffer::Framebuffer;
    use crate::render::primitives::{circle, segment, square};

    fn boxed() -> Framebuffer {
        let mut fb = Framebuffer::filled(50, 50, Rgba::BLACK).expect("framebuffer creation should succeed");
        square(&mut fb, 10, 10, 20, 0.0, Rgba::WHITE).unwrap();
        fb
    }

    #[test]
    fn test_flood_fill_interior() {
        let mut fb = boxed();
        let painted = flood_fill(&mut fb, Point::new(20, 20), Rgba::RED, Rgba::WHITE);

        assert_eq!(painted, 19 * 19);
        assert_eq!(fb.get_pixel(11, 11), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(29, 29), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLACK));
    }

    #[test]
    fn test_flood_fill_is_idempotent() {
        let mut fb = boxed();
        flood_fill(&mut fb, Point::new(20, 20), Rgba::RED, Rgba::WHITE);
        let once = fb.clone();
        assert_eq!(flood_fill(&mut fb, Point::new(20, 20), Rgba::RED, Rgba::WHITE), 0);
        assert_eq!(fb, once);
    }

    #[test]
    fn test_flood_fill_on_boundary_is_noop() {
        let mut fb = boxed();
        assert_eq!(flood_fill(&mut fb, Point::new(10, 15), Rgba::RED, Rgba::WHITE), 0);
        assert_eq!(fb.count(Rgba::RED), 0);
    }

    #[test]
    fn test_flood_fill_out_of_bounds_seed() {
        let mut fb = boxed();
        assert_eq!(flood_fill(&mut fb, Point::new(-1, 20), Rgba::RED, Rgba::WHITE), 0);
        assert_eq!(flood_fill(&mut fb, Point::new(20, 50), Rgba::RED, Rgba::WHITE), 0);
    }

    #[test]
    fn test_flood_fill_outside_region_stops_at_canvas_edge() {
        let mut fb = boxed();
        let painted = flood_fill(&mut fb, Point::new(0, 0), Rgba::BLUE, Rgba::WHITE);
        // Whole canvas minus the 21x21 square (outline + interior)
        assert_eq!(painted, 50 * 50 - 21 * 21);
        assert_eq!(fb.get_pixel(20, 20), Some(Rgba::BLACK));
    }

    #[test]
    fn test_flood_fill_stops_at_any_color_change() {
        let mut fb = boxed();
        // A green stripe splits the interior
        segment(&mut fb, Point::new(20, 11), Point::new(20, 29), Rgba::GREEN).unwrap();
        flood_fill(&mut fb, Point::new(15, 15), Rgba::RED, Rgba::WHITE);
        assert_eq!(fb.get_pixel(25, 15), Some(Rgba::BLACK));
        assert_eq!(fb.count(Rgba::RED), 9 * 19);
    }

    #[test]
    fn test_border_fill_crosses_non_border_colors() {
        let mut fb = boxed();
        segment(&mut fb, Point::new(20, 11), Point::new(20, 29), Rgba::GREEN).unwrap();
        let painted = border_fill(&mut fb, Point::new(15, 15), Rgba::RED, Rgba::WHITE);
        assert_eq!(painted, 19 * 19);
        assert_eq!(fb.get_pixel(25, 15), Some(Rgba::RED));
        assert_eq!(fb.count(Rgba::GREEN), 0);
    }

    #[test]
    fn test_border_fill_on_border_is_noop() {
        let mut fb = boxed();
        let before = fb.clone();
        assert_eq!(border_fill(&mut fb, Point::new(10, 10), Rgba::RED, Rgba::WHITE), 0);
        assert_eq!(fb, before);
    }

    #[test]
    fn test_border_fill_on_fill_color_is_noop() {
        let mut fb = boxed();
        fb.set_pixel(20, 20, Rgba::RED);
        assert_eq!(border_fill(&mut fb, Point::new(20, 20), Rgba::RED, Rgba::WHITE), 0);
    }

    #[test]
    fn test_fill_does_not_leak_through_diagonal_outline() {
        let mut fb = Framebuffer::filled(60, 60, Rgba::BLACK).unwrap();
        circle(&mut fb, Point::new(30, 30), 20, Rgba::WHITE).unwrap();
        flood_fill(&mut fb, Point::new(30, 30), Rgba::RED, Rgba::WHITE);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(30, 30), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(59, 59), Some(Rgba::BLACK));
    }

    #[test]
    fn test_large_region_uses_heap_not_stack() {
        let mut fb = Framebuffer::filled(1000, 1000, Rgba::BLACK).unwrap();
        let painted = flood_fill(&mut fb, Point::new(500, 500), Rgba::RED, Rgba::WHITE);
        assert_eq!(painted, 1_000_000);
    }
}
