//! End-to-end rendering scenarios.
//!
//! Each test draws through the public API onto a real framebuffer and checks
//! the resulting pixels against an independent floating-point model of the
//! geometry.
//!
//! Run: cargo test --test render_scenarios

#![allow(clippy::unwrap_used, clippy::cast_possible_truncation)]

use approx::assert_abs_diff_eq;
use pixel_raster::prelude::*;
use pixel_raster::render::{flood_fill, square, square_corners, SegmentPixels};

fn pentagon() -> Vec<Point> {
    [(500, 100), (650, 250), (600, 400), (400, 400), (350, 250), (500, 100)]
        .into_iter()
        .map(Point::from)
        .collect()
}

/// Distance from `(px, py)` to the segment `a-b`.
fn distance_to_edge(px: f64, py: f64, a: Point, b: Point) -> f64 {
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (bx, by) = (f64::from(b.x), f64::from(b.y));
    let (ex, ey) = (bx - ax, by - ay);
    let t = (((px - ax) * ex + (py - ay) * ey) / (ex * ex + ey * ey)).clamp(0.0, 1.0);
    (px - (ax + t * ex)).hypot(py - (ay + t * ey))
}

/// Even-odd test against the exact polygon.
fn inside_exact(px: f64, py: f64, ring: &[Point]) -> bool {
    let mut inside = false;
    for w in ring.windows(2) {
        let (ax, ay) = (f64::from(w[0].x), f64::from(w[0].y));
        let (bx, by) = (f64::from(w[1].x), f64::from(w[1].y));
        if (ay > py) != (by > py) && px < ax + (py - ay) * (bx - ax) / (by - ay) {
            inside = !inside;
        }
    }
    inside
}

fn distance_to_outline(px: f64, py: f64, ring: &[Point]) -> f64 {
    ring.windows(2)
        .map(|w| distance_to_edge(px, py, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

// ============================================================================
// Polygon
// ============================================================================

#[test]
fn pentagon_interior_is_magenta_and_exterior_untouched() {
    let ring = pentagon();
    let mut fb = Framebuffer::filled(800, 600, Rgba::BLACK).unwrap();
    Renderer::new().draw_polygon(&mut fb, &ring, Rgba::MAGENTA).unwrap();

    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let (px, py) = (f64::from(x), f64::from(y));
            let color = fb.get_pixel(x, y).unwrap();
            let near_outline = distance_to_outline(px, py, &ring) <= 1.0;
            if near_outline {
                continue;
            }
            let expected = if inside_exact(px, py, &ring) { Rgba::MAGENTA } else { Rgba::BLACK };
            assert_eq!(color, expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn pentagon_leaves_no_black_pocket_inside_outline() {
    let mut fb = Framebuffer::filled(800, 600, Rgba::BLACK).unwrap();
    Renderer::new().draw_polygon(&mut fb, &pentagon(), Rgba::MAGENTA).unwrap();

    // Everything black must be reachable from the corner, i.e. outside
    flood_fill(&mut fb, Point::new(0, 0), Rgba::BLUE, Rgba::MAGENTA);
    assert_eq!(fb.count(Rgba::BLACK), 0);
}

#[test]
fn pentagon_outline_is_closed() {
    let ring = pentagon();
    let mut fb = Framebuffer::filled(800, 600, Rgba::BLACK).unwrap();
    Renderer::new().draw_polygon(&mut fb, &ring, Rgba::MAGENTA).unwrap();

    for w in ring.windows(2) {
        for p in SegmentPixels::new(w[0], w[1]) {
            assert_eq!(fb.color_at(p.x, p.y), Some(Rgba::MAGENTA), "outline pixel {p}");
        }
    }
}

#[test]
fn pentagon_round_trips_through_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pentagon.png");
    let mut fb = Framebuffer::filled(800, 600, Rgba::BLACK).unwrap();
    Renderer::new().draw_polygon(&mut fb, &pentagon(), Rgba::MAGENTA).unwrap();
    PngEncoder::write_to_file(&fb, &path).unwrap();

    let decoder = png::Decoder::new(std::fs::File::open(&path).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!((info.width, info.height), (800, 600));

    let at = |x: usize, y: usize| {
        let i = (y * 800 + x) * 4;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    };
    assert_eq!(at(500, 250), Rgba::MAGENTA.to_array());
    assert_eq!(at(10, 10), Rgba::BLACK.to_array());
}

#[test]
fn robust_config_fills_pentagon_identically() {
    let mut lenient = Framebuffer::filled(800, 600, Rgba::BLACK).unwrap();
    let mut robust = lenient.clone();
    Renderer::new().draw_polygon(&mut lenient, &pentagon(), Rgba::MAGENTA).unwrap();
    Renderer::with_config(RendererConfig::robust())
        .draw_polygon(&mut robust, &pentagon(), Rgba::MAGENTA)
        .unwrap();
    assert_eq!(lenient, robust);
}

// ============================================================================
// Squares
// ============================================================================

#[test]
fn axis_aligned_square_draws_four_sides_of_length_100() {
    let mut fb = Framebuffer::filled(300, 300, Rgba::BLACK).unwrap();
    square(&mut fb, 100, 100, 100, 0.0, Rgba::WHITE).unwrap();

    let corners = square_corners(100, 100, 100, 0.0);
    assert_eq!(
        corners,
        [Point::new(100, 100), Point::new(200, 100), Point::new(200, 200), Point::new(100, 200)]
    );
    for i in 0..4 {
        let side = Segment::new(corners[i], corners[(i + 1) % 4]);
        assert_eq!(side.pixel_count(), 101);
    }
    // 4 sides of 101 pixels sharing 4 corners
    assert_eq!(fb.count(Rgba::WHITE), 400);
    assert_eq!(fb.get_pixel(150, 150), Some(Rgba::BLACK));
}

#[test]
fn rotated_square_corners_match_rotation_formula() {
    let mut fb = Framebuffer::filled(300, 300, Rgba::BLACK).unwrap();
    square(&mut fb, 100, 100, 100, 45.0, Rgba::WHITE).unwrap();

    let (cx, cy) = (150.0_f64, 150.0_f64);
    let (sin, cos) = 45.0_f64.to_radians().sin_cos();
    let unrotated = [(100.0, 100.0), (200.0, 100.0), (200.0, 200.0), (100.0, 200.0)];
    let corners = square_corners(100, 100, 100, 45.0);

    for (corner, (x, y)) in corners.iter().zip(unrotated) {
        let ex = (x - cx) * cos - (y - cy) * sin + cx;
        let ey = (x - cx) * sin + (y - cy) * cos + cy;
        assert_abs_diff_eq!(f64::from(corner.x), ex, epsilon = 1.0);
        assert_abs_diff_eq!(f64::from(corner.y), ey, epsilon = 1.0);
        assert_eq!(fb.color_at(corner.x, corner.y), Some(Rgba::WHITE));
    }

    for i in 0..4 {
        let (a, b) = (corners[i], corners[(i + 1) % 4]);
        let length = f64::from(b.x - a.x).hypot(f64::from(b.y - a.y));
        assert_abs_diff_eq!(length, 100.0, epsilon = 1.5);
    }

    // The outline is closed, so the center floods without reaching the corner
    flood_fill(&mut fb, Point::new(150, 150), Rgba::RED, Rgba::WHITE);
    assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLACK));
    assert_eq!(fb.get_pixel(150, 150), Some(Rgba::RED));
}

// ============================================================================
// Clipping and recording
// ============================================================================

#[test]
fn shapes_partly_off_canvas_are_clipped() {
    let mut fb = Framebuffer::filled(50, 50, Rgba::BLACK).unwrap();
    let renderer = Renderer::new();

    renderer.segment(&mut fb, Point::new(-100, 25), Point::new(100, 25), Rgba::WHITE).unwrap();
    assert_eq!(fb.count(Rgba::WHITE), 50);

    renderer.circle(&mut fb, Point::new(0, 0), 30, Rgba::RED).unwrap();
    assert!(fb.positions_of(Rgba::RED).all(|(x, y)| x < 50 && y < 50));
    assert!(fb.count(Rgba::RED) > 0);
}

#[test]
fn recording_canvas_sees_only_visible_writes() {
    let mut fb = Framebuffer::filled(20, 20, Rgba::BLACK).unwrap();
    let mut recording = Recording::new(&mut fb);
    Renderer::new()
        .segment(&mut recording, Point::new(-5, 0), Point::new(24, 0), Rgba::GREEN)
        .unwrap();

    let writes = recording.into_writes();
    assert_eq!(writes.len(), 20);
    assert_eq!(writes.first().map(|p| p.point), Some(Point::new(0, 0)));
    assert_eq!(writes.last().map(|p| p.point), Some(Point::new(19, 0)));
    assert_eq!(fb.count(Rgba::GREEN), 20);
}

#[test]
fn erase_restores_background_around_other_shapes() {
    let mut fb = Framebuffer::filled(200, 200, Rgba::BLACK).unwrap();
    let renderer = Renderer::new();
    let circle = Shape::Circle {
        center: Point::new(50, 50),
        radius: 20,
    };

    renderer.draw(&mut fb, &circle, Rgba::RED).unwrap();
    renderer.square(&mut fb, 120, 120, 40, 0.0, Rgba::BLUE).unwrap();
    let blue = fb.count(Rgba::BLUE);

    renderer.erase(&mut fb, &circle, Rgba::BLACK).unwrap();
    assert_eq!(fb.count(Rgba::RED), 0);
    assert_eq!(fb.count(Rgba::BLUE), blue);
}
