#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Shapes Example
//!
//! Draws one of every shape through the renderer, erases one of them again,
//! and writes the result as a PNG.
//!
//! Run with: `RUST_LOG=trace cargo run --example shapes`

use pixel_raster::prelude::*;

fn main() {
    env_logger::init();

    println!("Shapes Example");
    println!("==============\n");

    let mut fb = Framebuffer::filled(640, 480, Rgba::BLACK).expect("Failed to create framebuffer");
    let renderer = Renderer::new();

    let shapes = [
        (
            Shape::Segment {
                start: Point::new(20, 20),
                finish: Point::new(620, 100),
            },
            Rgba::WHITE,
        ),
        (
            Shape::Square {
                origin: Point::new(60, 160),
                side: 120,
                angle_degrees: 0.0,
            },
            Rgba::RED,
        ),
        (
            Shape::Square {
                origin: Point::new(60, 160),
                side: 120,
                angle_degrees: 45.0,
            },
            Rgba::GREEN,
        ),
        (
            Shape::Circle {
                center: Point::new(340, 220),
                radius: 80,
            },
            Rgba::BLUE,
        ),
        (
            Shape::Ellipse {
                center: Point::new(520, 220),
                semi_major: 90,
                semi_minor: 40,
            },
            Rgba::rgb(255, 200, 0),
        ),
        (
            Shape::Polygon(vec![
                Point::new(260, 350),
                Point::new(420, 350),
                Point::new(340, 460),
                Point::new(260, 350),
            ]),
            Rgba::MAGENTA,
        ),
        (
            Shape::Polyline(vec![
                Point::new(460, 440),
                Point::new(500, 340),
                Point::new(540, 440),
                Point::new(580, 340),
            ]),
            Rgba::WHITE,
        ),
    ];

    for (shape, color) in &shapes {
        renderer.draw(&mut fb, shape, *color).expect("Failed to draw shape");
        println!("   Drew {}", shape.name());
    }
    PngEncoder::write_to_file(&fb, "shapes.png").expect("Failed to write PNG");
    println!("   Saved: shapes.png ({}x{})\n", fb.width(), fb.height());

    // Erasing the circle leaves every other shape in place
    let (circle, _) = &shapes[3];
    renderer.erase(&mut fb, circle, Rgba::BLACK).expect("Failed to erase shape");
    PngEncoder::write_to_file(&fb, "shapes_erased.png").expect("Failed to write PNG");
    println!("   Erased {}, saved: shapes_erased.png", circle.name());
}
