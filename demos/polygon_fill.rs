#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Polygon Fill Example
//!
//! Draws a filled magenta pentagon on an 800x600 black canvas, then shows
//! the difference between the default and robust seed search on a sliver
//! triangle.
//!
//! Run with: `RUST_LOG=debug cargo run --example polygon_fill`

use pixel_raster::prelude::*;

fn main() {
    env_logger::init();

    println!("Polygon Fill Example");
    println!("====================\n");

    // Example 1: Pentagon
    println!("1. Filling a pentagon...");
    let mut fb = Framebuffer::filled(800, 600, Rgba::BLACK).expect("Failed to create framebuffer");
    let pentagon = [
        Point::new(500, 100),
        Point::new(650, 250),
        Point::new(600, 400),
        Point::new(400, 400),
        Point::new(350, 250),
        Point::new(500, 100),
    ];
    Renderer::new()
        .draw_polygon(&mut fb, &pentagon, Rgba::MAGENTA)
        .expect("Failed to fill pentagon");
    println!("   Magenta pixels: {}", fb.count(Rgba::MAGENTA));
    PngEncoder::write_to_file(&fb, "polygon_pentagon.png").expect("Failed to write PNG");
    println!("   Saved: polygon_pentagon.png ({}x{})\n", fb.width(), fb.height());

    // Example 2: Sliver triangle, default vs robust seed search
    println!("2. Sliver triangle with both seed strategies...");
    let sliver = [
        Point::new(0, 0),
        Point::new(80, 0),
        Point::new(80, 40),
        Point::new(0, 0),
    ];
    for (name, config) in [("default", RendererConfig::new()), ("robust", RendererConfig::robust())] {
        let mut fb = Framebuffer::filled(100, 60, Rgba::BLACK).expect("Failed to create framebuffer");
        Renderer::with_config(config)
            .fill_polygon(&mut fb, &sliver, Rgba::WHITE, Rgba::BLUE)
            .expect("Failed to fill sliver");
        let file = format!("polygon_sliver_{name}.png");
        PngEncoder::write_to_file(&fb, &file).expect("Failed to write PNG");
        println!("   {name}: {} blue pixels, saved {file}", fb.count(Rgba::BLUE));
    }

    println!("\nDone.");
}
