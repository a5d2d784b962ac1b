//! Rasterization and region filling.
//!
//! Integer-only scan conversion of outline primitives onto any [`Canvas`],
//! the polygon predicates used to find fill seeds, and the two region fills.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: All-octant integer segment stepping
//! - **Midpoint Circle**: Eight-way symmetric outline
//! - **Midpoint Ellipse**: Two-region axis-aligned outline
//! - **Ray Casting**: Even-odd point-in-polygon classification
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.
//!
//! [`Canvas`]: crate::canvas::Canvas

mod fill;
mod polygon;
mod primitives;
mod renderer;

pub use fill::{border_fill, flood_fill};
pub use polygon::{find_seed, intersects, is_inside, on_segment, orientation, seed_candidates, Orientation};
pub use primitives::{
    circle, ellipse, fill_square, polyline, segment, square, square_corners, SegmentPixels,
};
pub use renderer::{Renderer, Shape};
