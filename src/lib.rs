//! # Pixel-Raster
//!
//! Integer scan conversion of 2D primitives onto a pixel canvas.
//!
//! pixel-raster draws segments, rotated squares, circles, ellipses, polylines
//! and polygons onto anything implementing [`Canvas`](canvas::Canvas), and
//! fills regions with flood fill or border fill. Coordinates are signed
//! integers; writes outside the canvas are clipped.
//!
//! ## Features
//!
//! - **Exact integer rasterization**: Bresenham segments, midpoint circles and ellipses
//! - **Polygon fill**: Ray-casting interior test with an automatic seed search
//! - **Stack-safe fills**: Work-list flood and border fills, no recursion
//! - **PNG output**: Encode the built-in [`Framebuffer`](framebuffer::Framebuffer)
//!
//! ## Quick Start
//!
//! ```rust
//! use pixel_raster::prelude::*;
//!
//! let mut fb = Framebuffer::filled(200, 200, Rgba::BLACK)?;
//! let renderer = Renderer::new();
//!
//! renderer.segment(&mut fb, Point::new(10, 10), Point::new(190, 60), Rgba::WHITE)?;
//! renderer.square(&mut fb, 50, 50, 60, 45.0, Rgba::GREEN)?;
//! renderer.circle(&mut fb, Point::new(100, 150), 30, Rgba::BLUE)?;
//!
//! assert_eq!(fb.get_pixel(130, 150), Some(Rgba::BLUE));
//! # Ok::<(), pixel_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize and deserialize [`RendererConfig`](config::RendererConfig)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type.
pub mod color;

/// Drawing surface abstraction.
pub mod canvas;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Integer points, segments, bounding boxes and rotation.
pub mod geometry;

/// Renderer configuration.
pub mod config;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization, polygon predicates and region fills.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for pixel-raster operations.
pub mod error;

pub use error::{Error, ErrorKind, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use pixel_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, Pixel, Recording};
    pub use crate::color::Rgba;
    pub use crate::config::{RendererConfig, SeedStrategy, Validation};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{BoundingBox, Point, Segment};
    pub use crate::output::PngEncoder;
    pub use crate::render::{Renderer, Shape};
}
