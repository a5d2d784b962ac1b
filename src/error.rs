//! Error types for pixel-raster operations.

use crate::geometry::Point;
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rasterizing or filling.
///
/// Validation errors are raised before any pixel is written, with one
/// exception: polygon drawing writes its outline before the interior seed
/// search runs, so [`Error::NoSeedFound`] leaves the outline on the canvas.
#[derive(Error, Debug)]
pub enum Error {
    /// Segment whose start and finish coincide.
    #[error("Degenerate segment: start and finish are both {at}")]
    DegenerateSegment {
        /// The shared endpoint.
        at: Point,
    },

    /// Square rejected by the side/position guard.
    #[error("Invalid square at ({x}, {y}) with side {side}")]
    InvalidSquare {
        /// Anchor x coordinate.
        x: i32,
        /// Anchor y coordinate.
        y: i32,
        /// Side length.
        side: i32,
    },

    /// Circle with a negative radius.
    #[error("Negative circle radius: {0}")]
    NegativeRadius(i32),

    /// Ellipse with a negative semi-axis, or with both semi-axes zero.
    #[error("Invalid ellipse semi-axes: a={semi_major}, b={semi_minor}")]
    InvalidEllipse {
        /// Horizontal semi-axis.
        semi_major: i32,
        /// Vertical semi-axis.
        semi_minor: i32,
    },

    /// Polygon with fewer than three points.
    #[error("Polygon needs at least 3 points, got {count}")]
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// Polygon whose first and last points fail the closure check.
    #[error("Polygon is not closed: first point {first}, last point {last}")]
    OpenPolygon {
        /// First point of the ring.
        first: Point,
        /// Last point of the ring.
        last: Point,
    },

    /// No interior point could be found to seed the polygon fill.
    #[error("No interior point found inside polygon with {vertices} vertices")]
    NoSeedFound {
        /// Number of polygon vertices.
        vertices: usize,
    },

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Zero-length segment, bad square/circle/ellipse parameters,
    /// too few polygon points or a failed closure check.
    DegenerateInput,
    /// Polygon interior seed search exhausted its candidates.
    NoSeedFound,
    /// Framebuffer could not be allocated with the requested size.
    InvalidCanvas,
    /// Snapshot output failed.
    Output,
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DegenerateSegment { .. }
            | Self::InvalidSquare { .. }
            | Self::NegativeRadius(_)
            | Self::InvalidEllipse { .. }
            | Self::TooFewPoints { .. }
            | Self::OpenPolygon { .. } => ErrorKind::DegenerateInput,
            Self::NoSeedFound { .. } => ErrorKind::NoSeedFound,
            Self::InvalidDimensions { .. } => ErrorKind::InvalidCanvas,
            Self::Io(_) | Self::PngEncoding(_) => ErrorKind::Output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DegenerateSegment {
            at: Point::new(3, 4),
        };
        assert_eq!(
            err.to_string(),
            "Degenerate segment: start and finish are both (3, 4)"
        );
    }

    #[test]
    fn test_open_polygon_display() {
        let err = Error::OpenPolygon {
            first: Point::new(0, 0),
            last: Point::new(5, 7),
        };
        assert!(err.to_string().contains("(0, 0)"));
        assert!(err.to_string().contains("(5, 7)"));
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::NegativeRadius(-1).kind(), ErrorKind::DegenerateInput);
        assert_eq!(Error::TooFewPoints { count: 2 }.kind(), ErrorKind::DegenerateInput);
        assert_eq!(Error::NoSeedFound { vertices: 4 }.kind(), ErrorKind::NoSeedFound);
        assert_eq!(
            Error::InvalidDimensions { width: 0, height: 1 }.kind(),
            ErrorKind::InvalidCanvas
        );
        let io = Error::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(io.kind(), ErrorKind::Output);
    }
}
