//! Renderer configuration.
//!
//! Two knobs decide how forgiving the [`Renderer`](crate::render::Renderer)
//! is: how strictly square and polygon inputs are validated, and how hard
//! the polygon fill looks for an interior seed.

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Input validation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Validation {
    /// Historical guards: a square is rejected only when
    /// `x <= 0 && y <= 0 && side < 1`, and a polygon is open only when its
    /// first and last points differ in both coordinates.
    #[default]
    Lenient,
    /// Squares need `side >= 1`; polygons need the last point to equal the
    /// first exactly.
    Strict,
}

impl Validation {
    /// Check square parameters.
    pub fn check_square(self, x: i32, y: i32, side: i32) -> Result<()> {
        let rejected = match self {
            Self::Lenient => x <= 0 && y <= 0 && side < 1,
            Self::Strict => side < 1,
        };
        if rejected {
            return Err(Error::InvalidSquare { x, y, side });
        }
        Ok(())
    }

    /// Check that `points` describes a closed ring of at least three points.
    pub fn check_polygon(self, points: &[Point]) -> Result<()> {
        let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
            return Err(Error::TooFewPoints { count: 0 });
        };
        if points.len() < 3 {
            return Err(Error::TooFewPoints {
                count: points.len(),
            });
        }
        let open = match self {
            Self::Lenient => first.x != last.x && first.y != last.y,
            Self::Strict => first != last,
        };
        if open {
            return Err(Error::OpenPolygon { first, last });
        }
        Ok(())
    }
}

/// Polygon fill seed search policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SeedStrategy {
    /// Scan the bounding box's horizontal midline, then its vertical
    /// midline, and take the first hit. Cheap, but can miss the interior of
    /// concave shapes or land on an outline pixel.
    #[default]
    Midlines,
    /// Midline candidates that stay inside after the nudge, then every row
    /// of the bounding box; seeds already carrying the outline color are
    /// skipped.
    Scanline,
}

/// Configuration for [`Renderer`](crate::render::Renderer).
///
/// # Example
///
/// ```
/// use pixel_raster::config::{RendererConfig, SeedStrategy, Validation};
///
/// let config = RendererConfig::new()
///     .validation(Validation::Strict)
///     .seed_strategy(SeedStrategy::Scanline);
/// assert_eq!(config.validation, Validation::Strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RendererConfig {
    /// Input validation policy.
    pub validation: Validation,
    /// Polygon fill seed search policy.
    pub seed_strategy: SeedStrategy,
}

impl RendererConfig {
    /// Default configuration: lenient validation, midline seed search.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validation: Validation::Lenient,
            seed_strategy: SeedStrategy::Midlines,
        }
    }

    /// Strict validation and scanline seed search.
    #[must_use]
    pub const fn robust() -> Self {
        Self {
            validation: Validation::Strict,
            seed_strategy: SeedStrategy::Scanline,
        }
    }

    /// Set the validation policy.
    #[must_use]
    pub const fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Set the seed search policy.
    #[must_use]
    pub const fn seed_strategy(mut self, seed_strategy: SeedStrategy) -> Self {
        self.seed_strategy = seed_strategy;
        self
    }
}
