//! Shared types for the identicon generation pipeline.

use serde::{Deserialize, Serialize};

/// An RGB color triple.
///
/// Derived from the first three digest bytes by the color selection
/// stage and never recomputed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One grid cell: a digest-derived byte value paired with the cell's
/// position in the conceptual square grid, numbered row-major from 0.
///
/// The same byte value appears in multiple cells because each row is
/// mirrored, but every `index` is unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Byte value taken from the digest.
    pub value: u8,
    /// Row-major position in the square grid.
    pub index: u32,
}

impl Cell {
    /// Whether this cell survives the parity filter (even values are
    /// painted, odd values are blank).
    #[must_use]
    pub const fn is_even(&self) -> bool {
        self.value % 2 == 0
    }
}

/// A point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Horizontal position (pixels from the left edge).
    pub x: u32,
    /// Vertical position (pixels from the top edge).
    pub y: u32,
}

impl PixelPoint {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in canvas pixel coordinates.
///
/// `top_left` is inclusive and `bottom_right` is exclusive: the
/// rectangle covers pixels `top_left.x..bottom_right.x` horizontally
/// and `top_left.y..bottom_right.y` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Upper-left corner (inclusive).
    pub top_left: PixelPoint,
    /// Lower-right corner (exclusive).
    pub bottom_right: PixelPoint,
}

/// Configuration for grid density and rendering scale.
///
/// Canvas dimensions are always `side_length * cell_size` pixels on
/// each axis. Both fields must be positive; [`CanvasConfig::validate`]
/// rejects zero values eagerly so a misconfiguration surfaces as an
/// error instead of a zero-size canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Number of cells per row/column of the conceptual grid.
    ///
    /// 5 matches the grid produced by mirroring digest chunks of 3.
    pub side_length: u32,

    /// Pixel width/height of one grid cell on the rendered canvas.
    pub cell_size: u32,
}

impl CanvasConfig {
    /// Default number of cells per row/column.
    pub const DEFAULT_SIDE_LENGTH: u32 = 5;
    /// Default cell size in pixels.
    pub const DEFAULT_CELL_SIZE: u32 = 50;

    /// Check that both parameters are positive and that the resulting
    /// canvas dimension fits in `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::InvalidConfig`] if `side_length` or
    /// `cell_size` is zero, or if `side_length * cell_size` overflows.
    pub fn validate(&self) -> Result<(), IconError> {
        self.canvas_extent().map(|_| ())
    }

    /// Canvas width/height in pixels (`side_length * cell_size`).
    ///
    /// # Errors
    ///
    /// Returns [`IconError::InvalidConfig`] under the same conditions
    /// as [`CanvasConfig::validate`].
    pub fn canvas_extent(&self) -> Result<u32, IconError> {
        if self.side_length == 0 {
            return Err(IconError::InvalidConfig(
                "side_length must be positive".to_owned(),
            ));
        }
        if self.cell_size == 0 {
            return Err(IconError::InvalidConfig(
                "cell_size must be positive".to_owned(),
            ));
        }
        self.side_length.checked_mul(self.cell_size).ok_or_else(|| {
            IconError::InvalidConfig(format!(
                "canvas dimension {} * {} overflows",
                self.side_length, self.cell_size,
            ))
        })
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            side_length: Self::DEFAULT_SIDE_LENGTH,
            cell_size: Self::DEFAULT_CELL_SIZE,
        }
    }
}

/// Result of running the generation pipeline: everything the renderer
/// needs to materialize the final image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilledPixelMap {
    /// Fill color for every painted rectangle.
    pub color: Rgb,

    /// Canvas-space rectangles to paint, one per surviving grid cell,
    /// in filtered-grid order.
    pub pixel_map: Vec<Rect>,
}

/// Result of running the pipeline with all intermediate stage outputs
/// preserved.
///
/// Each field captures the output of one pipeline stage, useful for
/// diagnostics and for inspecting how an input string maps to its
/// final rectangles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedIcon {
    /// Stage 1: MD5 digest of the input string.
    pub digest: [u8; 16],
    /// Stage 2: color taken from the first three digest bytes.
    pub color: Rgb,
    /// Stage 3: full symmetric grid before filtering.
    pub grid: Vec<Cell>,
    /// Stage 4: grid with odd-valued cells removed.
    pub filtered: Vec<Cell>,
    /// Stage 5: canvas rectangles for the surviving cells.
    pub pixel_map: Vec<Rect>,
}

/// Errors that can occur during identicon generation.
///
/// The pipeline itself is total over its inputs — any string, empty
/// included, produces a digest, grid, and pixel map. The only failure
/// class is invalid canvas configuration.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// Canvas configuration is invalid.
    #[error("invalid canvas configuration: {0}")]
    InvalidConfig(String),
}
