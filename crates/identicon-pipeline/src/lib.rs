//! identicon-pipeline: Pure identicon generation pipeline (sans-IO).
//!
//! Deterministically derives a pixel-art avatar layout from an arbitrary
//! input string through:
//! hashing -> color selection -> symmetric grid construction ->
//! parity filtering -> pixel mapping.
//!
//! This crate has **no I/O dependencies** -- it maps strings to
//! structured pixel data. Rasterization lives in `identicon-render`;
//! file paths, seed generation, and encoding belong to the caller.
//!
//! The same string always yields the same color and rectangles, and the
//! mirrored grid rows give every icon left-right symmetry.

pub mod color;
pub mod digest;
pub mod filter;
pub mod grid;
pub mod pixel_map;
pub mod types;

pub use types::{CanvasConfig, Cell, FilledPixelMap, IconError, PixelPoint, Rect, Rgb, StagedIcon};

/// Run the generation pipeline: hashing through pixel mapping.
///
/// Every stage is a pure function; repeated calls with the same input
/// and configuration return identical results. Any string is valid
/// input, including the empty string.
///
/// # Pipeline steps
///
/// 1. Hash the input string into a 16-byte digest
/// 2. Select the fill color from the first three digest bytes
/// 3. Build the mirrored symmetric grid from digest chunks of three
/// 4. Filter out odd-valued cells
/// 5. Map surviving cells to canvas rectangles
///
/// # Errors
///
/// Returns [`IconError::InvalidConfig`] if `config` has a zero
/// `side_length` or `cell_size`, or the canvas dimension overflows.
/// The configuration is checked before any stage runs.
pub fn generate(input: &str, config: &CanvasConfig) -> Result<FilledPixelMap, IconError> {
    config.validate()?;

    let digest = digest::digest(input);
    let color = color::select_color(&digest);
    let grid = grid::build_grid(&digest);
    let filtered = filter::filter_even(grid);
    let pixel_map = pixel_map::map_pixels(&filtered, config)?;

    Ok(FilledPixelMap { color, pixel_map })
}

/// Run the generation pipeline keeping every intermediate stage output.
///
/// Same semantics as [`generate`], but the returned [`StagedIcon`]
/// exposes the digest, the unfiltered grid, and the filtered grid
/// alongside the color and pixel map.
///
/// # Errors
///
/// Returns [`IconError::InvalidConfig`] under the same conditions as
/// [`generate`].
pub fn generate_staged(input: &str, config: &CanvasConfig) -> Result<StagedIcon, IconError> {
    config.validate()?;

    let digest = digest::digest(input);
    let color = color::select_color(&digest);
    let grid = grid::build_grid(&digest);
    let filtered = filter::filter_even(grid.clone());
    let pixel_map = pixel_map::map_pixels(&filtered, config)?;

    Ok(StagedIcon {
        digest,
        color,
        grid,
        filtered,
        pixel_map,
    })
}
