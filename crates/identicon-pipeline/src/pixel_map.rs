//! Pixel mapping.
//!
//! Converts each surviving cell's linear grid index into a canvas-space
//! rectangle. Position is derived from the cell's original index alone
//! (`row = index / side_length`, `col = index % side_length`), so the
//! mapping is independent of how many cells survived filtering.

use crate::types::{CanvasConfig, Cell, IconError, PixelPoint, Rect};

/// Map filtered cells to canvas rectangles, one per cell, in input order.
///
/// # Errors
///
/// Returns [`IconError::InvalidConfig`] if the configuration has a zero
/// `side_length` or `cell_size`, if the canvas dimension overflows, or
/// if any cell index falls outside the `side_length * side_length`
/// grid. A canvas too small for the grid is a configuration error,
/// not a license to paint past the canvas edge.
pub fn map_pixels(cells: &[Cell], config: &CanvasConfig) -> Result<Vec<Rect>, IconError> {
    config.validate()?;

    if let Some(cell) = cells
        .iter()
        .find(|cell| !index_fits(cell.index, config.side_length))
    {
        return Err(IconError::InvalidConfig(format!(
            "cell index {} does not fit a {side}x{side} grid",
            cell.index,
            side = config.side_length,
        )));
    }

    Ok(cells
        .iter()
        .map(|cell| rect_for_index(cell.index, config))
        .collect())
}

/// Whether a linear grid index lands inside a `side * side` square.
///
/// `index / side < side` avoids computing `side * side`, which can
/// itself overflow for large side lengths.
const fn index_fits(index: u32, side: u32) -> bool {
    index / side < side
}

/// Rectangle for one grid index.
///
/// Coordinate arithmetic cannot overflow: `map_pixels` has already
/// checked `row < side_length` and `col < side_length`, so every
/// coordinate here is at most `side_length * cell_size`, which
/// `validate` bounds to `u32`.
const fn rect_for_index(index: u32, config: &CanvasConfig) -> Rect {
    let row = index / config.side_length;
    let col = index % config.side_length;
    let top_left = PixelPoint::new(col * config.cell_size, row * config.cell_size);
    let bottom_right = PixelPoint::new(
        top_left.x + config.cell_size,
        top_left.y + config.cell_size,
    );
    Rect {
        top_left,
        bottom_right,
    }
}
