//! Parity filtering.
//!
//! Converts the dense symmetric grid into a sparse stencil: even-valued
//! cells are painted, odd-valued cells are blank. Parity is a cheap
//! pseudo-random binary choice already implied by the hash, so no extra
//! randomness enters the pipeline here.

use crate::types::Cell;

/// Keep only even-valued cells, preserving relative order.
///
/// Surviving cells retain their original grid `index` — indices are
/// never renumbered after filtering, since the pixel mapper derives
/// canvas position from a cell's position in the full square.
#[must_use]
pub fn filter_even(mut grid: Vec<Cell>) -> Vec<Cell> {
    grid.retain(Cell::is_even);
    grid
}
