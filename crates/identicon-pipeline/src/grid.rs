//! Symmetric grid construction.
//!
//! Partitions the digest into consecutive chunks of three bytes and
//! mirrors each chunk about its last element (`[a, b, c]` becomes
//! `[a, b, c, b, a]`), producing one five-cell row per chunk. The
//! mirrored rows are flattened in chunk order and each value is paired
//! with its 0-based position in the flat sequence.
//!
//! Per-row mirroring is what gives the rendered icon its left-right
//! symmetry. A trailing partial chunk is dropped, not padded: with a
//! 16-byte digest the final byte never reaches the grid. That
//! truncation is part of the fixed input-to-image mapping — padding
//! instead would change every generated image.

use crate::types::Cell;

/// Number of digest bytes per grid row before mirroring.
pub const CHUNK_SIZE: usize = 3;

/// Cells per row after mirroring (`2 * CHUNK_SIZE - 1`).
pub const ROW_WIDTH: usize = 2 * CHUNK_SIZE - 1;

/// Build the symmetric grid from a digest.
///
/// The result covers every cell of the conceptual square, in row-major
/// order, with `index` equal to each cell's position in that order.
/// Digest byte order is preserved: stage output differs between any two
/// digests that differ within a complete chunk.
#[must_use]
pub fn build_grid(digest: &[u8]) -> Vec<Cell> {
    digest
        .chunks_exact(CHUNK_SIZE)
        .flat_map(mirror_row)
        .zip(0u32..)
        .map(|(value, index)| Cell { value, index })
        .collect()
}

/// Mirror one chunk about its last element: `[a, b, c]` → `[a, b, c, b, a]`.
fn mirror_row(chunk: &[u8]) -> [u8; ROW_WIDTH] {
    // `chunks_exact(CHUNK_SIZE)` guarantees exactly three elements.
    [chunk[0], chunk[1], chunk[2], chunk[1], chunk[0]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::digest;

    #[test]
    fn timothy_first_row_is_mirrored() {
        let grid = build_grid(&digest("Timothy"));
        let first_row: Vec<u8> = grid[..ROW_WIDTH].iter().map(|c| c.value).collect();
        assert_eq!(first_row, [130, 5, 44, 5, 130]);
        let indices: Vec<u32> = grid[..ROW_WIDTH].iter().map(|c| c.index).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn sixteen_byte_digest_yields_twenty_five_cells() {
        // 16 bytes = 5 complete chunks of 3 plus 1 trailing byte, which
        // is dropped. 5 rows of 5 cells each.
        let grid = build_grid(&digest("anything"));
        assert_eq!(grid.len(), 25);
    }

    #[test]
    fn every_row_is_symmetric() {
        let grid = build_grid(&digest("symmetry check"));
        for row in grid.chunks(ROW_WIDTH) {
            assert_eq!(row[0].value, row[4].value);
            assert_eq!(row[1].value, row[3].value);
        }
    }

    #[test]
    fn indices_are_contiguous_row_major() {
        let grid = build_grid(&digest("indices"));
        for (position, cell) in grid.iter().enumerate() {
            assert_eq!(cell.index as usize, position);
        }
    }

    #[test]
    fn trailing_partial_chunk_is_dropped() {
        // 4 bytes: one complete chunk, one leftover byte that must not
        // appear anywhere in the grid.
        let grid = build_grid(&[10, 20, 30, 40]);
        assert_eq!(grid.len(), ROW_WIDTH);
        assert!(grid.iter().all(|c| c.value != 40));
        assert_eq!(
            grid.iter().map(|c| c.value).collect::<Vec<_>>(),
            [10, 20, 30, 20, 10],
        );
    }

    #[test]
    fn short_digest_yields_empty_grid() {
        assert!(build_grid(&[1, 2]).is_empty());
        assert!(build_grid(&[]).is_empty());
    }

    #[test]
    fn distinct_digests_are_not_collapsed() {
        // Two digests differing within a complete chunk must produce
        // different grids — no stage may normalize distinct inputs.
        let a = build_grid(&[1, 2, 3, 4, 5, 6]);
        let b = build_grid(&[1, 2, 4, 4, 5, 6]);
        assert_ne!(a, b);
    }
}
