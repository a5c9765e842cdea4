//! Image quota for a grid with a given number of 2x2 blocks

use crate::io::error::{CollageError, Result, invalid_parameter};
use crate::spatial::Span;

/// Images consumed by a grid layout
///
/// Each 2x2 block uses one image but covers four cells, so it displaces three
/// single-cell slots: `needed = rows * cols - 3 * large_blocks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quota {
    /// Cells in the grid
    pub total_cells: usize,
    /// Requested 2x2 blocks
    pub large_blocks: usize,
    /// Images the layout consumes
    pub needed: usize,
}

impl Quota {
    /// Compute the quota for an R x C grid with `large_blocks` 2x2 blocks
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Large blocks are requested on a grid narrower or shorter than two cells
    /// - More large blocks are requested than fit by area (`rows * cols / 4`)
    pub fn compute(rows: usize, cols: usize, large_blocks: usize) -> Result<Self> {
        let total_cells = rows * cols;

        if large_blocks > 0 && (rows < Span::LARGE.rows || cols < Span::LARGE.cols) {
            return Err(invalid_parameter(
                "large_blocks",
                &large_blocks,
                &format!("a {rows}x{cols} grid has no room for a 2x2 block"),
            ));
        }

        let max_blocks = total_cells / Span::LARGE.area();
        if large_blocks > max_blocks {
            return Err(invalid_parameter(
                "large_blocks",
                &large_blocks,
                &format!("at most {max_blocks} blocks fit in a {rows}x{cols} grid"),
            ));
        }

        Ok(Self {
            total_cells,
            large_blocks,
            needed: total_cells - (Span::LARGE.area() - 1) * large_blocks,
        })
    }

    /// Fail unless the pool holds at least `needed` images
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::InsufficientImages`] when `available < needed`
    pub fn ensure_available(&self, available: usize) -> Result<()> {
        if available < self.needed {
            return Err(CollageError::InsufficientImages {
                available,
                needed: self.needed,
            });
        }
        Ok(())
    }

    /// Single-cell images in the layout
    pub const fn small_images(&self) -> usize {
        self.needed - self.large_blocks
    }
}
