//! Random placement of 2x2 blocks by bounded rejection sampling
//!
//! Each block draws anchors uniformly from the positions where a 2x2 block
//! fits and takes the first one whose four cells are empty. A block that
//! misses on every draw is dropped. This does not guarantee placement even
//! when room exists, and success becomes less likely as the grid fills.

use crate::algorithm::plan::{LayoutBuilder, PlanWarning};
use crate::spatial::{CellCoord, Span};
use rand::Rng;

/// Place each large image as a 2x2 block
///
/// Returns the number of blocks placed. Dropped images are recorded as
/// [`PlanWarning::LargeBlockDropped`] and are not handed to any other pool.
pub fn place_large_blocks<T, R, I>(
    builder: &mut LayoutBuilder<T>,
    large_images: I,
    attempts: usize,
    rng: &mut R,
) -> usize
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = T>,
{
    let span = Span::LARGE;
    let rows = builder.grid().rows();
    let cols = builder.grid().cols();
    let mut placed = 0;

    for image in large_images {
        if rows < span.rows || cols < span.cols {
            builder.warn(PlanWarning::LargeBlockDropped {
                source: image,
                attempts: 0,
            });
            continue;
        }

        let free_anchor = (0..attempts)
            .map(|_| {
                CellCoord::new(
                    rng.random_range(0..=rows - span.rows),
                    rng.random_range(0..=cols - span.cols),
                )
            })
            .find(|&anchor| builder.grid().is_region_free(anchor, span));

        let outcome = match free_anchor {
            Some(anchor) => builder.try_place(image, anchor, span),
            None => Err(image),
        };
        match outcome {
            Ok(()) => placed += 1,
            Err(source) => builder.warn(PlanWarning::LargeBlockDropped { source, attempts }),
        }
    }

    placed
}
