//! Row-major filling of the cells left empty by block placement

use crate::algorithm::plan::{LayoutBuilder, PlanWarning};
use crate::spatial::Span;

/// Assign small images to empty cells in row-major order
///
/// Each empty cell takes the next unused image as a 1x1 placement. When the
/// images run out, every remaining empty cell is recorded as
/// [`PlanWarning::CellUnfilled`]. Returns the images that were not needed.
pub fn fill_small_cells<T, I>(builder: &mut LayoutBuilder<T>, small_images: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let mut images = small_images.into_iter();

    for cell in builder.grid().empty_cells() {
        match images.next() {
            Some(image) => {
                if builder.try_place(image, cell, Span::SINGLE).is_err() {
                    builder.warn(PlanWarning::CellUnfilled { cell });
                }
            }
            None => builder.warn(PlanWarning::CellUnfilled { cell }),
        }
    }

    images.collect()
}
