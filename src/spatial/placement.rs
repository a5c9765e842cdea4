//! Placements of source images on the grid and their pixel geometry

use crate::spatial::grid::{CellCoord, Span};
use std::fmt;

/// Pixel size of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl CellSize {
    /// Create a cell size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel size of an R x C grid of these cells as (width, height)
    ///
    /// Returns `None` if either dimension overflows `u32`.
    pub fn grid_extent(self, rows: usize, cols: usize) -> Option<(u32, u32)> {
        let width = u32::try_from(cols).ok()?.checked_mul(self.width)?;
        let height = u32::try_from(rows).ok()?.checked_mul(self.height)?;
        Some((width, height))
    }
}

impl fmt::Display for CellSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned pixel rectangle on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl PixelRect {
    /// Area in pixels
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// One source image assigned to an anchor cell and span
///
/// Immutable once created; the plan owns every placement for the render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement<T> {
    source: T,
    anchor: CellCoord,
    span: Span,
}

impl<T> Placement<T> {
    /// Create a placement
    pub const fn new(source: T, anchor: CellCoord, span: Span) -> Self {
        Self {
            source,
            anchor,
            span,
        }
    }

    /// Source image reference
    pub const fn source(&self) -> &T {
        &self.source
    }

    /// Top-left cell
    pub const fn anchor(&self) -> CellCoord {
        self.anchor
    }

    /// Cells covered, as rows x cols
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Every covered cell, row-major
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        self.span.cells_from(self.anchor)
    }

    /// Whether two placements cover a common cell
    pub const fn overlaps<U>(&self, other: &Placement<U>) -> bool {
        let rows_overlap = self.anchor.row < other.anchor.row + other.span.rows
            && other.anchor.row < self.anchor.row + self.span.rows;
        let cols_overlap = self.anchor.col < other.anchor.col + other.span.cols
            && other.anchor.col < self.anchor.col + self.span.cols;
        rows_overlap && cols_overlap
    }

    /// Canvas rectangle this placement is drawn into
    pub const fn pixel_rect(&self, cell: CellSize) -> PixelRect {
        PixelRect {
            x: self.anchor.col as u32 * cell.width,
            y: self.anchor.row as u32 * cell.height,
            width: self.span.cols as u32 * cell.width,
            height: self.span.rows as u32 * cell.height,
        }
    }
}
