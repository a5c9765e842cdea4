//! Occupancy grid tracking which placement covers each cell
//!
//! Cells hold the index of the placement that covers them within the plan's
//! placement list. All lookups are bounds-checked; out-of-range coordinates are
//! reported as occupied so that callers never claim cells outside the grid.

use ndarray::Array2;
use std::fmt;

/// Zero-based cell position within the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    /// Row index, top to bottom
    pub row: usize,
    /// Column index, left to right
    pub col: usize,
}

impl CellCoord {
    /// Create a cell coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Number of cells a placement covers, as rows x cols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Rows covered
    pub rows: usize,
    /// Columns covered
    pub cols: usize,
}

impl Span {
    /// A single cell
    pub const SINGLE: Self = Self { rows: 1, cols: 1 };
    /// A 2x2 block
    pub const LARGE: Self = Self { rows: 2, cols: 2 };

    /// Number of cells covered
    pub const fn area(self) -> usize {
        self.rows * self.cols
    }

    /// Iterate every cell covered when anchored at `anchor`, row-major
    pub fn cells_from(self, anchor: CellCoord) -> impl Iterator<Item = CellCoord> {
        (anchor.row..anchor.row + self.rows).flat_map(move |row| {
            (anchor.col..anchor.col + self.cols).map(move |col| CellCoord::new(row, col))
        })
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Grid of cells that are either empty or owned by a placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Array2<Option<usize>>,
}

impl OccupancyGrid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), None),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Placement index covering `coord`, if any
    pub fn occupant(&self, coord: CellCoord) -> Option<usize> {
        self.cells.get((coord.row, coord.col)).copied().flatten()
    }

    /// Whether `coord` lies inside the grid and is not covered
    pub fn is_free(&self, coord: CellCoord) -> bool {
        matches!(self.cells.get((coord.row, coord.col)), Some(None))
    }

    /// Whether every cell of `span` anchored at `anchor` is inside the grid and free
    pub fn is_region_free(&self, anchor: CellCoord, span: Span) -> bool {
        span.cells_from(anchor).all(|coord| self.is_free(coord))
    }

    /// Mark the region as covered by `placement`
    ///
    /// Returns `false` and leaves the grid untouched if any cell is outside the
    /// grid or already covered.
    pub fn claim(&mut self, anchor: CellCoord, span: Span, placement: usize) -> bool {
        if !self.is_region_free(anchor, span) {
            return false;
        }
        for coord in span.cells_from(anchor) {
            if let Some(cell) = self.cells.get_mut((coord.row, coord.col)) {
                *cell = Some(placement);
            }
        }
        true
    }

    /// Uncovered cells in row-major order
    pub fn empty_cells(&self) -> Vec<CellCoord> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|((row, col), _)| CellCoord::new(row, col))
            .collect()
    }

    /// Number of uncovered cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Whether every cell is covered
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}
