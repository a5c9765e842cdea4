//! Layout plans and the builder that assembles them
//!
//! A [`LayoutBuilder`] owns the occupancy grid while placements are being
//! added. Finishing it yields a [`LayoutPlan`] whose grid is read-only.

use crate::spatial::{CellCoord, OccupancyGrid, Placement, Span};

/// Recoverable condition recorded while planning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanWarning<T> {
    /// No free 2x2 anchor was found within the retry budget
    LargeBlockDropped {
        /// The image that was not placed
        source: T,
        /// Anchor draws that were tried
        attempts: usize,
    },

    /// The small pool ran out before this cell was reached
    CellUnfilled {
        /// Cell left blank
        cell: CellCoord,
    },

    /// Fewer images than cells; blank slots were added
    PoolPadded {
        /// Images found
        available: usize,
        /// Cells in the grid
        cells: usize,
    },

    /// More images than cells; the surplus was ignored
    PoolTruncated {
        /// Images found
        available: usize,
        /// Cells in the grid
        cells: usize,
    },
}

/// Finished layout: placements plus the grid they cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan<T> {
    grid: OccupancyGrid,
    placements: Vec<Placement<T>>,
    warnings: Vec<PlanWarning<T>>,
}

impl<T> LayoutPlan<T> {
    /// Number of grid rows
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of grid columns
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Read-only occupancy grid
    pub const fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Placements in the order they were made
    pub fn placements(&self) -> &[Placement<T>] {
        &self.placements
    }

    /// Warnings recorded while planning
    pub fn warnings(&self) -> &[PlanWarning<T>] {
        &self.warnings
    }

    /// Whether every cell is covered by a placement
    pub fn is_complete(&self) -> bool {
        self.grid.is_full()
    }

    /// Placement covering `cell`, if any
    pub fn placement_at(&self, cell: CellCoord) -> Option<&Placement<T>> {
        self.grid
            .occupant(cell)
            .and_then(|index| self.placements.get(index))
    }

    /// Number of placements with the given span
    pub fn count_span(&self, span: Span) -> usize {
        self.placements.iter().filter(|p| p.span() == span).count()
    }
}

/// Mutable layout under construction
#[derive(Debug, Clone)]
pub struct LayoutBuilder<T> {
    grid: OccupancyGrid,
    placements: Vec<Placement<T>>,
    warnings: Vec<PlanWarning<T>>,
}

impl<T> LayoutBuilder<T> {
    /// Start an empty R x C layout
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: OccupancyGrid::new(rows, cols),
            placements: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Current occupancy
    pub const fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Place `source` at `anchor` if the whole span is free
    ///
    /// # Errors
    ///
    /// Hands `source` back when any covered cell is outside the grid or taken
    pub fn try_place(&mut self, source: T, anchor: CellCoord, span: Span) -> Result<(), T> {
        let index = self.placements.len();
        if !self.grid.claim(anchor, span, index) {
            return Err(source);
        }
        self.placements.push(Placement::new(source, anchor, span));
        Ok(())
    }

    /// Record a recoverable condition
    pub fn warn(&mut self, warning: PlanWarning<T>) {
        self.warnings.push(warning);
    }

    /// Freeze the layout
    pub fn finish(self) -> LayoutPlan<T> {
        LayoutPlan {
            grid: self.grid,
            placements: self.placements,
            warnings: self.warnings,
        }
    }
}
