//! Spatial data structures for grid layouts
//!
//! This module contains:
//! - Cell coordinates, spans and the occupancy grid
//! - Placements and their pixel geometry

/// Cell coordinates, spans and occupancy tracking
pub mod grid;
/// Placements of images on the grid
pub mod placement;

pub use grid::{CellCoord, OccupancyGrid, Span};
pub use placement::{CellSize, PixelRect, Placement};
