//! Collage defaults and the validated runtime configuration

use crate::algorithm::quota::Quota;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::CellSize;
use std::path::PathBuf;

/// Directory scanned for source images when none is given
pub const DEFAULT_IMAGE_DIRECTORY: &str = "images";

/// Output file of the uniform grid builder
pub const DEFAULT_UNIFORM_OUTPUT: &str = "my_grid_collage.jpg";
/// Output file of the mixed grid builder
pub const DEFAULT_MIXED_OUTPUT: &str = "my_mixed_grid_collage.jpg";

/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 14;
/// Default number of grid columns
pub const DEFAULT_COLS: usize = 11;

/// Default cell width in pixels
pub const DEFAULT_CELL_WIDTH: u32 = 460;
/// Default cell height in pixels
pub const DEFAULT_CELL_HEIGHT: u32 = 215;

/// Default number of 2x2 blocks in a mixed grid
pub const DEFAULT_LARGE_BLOCKS: usize = 8;

// Bounded rejection sampling; a block that misses this many times is dropped
/// Random anchor draws allowed per large block
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 100;

/// Default JPEG quality
pub const DEFAULT_QUALITY: u8 = 90;

/// Canvas color shown behind blank cells
pub const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];

/// Width of the render progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Lower-case file extensions accepted by the image collector
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// Explicit configuration passed into each builder at call time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollageConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Pixel size of a single cell
    pub cell: CellSize,
    /// Number of 2x2 blocks (ignored by the uniform builder)
    pub large_blocks: usize,
    /// Random anchor draws allowed per large block
    pub placement_attempts: usize,
    /// Shuffle the image pool once before assignment
    pub shuffle: bool,
    /// Encoder quality (1-100, JPEG only)
    pub quality: u8,
    /// Canvas background color
    pub background: [u8; 3],
    /// Seed for the random source; a fresh seed is drawn when absent
    pub seed: Option<u64>,
    /// Destination of the rendered collage
    pub output: PathBuf,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell: CellSize::new(DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT),
            large_blocks: DEFAULT_LARGE_BLOCKS,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            shuffle: true,
            quality: DEFAULT_QUALITY,
            background: DEFAULT_BACKGROUND,
            seed: None,
            output: PathBuf::from(DEFAULT_MIXED_OUTPUT),
        }
    }
}

impl CollageConfig {
    /// Number of cells in the grid
    pub const fn total_cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Canvas dimensions in pixels as (width, height)
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension overflows `u32`
    pub fn canvas_size(&self) -> Result<(u32, u32)> {
        self.cell.grid_extent(self.rows, self.cols).ok_or_else(|| {
            invalid_parameter(
                "grid",
                &format!("{}x{} cells of {}", self.rows, self.cols, self.cell),
                &"canvas dimensions overflow u32",
            )
        })
    }

    /// Check the settings shared by both builders
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid or cell size has a zero dimension
    /// - The quality is outside 1-100
    /// - The canvas would overflow `u32`
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(invalid_parameter("rows", &self.rows, &"must be at least 1"));
        }
        if self.cols == 0 {
            return Err(invalid_parameter("cols", &self.cols, &"must be at least 1"));
        }
        if self.cell.width == 0 || self.cell.height == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell,
                &"width and height must be positive",
            ));
        }
        if !(1..=100).contains(&self.quality) {
            return Err(invalid_parameter(
                "quality",
                &self.quality,
                &"must be between 1 and 100",
            ));
        }
        self.canvas_size()?;
        Ok(())
    }

    /// Check the mixed-grid settings and compute the image quota
    ///
    /// # Errors
    ///
    /// Returns an error if [`validate`](Self::validate) fails, the retry budget is
    /// zero, or the large-block count does not fit the grid
    pub fn validate_mixed(&self) -> Result<Quota> {
        self.validate()?;
        if self.placement_attempts == 0 {
            return Err(invalid_parameter(
                "placement_attempts",
                &self.placement_attempts,
                &"must be at least 1",
            ));
        }
        Quota::compute(self.rows, self.cols, self.large_blocks)
    }
}
