//! Layout planning for the uniform and mixed grid builders
//!
//! Both planners take an explicit [`CollageConfig`] and random source and
//! return a [`LayoutPlan`]; neither touches the filesystem.

use crate::algorithm::filler::fill_small_cells;
use crate::algorithm::placer::place_large_blocks;
use crate::algorithm::plan::{LayoutBuilder, LayoutPlan, PlanWarning};
use crate::algorithm::pool::ImagePool;
use crate::algorithm::quota::Quota;
use crate::io::configuration::CollageConfig;
use crate::io::error::Result;
use crate::spatial::{CellCoord, Span};
use rand::Rng;

/// One image per cell in an R x C grid
#[derive(Debug, Clone, Copy)]
pub struct UniformGridPlanner<'a> {
    config: &'a CollageConfig,
}

impl<'a> UniformGridPlanner<'a> {
    /// Create a planner for the given configuration
    pub const fn new(config: &'a CollageConfig) -> Self {
        Self { config }
    }

    /// Assign pool images to cells in row-major order
    ///
    /// The pool is padded with blank cells or truncated to exactly `rows * cols`
    /// slots before the optional shuffle, so blanks end up scattered.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn plan<T, R>(&self, pool: ImagePool<T>, rng: &mut R) -> Result<LayoutPlan<T>>
    where
        R: Rng + ?Sized,
    {
        self.config.validate()?;
        let (rows, cols) = (self.config.rows, self.config.cols);
        let cells = self.config.total_cells();

        let mut fitted = pool.fit_to(cells);
        let mut builder = LayoutBuilder::new(rows, cols);

        if fitted.padded() > 0 {
            builder.warn(PlanWarning::PoolPadded {
                available: fitted.available,
                cells,
            });
        } else if fitted.truncated() > 0 {
            builder.warn(PlanWarning::PoolTruncated {
                available: fitted.available,
                cells,
            });
        }

        if self.config.shuffle {
            fitted.shuffle(rng);
        }

        for (index, slot) in fitted.slots.into_iter().enumerate() {
            let cell = CellCoord::new(index / cols, index % cols);
            if let Some(image) = slot {
                // Every cell is visited once, so a conflict is impossible
                if builder.try_place(image, cell, Span::SINGLE).is_err() {
                    builder.warn(PlanWarning::CellUnfilled { cell });
                }
            }
        }

        Ok(builder.finish())
    }
}

/// Grid mixing single cells with randomly placed 2x2 blocks
#[derive(Debug, Clone, Copy)]
pub struct MixedGridPlanner<'a> {
    config: &'a CollageConfig,
}

impl<'a> MixedGridPlanner<'a> {
    /// Create a planner for the given configuration
    pub const fn new(config: &'a CollageConfig) -> Self {
        Self { config }
    }

    /// Validate the configuration and compute the image quota
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn quota(&self) -> Result<Quota> {
        self.config.validate_mixed()
    }

    /// Plan large blocks first, then fill the remaining cells
    ///
    /// The pool is shuffled (when enabled), cut to the quota, and split into the
    /// first `large_blocks` images for 2x2 blocks and the rest for single cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the pool holds fewer
    /// images than the quota requires
    pub fn plan<T, R>(&self, mut pool: ImagePool<T>, rng: &mut R) -> Result<LayoutPlan<T>>
    where
        R: Rng + ?Sized,
    {
        let quota = self.quota()?;
        quota.ensure_available(pool.len())?;

        if self.config.shuffle {
            pool.shuffle(rng);
        }
        pool.truncate(quota.needed);
        let (large, small) = pool.split_large(quota.large_blocks);

        let mut builder = LayoutBuilder::new(self.config.rows, self.config.cols);
        place_large_blocks(&mut builder, large, self.config.placement_attempts, rng);
        fill_small_cells(&mut builder, small);

        Ok(builder.finish())
    }
}
