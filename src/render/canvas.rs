//! Compositing of planned placements onto a solid-color canvas
//!
//! Rendering is a single linear pass over the plan's placements. Each one is
//! loaded, fitted to its pixel rectangle and pasted. A placement whose image
//! fails to load is left blank and reported; the pass always completes.

use crate::algorithm::plan::LayoutPlan;
use crate::io::error::{CollageError, Result, invalid_parameter};
use crate::io::progress::RenderProgress;
use crate::render::fit::{CellImage, fit};
use crate::render::loader::ImageLoader;
use crate::spatial::{CellCoord, CellSize, PixelRect, Placement};
use image::{Rgb, RgbImage, imageops};

/// Pixel buffer the collage is drawn into
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: [u8; 3]) -> Self {
        Self {
            buffer: RgbImage::from_pixel(width, height, Rgb(background)),
        }
    }

    /// Create a canvas sized for an R x C grid of `cell` sized cells
    ///
    /// # Errors
    ///
    /// Returns an error if a canvas dimension overflows `u32`
    pub fn for_grid(
        rows: usize,
        cols: usize,
        cell: CellSize,
        background: [u8; 3],
    ) -> Result<Self> {
        let (width, height) = cell.grid_extent(rows, cols).ok_or_else(|| {
            invalid_parameter(
                "grid",
                &format!("{rows}x{cols} cells of {cell}"),
                &"canvas dimensions overflow u32",
            )
        })?;
        Ok(Self::new(width, height, background))
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Paste `image` with its top-left corner at the rectangle origin
    pub fn paste(&mut self, rect: PixelRect, image: &RgbImage) {
        imageops::replace(
            &mut self.buffer,
            image,
            i64::from(rect.x),
            i64::from(rect.y),
        );
    }

    /// Finished pixels
    pub fn into_image(self) -> RgbImage {
        self.buffer
    }
}

/// A placement that rendered as a blank cell
#[derive(Debug)]
pub struct RenderWarning<T> {
    /// Image that could not be drawn
    pub source: T,
    /// Anchor cell of the placement
    pub anchor: CellCoord,
    /// Why the image could not be drawn
    pub error: CollageError,
}

/// Result of a render pass
#[derive(Debug)]
pub struct RenderOutcome<T> {
    /// Composited collage
    pub image: RgbImage,
    /// Placements drawn successfully
    pub drawn: usize,
    /// Placements left blank
    pub warnings: Vec<RenderWarning<T>>,
    /// Summed pixel area of every placement rectangle
    pub placement_area: u64,
}

/// Draws layout plans using an image loader
pub struct Renderer<'a, L: ?Sized> {
    loader: &'a L,
    cell: CellSize,
    background: [u8; 3],
    progress: Option<&'a RenderProgress>,
}

impl<'a, L: ?Sized> Renderer<'a, L> {
    /// Create a renderer for cells of the given size
    pub const fn new(loader: &'a L, cell: CellSize, background: [u8; 3]) -> Self {
        Self {
            loader,
            cell,
            background,
            progress: None,
        }
    }

    /// Report each rendered placement to `progress`
    pub fn with_progress(mut self, progress: &'a RenderProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Load and fit the image for one placement
    ///
    /// # Errors
    ///
    /// Returns an error if the loader fails
    pub fn prepare<T>(&self, placement: &Placement<T>) -> Result<CellImage>
    where
        L: ImageLoader<T>,
    {
        let rect = placement.pixel_rect(self.cell);
        let image = self.loader.load(placement.source())?;
        Ok(CellImage::Ready(fit(&image, rect.width, rect.height)))
    }

    /// Composite every placement of `plan` onto a fresh canvas
    ///
    /// # Errors
    ///
    /// Returns an error only if the canvas cannot be allocated; per-image
    /// failures are collected in [`RenderOutcome::warnings`]
    pub fn render<T>(&self, plan: &LayoutPlan<T>) -> Result<RenderOutcome<T>>
    where
        L: ImageLoader<T>,
        T: Clone,
    {
        let mut canvas = Canvas::for_grid(plan.rows(), plan.cols(), self.cell, self.background)?;
        let mut warnings = Vec::new();
        let mut drawn = 0;
        let mut placement_area = 0;

        if let Some(progress) = self.progress {
            progress.start(plan.placements().len());
        }

        for placement in plan.placements() {
            let rect = placement.pixel_rect(self.cell);
            placement_area += rect.area();

            let cell_image = self.prepare(placement).unwrap_or_else(|error| {
                warnings.push(RenderWarning {
                    source: placement.source().clone(),
                    anchor: placement.anchor(),
                    error,
                });
                CellImage::Blank
            });

            if let CellImage::Ready(pixels) = cell_image {
                canvas.paste(rect, &pixels);
                drawn += 1;
            }

            if let Some(progress) = self.progress {
                progress.advance(&self.loader.describe(placement.source()));
            }
        }

        if let Some(progress) = self.progress {
            progress.finish();
        }

        Ok(RenderOutcome {
            image: canvas.into_image(),
            drawn,
            warnings,
            placement_area,
        })
    }
}
