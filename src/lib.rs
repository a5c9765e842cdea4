//! Grid collage builder
//!
//! Arranges a directory of images into a fixed R x C grid. The uniform layout
//! places one image per cell; the mixed layout additionally enlarges some
//! images to randomly placed 2x2 blocks. Every image is scaled and
//! center-cropped to its cell box before being composited onto the canvas.

#![forbid(unsafe_code)]

/// Layout planning: quotas, pools, block placement and cell filling
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Canvas compositing and image fitting
pub mod render;
/// Grid coordinates, occupancy and placements
pub mod spatial;

pub use io::error::{CollageError, Result};
