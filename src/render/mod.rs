//! Rendering of layout plans into pixels

/// Canvas compositing and the render pass
pub mod canvas;
/// Scale-and-crop fitting
pub mod fit;
/// Source image decoding
pub mod loader;

pub use canvas::{Canvas, RenderOutcome, RenderWarning, Renderer};
pub use fit::{CellImage, fit};
pub use loader::{FileLoader, ImageLoader};
