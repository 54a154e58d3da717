//! Text rendering seam between bitmask synthesis and the font rasterizer
//!
//! The fitting loop only needs a rendered canvas and its measured size, so
//! the rasterizer sits behind a trait. The production implementation lives
//! in [`crate::io::font`]; tests substitute deterministic linear metrics.

use crate::io::error::Result;
use crate::spatial::{ImageArray, Shape};

/// A text string rasterized onto an RGB canvas
///
/// Convention: white background, black glyphs, measured size includes the
/// renderer's blank border padding.
#[derive(Debug, Clone)]
pub struct RenderedText {
    /// The rendered canvas as a (row, column, channel) array
    pub canvas: ImageArray,
}

impl RenderedText {
    /// Measured (width, height) of the canvas
    pub fn size(&self) -> Shape {
        Shape::of(&self.canvas)
    }
}

/// External text-rendering collaborator
///
/// Treated as a deterministic pure function of its inputs for fitting
/// purposes: rendering the same text at the same size and kerning rate must
/// measure the same, and a strictly larger font size must not shrink the
/// bounding box on both axes at once.
pub trait TextRenderer {
    /// Render `text` at `font_size`, spacing characters by `kern_rate`
    /// times their natural advance
    ///
    /// # Errors
    ///
    /// Returns an error if the text is empty, the size is zero, or the
    /// underlying rasterizer fails.
    fn render(&self, text: &str, font_size: u32, kern_rate: f64) -> Result<RenderedText>;
}
