//! Semantic (width, height) pairs and shape negotiation
//!
//! Array dimensions are (row, column, channel), so the semantic width is the
//! column count and the semantic height the row count. Every API in the
//! crate that talks about shape uses this (w, h) orientation.

use crate::spatial::ImageArray;

/// Semantic (width, height) of an image array or crop region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Width in pixels (column count)
    pub w: usize,
    /// Height in pixels (row count)
    pub h: usize,
}

impl Shape {
    /// Create a shape from explicit width and height
    pub const fn new(w: usize, h: usize) -> Self {
        Self { w, h }
    }

    /// Shape of an image array
    pub fn of(arr: &ImageArray) -> Self {
        let (h, w, _) = arr.dim();
        Self { w, h }
    }

    /// Length of the shorter side
    pub const fn min_side(self) -> usize {
        if self.w < self.h { self.w } else { self.h }
    }

    /// Collapse to the largest square that fits within this shape
    pub const fn square(self) -> Self {
        let side = self.min_side();
        Self { w: side, h: side }
    }

    /// Whether the shape encloses a non-empty pixel region
    pub const fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Negotiate the largest shape mutually contained by every item
///
/// Computes the pairwise minimum of widths and heights across all shapes,
/// so two differently sized images can be cropped to a congruent region
/// before masking. With `square` set, collapses to `min(w, h)` on both axes.
/// An empty input list yields the empty shape.
pub fn common_crop_shape(shapes: &[Shape], square: bool) -> Shape {
    let mut common = match shapes.first() {
        Some(first) => *first,
        None => return Shape::new(0, 0),
    };

    for shape in shapes.iter().skip(1) {
        common.w = common.w.min(shape.w);
        common.h = common.h.min(shape.h);
    }

    if square { common.square() } else { common }
}
