//! Rectangular crop regions and the strategies that place them
//!
//! Boxes are plain coordinate tuples with no implicit clamping: a target
//! shape larger than the source yields a negative-origin box, and applying
//! an out-of-bounds box is an error. Callers negotiate a mutual shape with
//! [`common_crop_shape`](crate::spatial::common_crop_shape) first.

use crate::io::configuration::{JITTER_PERCENT_MAX, JITTER_PERCENT_MIN};
use crate::io::error::{CollageError, Result};
use crate::spatial::ImageArray;
use crate::spatial::shape::Shape;
use ndarray::s;
use rand::Rng;
use rand::rngs::StdRng;

/// A crop rectangle as (left, top, right, bottom) pixel coordinates
///
/// Invariants `left < right` and `top < bottom` hold for every box built by
/// the strategy constructors; coordinates may still fall outside the source
/// bounds, which [`CropBox::apply`] rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    /// Leftmost column (inclusive)
    pub left: i64,
    /// Topmost row (inclusive)
    pub top: i64,
    /// Rightmost column (exclusive)
    pub right: i64,
    /// Bottommost row (exclusive)
    pub bottom: i64,
}

impl CropBox {
    /// Box width in pixels
    pub const fn width(self) -> i64 {
        self.right - self.left
    }

    /// Box height in pixels
    pub const fn height(self) -> i64 {
        self.bottom - self.top
    }

    /// Shape of the region this box selects, saturating at zero
    pub const fn shape(self) -> Shape {
        let w = self.width();
        let h = self.height();
        Shape::new(
            if w > 0 { w as usize } else { 0 },
            if h > 0 { h as usize } else { 0 },
        )
    }

    /// Centered box of the given crop shape within a source shape
    ///
    /// Offsets floor like Python's integer division, so an oversized crop
    /// shape produces a symmetric negative-origin box rather than panicking.
    pub const fn central(img: Shape, crop: Shape) -> Self {
        let left = (img.w as i64 - crop.w as i64).div_euclid(2);
        let top = (img.h as i64 - crop.h as i64).div_euclid(2);
        Self {
            left,
            top,
            right: left + crop.w as i64,
            bottom: top + crop.h as i64,
        }
    }

    /// Centered box for the largest square within a source shape
    pub const fn central_square(img: Shape) -> Self {
        Self::central(img, img.square())
    }

    /// Off-center box displaced by random jitter
    ///
    /// The crop shape shrinks by a jitter fraction drawn from the configured
    /// percent range so the displaced box still has room inside the source,
    /// then each axis is displaced independently by up to half the jitter
    /// amount of the shorter side, rounding toward zero so positive and
    /// negative displacements cover the same magnitudes.
    pub fn off_center_random(img: Shape, rng: &mut StdRng) -> Self {
        let jitter = f64::from(rng.random_range(JITTER_PERCENT_MIN..JITTER_PERCENT_MAX)) / 100.0;
        let crop_cap = 1.0 - jitter;
        let max_jitter = img.min_side() as f64 * jitter / 2.0;

        let crop = Shape::new(
            (img.w as f64 * crop_cap).floor() as usize,
            (img.h as f64 * crop_cap).floor() as usize,
        );

        let base = Self::central(img, crop);
        let jitter_w = trunc_toward_zero(max_jitter * rng.random_range(-1.0..1.0));
        let jitter_h = trunc_toward_zero(max_jitter * rng.random_range(-1.0..1.0));

        Self {
            left: base.left + jitter_w,
            top: base.top + jitter_h,
            right: base.right + jitter_w,
            bottom: base.bottom + jitter_h,
        }
    }

    /// Slice this box out of an image array
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::CropOutOfBounds`] if the box is empty or any
    /// coordinate falls outside the array.
    pub fn apply(self, arr: &ImageArray) -> Result<ImageArray> {
        let img = Shape::of(arr);
        let in_bounds = self.left >= 0
            && self.top >= 0
            && self.right <= img.w as i64
            && self.bottom <= img.h as i64
            && self.left < self.right
            && self.top < self.bottom;

        if !in_bounds {
            return Err(CollageError::CropOutOfBounds {
                cropbox: (self.left, self.top, self.right, self.bottom),
                bounds: (img.w, img.h),
            });
        }

        Ok(arr
            .slice(s![
                self.top as usize..self.bottom as usize,
                self.left as usize..self.right as usize,
                ..
            ])
            .to_owned())
    }
}

// Rounds toward zero rather than flooring, keeping negative displacements
// symmetric in magnitude with positive ones
const fn trunc_toward_zero(n: f64) -> i64 {
    n as i64
}
