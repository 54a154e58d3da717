//! Boolean stencils: binarization, expansion to an exact shape, random text
//! masks, and the per-pixel swap they gate

use crate::io::configuration::{KERN_RATE_MAX, KERN_RATE_MIN, LUMINANCE_THRESHOLD};
use crate::io::error::{CollageError, Result, invalid_parameter};
use crate::mask::fit::fit_text_to_shape;
use crate::mask::render::TextRenderer;
use crate::spatial::{ImageArray, Shape};
use ndarray::{Array2, s};
use rand::Rng;
use rand::rngs::StdRng;

/// A boolean stencil congruent in (height, width) to the images it gates
pub type Bitmask = Array2<bool>;

/// Threshold a black-on-white RGB canvas into a boolean mask
///
/// A pixel is foreground iff all three channels fall below the luminance
/// threshold. This is an AND across channels rather than a luminance
/// formula, which is only sound for black-on-white source renders.
pub fn binarize(canvas: &ImageArray) -> Bitmask {
    let (h, w, _) = canvas.dim();
    let dark = |r: usize, c: usize, ch: usize| {
        canvas
            .get([r, c, ch])
            .is_some_and(|&v| v < LUMINANCE_THRESHOLD)
    };

    Array2::from_shape_fn((h, w), |(r, c)| dark(r, c, 0) && dark(r, c, 1) && dark(r, c, 2))
}

/// Pad a mask with `false` rows and columns until it matches `shape` exactly
///
/// The padding difference splits as evenly as possible: floor on the left,
/// ceil on the right, ceil on top, floor on the bottom. This guarantees the
/// congruence invariant the swap relies on.
///
/// # Errors
///
/// Returns a shape mismatch if the mask already exceeds the target on
/// either axis.
pub fn expand_to_shape(mask: &Bitmask, shape: Shape) -> Result<Bitmask> {
    let (mask_h, mask_w) = mask.dim();
    if mask_w > shape.w || mask_h > shape.h {
        return Err(CollageError::ShapeMismatch {
            expected: (shape.h, shape.w),
            actual: (mask_h, mask_w),
            operation: "mask expansion",
        });
    }

    let left = (shape.w - mask_w) / 2;
    let top = (shape.h - mask_h).div_ceil(2);

    let mut expanded = Array2::from_elem((shape.h, shape.w), false);
    expanded
        .slice_mut(s![top..top + mask_h, left..left + mask_w])
        .assign(mask);

    Ok(expanded)
}

/// Build a bitmask of exactly `shape` from text: fit, render, binarize,
/// expand
///
/// # Errors
///
/// Returns an error if the target shape is empty, the renderer fails, or
/// the fitting loop detects degenerate font metrics.
pub fn build_to_size(
    renderer: &dyn TextRenderer,
    text: &str,
    shape: Shape,
    kern_rate: f64,
) -> Result<Bitmask> {
    let best_size = fit_text_to_shape(renderer, text, shape, kern_rate)?;
    let rendered = renderer.render(text, best_size, kern_rate)?;
    let mask = binarize(&rendered.canvas);
    expand_to_shape(&mask, shape)
}

/// Build a bitmask from 1..=`max_chars` random uppercase letters with a
/// random kerning rate
///
/// # Errors
///
/// Returns an error if `max_chars` is zero or mask construction fails.
pub fn build_random_text(
    renderer: &dyn TextRenderer,
    shape: Shape,
    max_chars: usize,
    rng: &mut StdRng,
) -> Result<Bitmask> {
    if max_chars == 0 {
        return Err(invalid_parameter(
            "max_chars",
            &max_chars,
            &"need at least one character to build a mask",
        ));
    }

    let count = rng.random_range(0..max_chars) + 1;
    let text: String = (0..count)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect();
    let kern_rate = rng.random_range(KERN_RATE_MIN..KERN_RATE_MAX);

    build_to_size(renderer, &text, shape, kern_rate)
}

/// Swap two images through a mask, producing both pairings
///
/// The first output takes `a` where the mask is set and `b` elsewhere; the
/// second is the complement. Composing the swap with itself on an unchanged
/// mask restores the original pairing.
///
/// # Errors
///
/// Returns a fatal shape mismatch if the images or the mask disagree in
/// (height, width); congruence must be established upstream.
pub fn swap(a: &ImageArray, b: &ImageArray, mask: &Bitmask) -> Result<(ImageArray, ImageArray)> {
    let (h, w, _) = a.dim();
    if b.dim() != a.dim() {
        let (bh, bw, _) = b.dim();
        return Err(CollageError::ShapeMismatch {
            expected: (h, w),
            actual: (bh, bw),
            operation: "bitmask swap",
        });
    }
    if mask.dim() != (h, w) {
        return Err(CollageError::ShapeMismatch {
            expected: (h, w),
            actual: mask.dim(),
            operation: "bitmask swap",
        });
    }

    let mut a_over_b = b.clone();
    let mut b_over_a = a.clone();
    for ((r, c), &foreground) in mask.indexed_iter() {
        if foreground {
            a_over_b
                .slice_mut(s![r, c, ..])
                .assign(&a.slice(s![r, c, ..]));
            b_over_a
                .slice_mut(s![r, c, ..])
                .assign(&b.slice(s![r, c, ..]));
        }
    }

    Ok((a_over_b, b_over_a))
}
