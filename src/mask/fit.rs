//! Font-size fitting: find the largest size whose rendered text still fits
//! a target rectangle
//!
//! Glyph metrics are non-linear in font size, so this is a fixed-point
//! growth iteration followed by a unit-step shrink, not a closed-form
//! solve.

use crate::io::configuration::{FIT_MAX_STEPS, FIT_START_SIZE};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::mask::render::TextRenderer;
use crate::spatial::Shape;

/// Determine the maximum font size for `text` inside `shape`
///
/// Growth phase: while the rendering is strictly inside both bounds,
/// compare the limiting wall ratio `(shape_w - text_w) / (shape_h - text_h)`
/// with the text's own aspect ratio to decide which wall the text will hit
/// first, scale the size by that wall's ratio, and re-render. The `ceil`
/// on the scaled size may overshoot, so a shrink phase then walks the size
/// down by one until both bounds hold.
///
/// # Errors
///
/// Returns an error if the target shape is empty, if the text cannot fit at
/// any positive size, or if the renderer returns a non-growing bounding box
/// for a strictly larger size (degenerate font metrics; fatal rather than
/// retried).
pub fn fit_text_to_shape(
    renderer: &dyn TextRenderer,
    text: &str,
    shape: Shape,
    kern_rate: f64,
) -> Result<u32> {
    if shape.is_empty() {
        return Err(invalid_parameter(
            "shape",
            &format!("{}x{}", shape.w, shape.h),
            &"target shape must be non-empty",
        ));
    }

    let mut size = FIT_START_SIZE;
    let mut dims = renderer.render(text, size, kern_rate)?.size();
    let mut steps = 0;

    // Growth: strictly inside both walls means there is room to scale up
    while dims.w < shape.w && dims.h < shape.h {
        step_guard(&mut steps)?;

        let wall_limit = (shape.w - dims.w) as f64 / (shape.h - dims.h) as f64;
        let growth_ratio = dims.w as f64 / dims.h as f64;
        let scale = if growth_ratio >= wall_limit {
            // Wide text bumps into the side walls first
            shape.w as f64 / dims.w as f64
        } else {
            shape.h as f64 / dims.h as f64
        };

        let next = (scale * f64::from(size)).ceil() as u32;
        if next <= size {
            break;
        }

        let grown = renderer.render(text, next, kern_rate)?.size();
        if grown.w <= dims.w && grown.h <= dims.h {
            return Err(computation_error(
                "fit_text_to_shape",
                &format!("bounding box did not grow from size {size} to {next}"),
            ));
        }

        size = next;
        dims = grown;
    }

    // Shrink: the ceil above may have pushed slightly past optimal
    while dims.w > shape.w || dims.h > shape.h {
        step_guard(&mut steps)?;

        if size <= 1 {
            return Err(computation_error(
                "fit_text_to_shape",
                &format!("text does not fit {}x{} at any size", shape.w, shape.h),
            ));
        }

        size -= 1;
        dims = renderer.render(text, size, kern_rate)?.size();
    }

    Ok(size)
}

fn step_guard(steps: &mut usize) -> Result<()> {
    *steps += 1;
    if *steps > FIT_MAX_STEPS {
        return Err(computation_error(
            "fit_text_to_shape",
            &format!("no convergence after {FIT_MAX_STEPS} renders"),
        ));
    }
    Ok(())
}
