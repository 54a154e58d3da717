//! Strip slicing, concatenation, rotation, and cyclic roll primitives

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::ImageArray;
use ndarray::{ArrayView3, Axis, Slice, concatenate, s};

/// Partition an array into `k` contiguous column strips of equal width
///
/// Strip width is `ceil(w / k)`; the final strip is truncated by the array
/// bounds rather than padded, and strips that would start past the right
/// edge (possible when `k > w`) are dropped entirely.
///
/// # Errors
///
/// Returns an error if `k` is zero.
pub fn slice_uniform(arr: &ImageArray, k: usize) -> Result<Vec<ArrayView3<'_, u8>>> {
    if k == 0 {
        return Err(invalid_parameter(
            "num_slices",
            &k,
            &"must be at least one strip",
        ));
    }

    let w = arr.dim().1;
    let strip_width = w.div_ceil(k);
    let mut strips = Vec::with_capacity(k);

    for i in 0..k {
        let start = i * strip_width;
        if start >= w {
            break;
        }
        let end = (start + strip_width).min(w);
        strips.push(arr.slice(s![.., start..end, ..]));
    }

    Ok(strips)
}

/// Concatenate strips side by side along the column axis
///
/// # Errors
///
/// Returns an error if the strips disagree in height or channel count, or
/// if no strips are supplied.
pub fn hconcat(strips: &[ArrayView3<'_, u8>]) -> Result<ImageArray> {
    concatenate(Axis(1), strips).map_err(Into::into)
}

/// Rotate 90 degrees counter-clockwise
pub fn rot90(arr: &ImageArray) -> ImageArray {
    let mut view = arr.view();
    view.swap_axes(0, 1);
    view.invert_axis(Axis(0));
    view.to_owned()
}

/// Rotate 180 degrees
pub fn rot180(arr: &ImageArray) -> ImageArray {
    let mut view = arr.view();
    view.invert_axis(Axis(0));
    view.invert_axis(Axis(1));
    view.to_owned()
}

/// Rotate 270 degrees counter-clockwise (90 clockwise)
pub fn rot270(arr: &ImageArray) -> ImageArray {
    let mut view = arr.view();
    view.swap_axes(0, 1);
    view.invert_axis(Axis(1));
    view.to_owned()
}

/// Mirror along the vertical axis (columns reversed)
pub fn flip_lr(arr: &ImageArray) -> ImageArray {
    let mut view = arr.view();
    view.invert_axis(Axis(1));
    view.to_owned()
}

/// Mirror along the horizontal axis (rows reversed)
pub fn flip_ud(arr: &ImageArray) -> ImageArray {
    let mut view = arr.view();
    view.invert_axis(Axis(0));
    view.to_owned()
}

/// Cyclically shift an array along one axis
///
/// Positive shifts move content toward higher indices with wrap-around,
/// matching numpy's roll; negative shifts and shifts beyond the axis length
/// are normalized.
pub fn roll(arr: &ImageArray, axis: Axis, shift: i64) -> Result<ImageArray> {
    let len = arr.len_of(axis) as i64;
    if len == 0 {
        return Ok(arr.clone());
    }

    let offset = shift.rem_euclid(len) as usize;
    if offset == 0 {
        return Ok(arr.clone());
    }

    let split = len as usize - offset;
    let tail = arr.slice_axis(axis, Slice::from(split..));
    let head = arr.slice_axis(axis, Slice::from(..split));
    concatenate(axis, &[tail, head]).map_err(Into::into)
}
