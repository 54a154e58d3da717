//! Derived strip transforms: reverse, shuffle, duplicate-stack, grid,
//! phase-roll, and alternating flip
//!
//! All operations slice along the column axis; horizontal variants rotate
//! 90 degrees, run the vertical operation, and rotate back 270 so the same
//! primitive serves both axes.

use crate::io::error::{Result, invalid_parameter};
use crate::resample::slicing::{hconcat, roll, rot90, rot270, slice_uniform};
use crate::spatial::{ImageArray, Shape};
use ndarray::Axis;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

// Per-strip shift growth range for the phase-roll shear effect
const PHASE_RATE_MIN: f64 = 0.005;
const PHASE_RATE_MAX: f64 = 0.025;

/// Slice into `k` strips and reverse their order
///
/// An involution when `k` divides the width evenly.
///
/// # Errors
///
/// Returns an error if `k` is zero.
pub fn reverse(arr: &ImageArray, k: usize) -> Result<ImageArray> {
    let mut strips = slice_uniform(arr, k)?;
    strips.reverse();
    hconcat(&strips)
}

/// Slice into `k` strips and rearrange them in uniform random order
///
/// The multiset of strip contents is preserved; only their order changes.
///
/// # Errors
///
/// Returns an error if `k` is zero.
pub fn shuffle(arr: &ImageArray, k: usize, rng: &mut StdRng) -> Result<ImageArray> {
    let mut strips = slice_uniform(arr, k)?;
    strips.shuffle(rng);
    hconcat(&strips)
}

/// Interleaved duplicate-stack along the vertical slicing axis
///
/// Slices into `num_slices` strips, then lays `num_dups` stride-sampled
/// groups side by side: group `d` is `strips[d], strips[d + num_dups], ...`.
/// Each group reads as a squeezed copy of the original. Remainder strips
/// simply drop out of the shorter groups; nothing is padded.
///
/// # Errors
///
/// Returns an error if `num_dups` or `num_slices` is zero.
pub fn stack_vertical(arr: &ImageArray, num_dups: usize, num_slices: usize) -> Result<ImageArray> {
    if num_dups == 0 {
        return Err(invalid_parameter(
            "num_dups",
            &num_dups,
            &"must be at least one duplicate group",
        ));
    }

    let strips = slice_uniform(arr, num_slices)?;
    let mut ordered = Vec::with_capacity(strips.len());
    for dup in 0..num_dups {
        ordered.extend(strips.iter().skip(dup).step_by(num_dups).copied());
    }

    hconcat(&ordered)
}

/// Interleaved duplicate-stack along the horizontal slicing axis
///
/// # Errors
///
/// Returns an error if `num_dups` or `num_slices` is zero.
pub fn stack_horizontal(
    arr: &ImageArray,
    num_dups: usize,
    num_slices: usize,
) -> Result<ImageArray> {
    let rotated = rot90(arr);
    let stacked = stack_vertical(&rotated, num_dups, num_slices)?;
    Ok(rot270(&stacked))
}

/// Checkerboard resampling: duplicate-stack both axes in sequence
///
/// The two dup counts are independent; mismatched counts are an intentional
/// creative parameter, not an error.
///
/// # Errors
///
/// Returns an error if any count is zero.
pub fn grid(
    arr: &ImageArray,
    num_dups_vert: usize,
    num_dups_hor: usize,
    num_slices_per_dup: usize,
) -> Result<ImageArray> {
    let stacked = stack_vertical(arr, num_dups_vert, num_dups_vert * num_slices_per_dup)?;
    let rotated = rot90(&stacked);
    let gridded = stack_vertical(&rotated, num_dups_hor, num_dups_hor * num_slices_per_dup)?;
    Ok(rot270(&gridded))
}

/// Slice into `k` strips and roll each along the row axis by a linearly
/// increasing shift, producing a shearing wave
///
/// One random shift rate and one random direction are drawn per call and
/// shared by every strip; strip `i` shifts by `floor(h * i * rate)` in that
/// direction.
///
/// # Errors
///
/// Returns an error if `k` is zero.
pub fn phase_slices_vertical(arr: &ImageArray, k: usize, rng: &mut StdRng) -> Result<ImageArray> {
    let height = Shape::of(arr).h as f64;
    let strips = slice_uniform(arr, k)?;

    let rate = rng.random_range(PHASE_RATE_MIN..PHASE_RATE_MAX);
    let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

    let mut rolled = Vec::with_capacity(strips.len());
    for (i, strip) in strips.iter().enumerate() {
        let shift = (height * i as f64 * rate * direction).floor() as i64;
        rolled.push(roll(&strip.to_owned(), Axis(0), shift)?);
    }

    let views: Vec<_> = rolled.iter().map(|strip| strip.view()).collect();
    hconcat(&views)
}

/// Rotated variant of [`phase_slices_vertical`] slicing along rows
///
/// # Errors
///
/// Returns an error if `k` is zero.
pub fn phase_slices_horizontal(arr: &ImageArray, k: usize, rng: &mut StdRng) -> Result<ImageArray> {
    let rotated = rot90(arr);
    let phased = phase_slices_vertical(&rotated, k, rng)?;
    Ok(rot270(&phased))
}

/// Slice into `k` strips and mirror every odd-indexed strip along `axis`
///
/// Even-indexed strips pass through untouched, so half the image keeps its
/// original orientation.
///
/// # Errors
///
/// Returns an error if `k` is zero or `axis` is not a pixel axis.
pub fn flip_slices_vertical(arr: &ImageArray, k: usize, axis: Axis) -> Result<ImageArray> {
    if axis.index() > 1 {
        return Err(invalid_parameter(
            "axis",
            &axis.index(),
            &"must be the row (0) or column (1) axis",
        ));
    }

    let strips = slice_uniform(arr, k)?;
    let mut alternated = Vec::with_capacity(strips.len());
    for (i, strip) in strips.into_iter().enumerate() {
        if i % 2 == 1 {
            let mut mirrored = strip;
            mirrored.invert_axis(axis);
            alternated.push(mirrored);
        } else {
            alternated.push(strip);
        }
    }

    hconcat(&alternated)
}

/// Rotated variant of [`flip_slices_vertical`] slicing along rows
///
/// # Errors
///
/// Returns an error if `k` is zero or `axis` is not a pixel axis.
pub fn flip_slices_horizontal(arr: &ImageArray, k: usize, axis: Axis) -> Result<ImageArray> {
    let rotated = rot90(arr);
    let flipped = flip_slices_vertical(&rotated, k, axis)?;
    Ok(rot270(&flipped))
}
