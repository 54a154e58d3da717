//! Recursive self-collage: off-crop an image against itself through random
//! single-character bitmasks

use crate::io::configuration::OFFCROP_ITERATIONS;
use crate::io::error::Result;
use crate::mask::bitmask::{build_random_text, build_to_size, swap};
use crate::mask::render::TextRenderer;
use crate::spatial::{CropBox, ImageArray, Shape, common_crop_shape};
use rand::Rng;
use rand::rngs::StdRng;

/// Collage an image with off-center crops of itself
///
/// Runs 1..=5 iterations. Each iteration off-center-crops two working
/// copies, reconciles them to their common shape with central crops, builds
/// a bitmask (from `mask_text`, or one random character when `None`), and
/// swaps the copies through it. A coin flipped once up front decides
/// whether the second copy resets to a pristine copy of the input after
/// every iteration or accumulates compounding distortion. Only the first
/// copy is returned, so the output never grows past the input.
///
/// # Errors
///
/// Returns an error if cropping or bitmask synthesis fails.
pub fn offcrop_recursive(
    arr: &ImageArray,
    rng: &mut StdRng,
    renderer: &dyn TextRenderer,
    mask_text: Option<&str>,
) -> Result<ImageArray> {
    let use_clean_copy = rng.random_bool(0.5);
    let (min_iters, max_iters) = OFFCROP_ITERATIONS;
    let times = rng.random_range(min_iters..=max_iters);

    let mut copy_a = arr.clone();
    let mut copy_b = arr.clone();

    for _ in 0..times {
        copy_a = CropBox::off_center_random(Shape::of(&copy_a), rng).apply(&copy_a)?;
        copy_b = CropBox::off_center_random(Shape::of(&copy_b), rng).apply(&copy_b)?;

        let crop_shape = common_crop_shape(&[Shape::of(&copy_a), Shape::of(&copy_b)], false);
        copy_a = CropBox::central(Shape::of(&copy_a), crop_shape).apply(&copy_a)?;
        copy_b = CropBox::central(Shape::of(&copy_b), crop_shape).apply(&copy_b)?;

        let bitmask = match mask_text {
            Some(text) => build_to_size(renderer, text, crop_shape, 1.0)?,
            None => build_random_text(renderer, crop_shape, 1, rng)?,
        };

        let (swapped_a, swapped_b) = swap(&copy_a, &copy_b, &bitmask)?;
        copy_a = swapped_a;
        copy_b = if use_clean_copy {
            arr.clone()
        } else {
            swapped_b
        };
    }

    Ok(copy_a)
}
