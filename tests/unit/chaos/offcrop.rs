//! Tests for the recursive self-collage

use crate::support::{LinearRenderer, gradient};
use chaoscollage::chaos::offcrop::offcrop_recursive;
use chaoscollage::spatial::Shape;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn output_shrinks_but_stays_substantial() {
    let arr = gradient(200, 160);

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = offcrop_recursive(&arr, &mut rng, &LinearRenderer, None).unwrap();
        let shape = Shape::of(&out);

        assert!(shape.w <= 200 && shape.h <= 160);
        // At most five iterations of sub-10% jitter: never below 0.9^5
        assert!(shape.w >= 118, "width collapsed to {} at seed {seed}", shape.w);
        assert!(shape.h >= 94, "height collapsed to {} at seed {seed}", shape.h);
    }
}

#[test]
fn same_seed_same_collage() {
    let arr = gradient(150, 150);
    let mut rng_a = StdRng::seed_from_u64(31);
    let mut rng_b = StdRng::seed_from_u64(31);

    let a = offcrop_recursive(&arr, &mut rng_a, &LinearRenderer, None).unwrap();
    let b = offcrop_recursive(&arr, &mut rng_b, &LinearRenderer, None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn fixed_mask_text_is_honored() {
    let arr = gradient(150, 150);
    let mut rng = StdRng::seed_from_u64(8);
    let out = offcrop_recursive(&arr, &mut rng, &LinearRenderer, Some("X")).unwrap();
    assert!(!out.is_empty());
}

#[test]
fn output_content_differs_from_a_plain_crop() {
    // The swap must actually mix pixels: the result cannot equal the
    // top-left window of the source for every seed
    let arr = gradient(200, 200);
    let mut changed = false;

    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = offcrop_recursive(&arr, &mut rng, &LinearRenderer, None).unwrap();
        let (h, w, _) = out.dim();
        let window = arr.slice(ndarray::s![0..h, 0..w, ..]).to_owned();
        if out != window {
            changed = true;
        }
    }
    assert!(changed);
}
