//! Sanity checks over the tuning constants

use chaoscollage::io::configuration::{
    CONTINUE_PROBABILITY, FIT_START_SIZE, JITTER_PERCENT_MAX, JITTER_PERCENT_MIN, KERN_RATE_MAX,
    KERN_RATE_MIN, MAX_CHAIN_LENGTH, MAX_DRAW_ATTEMPTS, OFFCROP_ITERATIONS,
    RARE_COMPLEX_PROBABILITY, TOTAL_BUDGET,
};

#[test]
fn probabilities_are_valid() {
    assert!((0.0..=1.0).contains(&CONTINUE_PROBABILITY));
    assert!((0.0..=1.0).contains(&RARE_COMPLEX_PROBABILITY));
}

#[test]
fn chain_bounds_are_consistent() {
    assert!(TOTAL_BUDGET > 0.0);
    assert!(MAX_CHAIN_LENGTH >= 1);
    // Skipped draws burn attempts without filling the chain, so the draw
    // cap must leave room for a full chain of successful applications
    assert!(MAX_DRAW_ATTEMPTS >= MAX_CHAIN_LENGTH);
}

#[test]
fn jitter_and_kerning_ranges_are_well_formed() {
    assert!(JITTER_PERCENT_MIN < JITTER_PERCENT_MAX);
    assert!(JITTER_PERCENT_MAX <= 100);
    assert!(KERN_RATE_MIN < KERN_RATE_MAX);
    assert!(KERN_RATE_MIN > 0.0);
}

#[test]
fn iteration_ranges_are_inclusive_and_ordered() {
    let (min_iters, max_iters) = OFFCROP_ITERATIONS;
    assert!(min_iters >= 1);
    assert!(min_iters <= max_iters);
    assert!(FIT_START_SIZE >= 1);
}
