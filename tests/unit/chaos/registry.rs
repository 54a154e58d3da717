//! Tests for the transform catalog

use crate::support::{LinearRenderer, gradient};
use chaoscollage::chaos::cost::{CostTier, default_cost, tier_cost};
use chaoscollage::chaos::{TransformKind, TransformRegistry};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

#[test]
fn standard_catalog_has_unique_names() {
    let registry = TransformRegistry::standard();
    assert!(!registry.is_empty());

    let names: HashSet<&str> = registry.transforms().iter().map(|t| t.name).collect();
    assert_eq!(names.len(), registry.len());
}

#[test]
fn every_entry_resolves_to_its_tier_cost() {
    let registry = TransformRegistry::standard();
    for transform in registry.transforms() {
        let expected = tier_cost(transform.tier);
        assert!((registry.cost_of(transform.name) - expected).abs() < f64::EPSILON);
    }
}

#[test]
fn unknown_names_get_the_mid_tier_fallback() {
    let registry = TransformRegistry::standard();
    assert!((registry.cost_of("no_such_transform") - default_cost()).abs() < f64::EPSILON);
}

#[test]
fn complex_group_holds_both_heavy_transforms() {
    let registry = TransformRegistry::standard();
    let complex = registry.group(TransformKind::Complex);
    let names: Vec<&str> = complex.iter().map(|t| t.name).collect();

    // The rare event draws from this group, so it must offer both the
    // self-collage and the random resample
    assert!(names.contains(&"offcrop_recursive"));
    assert!(names.contains(&"resample_random"));
    for transform in &complex {
        assert!(registry.cost_of(transform.name) >= tier_cost(CostTier::High));
    }
}

#[test]
fn phase_complete_permutes_pixels_cyclically() {
    let registry = TransformRegistry::standard();
    let transform = registry
        .transforms()
        .iter()
        .find(|t| t.name == "phase_complete")
        .unwrap();
    assert_eq!(transform.tier, CostTier::Trivial);

    let arr = gradient(24, 18);
    let mut moved = false;
    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = transform.apply(&arr, &mut rng, &LinearRenderer).unwrap();
        assert_eq!(out.dim(), arr.dim());

        // Rolling both axes relocates pixels without creating or losing any
        let mut before: Vec<u8> = arr.iter().copied().collect();
        let mut after: Vec<u8> = out.iter().copied().collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);

        if out != arr {
            moved = true;
        }
    }
    assert!(moved);
}

#[test]
fn resample_random_applies_one_strip_transform() {
    let registry = TransformRegistry::standard();
    let transform = registry
        .transforms()
        .iter()
        .find(|t| t.name == "resample_random")
        .unwrap();
    assert_eq!(transform.kind, TransformKind::Complex);

    let arr = gradient(300, 300);
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = transform.apply(&arr, &mut rng, &LinearRenderer).unwrap();
        assert!(!out.is_empty(), "empty output at seed {seed}");
        assert_eq!(out.dim().0, 300);
    }
}

#[test]
fn simple_entries_are_cheaper_than_resample_entries() {
    let registry = TransformRegistry::standard();
    let max_simple = registry
        .group(TransformKind::Simple)
        .iter()
        .map(|t| registry.cost_of(t.name))
        .fold(0.0_f64, f64::max);
    let min_resample = registry
        .group(TransformKind::Resample)
        .iter()
        .map(|t| registry.cost_of(t.name))
        .fold(f64::INFINITY, f64::min);
    assert!(max_simple <= min_resample);
}

#[test]
fn every_entry_applies_cleanly_to_a_large_image() {
    // Smoke-run the whole catalog; strip counts can reach 32 and dup counts
    // 7, so the image must comfortably out-span 32 * 7 columns
    let arr = gradient(300, 300);
    let registry = TransformRegistry::standard();
    let mut rng = StdRng::seed_from_u64(77);

    for transform in registry.transforms() {
        let out = transform
            .apply(&arr, &mut rng, &LinearRenderer)
            .unwrap_or_else(|e| panic!("{} failed: {e}", transform.name));
        assert!(!out.is_empty(), "{} produced an empty image", transform.name);
    }
}

#[test]
fn indexed_access_matches_catalog_order() {
    let registry = TransformRegistry::standard();
    let first = registry.get(0).map(|t| t.name);
    assert_eq!(first, registry.transforms().first().map(|t| t.name));
    assert!(registry.get(registry.len()).is_none());
}
