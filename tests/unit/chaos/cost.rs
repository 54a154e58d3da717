//! Tests for the geometric cost scale

use chaoscollage::chaos::CostTier;
use chaoscollage::chaos::cost::{cost_base, default_cost, tier_cost};

#[test]
fn base_solves_the_budget_polynomial() {
    let c = cost_base();
    assert!((c + c.powi(5) - 100.0).abs() < 1e-9);
    assert!((c - 2.499).abs() < 0.01);
}

#[test]
fn tiers_are_strictly_increasing() {
    let tiers = [
        CostTier::Trivial,
        CostTier::Low,
        CostTier::Medium,
        CostTier::High,
        CostTier::Extreme,
    ];
    for pair in tiers.windows(2) {
        assert!(tier_cost(pair[0]) < tier_cost(pair[1]));
    }
}

#[test]
fn cheapest_and_dearest_tiers_exhaust_one_budget() {
    let total = tier_cost(CostTier::Trivial) + tier_cost(CostTier::Extreme);
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn each_tier_is_one_multiplicative_step() {
    let c = cost_base();
    assert!((tier_cost(CostTier::Medium) / tier_cost(CostTier::Low) - c).abs() < 1e-9);
    assert!((tier_cost(CostTier::Extreme) / tier_cost(CostTier::High) - c).abs() < 1e-9);
}

#[test]
fn fallback_cost_is_mid_tier() {
    assert!((default_cost() - tier_cost(CostTier::Medium)).abs() < f64::EPSILON);
}
