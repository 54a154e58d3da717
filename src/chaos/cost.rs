//! Geometric transform cost scale
//!
//! Costs are powers of a base `c` chosen so that `c + c^5 = 100`: the
//! cheapest and most expensive tiers together exactly exhaust one default
//! budget, and each tier is one multiplicative step apart.

/// Visual-complexity tier determining a transform's cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostTier {
    /// Whole-image flips, rotation, and phase rolls
    Trivial,
    /// Cropping and order-only strip permutations
    Low,
    /// Duplicate stacks and alternating strip flips
    Medium,
    /// Grid resampling and per-strip phase rolls
    High,
    /// The recursive self-collage
    Extreme,
}

impl CostTier {
    /// Exponent applied to the cost base for this tier
    pub const fn exponent(self) -> i32 {
        match self {
            Self::Trivial => 1,
            Self::Low => 2,
            Self::Medium => 3,
            Self::High => 4,
            Self::Extreme => 5,
        }
    }
}

/// Solve `c + c^5 = 100` for the cost base by Newton iteration
///
/// The polynomial is strictly increasing for positive `c`, so the iteration
/// from 2.5 converges in a handful of steps (the root is near 2.4991).
pub fn cost_base() -> f64 {
    let mut c = 2.5_f64;
    for _ in 0..32 {
        let f = c + c.powi(5) - 100.0;
        let df = 5.0_f64.mul_add(c.powi(4), 1.0);
        let next = c - f / df;
        if (next - c).abs() < 1e-12 {
            return next;
        }
        c = next;
    }
    c
}

/// Cost of one application at the given tier
pub fn tier_cost(tier: CostTier) -> f64 {
    cost_base().powi(tier.exponent())
}

/// Safe fallback cost for a transform missing from the cost table
///
/// Mid-tier by design: never free, never budget-exhausting.
pub fn default_cost() -> f64 {
    tier_cost(CostTier::Medium)
}
