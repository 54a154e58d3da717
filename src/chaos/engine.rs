//! Budget-bounded random transform chain
//!
//! The engine repeatedly draws transforms from the registry and applies
//! them to a running image until the budget, the chain-length cap, or a
//! continuation coin-flip stops it. Over-budget draws are skipped without
//! consuming a turn, so a separate cap on total draws guarantees
//! termination even on unlucky streaks.

use crate::chaos::registry::{TransformKind, TransformRegistry};
use crate::io::configuration::{
    CONTINUE_PROBABILITY, MAX_CHAIN_LENGTH, MAX_DRAW_ATTEMPTS, RARE_COMPLEX_PROBABILITY,
    TOTAL_BUDGET,
};
use crate::io::error::Result;
use crate::mask::render::TextRenderer;
use crate::spatial::ImageArray;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chain engine tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct ChainConfig {
    /// Cost budget available to one chain
    pub total_budget: f64,
    /// Probability of continuing after each loop iteration
    pub continue_probability: f64,
    /// Maximum successful applications per chain
    pub max_chain_length: usize,
    /// Maximum registry draws per chain, affordable or not
    pub max_draw_attempts: usize,
    /// Probability of the budget-exempt complex event
    pub rare_complex_probability: f64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            total_budget: TOTAL_BUDGET,
            continue_probability: CONTINUE_PROBABILITY,
            max_chain_length: MAX_CHAIN_LENGTH,
            max_draw_attempts: MAX_DRAW_ATTEMPTS,
            rare_complex_probability: RARE_COMPLEX_PROBABILITY,
        }
    }
}

/// Output of one engine invocation
#[derive(Debug, Clone)]
pub struct ChainResult {
    /// The transformed image
    pub image: ImageArray,
    /// Names of applied transforms, in application order
    pub applied: Vec<&'static str>,
    /// Budget actually consumed by the main loop
    pub spent: f64,
}

/// Stateful transform chain runner
///
/// Owns a seeded generator, so two engines constructed with the same seed,
/// registry, and input produce identical results. The registry is borrowed
/// immutably and may back any number of engines concurrently.
pub struct ChaosEngine<'a> {
    registry: &'a TransformRegistry,
    renderer: &'a dyn TextRenderer,
    config: ChainConfig,
    rng: StdRng,
}

impl<'a> ChaosEngine<'a> {
    /// Create an engine with default configuration and a fixed seed
    pub fn new(
        registry: &'a TransformRegistry,
        renderer: &'a dyn TextRenderer,
        seed: u64,
    ) -> Self {
        Self::with_config(registry, renderer, seed, ChainConfig::default())
    }

    /// Create an engine with explicit configuration
    pub fn with_config(
        registry: &'a TransformRegistry,
        renderer: &'a dyn TextRenderer,
        seed: u64,
        config: ChainConfig,
    ) -> Self {
        Self {
            registry,
            renderer,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Run the full chain: the budgeted loop plus the rare complex event
    ///
    /// # Errors
    ///
    /// Propagates any transform failure; an empty chain is a normal
    /// outcome, not an error.
    pub fn transform(&mut self, image: &ImageArray) -> Result<ChainResult> {
        let mut result = self.run_chain(image)?;
        self.maybe_rare_event(&mut result)?;
        Ok(result)
    }

    /// Run only the budgeted selection loop
    ///
    /// # Errors
    ///
    /// Propagates any transform failure.
    pub fn run_chain(&mut self, image: &ImageArray) -> Result<ChainResult> {
        let registry = self.registry;
        let renderer = self.renderer;

        let mut budget = self.config.total_budget;
        let mut current = image.clone();
        let mut applied = Vec::new();
        let mut draws = 0;

        while applied.len() < self.config.max_chain_length
            && budget >= 1.0
            && draws < self.config.max_draw_attempts
            && !registry.is_empty()
        {
            if !self.rng.random_bool(self.config.continue_probability) {
                break;
            }

            draws += 1;
            let index = self.rng.random_range(0..registry.len());
            let Some(transform) = registry.get(index) else {
                break;
            };

            let cost = registry.cost_of(transform.name);
            if cost > budget {
                // Skipped draws do not consume a turn; the draw cap above
                // bounds the retry loop instead
                continue;
            }

            current = transform.apply(&current, &mut self.rng, renderer)?;
            applied.push(transform.name);
            budget -= cost;
        }

        Ok(ChainResult {
            image: current,
            applied,
            spent: self.config.total_budget - budget,
        })
    }

    // Rare, heavily distorting effects fire occasionally but stay decoupled
    // from the cost accounting of the common case
    fn maybe_rare_event(&mut self, result: &mut ChainResult) -> Result<()> {
        if self.config.rare_complex_probability <= 0.0
            || !self.rng.random_bool(self.config.rare_complex_probability)
        {
            return Ok(());
        }

        let complex = self.registry.group(TransformKind::Complex);
        let Some(transform) = complex
            .get(self.rng.random_range(0..complex.len().max(1)))
            .copied()
        else {
            return Ok(());
        };

        result.image = transform.apply(&result.image, &mut self.rng, self.renderer)?;
        result.applied.push(transform.name);
        Ok(())
    }
}
