//! Command-line interface generating collage pairs from two source images

use crate::chaos::engine::ChaosEngine;
use crate::chaos::registry::TransformRegistry;
use crate::io::configuration::{DEFAULT_COUNT, DEFAULT_OUTPUT_DIR, DEFAULT_SEED};
use crate::io::error::Result;
use crate::io::font::FontRenderer;
use crate::io::image::{load_image, save_image};
use crate::io::progress::ProgressManager;
use crate::mask::bitmask::{Bitmask, build_random_text, build_to_size, swap};
use crate::spatial::{CropBox, ImageArray, Shape, common_crop_shape};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Command-line arguments for the collage generator
#[derive(Parser)]
#[command(name = "chaoscollage")]
#[command(
    author,
    version,
    about = "Generate randomized text-stencil collages from two source images"
)]
pub struct Cli {
    /// First source image
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Second source image
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,

    /// TrueType/OpenType font file for the text stencil
    #[arg(short, long)]
    pub font: PathBuf,

    /// Stencil text (random uppercase characters if omitted)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of collage pairs to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Output directory for generated collages
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out_dir: PathBuf,

    /// Swap the sources directly without chaos transforms
    #[arg(long)]
    pub no_chaos: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates collage generation with progress tracking
pub struct CollageProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl CollageProcessor {
    /// Create a new processor from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Generate the requested collage pairs
    ///
    /// Each pair is seeded independently from the base seed and its index,
    /// so re-running a single index reproduces that pair exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, transformation, masking, or export
    /// fails.
    pub fn process(&mut self) -> Result<()> {
        let registry = TransformRegistry::standard();
        let renderer = FontRenderer::from_file(&self.cli.font)?;

        let left = load_image(&self.cli.left)?;
        let right = load_image(&self.cli.right)?;

        if let Some(pm) = &mut self.progress {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            let applied = self.generate_pair(&registry, &renderer, &left, &right, index)?;
            if let Some(pm) = &self.progress {
                pm.advance(applied.join(" → "));
            }
        }

        if let Some(pm) = &mut self.progress {
            pm.finish();
        }

        Ok(())
    }

    fn generate_pair(
        &self,
        registry: &TransformRegistry,
        renderer: &FontRenderer,
        left: &ImageArray,
        right: &ImageArray,
        index: usize,
    ) -> Result<Vec<&'static str>> {
        // Three derived seeds per pair: one per chaos chain, one for the mask
        let pair_seed = self.cli.seed.wrapping_add(index as u64 * 3);

        let mut applied = Vec::new();
        let (source_a, source_b) = if self.cli.no_chaos {
            (left.clone(), right.clone())
        } else {
            let mut engine_a = ChaosEngine::new(registry, renderer, pair_seed);
            let mut engine_b = ChaosEngine::new(registry, renderer, pair_seed.wrapping_add(1));
            let result_a = engine_a.transform(left)?;
            let result_b = engine_b.transform(right)?;
            applied.extend(result_a.applied);
            applied.extend(result_b.applied);
            (result_a.image, result_b.image)
        };

        // Reconcile to a mutual shape before masking
        let crop_shape = common_crop_shape(&[Shape::of(&source_a), Shape::of(&source_b)], false);
        let source_a = CropBox::central(Shape::of(&source_a), crop_shape).apply(&source_a)?;
        let source_b = CropBox::central(Shape::of(&source_b), crop_shape).apply(&source_b)?;

        let bitmask = self.build_mask(renderer, crop_shape, pair_seed)?;
        let (collage_a, collage_b) = swap(&source_a, &source_b, &bitmask)?;

        let path_a = self.cli.out_dir.join(format!("collage_{index:03}_a.png"));
        let path_b = self.cli.out_dir.join(format!("collage_{index:03}_b.png"));
        save_image(&collage_a, &path_a)?;
        save_image(&collage_b, &path_b)?;

        Ok(applied)
    }

    fn build_mask(
        &self,
        renderer: &FontRenderer,
        crop_shape: Shape,
        pair_seed: u64,
    ) -> Result<Bitmask> {
        match &self.cli.text {
            Some(text) => build_to_size(renderer, text, crop_shape, 1.0),
            None => {
                let mut rng = StdRng::seed_from_u64(pair_seed.wrapping_add(2));
                build_random_text(renderer, crop_shape, 4, &mut rng)
            }
        }
    }
}
