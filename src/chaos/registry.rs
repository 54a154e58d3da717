//! Static transform catalog with cost and grouping metadata
//!
//! The registry is built once by [`TransformRegistry::standard`] and passed
//! by reference to the engine; nothing mutates it at runtime. Each entry
//! pairs a stable name with a cost tier, a visual-complexity group, and the
//! transform function itself. Randomized parameters (slice counts, shift
//! magnitudes) are drawn inside the transform from the explicitly threaded
//! generator.

use crate::chaos::cost::{CostTier, default_cost, tier_cost};
use crate::chaos::offcrop::offcrop_recursive;
use crate::io::error::Result;
use crate::mask::render::TextRenderer;
use crate::resample::ops;
use crate::resample::slicing::{flip_lr, flip_ud, roll, rot180};
use crate::spatial::{CropBox, ImageArray, Shape};
use ndarray::Axis;
use rand::Rng;
use rand::rngs::StdRng;
use std::collections::HashMap;

/// A unary image transform with its randomness threaded explicitly
pub type TransformFn = fn(&ImageArray, &mut StdRng, &dyn TextRenderer) -> Result<ImageArray>;

/// Visual-complexity group used for selection weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Cheap whole-image operations
    Simple,
    /// The slice/duplicate family
    Resample,
    /// Recursive and mask-consuming effects
    Complex,
}

/// One catalog entry: a named, cost-tagged transform
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    /// Stable identifier used for provenance and the cost table
    pub name: &'static str,
    /// Cost tier, resolved to a numeric cost through the registry table
    pub tier: CostTier,
    /// Selection group
    pub kind: TransformKind,
    apply: TransformFn,
}

impl Transform {
    /// Apply the transform to an image
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying operation.
    pub fn apply(
        &self,
        arr: &ImageArray,
        rng: &mut StdRng,
        renderer: &dyn TextRenderer,
    ) -> Result<ImageArray> {
        (self.apply)(arr, rng, renderer)
    }
}

/// The immutable transform catalog plus its name-to-cost table
#[derive(Debug, Clone)]
pub struct TransformRegistry {
    transforms: Vec<Transform>,
    costs: HashMap<&'static str, f64>,
}

impl TransformRegistry {
    /// Build the standard catalog
    pub fn standard() -> Self {
        let transforms = vec![
            entry("flip_lr", CostTier::Trivial, TransformKind::Simple, t_flip_lr),
            entry("flip_ud", CostTier::Trivial, TransformKind::Simple, t_flip_ud),
            entry(
                "rotate_180",
                CostTier::Trivial,
                TransformKind::Simple,
                t_rotate_180,
            ),
            entry(
                "phase_vertical",
                CostTier::Trivial,
                TransformKind::Simple,
                t_phase_vertical,
            ),
            entry(
                "phase_horizontal",
                CostTier::Trivial,
                TransformKind::Simple,
                t_phase_horizontal,
            ),
            entry(
                "phase_complete",
                CostTier::Trivial,
                TransformKind::Simple,
                t_phase_complete,
            ),
            entry(
                "crop_random",
                CostTier::Low,
                TransformKind::Simple,
                t_crop_random,
            ),
            entry(
                "resample_reverse",
                CostTier::Low,
                TransformKind::Resample,
                t_reverse,
            ),
            entry(
                "resample_shuffle",
                CostTier::Low,
                TransformKind::Resample,
                t_shuffle,
            ),
            entry(
                "stack_vertical",
                CostTier::Medium,
                TransformKind::Resample,
                t_stack_vertical,
            ),
            entry(
                "stack_horizontal",
                CostTier::Medium,
                TransformKind::Resample,
                t_stack_horizontal,
            ),
            entry(
                "flip_slices_vertical",
                CostTier::Medium,
                TransformKind::Resample,
                t_flip_slices_vertical,
            ),
            entry(
                "flip_slices_horizontal",
                CostTier::Medium,
                TransformKind::Resample,
                t_flip_slices_horizontal,
            ),
            entry("grid", CostTier::High, TransformKind::Resample, t_grid),
            entry(
                "phase_slices_vertical",
                CostTier::High,
                TransformKind::Resample,
                t_phase_slices_vertical,
            ),
            entry(
                "phase_slices_horizontal",
                CostTier::High,
                TransformKind::Resample,
                t_phase_slices_horizontal,
            ),
            entry(
                "resample_random",
                CostTier::High,
                TransformKind::Complex,
                t_resample_random,
            ),
            entry(
                "offcrop_recursive",
                CostTier::Extreme,
                TransformKind::Complex,
                t_offcrop_recursive,
            ),
        ];

        let costs = transforms
            .iter()
            .map(|t| (t.name, tier_cost(t.tier)))
            .collect();

        Self { transforms, costs }
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Entry at the given position
    pub fn get(&self, index: usize) -> Option<&Transform> {
        self.transforms.get(index)
    }

    /// All entries in catalog order
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// All entries belonging to one selection group
    pub fn group(&self, kind: TransformKind) -> Vec<&Transform> {
        self.transforms.iter().filter(|t| t.kind == kind).collect()
    }

    /// Numeric cost for a transform name
    ///
    /// Names missing from the table get a safe mid-tier default rather than
    /// failing the chain.
    pub fn cost_of(&self, name: &str) -> f64 {
        self.costs.get(name).copied().unwrap_or_else(default_cost)
    }
}

const fn entry(
    name: &'static str,
    tier: CostTier,
    kind: TransformKind,
    apply: TransformFn,
) -> Transform {
    Transform {
        name,
        tier,
        kind,
        apply,
    }
}

// Randomized parameter conventions below follow the catalog's historical
// envelope: strip counts are powers of two up to 32, dup counts run 2..8.

fn pow2_slices(rng: &mut StdRng) -> usize {
    1 << rng.random_range(1..6_u32)
}

fn t_flip_lr(arr: &ImageArray, _rng: &mut StdRng, _renderer: &dyn TextRenderer) -> Result<ImageArray> {
    Ok(flip_lr(arr))
}

fn t_flip_ud(arr: &ImageArray, _rng: &mut StdRng, _renderer: &dyn TextRenderer) -> Result<ImageArray> {
    Ok(flip_ud(arr))
}

fn t_rotate_180(
    arr: &ImageArray,
    _rng: &mut StdRng,
    _renderer: &dyn TextRenderer,
) -> Result<ImageArray> {
    Ok(rot180(arr))
}

fn t_phase_vertical(
    arr: &ImageArray,
    rng: &mut StdRng,
    _renderer: &dyn TextRenderer,
) -> Result<ImageArray> {
    let h = Shape::of(arr).h;
    let shift = (rng.random::<f64>() * h as f64).floor() as i64;
    roll(arr, Axis(0), shift)
}

fn t_phase_horizontal(
    arr: &ImageArray,
    rng: &mut StdRng,
    _renderer: &dyn TextRenderer,
) -> Result<ImageArray> {
    let w = Shape::of(arr).w;
    let shift = (rng.random::<f64>() * w as f64).floor() as i64;
    roll(arr, Axis(1), shift)
}

fn t_phase_complete(
    arr: &ImageArray,
    rng: &mut StdRng,
    _renderer: &dyn TextRenderer,
) -> Result<ImageArray> {
    let img = Shape::of(arr);
    let shift_v = (rng.random::<f64>() * img.h as f64).floor() as i64;
    let shift_h = (rng.random::<f64>() * img.w as f64).floor() as i64;
    let rolled = roll(arr, Axis(0), shift_v)?;
    roll(&rolled, Axis(1), shift_h)
}

fn t_crop_random(
    arr: &ImageArray,
    rng: &mut StdRng,
    _renderer: &dyn TextRenderer,
) -> Result<ImageArray> {
    let img = Shape::of(arr);
    let cropbox = if rng.random_bool(0.5) {
        CropBox::off_center_random(img, rng)
    } else {
        CropBox::central_square(img)
    };
    cropbox.apply(arr)
}

fn t_reverse(arr: &ImageArray, rng: &mut StdRng, _renderer: &dyn TextRenderer) -> Result<ImageArray> {
    ops::reverse(arr, pow2_slices(rng))
}

fn t_shuffle(arr: &ImageArray, rng: &mut StdRng, _renderer: &dyn TextRenderer) -> Result<ImageArray> {
    let k = pow2_slices(rng);
    ops::shuffle(arr, k, rng)
}

fn t_stack_vertical(
    arr: &ImageArray,
    rng: &mut StdRng,
    _renderer: &dyn TextRenderer,
) -> Result<ImageArray> {
    let num_dups = rng.random_range(2..8);
    let num_slices = num_dups * pow2_slices(rng);
    ops::stack_vertical(arr, num_dups, num_slices)
}

fn t_stack_horizontal(
    arr: &ImageArray,
    rng: &mut StdRng,
    _renderer: &dyn TextRenderer,
) -> Result<ImageArray> {
    let num_dups = rng.random_range(2..8);
    let num_slices = num_dups * pow2_slices(rng);
    ops::stack_horizontal(arr, num_dups, num_slices)
}

fn t_grid(arr: &ImageArray, rng: &mut StdRng, _renderer: &dyn TextRenderer) -> Result<ImageArray> {
    let num_dups_vert = rng.random_range(2..8);
    let num_dups_hor = rng.random_range(2..8);
    let num_slices_per_dup = pow2_slices(rng);
    ops::grid(arr, num_dups_vert, num_dups_hor, num_slices_per_dup)
}

fn t_phase_slices_vertical(
    arr: &ImageArray,
    rng: &mut StdRng,
    _renderer: &dyn TextRenderer,
) -> Result<ImageArray> {
    let k = rng.random_range(8..50);
    ops::phase_slices_vertical(arr, k, rng)
}

fn t_phase_slices_horizontal(
    arr: &ImageArray,
    rng: &mut StdRng,
    _renderer: &dyn TextRenderer,
) -> Result<ImageArray> {
    let k = rng.random_range(8..50);
    ops::phase_slices_horizontal(arr, k, rng)
}

fn t_flip_slices_vertical(
    arr: &ImageArray,
    rng: &mut StdRng,
    _renderer: &dyn TextRenderer,
) -> Result<ImageArray> {
    let k = rng.random_range(2..40);
    let axis = Axis(usize::from(rng.random_bool(0.5)));
    ops::flip_slices_vertical(arr, k, axis)
}

fn t_flip_slices_horizontal(
    arr: &ImageArray,
    rng: &mut StdRng,
    _renderer: &dyn TextRenderer,
) -> Result<ImageArray> {
    let k = rng.random_range(2..40);
    let axis = Axis(usize::from(rng.random_bool(0.5)));
    ops::flip_slices_horizontal(arr, k, axis)
}

// One uniformly drawn member of the strip-resample family, so the rare
// event can reach for texture distortion as well as the self-collage
fn t_resample_random(
    arr: &ImageArray,
    rng: &mut StdRng,
    renderer: &dyn TextRenderer,
) -> Result<ImageArray> {
    match rng.random_range(0..5_u32) {
        0 => t_reverse(arr, rng, renderer),
        1 => t_shuffle(arr, rng, renderer),
        2 => t_stack_vertical(arr, rng, renderer),
        3 => t_stack_horizontal(arr, rng, renderer),
        _ => t_grid(arr, rng, renderer),
    }
}

fn t_offcrop_recursive(
    arr: &ImageArray,
    rng: &mut StdRng,
    renderer: &dyn TextRenderer,
) -> Result<ImageArray> {
    offcrop_recursive(arr, rng, renderer, None)
}
