//! Algorithm constants and runtime configuration defaults

// Chain engine parameters
/// Total cost budget available to one transform chain
pub const TOTAL_BUDGET: f64 = 100.0;

/// Probability of continuing the chain after each successful application
pub const CONTINUE_PROBABILITY: f64 = 0.5;

/// Maximum number of transforms applied in one chain
pub const MAX_CHAIN_LENGTH: usize = 3;

// Over-budget draws are skipped without consuming a turn, so the total
// number of draws is capped separately to guarantee termination
/// Maximum registry draws (affordable or not) in one chain
pub const MAX_DRAW_ATTEMPTS: usize = 16;

/// Probability of the budget-exempt complex-group event firing once per chain
pub const RARE_COMPLEX_PROBABILITY: f64 = 0.125;

// Recursive self-collage parameters
/// Inclusive range of off-crop collage iterations
pub const OFFCROP_ITERATIONS: (usize, usize) = (1, 5);

// Cropbox jitter, as integer percent endpoints of the shorter source side
/// Minimum jitter percentage for off-center crops
pub const JITTER_PERCENT_MIN: u32 = 5;
/// Maximum jitter percentage for off-center crops (exclusive)
pub const JITTER_PERCENT_MAX: u32 = 10;

// Bitmask synthesis parameters
/// Channel threshold below which a rendered pixel counts as glyph foreground
pub const LUMINANCE_THRESHOLD: u8 = 128;

/// Starting font size for the fitting iteration
pub const FIT_START_SIZE: u32 = 50;

/// Upper bound on fitting iterations before the font metrics are considered degenerate
pub const FIT_MAX_STEPS: usize = 256;

/// Blank border around the rendered text canvas, in pixels
pub const CANVAS_PADDING: usize = 18;

/// Inclusive lower bound of the random kerning rate
pub const KERN_RATE_MIN: f64 = 0.75;
/// Exclusive upper bound of the random kerning rate
pub const KERN_RATE_MAX: f64 = 1.0;

// Output settings
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of collage pairs to generate
pub const DEFAULT_COUNT: usize = 1;

/// Default directory for exported collages
pub const DEFAULT_OUTPUT_DIR: &str = "collages";
