//! Randomized collage generation by recombining two source images through a
//! text-shaped boolean stencil
//!
//! Each source image is optionally run through a budget-bounded chain of
//! randomized array distortions, then the pair is swapped pixel-by-pixel
//! through a bitmask rasterized from text and fitted to their common shape.

#![deny(unsafe_code)]

/// Transform registry, cost model, and the budgeted chain engine
pub mod chaos;
/// Input/output operations, font rasterization, and error handling
pub mod io;
/// Text-to-bitmask synthesis: fitting, binarization, and expansion
pub mod mask;
/// Slice-resample algebra: pure array reindexing transforms
pub mod resample;
/// Shape arithmetic and cropbox strategies
pub mod spatial;

pub use io::error::{CollageError, Result};
