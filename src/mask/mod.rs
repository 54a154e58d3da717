//! Bitmask synthesis: rasterize text, fit it to a target rectangle, and
//! binarize it into a boolean stencil

pub mod bitmask;
pub mod fit;
pub mod render;

pub use bitmask::Bitmask;
pub use render::{RenderedText, TextRenderer};
