//! Shape arithmetic and cropbox strategies shared by the transform chain
//! and bitmask synthesis

pub mod cropbox;
pub mod shape;

/// Universal image currency: a (row, column, channel) array of u8 samples
pub type ImageArray = ndarray::Array3<u8>;

pub use cropbox::CropBox;
pub use shape::{Shape, common_crop_shape};
