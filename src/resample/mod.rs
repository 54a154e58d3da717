//! Slice-resample algebra
//!
//! Pure functions that reinterpret an image as a sequence of uniform strips
//! and recombine them under different orderings. Everything here is built on
//! one primitive, [`slicing::slice_uniform`], plus axis rotation so vertical
//! operations serve both orientations.

pub mod ops;
pub mod slicing;
