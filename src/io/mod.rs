//! Input/output collaborators: image codecs, font rasterization, progress
//! display, error types, and the CLI driver

pub mod cli;
pub mod configuration;
pub mod error;
pub mod font;
pub mod image;
pub mod progress;
