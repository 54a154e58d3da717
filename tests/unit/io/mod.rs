mod configuration;
mod error;
mod font;
mod image;
mod progress;
