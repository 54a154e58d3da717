//! CLI entry point for the text-stencil collage generator

use chaoscollage::io::cli::{Cli, CollageProcessor};
use clap::Parser;

fn main() -> chaoscollage::Result<()> {
    let cli = Cli::parse();
    let mut processor = CollageProcessor::new(cli);
    processor.process()
}
