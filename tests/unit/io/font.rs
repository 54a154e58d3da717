//! Tests for font loading failure paths
//!
//! Successful rasterization depends on a real font file, which the test
//! suite does not ship; the rendering contract is covered through the
//! deterministic mock renderers instead.

use chaoscollage::CollageError;
use chaoscollage::io::font::FontRenderer;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn missing_font_file_is_a_filesystem_error() {
    let err = FontRenderer::from_file(Path::new("/nonexistent/font.ttf")).unwrap_err();
    match err {
        CollageError::FileSystem { operation, .. } => assert_eq!(operation, "read font"),
        other => panic!("expected FileSystem, got {other:?}"),
    }
}

#[test]
fn unparseable_font_data_is_a_font_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.ttf");
    std::fs::write(&path, b"this is not a font table").unwrap();

    match FontRenderer::from_file(&path) {
        Err(CollageError::FontLoad { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected FontLoad, got {other:?}"),
    }
}
