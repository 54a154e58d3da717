//! Tests for image decode/encode

use crate::support::gradient;
use chaoscollage::CollageError;
use chaoscollage::io::image::{load_image, save_image};
use tempfile::tempdir;

#[test]
fn saved_images_load_back_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roundtrip.png");
    let arr = gradient(20, 14);

    save_image(&arr, &path).unwrap();
    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded, arr);
}

#[test]
fn missing_parent_directories_are_created() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/deeper/out.png");
    save_image(&gradient(8, 8), &path).unwrap();
    assert!(path.exists());
}

#[test]
fn loading_a_missing_file_reports_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.png");
    match load_image(&path) {
        Err(CollageError::ImageLoad { path: reported, .. }) => {
            assert_eq!(reported, path);
        }
        other => panic!("expected ImageLoad, got {other:?}"),
    }
}

#[test]
fn loading_a_non_image_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    assert!(load_image(&path).is_err());
}
