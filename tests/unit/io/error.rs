//! Tests for error construction and display

use chaoscollage::CollageError;
use chaoscollage::io::error::{computation_error, invalid_parameter};
use std::error::Error;
use std::path::PathBuf;

#[test]
fn display_messages_carry_context() {
    let err = CollageError::ShapeMismatch {
        expected: (100, 200),
        actual: (90, 200),
        operation: "bitmask swap",
    };
    let message = err.to_string();
    assert!(message.contains("bitmask swap"));
    assert!(message.contains("100x200"));
    assert!(message.contains("90x200"));

    let err = CollageError::CropOutOfBounds {
        cropbox: (-1, 0, 7, 6),
        bounds: (8, 6),
    };
    let message = err.to_string();
    assert!(message.contains("(-1, 0, 7, 6)"));
    assert!(message.contains("8x6"));
}

#[test]
fn helper_constructors_fill_every_field() {
    let err = invalid_parameter("max_chars", &0, &"need at least one character");
    match err {
        CollageError::InvalidParameter {
            parameter,
            value,
            reason,
        } => {
            assert_eq!(parameter, "max_chars");
            assert_eq!(value, "0");
            assert!(reason.contains("at least one"));
        }
        other => panic!("unexpected variant: {other:?}"),
    }

    let err = computation_error("fit_text_to_shape", &"no convergence");
    assert!(err.to_string().contains("fit_text_to_shape"));
}

#[test]
fn io_errors_convert_and_chain() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: CollageError = io_err.into();
    assert!(matches!(err, CollageError::FileSystem { .. }));
    assert!(err.source().is_some());
}

#[test]
fn variants_without_a_cause_have_no_source() {
    let err = CollageError::FontLoad {
        path: PathBuf::from("missing.ttf"),
        reason: "not a font".to_string(),
    };
    assert!(err.source().is_none());
    assert!(err.to_string().contains("missing.ttf"));
}
