//! Error types for collage generation operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all collage operations
#[derive(Debug)]
pub enum CollageError {
    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save a generated collage to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Font file could not be loaded or parsed
    FontLoad {
        /// Path to the font file
        path: PathBuf,
        /// Description of the parse failure
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Two arrays expected to be congruent differ in (height, width)
    ///
    /// Raised at swap time; the mask expansion step is responsible for
    /// preventing this upstream.
    ShapeMismatch {
        /// Shape required by the operation (height, width)
        expected: (usize, usize),
        /// Shape actually supplied (height, width)
        actual: (usize, usize),
        /// Operation that detected the mismatch
        operation: &'static str,
    },

    /// A cropbox does not fit within the source array bounds
    ///
    /// Boxes are never clamped implicitly; callers pre-negotiate shapes
    /// via `spatial::common_crop_shape`.
    CropOutOfBounds {
        /// The offending box as (left, top, right, bottom)
        cropbox: (i64, i64, i64, i64),
        /// Source array shape as (width, height)
        bounds: (usize, usize),
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::FontLoad { path, reason } => {
                write!(f, "Failed to load font '{}': {reason}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ShapeMismatch {
                expected,
                actual,
                operation,
            } => {
                write!(
                    f,
                    "Shape mismatch in {operation}: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::CropOutOfBounds { cropbox, bounds } => {
                write!(
                    f,
                    "Cropbox ({}, {}, {}, {}) exceeds source bounds {}x{}",
                    cropbox.0, cropbox.1, cropbox.2, cropbox.3, bounds.0, bounds.1
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

impl From<image::ImageError> for CollageError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for CollageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<ndarray::ShapeError> for CollageError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::Computation {
            operation: "array reshape",
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollageError {
    CollageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> CollageError {
    CollageError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
