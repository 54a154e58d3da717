//! Image decode/encode between files and (row, column, channel) arrays

use crate::io::error::{CollageError, Result, computation_error};
use crate::spatial::ImageArray;
use image::RgbImage;
use ndarray::Array3;
use std::path::Path;

/// Load an image file as an RGB u8 array
///
/// Any format the `image` crate can decode is accepted; alpha channels are
/// dropped during RGB conversion.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_image(path: &Path) -> Result<ImageArray> {
    let decoded = image::open(path).map_err(|e| CollageError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rgb = decoded.to_rgb8();
    let (w, h) = rgb.dimensions();
    let arr = Array3::from_shape_vec((h as usize, w as usize, 3), rgb.into_raw())?;
    Ok(arr)
}

/// Save an RGB u8 array to an image file
///
/// The parent directory is created if missing; the format follows the path
/// extension.
///
/// # Errors
///
/// Returns an error if the array is not 3-channel, the directory cannot be
/// created, or encoding fails.
pub fn save_image(arr: &ImageArray, path: &Path) -> Result<()> {
    let (h, w, channels) = arr.dim();
    if channels != 3 {
        return Err(computation_error(
            "image export",
            &format!("expected 3 channels, got {channels}"),
        ));
    }

    let data: Vec<u8> = arr.as_standard_layout().iter().copied().collect();
    let buffer: RgbImage = RgbImage::from_vec(w as u32, h as u32, data).ok_or_else(|| {
        computation_error("image export", &"pixel buffer does not match dimensions")
    })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| CollageError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer.save(path).map_err(|e| CollageError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
