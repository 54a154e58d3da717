//! TrueType-backed implementation of the text rendering seam
//!
//! Renders black text on a white canvas one character at a time so the
//! kerning rate can stretch or squeeze the natural advances, matching the
//! measurement convention the fitting loop expects.

use crate::io::configuration::CANVAS_PADDING;
use crate::io::error::{CollageError, Result, invalid_parameter};
use crate::mask::render::{RenderedText, TextRenderer};
use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use ndarray::Array3;
use std::fmt;
use std::path::Path;

/// Glyph rasterizer backed by a TrueType/OpenType font file
pub struct FontRenderer {
    font: FontVec,
}

// FontVec has no Debug of its own, and dumping font tables would be useless
// anyway
impl fmt::Debug for FontRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRenderer").finish_non_exhaustive()
    }
}

impl FontRenderer {
    /// Load a font from a `.ttf`/`.otf` file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a parseable
    /// font.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| CollageError::FileSystem {
            path: path.to_path_buf(),
            operation: "read font",
            source: e,
        })?;

        let font = FontVec::try_from_vec(data).map_err(|e| CollageError::FontLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self { font })
    }
}

impl TextRenderer for FontRenderer {
    fn render(&self, text: &str, font_size: u32, kern_rate: f64) -> Result<RenderedText> {
        if text.is_empty() {
            return Err(invalid_parameter("text", &text, &"must be non-empty"));
        }
        if font_size == 0 {
            return Err(invalid_parameter(
                "font_size",
                &font_size,
                &"must be positive",
            ));
        }

        let scaled = self.font.as_scaled(PxScale::from(font_size as f32));

        let advances: Vec<f64> = text
            .chars()
            .map(|c| f64::from(scaled.h_advance(self.font.glyph_id(c))))
            .collect();

        // The kern rate stretches every advance except the final character's
        // trailing width, mirroring how the canvas width is measured
        let (last, rest) = match advances.split_last() {
            Some(parts) => parts,
            None => (&0.0, &[] as &[f64]),
        };
        let kerned_width = (kern_rate * rest.iter().sum::<f64>()) as usize + last.ceil() as usize;
        let text_height = (scaled.ascent() - scaled.descent()).ceil() as usize;

        let canvas_w = kerned_width + CANVAS_PADDING * 2;
        let canvas_h = text_height + CANVAS_PADDING * 2;
        let mut canvas = Array3::from_elem((canvas_h, canvas_w, 3), 255_u8);

        let baseline = CANVAS_PADDING as f32 + scaled.ascent();
        let mut xpos = CANVAS_PADDING as f64;

        for (c, advance) in text.chars().zip(advances.iter()) {
            let glyph = self
                .font
                .glyph_id(c)
                .with_scale_and_position(PxScale::from(font_size as f32), point(xpos as f32, baseline));

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    if coverage < 0.5 {
                        return;
                    }
                    let px = bounds.min.x as i64 + i64::from(gx);
                    let py = bounds.min.y as i64 + i64::from(gy);
                    if px < 0 || py < 0 {
                        return;
                    }
                    for channel in 0..3 {
                        if let Some(sample) = canvas.get_mut([py as usize, px as usize, channel]) {
                            *sample = 0;
                        }
                    }
                });
            }

            xpos += kern_rate * advance;
        }

        Ok(RenderedText { canvas })
    }
}
