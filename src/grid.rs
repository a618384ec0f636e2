//! Pixel source: a width × height grid of 8-bit RGB triples.
//!
//! Decoding is delegated to the `image` crate; everything downstream of
//! this module only ever sees a [`PixelGrid`]. Path validation happens
//! here, before any conversion work starts, so a missing file or an
//! unsupported extension surfaces as a distinct error up front.

use ndarray::Array2;
use std::path::Path;

use crate::error::{Error, Result};

/// Input file extensions accepted by [`PixelGrid::load`].
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// An immutable grid of RGB pixels, indexed by `(x, y)` with the origin
/// at the top-left corner.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    // Row-major: shape (height, width), indexed (y, x).
    data: Array2<[u8; 3]>,
}

impl PixelGrid {
    /// Build a grid from row-major pixel data.
    ///
    /// # Arguments
    /// * `width` - Grid width in pixels
    /// * `height` - Grid height in pixels
    /// * `pixels` - `width * height` RGB triples, row by row
    ///
    /// # Errors
    /// Returns [`Error::MalformedImage`] if the pixel count does not
    /// match the dimensions.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<[u8; 3]>) -> Result<Self> {
        let data = Array2::from_shape_vec((height, width), pixels)
            .map_err(|e| Error::MalformedImage(e.to_string()))?;
        Ok(Self { data })
    }

    /// Build a grid from a decoded image, converting to RGB8.
    ///
    /// # Errors
    /// Returns [`Error::MalformedImage`] for zero-dimension images.
    pub fn from_image(image: &image::DynamicImage) -> Result<Self> {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::MalformedImage(format!(
                "zero-dimension image ({width}x{height})"
            )));
        }

        let pixels: Vec<[u8; 3]> = rgb.pixels().map(|p| p.0).collect();
        Self::from_pixels(width as usize, height as usize, pixels)
    }

    /// Load and decode an image file.
    ///
    /// Validates existence and extension before touching the decoder,
    /// per the error contract in [`crate::error`].
    ///
    /// # Errors
    /// * [`Error::InputNotFound`] - file does not exist
    /// * [`Error::InvalidInputExtension`] - extension not in [`IMAGE_EXTENSIONS`]
    /// * [`Error::Image`] - decoder failure
    /// * [`Error::MalformedImage`] - zero-dimension image
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        check_input_path(path)?;
        let image = image::open(path)?;
        Self::from_image(&image)
    }

    /// Grid width in pixels.
    pub fn width(&self) -> usize {
        self.data.shape()[1]
    }

    /// Grid height in pixels.
    pub fn height(&self) -> usize {
        self.data.shape()[0]
    }

    /// The RGB triple at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x >= width` or `y >= height`.
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[(y, x)]
    }
}

/// Validate an input image path: it must exist and carry a supported
/// extension (case-insensitive).
pub fn check_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    if !has_extension(path, IMAGE_EXTENSIONS) {
        return Err(Error::InvalidInputExtension(path.to_path_buf()));
    }
    Ok(())
}

/// Validate that an output path carries the extension the chosen
/// encoder produces (`"mid"` or `"wav"`).
pub fn check_output_extension(path: &Path, expected: &'static str) -> Result<()> {
    if !has_extension(path, &[expected]) {
        return Err(Error::InvalidOutputExtension {
            path: path.to_path_buf(),
            expected,
        });
    }
    Ok(())
}

fn has_extension(path: &Path, accepted: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_ascii_lowercase();
            accepted.iter().any(|a| *a == lower)
        })
        .unwrap_or(false)
}
