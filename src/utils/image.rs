//! Utility functions for image loading and conversion.
//!
//! This module provides functions for loading images from files and
//! converting between image representations used by the renderer.

use crate::error::VizError;
use image::{DynamicImage, ImageBuffer, RgbImage};

/// Converts a DynamicImage to an RgbImage.
///
/// This function takes a DynamicImage (which can be in any format) and
/// converts it to an RgbImage (8-bit RGB format).
///
/// # Arguments
///
/// * `img` - The DynamicImage to convert
///
/// # Returns
///
/// * `RgbImage` - The converted RGB image
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Loads an image from a file path and converts it to RgbImage.
///
/// This function opens an image from the specified file path and converts it
/// to an RgbImage. It handles any image format supported by the image crate.
///
/// # Arguments
///
/// * `path` - A reference to the path of the image file to load
///
/// # Errors
///
/// This function will return a `VizError::ImageLoad` error if the image
/// cannot be loaded from the specified path, or if there is an error during
/// conversion.
pub fn load_image(path: &std::path::Path) -> Result<RgbImage, VizError> {
    let img = image::open(path).map_err(VizError::ImageLoad)?;
    Ok(dynamic_to_rgb(img))
}

/// Creates an RgbImage from raw pixel data.
///
/// The data must be in RGB format (3 bytes per pixel) and the length must
/// match the specified width and height.
///
/// # Arguments
///
/// * `width` - The width of the image in pixels
/// * `height` - The height of the image in pixels
/// * `data` - A vector containing the raw pixel data (RGB format)
///
/// # Errors
///
/// This function will return a `VizError::InvalidInput` error if the data
/// length doesn't match the specified dimensions.
pub fn create_rgb_image(width: u32, height: u32, data: Vec<u8>) -> Result<RgbImage, VizError> {
    let expected = (width * height * 3) as usize;
    if data.len() != expected {
        return Err(VizError::invalid_input(format!(
            "raw pixel buffer of {} bytes does not match a {}x{} RGB image (expected {} bytes)",
            data.len(),
            width,
            height,
            expected
        )));
    }

    ImageBuffer::from_raw(width, height, data)
        .ok_or_else(|| VizError::invalid_input("raw pixel buffer rejected"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_create_rgb_image_checks_length() {
        assert!(create_rgb_image(2, 2, vec![0u8; 12]).is_ok());

        let short = create_rgb_image(2, 2, vec![0u8; 11]);
        assert!(matches!(short, Err(VizError::InvalidInput { .. })));

        let long = create_rgb_image(2, 2, vec![0u8; 13]);
        assert!(matches!(long, Err(VizError::InvalidInput { .. })));
    }

    #[test]
    fn test_load_image_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        RgbImage::from_pixel(8, 6, Rgb([10, 20, 30])).save(&path).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!(img.dimensions(), (8, 6));
        assert_eq!(*img.get_pixel(3, 3), Rgb([10, 20, 30]));
    }

    #[test]
    fn test_load_image_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_image(&dir.path().join("missing.png")).is_err());
    }
}
