//! Error types for overlay rendering.
//!
//! This module defines the errors that can occur while loading images,
//! fonts, and detection files, and while writing rendered output. The
//! renderer performs no recovery or retries of its own; errors from the
//! underlying image and serialization libraries are wrapped and propagated
//! unchanged.

use std::path::Path;

use thiserror::Error;

/// Enum representing the errors that can occur during overlay rendering.
#[derive(Error, Debug)]
pub enum VizError {
    /// Error occurred while loading an image.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// Error occurred while writing a rendered image.
    #[error("image save: {path}")]
    ImageSave {
        /// The output path that could not be written.
        path: String,
        /// The underlying error from the image encoder.
        #[source]
        source: image::ImageError,
    },

    /// Error occurred while parsing a font file.
    #[error("font load: {path}")]
    FontLoad {
        /// The font path that could not be parsed.
        path: String,
    },

    /// Error occurred while parsing a detection file.
    #[error("detection file parse")]
    DetectionParse(#[from] serde_json::Error),

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

/// Convenient result alias for rendering operations.
pub type VizResult<T> = Result<T, VizError>;

impl VizError {
    /// Creates a VizError for a rendered image that could not be written.
    ///
    /// # Arguments
    ///
    /// * `path` - The output path that could not be written.
    /// * `source` - The underlying error from the image encoder.
    pub fn image_save(path: &Path, source: image::ImageError) -> Self {
        Self::ImageSave {
            path: path.display().to_string(),
            source,
        }
    }

    /// Creates a VizError for a font file that could not be parsed.
    ///
    /// # Arguments
    ///
    /// * `path` - The font path that could not be parsed.
    pub fn font_load(path: &Path) -> Self {
        Self::FontLoad {
            path: path.display().to_string(),
        }
    }

    /// Creates a VizError for invalid input.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the invalid input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Implementation of From<image::ImageError> for VizError.
///
/// This allows image::ImageError to be automatically converted to VizError.
impl From<image::ImageError> for VizError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageLoad(error)
    }
}
