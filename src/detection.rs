//! Detection records consumed by the overlay renderer.
//!
//! This module defines the [`Detection`] record and loaders for the two
//! file formats the inference drivers produce: a JSON array of detection
//! records and a plain-text label file with one class name per line.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VizResult;

/// A single predicted object instance.
///
/// Field names match the JSON shape produced by the inference drivers:
///
/// ```json
/// {"class": 1, "xmin": 10.0, "ymin": 20.0, "xmax": 110.0, "ymax": 220.0, "score": 0.9}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Class id, used to pick the box color and the fallback label.
    pub class: usize,
    /// Left edge of the bounding box in pixels.
    pub xmin: f32,
    /// Top edge of the bounding box in pixels.
    pub ymin: f32,
    /// Right edge of the bounding box in pixels.
    pub xmax: f32,
    /// Bottom edge of the bounding box in pixels.
    pub ymax: f32,
    /// Confidence score, normally in `[0, 1]`. A negative score means no
    /// score is available and the label tag omits the percentage.
    pub score: f32,
}

impl Detection {
    /// Creates a new Detection.
    ///
    /// # Arguments
    ///
    /// * `class` - The class id
    /// * `xmin`, `ymin`, `xmax`, `ymax` - The bounding box corners in pixels
    /// * `score` - The confidence score (negative for "no score")
    pub fn new(class: usize, xmin: f32, ymin: f32, xmax: f32, ymax: f32, score: f32) -> Self {
        Self {
            class,
            xmin,
            ymin,
            xmax,
            ymax,
            score,
        }
    }

    /// Returns the width of the bounding box, clamped to zero for
    /// inverted boxes.
    pub fn width(&self) -> f32 {
        (self.xmax - self.xmin).max(0.0)
    }

    /// Returns the height of the bounding box, clamped to zero for
    /// inverted boxes.
    pub fn height(&self) -> f32 {
        (self.ymax - self.ymin).max(0.0)
    }
}

/// Loads a JSON array of detection records from a file.
///
/// # Arguments
///
/// * `path` - Path to the JSON file
///
/// # Errors
///
/// Returns a `VizError::Io` if the file cannot be read, or a
/// `VizError::DetectionParse` if its contents are not a valid detection
/// array.
pub fn load_detections(path: &Path) -> VizResult<Vec<Detection>> {
    let data = std::fs::read_to_string(path)?;
    let detections = serde_json::from_str(&data)?;
    Ok(detections)
}

/// Loads class names from a label file, one name per line.
///
/// Line order defines the class ids: the name on line `N` labels class `N`.
/// Surrounding whitespace is trimmed; empty lines are kept so that the
/// indices stay aligned with the model's class ids.
///
/// # Arguments
///
/// * `path` - Path to the label file
///
/// # Errors
///
/// Returns a `VizError::Io` if the file cannot be read.
pub fn load_labels(path: &Path) -> VizResult<Vec<String>> {
    let data = std::fs::read_to_string(path)?;
    Ok(data.lines().map(|line| line.trim().to_string()).collect())
}
