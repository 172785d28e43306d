//! # detviz
//!
//! A Rust library that renders object-detection results onto images.
//! Each detection (class id, bounding box, confidence score) is drawn as a
//! rectangle outline in a per-class color from a fixed palette, with a
//! filled label tag showing the class name and confidence percentage.
//!
//! ## Features
//!
//! - Stable per-class colors from a fixed 126-entry palette
//! - Label tags with class names or a generic `Class N` fallback
//! - Confidence rendered as a percentage, omitted for negative scores
//! - Optional TrueType fonts via `ab_glyph` (system font probing included)
//! - JSON detection files and plain-text label files
//!
//! ## Modules
//!
//! * [`detection`] - Detection records and file loaders
//! * [`error`] - Error handling
//! * [`palette`] - The fixed class-color palette
//! * [`utils`] - Image loading and logging setup
//! * [`visualization`] - The overlay renderer
//!
//! ## Quick Start
//!
//! ```rust
//! use detviz::prelude::*;
//!
//! let mut img = image::RgbImage::new(320, 240);
//! let detections = vec![Detection::new(0, 16.0, 24.0, 128.0, 160.0, 0.9)];
//! let labels = vec!["person".to_string()];
//!
//! let config = VisualizationConfig::default();
//! draw_detections(&mut img, &detections, &labels, &config);
//! ```
//!
//! To render straight from an image file and write the result back out:
//!
//! ```rust,no_run
//! use detviz::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let detections = load_detections(Path::new("detections.json"))?;
//! let labels = load_labels(Path::new("labels.txt"))?;
//! let config = VisualizationConfig::with_system_font();
//!
//! visualize_detections(
//!     Path::new("input.jpg"),
//!     Some(Path::new("annotated.jpg")),
//!     &detections,
//!     &labels,
//!     &config,
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod detection;
pub mod error;
pub mod palette;
pub mod utils;
pub mod visualization;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use detviz::prelude::*;
/// ```
pub mod prelude {
    // Detection records and loaders (essential)
    pub use crate::detection::{Detection, load_detections, load_labels};

    // Error handling (essential)
    pub use crate::error::{VizError, VizResult};

    // Rendering (essential)
    pub use crate::visualization::{
        VisualizationConfig, draw_detections, label_text, visualize_detections,
    };

    // Palette lookup (minimal)
    pub use crate::palette::color_for_class;

    // Image utility (minimal)
    pub use crate::utils::load_image;
}
