//! Detection overlay rendering.
//!
//! This module draws bounding boxes and label tags for a list of
//! [`Detection`]s onto an image. Each class is drawn in a stable color from
//! the fixed palette, and the label tag shows the class name (or a generic
//! `Class N` fallback) followed by the confidence as a percentage.
//!
//! # Examples
//!
//! ```rust
//! use detviz::detection::Detection;
//! use detviz::visualization::{VisualizationConfig, draw_detections};
//!
//! let mut img = image::RgbImage::new(320, 240);
//! let detections = vec![Detection::new(2, 30.0, 40.0, 200.0, 180.0, 0.75)];
//! let labels = vec!["car".to_string(), "bus".to_string(), "truck".to_string()];
//!
//! let config = VisualizationConfig::default();
//! draw_detections(&mut img, &detections, &labels, &config);
//! ```

use std::path::Path;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use tracing::{debug, info};

use crate::detection::Detection;
use crate::error::{VizError, VizResult};
use crate::palette::color_for_class;
use crate::utils::image::load_image;

const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Configuration for overlay rendering.
///
/// This struct holds the settings that control how detections are drawn:
/// the font used for label tags, the font scale, and the thickness of the
/// box outlines.
pub struct VisualizationConfig {
    /// The font to use for label tags. If None, label text is skipped and
    /// only the boxes are drawn.
    pub font: Option<FontVec>,

    /// The scale factor for the font. Defaults to 16.0.
    pub font_scale: f32,

    /// The outline thickness of bounding boxes in pixels. Defaults to 2.
    pub box_thickness: u32,
}

impl Default for VisualizationConfig {
    /// Creates a default VisualizationConfig with no font, font scale of
    /// 16.0, and box thickness of 2.
    fn default() -> Self {
        Self {
            font: None,
            font_scale: 16.0,
            box_thickness: 2,
        }
    }
}

impl VisualizationConfig {
    /// Creates a VisualizationConfig with a font loaded from the specified path.
    ///
    /// # Arguments
    ///
    /// * `font_path` - Path to the font file to load
    ///
    /// # Errors
    ///
    /// Returns a `VizError::Io` if the file cannot be read, or a
    /// `VizError::FontLoad` if it is not a parseable font.
    pub fn with_font_path(font_path: &Path) -> VizResult<Self> {
        let font_data = std::fs::read(font_path)?;
        let font =
            FontVec::try_from_vec(font_data).map_err(|_| VizError::font_load(font_path))?;

        Ok(Self {
            font: Some(font),
            ..Self::default()
        })
    }

    /// Creates a VisualizationConfig with a system font.
    ///
    /// This function attempts to load a system font from common locations.
    /// If no system font is found, it falls back to the default
    /// configuration and label text is skipped.
    pub fn with_system_font() -> Self {
        let font_paths = [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/System/Library/Fonts/Arial.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];

        for path in &font_paths {
            if let Ok(font_data) = std::fs::read(path) {
                if let Ok(font) = FontVec::try_from_vec(font_data) {
                    info!("Loaded system font: {}", path);
                    return Self {
                        font: Some(font),
                        ..Self::default()
                    };
                }
            }
        }

        debug!("No system font found, label text will be skipped");
        Self::default()
    }
}

/// Returns the display name for a class id.
///
/// Uses the entry from `labels` when the class id is within range,
/// otherwise falls back to a generic `"Class N"` string.
pub fn class_label(class: usize, labels: &[String]) -> String {
    match labels.get(class) {
        Some(name) => name.clone(),
        None => format!("Class {}", class),
    }
}

/// Returns the full label tag text for a detection.
///
/// The confidence is appended as a truncated percentage, e.g. `"car: 87%"`.
/// A negative score means no score is available and the suffix is omitted.
pub fn label_text(detection: &Detection, labels: &[String]) -> String {
    let label = class_label(detection.class, labels);
    if detection.score < 0.0 {
        label
    } else {
        format!("{}: {}%", label, (100.0 * detection.score) as i32)
    }
}

/// Draws boxes and label tags for all detections onto an image in place.
///
/// The image dimensions are never changed. Boxes are clamped to the image
/// bounds; a box that clamps to nothing is skipped. Label tags are only
/// drawn when the configuration carries a font.
///
/// # Arguments
///
/// * `img` - The image to draw on
/// * `detections` - The detections to render
/// * `labels` - Class names indexed by class id (may be empty)
/// * `config` - Visualization configuration
pub fn draw_detections(
    img: &mut RgbImage,
    detections: &[Detection],
    labels: &[String],
    config: &VisualizationConfig,
) {
    if img.width() == 0 || img.height() == 0 {
        debug!("Skipping draw on empty image");
        return;
    }

    for detection in detections {
        let color = color_for_class(detection.class);
        draw_box(img, detection, color, config.box_thickness);

        if let Some(font) = &config.font {
            draw_label_tag(img, detection, labels, color, font, config.font_scale);
        }
    }
}

/// Draws the outline rectangle for one detection.
fn draw_box(img: &mut RgbImage, detection: &Detection, color: Rgb<u8>, thickness: u32) {
    let (img_w, img_h) = (img.width() as i32, img.height() as i32);

    let xmin = (detection.xmin.floor() as i32).clamp(0, img_w - 1);
    let ymin = (detection.ymin.floor() as i32).clamp(0, img_h - 1);
    let xmax = (detection.xmax.ceil() as i32).clamp(0, img_w - 1);
    let ymax = (detection.ymax.ceil() as i32).clamp(0, img_h - 1);

    if xmin >= xmax || ymin >= ymax {
        debug!("Skipping degenerate box for class {}", detection.class);
        return;
    }

    // Nested 1-px rectangles inset inward, so the outline stays inside the
    // box and the image dimensions are untouched.
    for t in 0..thickness as i32 {
        let w = xmax - xmin + 1 - 2 * t;
        let h = ymax - ymin + 1 - 2 * t;
        if w <= 0 || h <= 0 {
            break;
        }

        let rect = Rect::at(xmin + t, ymin + t).of_size(w as u32, h as u32);
        draw_hollow_rect_mut(img, rect, color);
    }
}

/// Draws the filled label tag for one detection.
///
/// The tag sits on the top edge of the box, pushed down when the box starts
/// close enough to the image top that the text would not fit above it.
fn draw_label_tag(
    img: &mut RgbImage,
    detection: &Detection,
    labels: &[String],
    color: Rgb<u8>,
    font: &FontVec,
    font_scale: f32,
) {
    let text = label_text(detection, labels);

    let scale = PxScale::from(font_scale);
    let text_width = measure_text_width(&text, font, font_scale);
    let text_height = font.as_scaled(scale).height();

    let text_bottom = detection.ymin.max(text_height);
    let text_left = detection.xmin;
    let margin = (0.05 * text_height).ceil();

    let tag_w = text_width.ceil() as i32;
    let tag_h = (text_height + 2.0 * margin).ceil() as i32;
    if tag_w <= 0 || tag_h <= 0 {
        return;
    }

    let tag_left = text_left.floor() as i32;
    let tag_top = (text_bottom - text_height - 2.0 * margin).floor() as i32;

    let rect = Rect::at(tag_left, tag_top).of_size(tag_w as u32, tag_h as u32);
    draw_filled_rect_mut(img, rect, color);

    draw_text_mut(
        img,
        TEXT_COLOR,
        tag_left + margin as i32,
        (text_bottom - text_height - margin) as i32,
        scale,
        font,
        &text,
    );
}

/// Measures the width of text when rendered with a specific font and scale.
///
/// The width is the sum of the advance widths of each character at the
/// given scale.
fn measure_text_width(text: &str, font: &FontVec, scale: f32) -> f32 {
    let scaled_font = font.as_scaled(PxScale::from(scale));

    text.chars()
        .map(|ch| scaled_font.h_advance(scaled_font.scaled_glyph(ch).id))
        .sum()
}

/// Renders detections onto the image at `image_path`.
///
/// Loads the image, draws all detections, writes the result to
/// `output_path` when one is supplied, and returns the rendered image.
///
/// # Arguments
///
/// * `image_path` - Path to the source image
/// * `output_path` - Optional path to write the rendered image to, in the
///   encoding implied by its extension
/// * `detections` - The detections to render
/// * `labels` - Class names indexed by class id (may be empty)
/// * `config` - Visualization configuration
///
/// # Errors
///
/// Returns a `VizError::ImageLoad` if the source image cannot be decoded,
/// or a `VizError::ImageSave` if the output file cannot be written.
pub fn visualize_detections(
    image_path: &Path,
    output_path: Option<&Path>,
    detections: &[Detection],
    labels: &[String],
    config: &VisualizationConfig,
) -> VizResult<RgbImage> {
    let mut img = load_image(image_path)?;
    draw_detections(&mut img, detections, labels, config);

    if let Some(path) = output_path {
        img.save(path).map_err(|e| VizError::image_save(path, e))?;
        info!("Overlay saved to: {}", path.display());
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{PALETTE, PALETTE_SIZE};

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn boxes_only() -> VisualizationConfig {
        VisualizationConfig::default()
    }

    #[test]
    fn test_class_label_fallback() {
        let labels = vec!["person".to_string(), "bicycle".to_string()];
        assert_eq!(class_label(0, &labels), "person");
        assert_eq!(class_label(1, &labels), "bicycle");
        assert_eq!(class_label(2, &labels), "Class 2");
        assert_eq!(class_label(9, &[]), "Class 9");
    }

    #[test]
    fn test_label_text_includes_truncated_percentage() {
        let labels = vec!["cat".to_string(), "dog".to_string()];
        let d = Detection::new(1, 0.0, 0.0, 10.0, 10.0, 0.875);
        assert_eq!(label_text(&d, &labels), "dog: 87%");

        let d = Detection::new(5, 0.0, 0.0, 10.0, 10.0, 0.5);
        assert_eq!(label_text(&d, &labels), "Class 5: 50%");
    }

    #[test]
    fn test_label_text_omits_percentage_for_negative_score() {
        let labels = vec!["cat".to_string()];
        let d = Detection::new(0, 0.0, 0.0, 10.0, 10.0, -1.0);
        assert_eq!(label_text(&d, &labels), "cat");

        let d = Detection::new(4, 0.0, 0.0, 10.0, 10.0, -0.5);
        assert_eq!(label_text(&d, &[]), "Class 4");
    }

    #[test]
    fn test_draw_preserves_image_dimensions() {
        let mut img = RgbImage::new(64, 48);
        let detections = vec![
            Detection::new(0, 5.0, 5.0, 20.0, 20.0, 0.9),
            Detection::new(1, -10.0, -10.0, 100.0, 100.0, 0.5),
            Detection::new(2, 60.0, 40.0, 200.0, 200.0, -1.0),
        ];

        draw_detections(&mut img, &detections, &[], &boxes_only());
        assert_eq!(img.dimensions(), (64, 48));
    }

    #[test]
    fn test_box_outline_uses_palette_color() {
        let mut img = RgbImage::from_pixel(64, 64, BLACK);
        let detections = vec![Detection::new(3, 10.0, 10.0, 30.0, 30.0, 0.9)];

        draw_detections(&mut img, &detections, &[], &boxes_only());

        let color = color_for_class(3);
        // Outer ring.
        assert_eq!(*img.get_pixel(10, 10), color);
        assert_eq!(*img.get_pixel(20, 10), color);
        assert_eq!(*img.get_pixel(30, 30), color);
        // Second ring (thickness 2).
        assert_eq!(*img.get_pixel(11, 11), color);
        // Interior stays untouched.
        assert_eq!(*img.get_pixel(20, 20), BLACK);
        // So does everything outside the box.
        assert_eq!(*img.get_pixel(5, 5), BLACK);
    }

    #[test]
    fn test_wrapped_class_id_reuses_palette_color() {
        let mut img = RgbImage::from_pixel(32, 32, BLACK);
        let detections = vec![Detection::new(PALETTE_SIZE + 2, 4.0, 4.0, 20.0, 20.0, 0.9)];

        draw_detections(&mut img, &detections, &[], &boxes_only());
        assert_eq!(*img.get_pixel(4, 4), PALETTE[2]);
    }

    #[test]
    fn test_draw_on_empty_image_is_a_noop() {
        let detections = vec![Detection::new(0, 0.0, 0.0, 10.0, 10.0, 0.9)];

        let mut img = RgbImage::new(0, 0);
        draw_detections(&mut img, &detections, &[], &boxes_only());
        assert_eq!(img.dimensions(), (0, 0));

        // Zero along a single axis must be just as safe.
        let mut img = RgbImage::new(0, 4);
        draw_detections(&mut img, &detections, &[], &boxes_only());
        assert_eq!(img.dimensions(), (0, 4));

        let mut img = RgbImage::new(4, 0);
        draw_detections(&mut img, &detections, &[], &boxes_only());
        assert_eq!(img.dimensions(), (4, 0));
    }

    #[test]
    fn test_fully_out_of_bounds_box_is_skipped() {
        let mut img = RgbImage::from_pixel(32, 32, BLACK);
        let reference = img.clone();
        let detections = vec![Detection::new(0, -50.0, -50.0, -10.0, -10.0, 0.9)];

        draw_detections(&mut img, &detections, &[], &boxes_only());
        assert_eq!(img, reference);
    }

    #[test]
    fn test_partially_out_of_bounds_box_is_clamped() {
        let mut img = RgbImage::from_pixel(32, 32, BLACK);
        let detections = vec![Detection::new(0, -8.0, -8.0, 15.0, 15.0, 0.9)];

        draw_detections(&mut img, &detections, &[], &boxes_only());
        assert_eq!(img.dimensions(), (32, 32));
        assert_eq!(*img.get_pixel(0, 0), color_for_class(0));
    }

    #[test]
    fn test_draw_with_system_font_preserves_dimensions() {
        // Exercises the label tag path when a system font is installed and
        // the boxes-only path when it is not; the invariant holds either way.
        let config = VisualizationConfig::with_system_font();
        let mut img = RgbImage::new(120, 80);
        let detections = vec![Detection::new(1, 10.0, 2.0, 60.0, 50.0, 0.42)];
        let labels = vec!["person".to_string(), "bicycle".to_string()];

        draw_detections(&mut img, &detections, &labels, &config);
        assert_eq!(img.dimensions(), (120, 80));
    }

    #[test]
    fn test_visualize_detections_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("annotated.png");

        RgbImage::from_pixel(48, 36, BLACK).save(&input).unwrap();

        let detections = vec![Detection::new(2, 5.0, 5.0, 40.0, 30.0, 0.7)];
        let rendered =
            visualize_detections(&input, Some(&output), &detections, &[], &boxes_only()).unwrap();

        assert_eq!(rendered.dimensions(), (48, 36));
        let reloaded = crate::utils::image::load_image(&output).unwrap();
        assert_eq!(reloaded.dimensions(), (48, 36));
        assert_eq!(*reloaded.get_pixel(5, 5), color_for_class(2));
    }

    #[test]
    fn test_visualize_detections_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");

        let result = visualize_detections(&missing, None, &[], &[], &boxes_only());
        assert!(result.is_err());
    }
}
