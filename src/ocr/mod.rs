//! Tesseract-backed production number recognition.
//!
//! Each tile is read independently: crop a square around the tile center,
//! grayscale and stretch contrast, run digit-only OCR, keep the first
//! valid number.

pub mod engine;
pub mod extract;
pub mod preprocess;
pub mod setup;

pub use engine::{recognize_image, OcrLine, OcrWord};
pub use extract::{extract_number, extract_numbers};
pub use preprocess::{crop_around, enhance_for_ocr};
pub use setup::{ensure_tesseract, TesseractPaths};

use anyhow::Result;
use image::RgbaImage;

use crate::board::{Point, ProductionNumber};
use crate::config::OcrConfig;
use crate::detection::NumberRecognizer;

/// Reads number tokens by shelling out to Tesseract once per tile.
pub struct OcrNumberRecognizer {
    paths: TesseractPaths,
    config: OcrConfig,
}

impl OcrNumberRecognizer {
    pub fn new(paths: TesseractPaths, config: OcrConfig) -> Self {
        Self { paths, config }
    }

    /// Locates (and if needed fetches) Tesseract, then builds a recognizer.
    pub fn setup(config: OcrConfig) -> Result<Self> {
        Ok(Self::new(ensure_tesseract()?, config))
    }
}

impl NumberRecognizer for OcrNumberRecognizer {
    fn recognize(&mut self, img: &RgbaImage, center: Point) -> Result<Option<ProductionNumber>> {
        let cropped = crop_around(img, center, self.config.region_size);
        if cropped.width() == 0 || cropped.height() == 0 {
            return Ok(None);
        }

        let enhanced = enhance_for_ocr(&cropped, self.config.contrast);
        let lines = recognize_image(&enhanced, &self.paths, self.config.page_seg_mode)?;
        let number = extract_number(&lines);

        crate::log(&format!(
            "OCR at ({:.0}, {:.0}): {:?} -> {}",
            center.x,
            center.y,
            lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
            number.map_or_else(|| "none".to_string(), |n| n.to_string())
        ));

        Ok(number)
    }

    fn name(&self) -> &'static str {
        "tesseract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_center_off_image_skips_tesseract() {
        // Paths that cannot exist: reaching Tesseract would be an error
        let paths = TesseractPaths {
            executable: PathBuf::from("/nonexistent/tesseract"),
            tessdata: PathBuf::from("/nonexistent/tessdata"),
        };
        let mut recognizer = OcrNumberRecognizer::new(paths, OcrConfig::default());
        let img = RgbaImage::new(100, 100);

        let result = recognizer.recognize(&img, Point::new(900.0, 900.0)).unwrap();
        assert!(result.is_none());
        assert_eq!(recognizer.name(), "tesseract");
    }
}
