//! Board detection from a screenshot.
//!
//! This module provides:
//! - The fixed 19-slot hex grid (`generate_tile_slots`)
//! - Per-tile color classification (`classify`)
//! - Number recognition behind a swappable trait (`NumberRecognizer`)

pub mod classify;
pub mod geometry;
pub mod numbers;

pub use classify::{classify, color_to_resource, sample_color, Classification};
pub use geometry::{generate_tile_slots, TileSlot};
pub use numbers::{NumberRecognizer, RandomNumberRecognizer};

use image::RgbaImage;

use crate::board::{assemble, BoardSnapshot};
use crate::config::GeometryConfig;
use crate::error::PipelineError;

/// Runs geometry, classification, and assembly over one screenshot.
///
/// Detection never places settlements, so the snapshot has none.
pub fn detect_board(
    img: &RgbaImage,
    recognizer: &mut dyn NumberRecognizer,
    config: &GeometryConfig,
) -> Result<BoardSnapshot, PipelineError> {
    let slots = generate_tile_slots(img.width(), img.height(), config.hex_size);

    crate::log(&format!(
        "Detecting {} tiles in {}x{} image (numbers: {})",
        slots.len(),
        img.width(),
        img.height(),
        recognizer.name()
    ));

    let mut classifications = Vec::with_capacity(slots.len());
    for slot in &slots {
        let class = classify(slot, img, recognizer, config.sample_radius).map_err(|source| {
            PipelineError::Recognition {
                tile: slot.id.clone(),
                source,
            }
        })?;
        if !class.resource.is_desert() && class.number.is_none() {
            crate::log(&format!(
                "No number read on {} tile {}; it will score as never producing",
                class.resource, slot.id
            ));
        }
        classifications.push(class);
    }

    keep_first_robber(&slots, &mut classifications);

    let snapshot = assemble(&slots, &classifications, Vec::new())?;
    crate::log(&format!("Detected {} tiles", snapshot.tiles().len()));
    Ok(snapshot)
}

/// Every desert comes out of the classifier with the robber, but a board
/// has one robber. The first flagged slot keeps it.
fn keep_first_robber(slots: &[TileSlot], classifications: &mut [Classification]) {
    let mut robber_seen = false;
    for (slot, class) in slots.iter().zip(classifications.iter_mut()) {
        if !class.has_robber {
            continue;
        }
        if robber_seen {
            crate::log(&format!("Clearing extra robber flag on tile {}", slot.id));
            class.has_robber = false;
        }
        robber_seen = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Point, ResourceType};
    use anyhow::anyhow;
    use image::Rgba;

    struct FailingRecognizer;

    impl NumberRecognizer for FailingRecognizer {
        fn recognize(
            &mut self,
            _img: &RgbaImage,
            _center: Point,
        ) -> anyhow::Result<Option<crate::board::ProductionNumber>> {
            Err(anyhow!("tesseract not found"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn paint_slot(img: &mut RgbaImage, center: Point, color: [u8; 3]) {
        let [r, g, b] = color;
        img.put_pixel(center.x as u32, center.y as u32, Rgba([r, g, b, 255]));
    }

    #[test]
    fn test_detect_board_reads_slot_colors() {
        let mut img = RgbaImage::from_pixel(1000, 800, Rgba([90, 90, 90, 255]));
        let slots = generate_tile_slots(1000, 800, 80.0);
        paint_slot(&mut img, slots[0].center, [34, 120, 40]);
        paint_slot(&mut img, slots[1].center, [180, 70, 50]);

        let mut recognizer = RandomNumberRecognizer::new(3);
        let snapshot = detect_board(&img, &mut recognizer, &GeometryConfig::default()).unwrap();

        assert_eq!(snapshot.tiles().len(), 19);
        assert_eq!(snapshot.tiles()[0].resource, ResourceType::Wood);
        assert_eq!(snapshot.tiles()[1].resource, ResourceType::Brick);
        assert!(snapshot.tiles()[2..]
            .iter()
            .all(|t| t.resource == ResourceType::Ore));
        assert!(snapshot.tiles().iter().all(|t| t.number.is_some()));
        assert!(snapshot.settlements().is_empty());
        assert_eq!(snapshot.robber_position(), None);
    }

    #[test]
    fn test_detect_board_small_image_keeps_one_robber() {
        // Only the middle slot r2-2 lands at (5, 5) inside the image; every
        // other slot falls outside and becomes a desert
        let img = RgbaImage::new(10, 10);
        let mut recognizer = RandomNumberRecognizer::new(3);
        let snapshot = detect_board(&img, &mut recognizer, &GeometryConfig::default()).unwrap();

        let deserts = snapshot
            .tiles()
            .iter()
            .filter(|t| t.resource == ResourceType::Desert)
            .count();
        assert_eq!(deserts, 18);
        let middle = snapshot.tiles().iter().find(|t| t.id == "r2-2").unwrap();
        assert_eq!(middle.resource, ResourceType::Ore);
        assert!(!middle.has_robber);
        assert_eq!(snapshot.tiles().iter().filter(|t| t.has_robber).count(), 1);
        assert!(snapshot.tiles()[0].has_robber);
        assert_eq!(snapshot.robber_position(), Some(snapshot.tiles()[0].position));
    }

    struct BlankRecognizer;

    impl NumberRecognizer for BlankRecognizer {
        fn recognize(
            &mut self,
            _img: &RgbaImage,
            _center: Point,
        ) -> anyhow::Result<Option<crate::board::ProductionNumber>> {
            Ok(None)
        }

        fn name(&self) -> &'static str {
            "blank"
        }
    }

    #[test]
    fn test_detect_board_unread_numbers_never_produce() {
        let img = RgbaImage::from_pixel(1000, 800, Rgba([90, 90, 90, 255]));
        let snapshot = detect_board(&img, &mut BlankRecognizer, &GeometryConfig::default()).unwrap();

        assert!(snapshot
            .tiles()
            .iter()
            .all(|t| t.resource == ResourceType::Ore && t.number.is_none()));

        let analyses =
            crate::analysis::analyze_board(&snapshot, &crate::config::ScoringConfig::default());
        assert!(!analyses.is_empty());
        assert!(analyses.iter().all(|a| a.probability == 0.0 && a.expected_value == 0.0));
    }

    #[test]
    fn test_detect_board_propagates_recognition_failure() {
        let img = RgbaImage::from_pixel(1000, 800, Rgba([90, 90, 90, 255]));
        let result = detect_board(&img, &mut FailingRecognizer, &GeometryConfig::default());

        match result {
            Err(PipelineError::Recognition { tile, .. }) => assert_eq!(tile, "r0-0"),
            other => panic!("expected recognition error, got {:?}", other),
        }
    }
}
