//! Tile classification by center color.
//!
//! The resource comes from fixed RGB rules applied to the color at the
//! tile center. The number comes from a [`NumberRecognizer`], so the
//! random stand-in can be swapped for OCR without touching anything
//! downstream.

use anyhow::Result;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

use super::geometry::TileSlot;
use super::numbers::NumberRecognizer;
use crate::board::{Point, ProductionNumber, ResourceType};

/// What the classifier decided for one tile slot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub resource: ResourceType,
    pub number: Option<ProductionNumber>,
    pub has_robber: bool,
}

/// Maps an RGB color to a resource.
///
/// Rules overlap, so they are checked in this order and the first match
/// wins. Colors matching nothing default to wood.
pub fn color_to_resource(r: u8, g: u8, b: u8) -> ResourceType {
    // Forest (green/dark green)
    if g > r && g > b && g > 80 {
        return ResourceType::Wood;
    }

    // Hills (red/brown)
    if r > g && r > b && r > 100 {
        return ResourceType::Brick;
    }

    // Fields (yellow)
    if r > 180 && g > 150 && b < 100 {
        return ResourceType::Wheat;
    }

    // Pasture (light green/lime)
    if g > 140 && r > 100 && r < 200 && b < 120 {
        return ResourceType::Sheep;
    }

    // Mountains (gray/dark)
    if r < 100 && g < 100 && b < 100 {
        return ResourceType::Ore;
    }

    // Desert (sandy, red and green close together)
    if r > 150 && g > 120 && b < 100 && (r as i16 - g as i16).abs() < 50 {
        return ResourceType::Desert;
    }

    ResourceType::Wood
}

/// Samples the color at `center`, averaging a `(2 * radius + 1)` square
/// clamped to the image.
///
/// Returns `None` when the center itself lies outside the image.
pub fn sample_color(img: &RgbaImage, center: Point, radius: u32) -> Option<[u8; 3]> {
    let (width, height) = img.dimensions();
    let x = center.x.floor();
    let y = center.y.floor();

    if x < 0.0 || y < 0.0 || x >= width as f64 || y >= height as f64 {
        return None;
    }

    let (x, y) = (x as u32, y as u32);
    let x0 = x.saturating_sub(radius);
    let y0 = y.saturating_sub(radius);
    let x1 = x.saturating_add(radius).min(width - 1);
    let y1 = y.saturating_add(radius).min(height - 1);

    let mut sums = [0u64; 3];
    let mut count = 0u64;
    for py in y0..=y1 {
        for px in x0..=x1 {
            let pixel = img.get_pixel(px, py);
            for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
                *sum += channel as u64;
            }
            count += 1;
        }
    }

    Some(sums.map(|sum| (sum / count) as u8))
}

/// Classifies one tile slot.
///
/// A slot whose center falls outside the image stays a desert, the
/// category the detector assumes until a color is read. Deserts carry the
/// robber and skip number recognition.
pub fn classify(
    slot: &TileSlot,
    img: &RgbaImage,
    recognizer: &mut dyn NumberRecognizer,
    sample_radius: u32,
) -> Result<Classification> {
    let resource = match sample_color(img, slot.center, sample_radius) {
        Some([r, g, b]) => color_to_resource(r, g, b),
        None => {
            crate::log(&format!(
                "Tile {} at ({:.0}, {:.0}) is outside the {}x{} image",
                slot.id,
                slot.center.x,
                slot.center.y,
                img.width(),
                img.height()
            ));
            ResourceType::Desert
        }
    };

    if resource.is_desert() {
        return Ok(Classification {
            resource,
            number: None,
            has_robber: true,
        });
    }

    let number = recognizer.recognize(img, slot.center)?;

    Ok(Classification {
        resource,
        number,
        has_robber: false,
    })
}
