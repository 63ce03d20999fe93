//! Production number recognition.
//!
//! Recognizers only ever produce values from [`ProductionNumber::VALID`].
//! `Ok(None)` means nothing readable was found at that tile.

use anyhow::Result;
use image::RgbaImage;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::{Point, ProductionNumber};

/// Reads the number token of the tile centered at `center`.
pub trait NumberRecognizer {
    fn recognize(&mut self, img: &RgbaImage, center: Point) -> Result<Option<ProductionNumber>>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Stand-in used when real recognition is unavailable: draws a uniformly
/// random valid number, ignoring the image.
pub struct RandomNumberRecognizer {
    rng: ChaCha8Rng,
}

impl RandomNumberRecognizer {
    /// Deterministic sequence for a given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl NumberRecognizer for RandomNumberRecognizer {
    fn recognize(&mut self, _img: &RgbaImage, _center: Point) -> Result<Option<ProductionNumber>> {
        Ok(ProductionNumber::VALID
            .choose(&mut self.rng)
            .copied()
            .and_then(ProductionNumber::new))
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
