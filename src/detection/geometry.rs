//! Fixed hex grid for locating tiles in a screenshot.
//!
//! Assumes the board is centered in the image and that one hex spans a
//! known number of pixels. Nothing is measured from the image besides its
//! dimensions, so accuracy depends entirely on those two assumptions.

use serde::{Deserialize, Serialize};

use crate::board::Point;

/// Tiles per row of the base-game board, top to bottom.
pub const ROW_LENGTHS: [usize; 5] = [3, 4, 5, 4, 3];

/// Expected center of one tile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileSlot {
    pub id: String,
    pub center: Point,
}

/// Generates the 19 tile centers of a board centered in a
/// `width` x `height` image.
///
/// Rows are `hex_size * sqrt(3)` apart and columns `hex_size * 1.5` apart;
/// each row is centered horizontally. Ids are `r{row}-{index}`.
pub fn generate_tile_slots(width: u32, height: u32, hex_size: f64) -> Vec<TileSlot> {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;
    let row_spacing = hex_size * 3f64.sqrt();
    let column_spacing = hex_size * 1.5;
    let middle_row = (ROW_LENGTHS.len() / 2) as f64;

    let mut slots = Vec::with_capacity(ROW_LENGTHS.iter().sum());

    for (row, &len) in ROW_LENGTHS.iter().enumerate() {
        let y = center_y + (row as f64 - middle_row) * row_spacing;
        let row_offset = (len as f64 - 1.0) / 2.0;

        for i in 0..len {
            let x = center_x + (i as f64 - row_offset) * column_spacing;
            slots.push(TileSlot {
                id: format!("r{}-{}", row, i),
                center: Point::new(x, y),
            });
        }
    }

    slots
}
