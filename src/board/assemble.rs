//! Combines detected tile slots, their classifications, and known
//! settlements into one validated [`BoardSnapshot`].
//!
//! No detection happens here. Inputs are copied into the snapshot as-is;
//! the only derived field is the robber coordinate, taken from the tile
//! that carries the robber flag.

use std::collections::HashSet;

use super::types::{BoardSnapshot, Point, Settlement, Tile};
use crate::detection::{Classification, TileSlot};
use crate::error::AssemblyError;

/// Builds a snapshot from slots and their per-slot classifications.
///
/// `classifications[i]` describes `slots[i]`. Fails when the two lists
/// differ in length, when two slots share an id, or when more than one
/// tile carries the robber.
pub fn assemble(
    slots: &[TileSlot],
    classifications: &[Classification],
    settlements: Vec<Settlement>,
) -> Result<BoardSnapshot, AssemblyError> {
    if slots.len() != classifications.len() {
        return Err(AssemblyError::CountMismatch {
            slots: slots.len(),
            classifications: classifications.len(),
        });
    }

    let tiles = slots
        .iter()
        .zip(classifications)
        .map(|(slot, class)| Tile {
            id: slot.id.clone(),
            resource: class.resource,
            number: class.number,
            position: slot.center,
            has_robber: class.has_robber,
        })
        .collect();

    BoardSnapshot::new(tiles, settlements)
}

impl BoardSnapshot {
    /// Validates already-built tiles and wraps them into a snapshot.
    pub fn new(tiles: Vec<Tile>, settlements: Vec<Settlement>) -> Result<Self, AssemblyError> {
        let robber_position = validate_tiles(&tiles)?;
        Ok(Self::from_parts(tiles, settlements, robber_position))
    }
}

/// Checks id uniqueness and the single-robber rule, returning the robber
/// coordinate when one tile carries it.
fn validate_tiles(tiles: &[Tile]) -> Result<Option<Point>, AssemblyError> {
    let mut seen = HashSet::with_capacity(tiles.len());
    let mut robber: Option<&Tile> = None;

    for tile in tiles {
        if !seen.insert(tile.id.as_str()) {
            return Err(AssemblyError::DuplicateTileId(tile.id.clone()));
        }
        if tile.has_robber {
            if let Some(first) = robber {
                return Err(AssemblyError::MultipleRobbers {
                    first: first.id.clone(),
                    second: tile.id.clone(),
                });
            }
            robber = Some(tile);
        }
    }

    Ok(robber.map(|t| t.position))
}
