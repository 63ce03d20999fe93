use serde::{Deserialize, Serialize};

use super::resource::{ProductionNumber, ResourceType};

/// A position in screenshot pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// True when both axis differences are strictly below `tolerance`.
    pub fn is_near(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }
}

/// One hexagonal board cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: String,
    pub resource: ResourceType,
    /// Token number. `None` for the desert, or when no number could be read.
    pub number: Option<ProductionNumber>,
    pub position: Point,
    pub has_robber: bool,
}

impl Tile {
    /// A tile that produces when its number is rolled (no robber, not desert).
    pub fn is_productive(&self) -> bool {
        !self.has_robber && !self.resource.is_desert()
    }
}

/// A settlement or city already on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: String,
    pub position: Point,
    /// Opaque owner tag (e.g. the player's color).
    pub player: String,
    pub is_city: bool,
}

impl Settlement {
    pub fn new(id: &str, position: Point, player: &str, is_city: bool) -> Self {
        Self {
            id: id.to_string(),
            position,
            player: player.to_string(),
            is_city,
        }
    }
}

/// Immutable view of the board for one analysis pass.
///
/// Built through [`super::assemble`] or [`BoardSnapshot::new`], both of which
/// validate tile id uniqueness and the single-robber rule.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoardSnapshot {
    tiles: Vec<Tile>,
    settlements: Vec<Settlement>,
    robber_position: Option<Point>,
}

impl BoardSnapshot {
    pub(super) fn from_parts(
        tiles: Vec<Tile>,
        settlements: Vec<Settlement>,
        robber_position: Option<Point>,
    ) -> Self {
        Self {
            tiles,
            settlements,
            robber_position,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    /// Center of the tile carrying the robber, if any.
    pub fn robber_position(&self) -> Option<Point> {
        self.robber_position
    }

    pub fn tile(&self, id: &str) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
