//! Hand-made boards for running the analysis without a live game.
//!
//! Tiles sit on a 100px grid, which is close enough to the corner
//! adjacency radius for every interior corner to touch two or three tiles.

use rand::seq::SliceRandom;
use rand::Rng;

use super::resource::{ProductionNumber, ResourceType};
use super::types::{BoardSnapshot, Point, Settlement, Tile};

/// Which mock board to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockBoard {
    Standard,
    Rich,
    Scarce,
    MidGame,
}

impl MockBoard {
    pub const ALL: [MockBoard; 4] = [
        MockBoard::Standard,
        MockBoard::Rich,
        MockBoard::Scarce,
        MockBoard::MidGame,
    ];

    pub fn build(self) -> BoardSnapshot {
        match self {
            MockBoard::Standard => standard_board(),
            MockBoard::Rich => rich_board(),
            MockBoard::Scarce => scarce_board(),
            MockBoard::MidGame => mid_game_board(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MockBoard::Standard => "standard",
            MockBoard::Rich => "rich",
            MockBoard::Scarce => "scarce",
            MockBoard::MidGame => "mid-game",
        }
    }

    /// Picks one of the boards at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> MockBoard {
        *Self::ALL.choose(rng).unwrap_or(&MockBoard::Standard)
    }
}

fn tile(id: &str, resource: ResourceType, number: u8, x: f64, y: f64) -> Tile {
    Tile {
        id: id.to_string(),
        resource,
        number: ProductionNumber::new(number),
        position: Point::new(x, y),
        has_robber: false,
    }
}

fn desert(id: &str, x: f64, y: f64) -> Tile {
    Tile {
        id: id.to_string(),
        resource: ResourceType::Desert,
        number: None,
        position: Point::new(x, y),
        has_robber: true,
    }
}

// Fixture tiles are unique and carry at most one robber, so validation
// cannot fail.
fn snapshot(tiles: Vec<Tile>, settlements: Vec<Settlement>) -> BoardSnapshot {
    BoardSnapshot::new(tiles, settlements).expect("fixture boards are valid")
}

fn standard_tiles() -> Vec<Tile> {
    use ResourceType::*;
    vec![
        // Top row
        tile("t1", Wood, 11, 500.0, 200.0),
        tile("t2", Sheep, 12, 600.0, 200.0),
        tile("t3", Wheat, 9, 700.0, 200.0),
        // Second row
        tile("m1", Brick, 4, 450.0, 300.0),
        tile("m2", Ore, 6, 550.0, 300.0),
        tile("m3", Sheep, 5, 650.0, 300.0),
        tile("m4", Brick, 10, 750.0, 300.0),
        // Middle row
        tile("c1", Wheat, 3, 400.0, 400.0),
        tile("c2", Wood, 11, 500.0, 400.0),
        desert("c3", 600.0, 400.0),
        tile("c4", Wood, 4, 700.0, 400.0),
        tile("c5", Wheat, 8, 800.0, 400.0),
        // Fourth row
        tile("b1", Brick, 8, 450.0, 500.0),
        tile("b2", Ore, 10, 550.0, 500.0),
        tile("b3", Wood, 9, 650.0, 500.0),
        tile("b4", Sheep, 3, 750.0, 500.0),
        // Bottom row
        tile("bt1", Ore, 5, 500.0, 600.0),
        tile("bt2", Sheep, 2, 600.0, 600.0),
        tile("bt3", Wheat, 6, 700.0, 600.0),
    ]
}

/// The base-game board: 19 tiles in rows of 3/4/5/4/3 with the robber on
/// the central desert.
pub fn standard_board() -> BoardSnapshot {
    snapshot(standard_tiles(), Vec::new())
}

/// Five tiles, mostly on 6s and 8s.
pub fn rich_board() -> BoardSnapshot {
    use ResourceType::*;
    snapshot(
        vec![
            tile("1", Wheat, 6, 500.0, 300.0),
            tile("2", Ore, 8, 600.0, 300.0),
            tile("3", Wood, 6, 700.0, 300.0),
            tile("4", Brick, 8, 550.0, 400.0),
            tile("5", Sheep, 5, 650.0, 400.0),
        ],
        Vec::new(),
    )
}

/// Five tiles on the least likely numbers, plus a robbed desert.
pub fn scarce_board() -> BoardSnapshot {
    use ResourceType::*;
    snapshot(
        vec![
            tile("1", Wood, 2, 500.0, 300.0),
            tile("2", Brick, 12, 600.0, 300.0),
            tile("3", Wheat, 3, 700.0, 300.0),
            tile("4", Ore, 11, 550.0, 400.0),
            desert("5", 650.0, 400.0),
        ],
        Vec::new(),
    )
}

/// The standard board with three settlements already placed.
pub fn mid_game_board() -> BoardSnapshot {
    snapshot(
        standard_tiles(),
        vec![
            Settlement::new("s1", Point::new(525.0, 250.0), "blue", false),
            Settlement::new("s2", Point::new(625.0, 350.0), "red", false),
            Settlement::new("s3", Point::new(575.0, 450.0), "blue", true),
        ],
    )
}
