//! Settlement candidate generation and scoring.
//!
//! Candidates are hex corners approximated from tile centers: each tile
//! contributes six points at a fixed radius, and a tile "touches" a point
//! when its center lies within `adjacency_multiplier * corner_radius`.
//! This is not exact hex-corner math and can over- or under-count
//! neighbors on layouts that stray from the grid.

use serde::Serialize;
use std::f64::consts::PI;

use crate::board::{BoardSnapshot, Point, ResourceMap, Tile};
use crate::config::ScoringConfig;

/// A point where a settlement could be built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CandidatePosition {
    pub position: Point,
    /// Ids of the tiles touching this point (always at least two)
    pub adjacent_tiles: Vec<String>,
}

/// Production metrics for one candidate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PositionAnalysis {
    pub candidate: CandidatePosition,
    /// Sum of the roll probabilities of the productive touching tiles
    pub probability: f64,
    /// Probability-weighted resource value per roll
    pub expected_value: f64,
    /// Per-resource production probability
    pub resources: ResourceMap<f64>,
    /// Number of distinct resources the position produces
    pub distinct_resources: usize,
    pub score: f64,
}

/// Scores every candidate position on the board, best first.
///
/// Ties keep generation order. An empty board yields no positions.
pub fn analyze_board(snapshot: &BoardSnapshot, config: &ScoringConfig) -> Vec<PositionAnalysis> {
    let mut analyses: Vec<PositionAnalysis> = generate_candidates(snapshot, config)
        .into_iter()
        .map(|candidate| analyze_position(candidate, snapshot, config))
        .collect();

    analyses.sort_by(|a, b| b.score.total_cmp(&a.score));
    analyses
}

/// All deduplicated candidate positions, in generation order.
pub fn generate_candidates(snapshot: &BoardSnapshot, config: &ScoringConfig) -> Vec<CandidatePosition> {
    deduplicate_positions(corner_candidates(snapshot.tiles(), config), config.dedup_threshold)
}

/// Six corners per tile, keeping those touched by two or more tiles.
pub fn corner_candidates(tiles: &[Tile], config: &ScoringConfig) -> Vec<CandidatePosition> {
    let radius = config.corner_radius;
    let reach = radius * config.adjacency_multiplier;
    let mut candidates = Vec::new();

    for tile in tiles {
        for corner in 0..6 {
            let angle = PI / 3.0 * corner as f64;
            let position = Point::new(
                tile.position.x + radius * angle.cos(),
                tile.position.y + radius * angle.sin(),
            );

            let adjacent_tiles: Vec<String> = tiles
                .iter()
                .filter(|t| t.position.distance(&position) < reach)
                .map(|t| t.id.clone())
                .collect();

            if adjacent_tiles.len() >= 2 {
                candidates.push(CandidatePosition {
                    position,
                    adjacent_tiles,
                });
            }
        }
    }

    candidates
}

/// Drops every position closer than `threshold` on both axes to one
/// already kept. The first occurrence wins.
pub fn deduplicate_positions(positions: Vec<CandidatePosition>, threshold: f64) -> Vec<CandidatePosition> {
    let mut unique: Vec<CandidatePosition> = Vec::with_capacity(positions.len());

    for candidate in positions {
        let is_duplicate = unique
            .iter()
            .any(|u| u.position.is_near(&candidate.position, threshold));
        if !is_duplicate {
            unique.push(candidate);
        }
    }

    unique
}

/// Scores one candidate against the snapshot's tiles.
///
/// Robbed and desert tiles are skipped entirely: they add no probability,
/// no value, and no diversity.
pub fn analyze_position(
    candidate: CandidatePosition,
    snapshot: &BoardSnapshot,
    config: &ScoringConfig,
) -> PositionAnalysis {
    let mut probability = 0.0;
    let mut expected_value = 0.0;
    let mut resources: ResourceMap<f64> = ResourceMap::new();
    let mut touched: ResourceMap<bool> = ResourceMap::new();

    let adjacent = snapshot
        .tiles()
        .iter()
        .filter(|t| candidate.adjacent_tiles.contains(&t.id));

    for tile in adjacent {
        if !tile.is_productive() {
            continue;
        }

        let prob = tile.number.map(|n| n.probability()).unwrap_or(0.0);
        let value = config.resource_values.weight(tile.resource);

        probability += prob;
        expected_value += prob * value;
        resources[tile.resource] += prob;
        touched[tile.resource] = true;
    }

    let distinct_resources = touched.values().filter(|&&t| t).count();
    let diversity_bonus = distinct_resources as f64 * config.diversity_bonus;
    let score = expected_value * 100.0 + diversity_bonus;

    PositionAnalysis {
        candidate,
        probability,
        expected_value,
        resources,
        distinct_resources,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fixtures::{mid_game_board, rich_board, scarce_board, standard_board};
    use crate::board::{ProductionNumber, ResourceType};

    fn tile(id: &str, resource: ResourceType, number: Option<u8>, x: f64, y: f64) -> Tile {
        Tile {
            id: id.to_string(),
            resource,
            number: number.and_then(ProductionNumber::new),
            position: Point::new(x, y),
            has_robber: false,
        }
    }

    fn two_tile_board() -> BoardSnapshot {
        BoardSnapshot::new(
            vec![
                tile("a", ResourceType::Ore, Some(6), 0.0, 0.0),
                tile("b", ResourceType::Wheat, Some(8), 100.0, 0.0),
            ],
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_board_has_no_positions() {
        let snapshot = BoardSnapshot::new(Vec::new(), Vec::new()).unwrap();
        assert!(analyze_board(&snapshot, &ScoringConfig::default()).is_empty());
    }

    #[test]
    fn test_single_tile_has_no_positions() {
        let snapshot =
            BoardSnapshot::new(vec![tile("a", ResourceType::Ore, Some(6), 0.0, 0.0)], Vec::new())
                .unwrap();
        assert!(analyze_board(&snapshot, &ScoringConfig::default()).is_empty());
    }

    #[test]
    fn test_two_tile_scores() {
        let analyses = analyze_board(&two_tile_board(), &ScoringConfig::default());

        // Three shared corners from each tile, none within 10px of another
        assert_eq!(analyses.len(), 6);

        let expected_ev = 5.0 / 36.0 * 1.2 + 5.0 / 36.0 * 1.1;
        for analysis in &analyses {
            assert_eq!(analysis.candidate.adjacent_tiles, vec!["a", "b"]);
            assert!((analysis.probability - 10.0 / 36.0).abs() < 1e-9);
            assert!((analysis.expected_value - expected_ev).abs() < 1e-9);
            assert!((analysis.resources[ResourceType::Ore] - 5.0 / 36.0).abs() < 1e-9);
            assert_eq!(analysis.resources[ResourceType::Wood], 0.0);
            assert_eq!(analysis.distinct_resources, 2);
            assert!((analysis.score - (expected_ev * 100.0 + 1.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ties_keep_generation_order() {
        let analyses = analyze_board(&two_tile_board(), &ScoringConfig::default());
        let xs: Vec<f64> = analyses.iter().map(|a| a.candidate.position.x.round()).collect();
        assert_eq!(xs, vec![60.0, 30.0, 30.0, 70.0, 40.0, 70.0]);
    }

    #[test]
    fn test_output_sorted_by_score() {
        let config = ScoringConfig::default();
        for board in [standard_board(), rich_board(), scarce_board(), mid_game_board()] {
            let analyses = analyze_board(&board, &config);
            assert!(!analyses.is_empty());
            for pair in analyses.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
        }
    }

    #[test]
    fn test_candidates_touch_at_least_two_tiles() {
        let candidates = generate_candidates(&standard_board(), &ScoringConfig::default());
        assert!(candidates.iter().all(|c| c.adjacent_tiles.len() >= 2));
    }

    #[test]
    fn test_deduplicate_keeps_first_seen() {
        let at = |x: f64, y: f64| CandidatePosition {
            position: Point::new(x, y),
            adjacent_tiles: vec!["a".to_string(), "b".to_string()],
        };
        let positions = vec![at(0.0, 0.0), at(5.0, 5.0), at(9.9, 0.0), at(10.0, 0.0), at(20.0, 20.0)];

        let unique = deduplicate_positions(positions, 10.0);
        let points: Vec<Point> = unique.iter().map(|c| c.position).collect();
        assert_eq!(
            points,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(20.0, 20.0)]
        );
        assert_eq!(deduplicate_positions(unique.clone(), 10.0), unique);
    }

    #[test]
    fn test_deduplicate_is_idempotent() {
        let config = ScoringConfig::default();
        let raw = corner_candidates(standard_board().tiles(), &config);
        let once = deduplicate_positions(raw.clone(), config.dedup_threshold);
        let twice = deduplicate_positions(once.clone(), config.dedup_threshold);

        assert!(once.len() <= raw.len());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_robber_and_desert_never_contribute() {
        let mut robbed = tile("robbed", ResourceType::Ore, Some(6), 0.0, 0.0);
        robbed.has_robber = true;
        let snapshot = BoardSnapshot::new(
            vec![
                robbed,
                tile("desert", ResourceType::Desert, None, 100.0, 0.0),
                tile("wheat", ResourceType::Wheat, Some(8), 50.0, 80.0),
            ],
            Vec::new(),
        )
        .unwrap();

        let analyses = analyze_board(&snapshot, &ScoringConfig::default());
        assert!(!analyses.is_empty());

        for analysis in &analyses {
            assert_eq!(analysis.resources[ResourceType::Ore], 0.0);
            assert_eq!(analysis.resources[ResourceType::Desert], 0.0);

            let touches_wheat = analysis.candidate.adjacent_tiles.iter().any(|id| id == "wheat");
            let expected = if touches_wheat { 5.0 / 36.0 } else { 0.0 };
            assert!((analysis.probability - expected).abs() < 1e-9);
            assert!((analysis.expected_value - expected * 1.1).abs() < 1e-9);
            assert_eq!(analysis.distinct_resources, usize::from(touches_wheat));
        }
    }

    #[test]
    fn test_unproductive_candidate_scores_zero_and_ranks_last() {
        let snapshot = BoardSnapshot::new(
            vec![
                tile("d1", ResourceType::Desert, None, 0.0, 0.0),
                tile("d2", ResourceType::Desert, None, 100.0, 0.0),
                tile("w1", ResourceType::Wood, Some(5), 500.0, 0.0),
                tile("w2", ResourceType::Brick, Some(9), 600.0, 0.0),
            ],
            Vec::new(),
        )
        .unwrap();

        let analyses = analyze_board(&snapshot, &ScoringConfig::default());
        let last = analyses.last().unwrap();
        assert_eq!(last.probability, 0.0);
        assert_eq!(last.expected_value, 0.0);
        assert_eq!(last.score, 0.0);
        assert!(analyses[0].score > 0.0);
    }

    #[test]
    fn test_standard_board_robbed_desert_adds_nothing() {
        let analyses = analyze_board(&standard_board(), &ScoringConfig::default());

        assert!(analyses.iter().any(|a| a.probability > 0.0));

        let top = &analyses[0];

        // Positions next to the robbed desert gain nothing from it
        let by_desert: Vec<&PositionAnalysis> = analyses
            .iter()
            .filter(|a| a.candidate.adjacent_tiles.iter().any(|id| id == "c3"))
            .collect();
        assert!(!by_desert.is_empty());
        assert!(by_desert.iter().all(|a| a.resources[ResourceType::Desert] == 0.0));
        assert!(top.score > by_desert.iter().map(|a| a.score).fold(f64::INFINITY, f64::min));
    }
}
