//! Position scoring and strategy generation.
//!
//! This module provides:
//! - Dice probabilities for production numbers
//! - Candidate generation, deduplication, and scoring (`analyze_board`)
//! - Prioritized recommendations (`generate_strategies`)
//! - A serializable report with JSON export

pub mod dice;
pub mod positions;
pub mod report;
pub mod strategy;

pub use positions::{analyze_board, CandidatePosition, PositionAnalysis};
pub use report::{export_to_json, AnalysisReport};
pub use strategy::{
    generate_strategies, generate_strategies_from, resource_distribution, Strategy, StrategyKind,
};

use crate::board::BoardSnapshot;
use crate::config::AnalysisConfig;

/// Runs position analysis and strategy generation over one snapshot.
pub fn analyze_snapshot(
    source: &str,
    snapshot: BoardSnapshot,
    config: &AnalysisConfig,
) -> AnalysisReport {
    let positions = analyze_board(&snapshot, &config.scoring);
    let strategies = generate_strategies_from(&snapshot, &positions, &config.strategy);

    crate::log(&format!(
        "Analyzed {}: {} positions, {} strategies",
        source,
        positions.len(),
        strategies.len()
    ));

    AnalysisReport::new(source, snapshot, positions, strategies)
}
