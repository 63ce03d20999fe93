//! Analysis report and its JSON export.

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::positions::PositionAnalysis;
use super::strategy::Strategy;
use crate::board::{BoardSnapshot, ResourceMap};

/// Everything one analysis pass produced.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Local time the report was built (ISO format)
    pub generated_at: String,
    /// Where the board came from (screenshot path or mock board name)
    pub source: String,
    pub board: BoardSnapshot,
    /// Tile count per resource
    pub distribution: ResourceMap<usize>,
    /// Candidate positions, best first
    pub positions: Vec<PositionAnalysis>,
    /// Recommendations, most urgent first
    pub strategies: Vec<Strategy>,
}

impl AnalysisReport {
    pub fn new(
        source: &str,
        board: BoardSnapshot,
        positions: Vec<PositionAnalysis>,
        strategies: Vec<Strategy>,
    ) -> Self {
        let distribution = super::strategy::resource_distribution(&board);
        Self {
            generated_at: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            source: source.to_string(),
            board,
            distribution,
            positions,
            strategies,
        }
    }

    /// The `n` best positions, for display.
    pub fn top_positions(&self, n: usize) -> &[PositionAnalysis] {
        &self.positions[..n.min(self.positions.len())]
    }

    /// Total pips (dots on the number tokens) of the productive tiles
    /// touching a position.
    pub fn pips(&self, analysis: &PositionAnalysis) -> u32 {
        analysis
            .candidate
            .adjacent_tiles
            .iter()
            .filter_map(|id| self.board.tile(id))
            .filter(|t| t.is_productive())
            .filter_map(|t| t.number)
            .map(|n| n.pips() as u32)
            .sum()
    }

    /// The `n` most urgent strategies, for display.
    pub fn top_strategies(&self, n: usize) -> &[Strategy] {
        &self.strategies[..n.min(self.strategies.len())]
    }
}

/// Export a report to a JSON file.
///
/// The output is pretty-printed for human readability.
pub fn export_to_json(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")?;

    let mut file = File::create(output_path)
        .context(format!("Failed to create JSON file: {}", output_path.display()))?;

    file.write_all(json.as_bytes())
        .context("Failed to write JSON data")?;

    Ok(())
}

/// Returns `<exe_dir>/reports/analysis_<timestamp>.json`.
pub fn default_report_path() -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    crate::paths::get_reports_dir().join(format!("analysis_{}.json", timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_board, generate_strategies_from};
    use crate::board::fixtures::standard_board;
    use crate::config::AnalysisConfig;
    use tempfile::tempdir;

    fn standard_report() -> AnalysisReport {
        let config = AnalysisConfig::default();
        let board = standard_board();
        let positions = analyze_board(&board, &config.scoring);
        let strategies = generate_strategies_from(&board, &positions, &config.strategy);
        AnalysisReport::new("mock:standard", board, positions, strategies)
    }

    #[test]
    fn test_top_slices_clamp() {
        let report = standard_report();
        assert_eq!(report.top_positions(5).len(), 5);
        assert_eq!(report.top_positions(10_000).len(), report.positions.len());
        assert_eq!(report.top_strategies(0).len(), 0);
        assert_eq!(report.distribution.values().sum::<usize>(), 19);
    }

    #[test]
    fn test_pips_skip_robbed_desert() {
        let report = standard_report();

        // The robbed desert carries no token, so only its neighbours count
        let by_desert = report
            .positions
            .iter()
            .find(|a| a.candidate.adjacent_tiles.iter().any(|id| id == "c3"))
            .unwrap();
        let expected: u32 = by_desert
            .candidate
            .adjacent_tiles
            .iter()
            .filter(|id| id.as_str() != "c3")
            .map(|id| report.board.tile(id).unwrap().number.unwrap().pips() as u32)
            .sum();
        assert_eq!(report.pips(by_desert), expected);

        // The best position on the standard board sits on strong numbers
        assert!(report.pips(&report.positions[0]) >= 5);
    }

    #[test]
    fn test_export_to_json() {
        let report = standard_report();
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        export_to_json(&report, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"source\": \"mock:standard\""));
        assert!(content.contains("\"kind\": \"SETTLEMENT\""));
        assert!(content.contains("\"resource\": \"DESERT\""));
        assert!(content.contains("\"robber_position\""));

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["board"]["tiles"].as_array().unwrap().len(), 19);
        assert_eq!(value["distribution"]["ORE"], 3);
    }
}
