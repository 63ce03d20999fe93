//! Turns ranked positions and the board's resource mix into
//! prioritized recommendations.

use serde::Serialize;

use super::positions::{analyze_board, CandidatePosition, PositionAnalysis};
use crate::board::{BoardSnapshot, ResourceMap, ResourceType};
use crate::config::{AnalysisConfig, StrategyConfig};

const CITY_PRIORITY: u8 = 85;
const TRADE_PRIORITY: u8 = 70;
const DEVELOPMENT_PRIORITY: u8 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyKind {
    Settlement,
    City,
    Trade,
    Development,
}

/// One recommendation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Strategy {
    pub kind: StrategyKind,
    /// 0-100, higher is more urgent
    pub priority: u8,
    pub description: String,
    pub reasoning: String,
    pub position: Option<CandidatePosition>,
}

/// Analyzes the board and produces recommendations, most urgent first.
pub fn generate_strategies(snapshot: &BoardSnapshot, config: &AnalysisConfig) -> Vec<Strategy> {
    let analyses = analyze_board(snapshot, &config.scoring);
    generate_strategies_from(snapshot, &analyses, &config.strategy)
}

/// Same as [`generate_strategies`] with precomputed analyses (best first).
///
/// Output is sorted by priority; equal priorities keep the order
/// settlement, city, trade, development.
pub fn generate_strategies_from(
    snapshot: &BoardSnapshot,
    analyses: &[PositionAnalysis],
    config: &StrategyConfig,
) -> Vec<Strategy> {
    let mut strategies = Vec::new();

    for (rank, analysis) in analyses.iter().take(config.settlement_count).enumerate() {
        let position = analysis.candidate.position;
        strategies.push(Strategy {
            kind: StrategyKind::Settlement,
            priority: 100u8.saturating_sub(10 * rank.min(10) as u8),
            description: format!(
                "Build settlement at position ({}, {})",
                position.x.round(),
                position.y.round()
            ),
            reasoning: settlement_reasoning(analysis, config),
            position: Some(analysis.candidate.clone()),
        });
    }

    if let Some(best) = best_upgradable_settlement(snapshot, analyses, config) {
        if best.score > config.city_score_threshold {
            strategies.push(Strategy {
                kind: StrategyKind::City,
                priority: CITY_PRIORITY,
                description: "Upgrade settlement to city for 2x production".to_string(),
                reasoning: format!(
                    "This settlement has high production value ({:.1}) and would benefit from doubling output.",
                    best.score
                ),
                position: Some(best.candidate.clone()),
            });
        }
    }

    let distribution = resource_distribution(snapshot);
    let scarce = scarce_resources(&distribution, config.scarcity_threshold);
    if !scarce.is_empty() {
        let names: Vec<&str> = scarce.iter().map(|r| r.name()).collect();
        strategies.push(Strategy {
            kind: StrategyKind::Trade,
            priority: TRADE_PRIORITY,
            description: format!("Focus on acquiring {}", names.join(", ")),
            reasoning: "Board has limited access to these resources. Consider 4:1 or port trades."
                .to_string(),
            position: None,
        });
    }

    if should_buy_development_card(&distribution, config) {
        strategies.push(Strategy {
            kind: StrategyKind::Development,
            priority: DEVELOPMENT_PRIORITY,
            description: "Consider buying development cards".to_string(),
            reasoning: "Good ore/wheat access. Dev cards provide flexibility and victory points."
                .to_string(),
            position: None,
        });
    }

    // Stable sort keeps generation order among equal priorities
    strategies.sort_by(|a, b| b.priority.cmp(&a.priority));
    strategies
}

fn settlement_reasoning(analysis: &PositionAnalysis, config: &StrategyConfig) -> String {
    let mut reasons = vec![
        format!("Expected value: {:.2}", analysis.expected_value),
        format!("Probability: {:.1}%", analysis.probability * 100.0),
    ];

    if analysis.distinct_resources >= 3 {
        reasons.push(format!(
            "Diverse resources ({} types)",
            analysis.distinct_resources
        ));
    }

    if analysis
        .resources
        .values()
        .any(|&p| p > config.high_probability_threshold)
    {
        reasons.push("Adjacent to 6 or 8".to_string());
    }

    reasons.join(" • ")
}

/// Best-scoring analysis sitting under one of the board's plain
/// settlements. Cities are already upgraded and ignored.
fn best_upgradable_settlement<'a>(
    snapshot: &BoardSnapshot,
    analyses: &'a [PositionAnalysis],
    config: &StrategyConfig,
) -> Option<&'a PositionAnalysis> {
    snapshot
        .settlements()
        .iter()
        .filter(|s| !s.is_city)
        .filter_map(|s| {
            analyses.iter().find(|a| {
                a.candidate
                    .position
                    .is_near(&s.position, config.settlement_match_tolerance)
            })
        })
        .fold(None, |best: Option<&PositionAnalysis>, a| match best {
            Some(b) if b.score >= a.score => Some(b),
            _ => Some(a),
        })
}

/// Tile count per resource, desert included.
pub fn resource_distribution(snapshot: &BoardSnapshot) -> ResourceMap<usize> {
    let mut distribution = ResourceMap::new();
    for tile in snapshot.tiles() {
        distribution[tile.resource] += 1;
    }
    distribution
}

/// Non-desert resources whose share of all tiles is below `threshold`.
///
/// Resources absent from the board have a share of zero and count as
/// scarce. An empty board has no scarce resources.
pub fn scarce_resources(distribution: &ResourceMap<usize>, threshold: f64) -> Vec<ResourceType> {
    let total: usize = distribution.values().sum();
    if total == 0 {
        return Vec::new();
    }

    distribution
        .iter()
        .filter(|(resource, count)| {
            !resource.is_desert() && (**count as f64 / total as f64) < threshold
        })
        .map(|(resource, _)| resource)
        .collect()
}

fn should_buy_development_card(distribution: &ResourceMap<usize>, config: &StrategyConfig) -> bool {
    distribution[ResourceType::Ore] >= config.development_min_ore
        && distribution[ResourceType::Wheat] >= config.development_min_wheat
}
