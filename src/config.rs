//! Analysis configuration loaded from config.json.
//!
//! Every tuning constant of the pipeline lives here: grid geometry,
//! corner adjacency, scoring weights, strategy thresholds, and OCR
//! cropping. If the file is missing or malformed, defaults are used.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::board::ResourceType;

/// Complete analysis configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Tile grid placement and pixel sampling
    pub geometry: GeometryConfig,
    /// Candidate generation and position scoring
    pub scoring: ScoringConfig,
    /// Recommendation thresholds
    pub strategy: StrategyConfig,
    /// Number recognition via Tesseract
    pub ocr: OcrConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Hex size in pixels; rows are `hex_size * sqrt(3)` apart,
    /// columns `hex_size * 1.5` apart
    pub hex_size: f64,
    /// Half-width of the square averaged when sampling a tile color
    /// (0 = single center pixel)
    pub sample_radius: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Distance from a tile center to its generated corners
    pub corner_radius: f64,
    /// A tile touches a corner when its center is closer than
    /// `corner_radius * adjacency_multiplier`
    pub adjacency_multiplier: f64,
    /// Corners closer than this on both axes are the same position
    pub dedup_threshold: f64,
    /// Score bonus per distinct resource touched
    pub diversity_bonus: f64,
    /// Relative value of each resource
    pub resource_values: ResourceWeights,
}

/// Relative worth of one unit of each resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceWeights {
    pub wood: f64,
    pub brick: f64,
    pub wheat: f64,
    pub sheep: f64,
    pub ore: f64,
    pub desert: f64,
}

impl ResourceWeights {
    pub fn weight(&self, resource: ResourceType) -> f64 {
        match resource {
            ResourceType::Wood => self.wood,
            ResourceType::Brick => self.brick,
            ResourceType::Wheat => self.wheat,
            ResourceType::Sheep => self.sheep,
            ResourceType::Ore => self.ore,
            ResourceType::Desert => self.desert,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// How many top positions become settlement recommendations
    pub settlement_count: usize,
    /// Max per-axis pixel distance between a settlement and a candidate
    pub settlement_match_tolerance: f64,
    /// Settlement score above which a city upgrade is recommended
    pub city_score_threshold: f64,
    /// Tile share below which a resource counts as scarce (0.0-1.0)
    pub scarcity_threshold: f64,
    /// Per-resource probability above which a position touches a 6 or 8
    pub high_probability_threshold: f64,
    /// Ore tiles needed before development cards are recommended
    pub development_min_ore: usize,
    /// Wheat tiles needed before development cards are recommended
    pub development_min_wheat: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Side of the square cropped around a tile center for recognition
    pub region_size: u32,
    /// Contrast factor applied after grayscale conversion
    pub contrast: f32,
    /// Tesseract page segmentation mode
    pub page_seg_mode: u8,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            hex_size: 80.0,
            sample_radius: 0,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            corner_radius: 60.0,
            adjacency_multiplier: 1.5,
            dedup_threshold: 10.0,
            diversity_bonus: 0.5,
            resource_values: ResourceWeights::default(),
        }
    }
}

impl Default for ResourceWeights {
    fn default() -> Self {
        Self {
            wood: 1.0,
            brick: 1.0,
            wheat: 1.1,
            sheep: 0.9,
            ore: 1.2,
            desert: 0.0,
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            settlement_count: 3,
            settlement_match_tolerance: 10.0,
            city_score_threshold: 60.0,
            scarcity_threshold: 0.15,
            // 6 and 8 roll at 5/36 ~ 0.139; 5 and 9 at 4/36 ~ 0.111
            high_probability_threshold: 0.12,
            development_min_ore: 3,
            development_min_wheat: 3,
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            region_size: 50,
            contrast: 1.5,
            // Sparse text: find as much text as possible in no particular order
            page_seg_mode: 11,
        }
    }
}

impl AnalysisConfig {
    /// Load config from file, or return defaults if it doesn't exist or
    /// can't be parsed.
    pub fn load(config_path: &Path) -> Self {
        crate::log(&format!("Looking for config at: {}", config_path.display()));

        if config_path.exists() {
            match fs::read_to_string(config_path) {
                Ok(contents) => match serde_json::from_str(&contents) {
                    Ok(config) => {
                        crate::log(&format!("Config loaded from {}", config_path.display()));
                        return config;
                    }
                    Err(e) => {
                        crate::log(&format!(
                            "Failed to parse {}: {}. Using defaults.",
                            config_path.display(),
                            e
                        ));
                    }
                },
                Err(e) => {
                    crate::log(&format!(
                        "Failed to read {}: {}. Using defaults.",
                        config_path.display(),
                        e
                    ));
                }
            }
        } else {
            crate::log("config.json not found. Using default config.");
        }

        Self::default()
    }

    /// Save default config to file (for reference).
    pub fn save_default(config_path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&Self::default())?;
        fs::write(config_path, json)?;
        Ok(())
    }
}

/// Returns `<exe_dir>/config.json`.
pub fn default_config_path() -> PathBuf {
    crate::paths::get_exe_dir().join("config.json")
}
