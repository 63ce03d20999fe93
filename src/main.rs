//! Catan Advisor
//!
//! Reads a board screenshot (or builds a mock board), scores every
//! settlement position and prints the best positions and strategies.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use catan_advisor::analysis::report::default_report_path;
use catan_advisor::analysis::{analyze_snapshot, export_to_json, AnalysisReport};
use catan_advisor::board::MockBoard;
use catan_advisor::config::{default_config_path, AnalysisConfig};
use catan_advisor::ocr::OcrNumberRecognizer;
use catan_advisor::{
    analyze_screenshot, log, paths, FileImageSource, NumberRecognizer, RandomNumberRecognizer,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MockChoice {
    Standard,
    Rich,
    Scarce,
    MidGame,
    Random,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Settlement advisor for hex-tile board screenshots")]
struct Cli {
    /// Screenshot of the board to analyze
    #[arg(long, conflicts_with = "mock")]
    image: Option<PathBuf>,

    /// Analyze a built-in board instead of a screenshot (default: standard)
    #[arg(long, value_enum)]
    mock: Option<MockChoice>,

    /// Read number tokens with Tesseract instead of random stand-ins
    #[arg(long, requires = "image")]
    ocr: bool,

    /// Seed for random number stand-ins and random mock boards
    #[arg(long)]
    seed: Option<u64>,

    /// How many positions and strategies to print
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Config file (default: config.json next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the report as JSON (default: reports/analysis_<timestamp>.json)
    #[arg(long, num_args = 0..=1)]
    export: Option<Option<PathBuf>>,

    /// Write a config file with all defaults and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = paths::ensure_directories() {
        eprintln!("Failed to create output directories: {}", e);
    }

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);

    if cli.write_default_config {
        AnalysisConfig::save_default(&config_path)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        println!("Default config written to {}", config_path.display());
        return Ok(());
    }

    let config = AnalysisConfig::load(&config_path);

    let report = match &cli.image {
        Some(image) => analyze_image(image, &cli, &config)?,
        None => analyze_mock(cli.mock.unwrap_or(MockChoice::Standard), cli.seed, &config),
    };

    print_report(&report, cli.top);

    if let Some(export) = &cli.export {
        let path = export.clone().unwrap_or_else(default_report_path);
        export_to_json(&report, &path)?;
        log(&format!("Report exported to {}", path.display()));
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

fn analyze_image(image: &Path, cli: &Cli, config: &AnalysisConfig) -> Result<AnalysisReport> {
    let source = FileImageSource::new(image);

    let mut recognizer: Box<dyn NumberRecognizer> = if cli.ocr {
        Box::new(OcrNumberRecognizer::setup(config.ocr.clone())?)
    } else {
        log("Number tokens are random stand-ins (pass --ocr to read them)");
        match cli.seed {
            Some(seed) => Box::new(RandomNumberRecognizer::new(seed)),
            None => Box::new(RandomNumberRecognizer::from_entropy()),
        }
    };

    let report = analyze_screenshot(&source, recognizer.as_mut(), config)?;
    Ok(report)
}

fn analyze_mock(choice: MockChoice, seed: Option<u64>, config: &AnalysisConfig) -> AnalysisReport {
    let board = match choice {
        MockChoice::Standard => MockBoard::Standard,
        MockChoice::Rich => MockBoard::Rich,
        MockChoice::Scarce => MockBoard::Scarce,
        MockChoice::MidGame => MockBoard::MidGame,
        MockChoice::Random => {
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            MockBoard::random(&mut rng)
        }
    };

    analyze_snapshot(&format!("mock:{}", board.name()), board.build(), config)
}

fn print_report(report: &AnalysisReport, top: usize) {
    println!("Board: {} ({} tiles)", report.source, report.board.tiles().len());

    let distribution = report
        .distribution
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(resource, count)| format!("{} {}", resource, count))
        .collect::<Vec<_>>()
        .join(", ");
    println!("Resources: {}", distribution);

    if let Some(robber) = report.board.robber_position() {
        println!("Robber at ({:.0}, {:.0})", robber.x, robber.y);
    }

    println!("\nTop positions:");
    if report.positions.is_empty() {
        println!("  (none)");
    }
    for (rank, analysis) in report.top_positions(top).iter().enumerate() {
        println!(
            "  {}. ({:.0}, {:.0}) score {:.1}, {:.1}% per roll, {} pips, tiles: {}",
            rank + 1,
            analysis.candidate.position.x,
            analysis.candidate.position.y,
            analysis.score,
            analysis.probability * 100.0,
            report.pips(analysis),
            analysis.candidate.adjacent_tiles.join(", ")
        );
    }

    println!("\nStrategies:");
    if report.strategies.is_empty() {
        println!("  (none)");
    }
    for strategy in report.top_strategies(top) {
        println!(
            "  [{:>3}] {:?}: {}",
            strategy.priority, strategy.kind, strategy.description
        );
        println!("        {}", strategy.reasoning);
    }
}
